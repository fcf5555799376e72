use clap::Parser;

use crate::config::Credentials;

pub const USAGE: &str = "reporting <username> <password>";

pub const MENU: &str = "1- Report Patients Basic Information\n\
                        2- Report Doctors Basic Information\n\
                        3- Report Admissions Information\n\
                        4- Update Admissions Payment";

/// Hospital database reports and admission payment updates
#[derive(Parser, Debug)]
#[command(name = "reporting", version)]
pub struct Cli {
    /// Database username
    pub username: Option<String>,

    /// Database password
    #[arg(allow_hyphen_values = true)]
    pub password: Option<String>,

    /// Action to run (1-4); omit to list the actions
    pub action: Option<String>,

    /// Anything after the action is ignored
    #[arg(hide = true, allow_hyphen_values = true)]
    pub ignored: Vec<String>,
}

pub enum Invocation {
    Usage,
    Menu,
    Run {
        credentials: Credentials,
        action: String,
    },
}

impl Cli {
    pub fn invocation(self) -> Invocation {
        match (self.username, self.password, self.action) {
            (Some(username), Some(password), Some(action)) => Invocation::Run {
                credentials: Credentials { username, password },
                action,
            },
            (Some(_), Some(_), None) => Invocation::Menu,
            _ => Invocation::Usage,
        }
    }
}
