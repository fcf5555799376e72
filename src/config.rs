use std::fmt;

pub const DEFAULT_DATABASE_URL: &str = "mysql://localhost:3306/hospital";

/// Connection settings that are not given on the command line.
#[derive(Clone, Debug)]
pub struct Config {
    /// Credential-free descriptor naming scheme, host, port and database.
    pub database_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        Self { database_url }
    }

    /// Splices percent-encoded credentials into the descriptor's authority,
    /// replacing any userinfo the descriptor already carries.
    pub fn connection_url(&self, credentials: &Credentials) -> String {
        let (scheme, rest) = match self.database_url.split_once("://") {
            Some(parts) => parts,
            None => ("mysql", self.database_url.as_str()),
        };
        let authority_end = rest.find('/').unwrap_or(rest.len());
        let rest = match rest[..authority_end].rfind('@') {
            Some(at) => &rest[at + 1..],
            None => rest,
        };

        format!(
            "{}://{}:{}@{}",
            scheme,
            urlencoding::encode(&credentials.username),
            urlencoding::encode(&credentials.password),
            rest
        )
    }
}

pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}
