use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error(
        "no database driver for `{descriptor}`; set DATABASE_URL to a mysql://host:port/database descriptor"
    )]
    DriverUnavailable { descriptor: String },

    #[error("Connection failed! Check DATABASE_URL and your username/password")]
    ConnectionFailed(#[source] diesel::ConnectionError),

    #[error("Error in creating statement")]
    StatementCreationFailed(#[source] diesel::result::Error),

    #[error("Error in querying database")]
    QueryFailed(#[source] diesel::result::Error),

    #[error("Error in updating admission payment")]
    UpdateFailed(#[source] diesel::result::Error),

    #[error("invalid {field}: `{value}`")]
    InvalidInput { field: &'static str, value: String },

    #[error("input ended before {field} was entered")]
    InputClosed { field: &'static str },

    #[error("console I/O error")]
    Io(#[from] std::io::Error),
}

pub type ReportResult<T> = Result<T, ReportError>;
