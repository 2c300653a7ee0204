//! Error type shared by the API client, renderer and wizard.

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The server answered with a non-2xx status.
    ///
    /// `message` is the response body when it is non-empty, otherwise the
    /// canonical reason phrase of the status.
    #[error("Error {status}: {message}")]
    Request { status: u16, message: String },

    /// A 2xx response carried malformed JSON.
    #[error("Malformed JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// A 2xx response lacked a field the flow cannot continue without.
    #[error("Response is missing {0}")]
    MissingField(&'static str),

    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Status code of a `Request` error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Request { status, .. } => Some(*status),
            _ => None,
        }
    }
}
