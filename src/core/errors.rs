use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortalError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Reqwest error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("HTTP error {status} from {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Mentor data must be an array or an object with a 'mentors' array")]
    InvalidMentorData,

    #[error("PortalError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for PortalError {
    fn from(error: std::io::Error) -> Self {
        PortalError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for PortalError {
    fn from(error: reqwest::Error) -> Self {
        PortalError::Reqwest(Box::new(error))
    }
}
