use std::error::Error;
use std::fmt;

pub type NavMenuResult<T> = Result<T, NavMenuError>;

#[derive(Debug)]
pub enum NavMenuError {
    Config(String),
    Serde(serde_json::Error),
}

impl fmt::Display for NavMenuError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NavMenuError::Config(s) => write!(f, "Config error: {}", s),
            NavMenuError::Serde(e) => write!(f, "Serde JSON error: {}", e),
        }
    }
}

impl Error for NavMenuError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            NavMenuError::Serde(e) => Some(e),
            NavMenuError::Config(_) => None,
        }
    }
}

impl From<serde_json::Error> for NavMenuError {
    fn from(error: serde_json::Error) -> Self {
        NavMenuError::Serde(error)
    }
}
