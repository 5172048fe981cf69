use std::{fmt, io};

#[derive(Debug)]
pub enum Error {
    File(io::Error),
    Reqwest(reqwest::Error),
    SerdeJson(serde_json::Error),

    /// The versions endpoint answered with an empty list
    NoVersion,

    /// The champion manifest has an empty `data` map
    NoChampion,

    /// Manifest entry without `image.full`, holds the champion key
    MissingIcon(String),

    /// Bad value in the environment configuration
    Config(String),
    Other(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(err) => write!(f, "file error: {}", err),
            Self::Reqwest(err) => write!(f, "request error: {}", err),
            Self::SerdeJson(err) => write!(f, "invalid json: {}", err),
            Self::NoVersion => f.write_str("versions list is empty"),
            Self::NoChampion => f.write_str("champion manifest is empty"),
            Self::MissingIcon(name) => write!(f, "champion {} has no image.full", name),
            Self::Config(msg) => write!(f, "configuration error: {}", msg),
            Self::Other(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::File(err) => Some(err),
            Self::Reqwest(err) => Some(err),
            Self::SerdeJson(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Self::File(error)
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Self::Reqwest(error)
    }
}

impl From<&str> for Error {
    fn from(error: &str) -> Self {
        Self::Other(error.into())
    }
}

impl From<String> for Error {
    fn from(error: String) -> Self {
        Self::Other(error)
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::SerdeJson(error)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
