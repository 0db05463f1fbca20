use net::FetchError;
use std::fmt;

#[derive(Debug)]
pub enum DocumentError {
    InvalidUrl(url::ParseError),
    Fetch(FetchError),
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentError::InvalidUrl(err) => write!(f, "invalid document url: {err}"),
            DocumentError::Fetch(err) => write!(f, "document fetch failed: {err}"),
        }
    }
}

impl std::error::Error for DocumentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DocumentError::InvalidUrl(err) => Some(err),
            DocumentError::Fetch(err) => Some(err),
        }
    }
}

impl From<url::ParseError> for DocumentError {
    fn from(err: url::ParseError) -> Self {
        DocumentError::InvalidUrl(err)
    }
}

impl From<FetchError> for DocumentError {
    fn from(err: FetchError) -> Self {
        DocumentError::Fetch(err)
    }
}
