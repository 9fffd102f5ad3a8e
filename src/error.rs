use std::error::Error;
use std::fmt;

/// Everything that can stop a locator run. Each variant names the stage that failed.
#[derive(Debug)]
pub enum LocatorError {
    Network(String),
    Parse(String),
    MissingField(&'static str),
    Conversion(String),
    Browser(String),
    Config(String),
    Output(String),
}

impl fmt::Display for LocatorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LocatorError::Network(e) => write!(f, "Unable to fetch ISS position: {}", e),
            LocatorError::Parse(msg) => write!(f, "Unable to parse ISS position data: {}", msg),
            LocatorError::MissingField(field) => {
                write!(f, "ISS position data is missing field '{}'", field)
            }
            LocatorError::Conversion(msg) => write!(f, "Unable to convert coordinate: {}", msg),
            LocatorError::Browser(msg) => write!(f, "Unable to open map in browser: {}", msg),
            LocatorError::Config(msg) => write!(f, "Invalid configuration: {}", msg),
            LocatorError::Output(msg) => write!(f, "Unable to write report: {}", msg),
        }
    }
}

impl Error for LocatorError {}

impl From<ureq::Error> for LocatorError {
    fn from(e: ureq::Error) -> Self {
        LocatorError::Network(e.to_string())
    }
}

impl From<serde_json::Error> for LocatorError {
    fn from(e: serde_json::Error) -> Self {
        LocatorError::Parse(e.to_string())
    }
}
