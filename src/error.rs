use thiserror::Error;

pub const DOMAIN: &'static str = "args";

pub const ERR_USAGE: i32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    Usage(String),
}

impl Error {
    pub fn domain(&self) -> &'static str {
        DOMAIN
    }

    pub fn code(&self) -> i32 {
        match *self {
            Error::InvalidInput(_) => 0,
            Error::Usage(_) => ERR_USAGE,
        }
    }

    pub fn is_usage(&self) -> bool {
        self.code() == ERR_USAGE
    }

    pub fn message(&self) -> &str {
        match *self {
            Error::InvalidInput(ref msg) | Error::Usage(ref msg) => msg,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("value of {var} is not a boolean: {value:?}")]
    InvalidBool { var: String, value: String },
}

#[test]
fn test_codes() {
    let usage = Error::Usage("executable name was not provided".to_string());
    assert_eq!(ERR_USAGE, usage.code());
    assert!(usage.is_usage());
    assert_eq!("args", usage.domain());
    assert_eq!("executable name was not provided", usage.to_string());

    let invalid = Error::InvalidInput("cannot parse arguments, argc is zero".to_string());
    assert_eq!(0, invalid.code());
    assert!(!invalid.is_usage());
    assert_eq!("cannot parse arguments, argc is zero", invalid.message());
}
