use std::error::Error as StdError;

/// Errors from turning text into register writes. Register reads and writes
/// themselves never fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    UnknownRegister(String),
    InvalidValue(String),
    InvalidAssignment(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> core::result::Result<(), std::fmt::Error> {
        match self {
            Error::UnknownRegister(name) => write!(f, "unknown register {:?}", name),
            Error::InvalidValue(value) => write!(f, "invalid register value {:?}", value),
            Error::InvalidAssignment(text) => {
                write!(f, "invalid assignment {:?}, expected NAME=VALUE", text)
            }
        }
    }
}

impl StdError for Error {}

pub type Result<T> = std::result::Result<T, Error>;
