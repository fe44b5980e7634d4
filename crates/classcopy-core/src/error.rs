use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NamingError {
    #[error("{field} extension cannot be empty")]
    EmptyExtension { field: &'static str },

    #[error("{field} extension '{value}' must not contain a path separator or a leading dot")]
    InvalidExtension { field: &'static str, value: String },

    #[error("nested separator must be exactly one character, got '{0}'")]
    InvalidSeparator(String),
}

pub type Result<T> = std::result::Result<T, NamingError>;
