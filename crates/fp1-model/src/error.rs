use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("profile field {field} has no value and no declared default")]
    MissingField { field: &'static str },
}

pub type Result<T> = std::result::Result<T, ModelError>;
