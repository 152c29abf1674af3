use thiserror::Error;

pub mod core_config;
mod validator;


#[derive(Debug, Error)]
pub enum ConfigParsingError {
    #[error("Config parsing error: `{0}`")]
    GeneralParsingError(String),
    #[error("Config validation error: `{0}`")]
    Validation(#[from] ConfigValidationError),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("`{0}` must be positive")]
    NotPositive(&'static str),
    #[error("`{0}` must not be blank")]
    Blank(&'static str),
    #[error("`{0}` must not be empty")]
    Empty(&'static str),
    #[error("`{field}` must not exceed {max}")]
    TooLarge { field: &'static str, max: String },
    #[error("`{field}` must be at least {min}")]
    TooSmall { field: &'static str, min: String },
    #[error("`{0}` minimum must be lower than maximum")]
    InvalidRange(&'static str),
    #[error("Invalid trusted root certificate: `{0}`")]
    InvalidTrustedRoot(String),
    #[error("Invalid signing certificate digest: `{0}`")]
    InvalidDigest(String),
}
