use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {message}")]
    Config { message: String },

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, CliError>;
