use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for q2wc operations
#[derive(Error, Diagnostic, Debug)]
pub enum Q2wcError {
    #[error("IO error: {0}")]
    #[diagnostic(code(q2wc::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(q2wc::io))]
    Io { path: PathBuf, message: String },

    #[error("Parse error in {path}: {message}")]
    #[diagnostic(code(q2wc::parse))]
    Parse {
        path: PathBuf,
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Missing descriptor field '{field}' for {path}")]
    #[diagnostic(
        code(q2wc::missing_field),
        help("The map file is listed in the metadata but was not found on disk")
    )]
    MissingField { field: String, path: PathBuf },

    #[error("Directory walk error: {message}")]
    #[diagnostic(code(q2wc::walk))]
    Walk { message: String },
}

pub type Result<T> = std::result::Result<T, Q2wcError>;
