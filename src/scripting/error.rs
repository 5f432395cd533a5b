use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the options facade
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OptionError {
    /// A write whose value does not have the option's type. The store is
    /// left untouched.
    #[error("\"{option}\" must be a {expected} value, but found {value} ({actual})")]
    InvalidValue {
        /// Fully-qualified option name, e.g. `Wren.opt.wrap`
        option: String,
        expected: &'static str,
        /// The rejected value rendered as text
        value: String,
        /// Runtime type name of the rejected value
        actual: String,
    },

    #[error("\"{option}\" is not a known option")]
    UnknownOption { option: String },
}

/// Errors from loading or running a script
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("failed to read script file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("script parse error: {0}")]
    Parse(#[from] rhai::ParseError),

    #[error("script error: {0}")]
    Runtime(#[from] Box<rhai::EvalAltResult>),
}

pub type Result<T> = std::result::Result<T, ScriptError>;
