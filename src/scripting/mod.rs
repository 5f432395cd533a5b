//! Scripting module - Rhai runtime for configuration
//!
//! The application handle is installed as the global `Wren`:
//! - `Wren.opt.*` - editor options, validated on write

pub mod api;
mod engine;
mod error;

pub use api::handle::{AppHandle, GLOBAL_NAME};
pub use api::opt::{OptionDescriptor, OptionKind, OptionValue, OptionsFacade, OPTIONS};
pub use engine::{EngineLimits, ScriptEngine};
pub use error::{OptionError, Result, ScriptError};
