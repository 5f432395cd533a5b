//! Wren exposes editor options to Rhai scripts as live, type-checked
//! properties under the global `Wren` handle.

pub mod options;
pub mod scripting;

pub use options::{OptionStore, SharedOptions, WindowOptions};
pub use scripting::{AppHandle, OptionError, ScriptEngine, ScriptError};
