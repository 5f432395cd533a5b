//! The Rhai scripting engine for Wren
//!
//! Every engine gets the application handle injected at construction and
//! exposes it as the constant `Wren`:
//! - `Wren.opt.wrap` - line wrapping
//! - `Wren.opt.lineBreak` - word wrapping

use std::path::{Path, PathBuf};

use rhai::{Engine, Scope};

use super::api::{self, handle::AppHandle, handle::GLOBAL_NAME};
use super::error::{Result, ScriptError};

/// Execution limits applied to every script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineLimits {
    pub max_expr_depth: usize,
    pub max_function_expr_depth: usize,
    pub max_operations: u64,
}

impl Default for EngineLimits {
    fn default() -> Self {
        Self {
            max_expr_depth: 64,
            max_function_expr_depth: 64,
            max_operations: 100_000,
        }
    }
}

/// The main scripting engine
pub struct ScriptEngine {
    engine: Engine,
    scope: Scope<'static>,
    handle: AppHandle,
}

impl ScriptEngine {
    /// Create an engine exposing `handle` to scripts
    pub fn new(handle: AppHandle) -> Self {
        Self::with_limits(handle, EngineLimits::default())
    }

    pub fn with_limits(handle: AppHandle, limits: EngineLimits) -> Self {
        let engine = Self::create_engine(limits);

        let mut scope = Scope::new();
        scope.push_constant(GLOBAL_NAME, handle.clone());

        Self {
            engine,
            scope,
            handle,
        }
    }

    fn create_engine(limits: EngineLimits) -> Engine {
        let mut engine = Engine::new();

        // Safety limits
        engine.set_max_expr_depths(limits.max_expr_depth, limits.max_function_expr_depth);
        engine.set_max_operations(limits.max_operations);

        api::handle::register(&mut engine);
        api::opt::register(&mut engine);

        engine.on_print(|msg| tracing::info!(target: "wren::script", "{}", msg));
        engine.on_debug(|msg, src, pos| {
            tracing::debug!(target: "wren::script", "{} @ {:?}: {}", src.unwrap_or("<eval>"), pos, msg)
        });

        engine
    }

    /// Load and execute a script file
    pub fn load_file(&mut self, path: &Path) -> Result<()> {
        tracing::debug!("Loading script {}", path.display());
        let content = std::fs::read_to_string(path).map_err(|source| ScriptError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        self.eval(&content)
    }

    /// Evaluate a Rhai script string. Top-level variables persist between
    /// calls.
    pub fn eval(&mut self, script: &str) -> Result<()> {
        let ast = self.engine.compile(script)?;
        self.engine.run_ast_with_scope(&mut self.scope, &ast)?;
        Ok(())
    }

    /// The handle installed as `Wren`
    pub fn handle(&self) -> &AppHandle {
        &self.handle
    }

    /// Get the config directory path
    /// Uses ~/.config/wren/ on all platforms for consistency
    pub fn config_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("wren"))
    }

    /// Get the default config file path
    pub fn config_file() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("init.rhai"))
    }

    /// Load the default config file if it exists
    pub fn load_default(&mut self) -> Result<()> {
        if let Some(config_file) = Self::config_file() {
            if config_file.exists() {
                return self.load_file(&config_file);
            }
        }
        Ok(()) // No config file is fine
    }
}
