//! `Wren` - the application handle scripts start from
//!
//! The process has one global handle. It owns the options facade and is
//! installed into every [`ScriptEngine`](crate::scripting::ScriptEngine) as
//! the constant `Wren`, so scripts cannot rebind it.

use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;
use rhai::Engine;

use super::opt::OptionsFacade;
use crate::options::{OptionStore, SharedOptions};

/// Name of the global binding in scripts
pub const GLOBAL_NAME: &str = "Wren";

static GLOBAL: Lazy<AppHandle> = Lazy::new(|| {
    tracing::debug!("Creating global {} handle", GLOBAL_NAME);
    AppHandle::new(SharedOptions::global())
});

/// Entry point for scripts. Clones share the same instance.
#[derive(Clone)]
pub struct AppHandle {
    inner: Arc<HandleInner>,
}

struct HandleInner {
    opt: OptionsFacade,
}

impl AppHandle {
    /// Build a handle over a caller-supplied store
    pub fn new(store: Arc<dyn OptionStore>) -> Self {
        Self {
            inner: Arc::new(HandleInner {
                opt: OptionsFacade::new(store),
            }),
        }
    }

    /// The process-wide handle, backed by [`SharedOptions::global`].
    /// Built on first use.
    pub fn global() -> &'static AppHandle {
        &GLOBAL
    }

    pub fn opt(&self) -> &OptionsFacade {
        &self.inner.opt
    }

    pub fn same_instance(&self, other: &AppHandle) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for AppHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(GLOBAL_NAME)
            .field("opt", self.opt())
            .finish()
    }
}

/// Register the handle type. `opt` is read-only.
pub fn register(engine: &mut Engine) {
    engine.register_type_with_name::<AppHandle>(GLOBAL_NAME);
    engine.register_get("opt", |handle: &mut AppHandle| handle.opt().clone());

    engine.register_fn("==", |a: AppHandle, b: AppHandle| a.same_instance(&b));
    engine.register_fn("!=", |a: AppHandle, b: AppHandle| !a.same_instance(&b));
    engine.register_fn("to_string", |_: &mut AppHandle| GLOBAL_NAME.to_string());
    engine.register_fn("to_debug", |handle: &mut AppHandle| format!("{:?}", handle));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_is_singleton() {
        let a = AppHandle::global();
        let b = AppHandle::global();
        assert!(std::ptr::eq(a, b));
        assert!(a.same_instance(&b.clone()));
    }

    #[test]
    fn test_separate_handles_differ() {
        let a = AppHandle::new(Arc::new(SharedOptions::default()));
        let b = AppHandle::new(Arc::new(SharedOptions::default()));
        assert!(!a.same_instance(&b));
        assert!(a.same_instance(&a.clone()));
    }

    #[test]
    fn test_opt_shares_store() {
        let store = Arc::new(SharedOptions::default());
        let handle = AppHandle::new(store.clone());
        handle.opt().set("wrap", false).unwrap();
        assert!(!store.wrap());
    }
}
