//! The native owner of option values.
//!
//! Scripts never touch a store directly; they go through the options facade,
//! which validates before calling the `set_*` primitives here.

use std::sync::{Arc, PoisonError, RwLock};

use once_cell::sync::Lazy;

use super::WindowOptions;

/// Paired get/set primitives for every option.
///
/// Setters receive values that were already type-checked and must apply
/// them unconditionally.
pub trait OptionStore: Send + Sync {
    fn wrap(&self) -> bool;
    fn set_wrap(&self, value: bool);

    fn line_break(&self) -> bool;
    fn set_line_break(&self, value: bool);
}

/// Process-wide default store
static GLOBAL_STORE: Lazy<Arc<SharedOptions>> = Lazy::new(|| Arc::new(SharedOptions::default()));

/// In-process store holding [`WindowOptions`] behind a lock
#[derive(Debug, Default)]
pub struct SharedOptions {
    options: RwLock<WindowOptions>,
}

impl SharedOptions {
    pub fn new(options: WindowOptions) -> Self {
        Self {
            options: RwLock::new(options),
        }
    }

    /// The store backing the global application handle
    pub fn global() -> Arc<SharedOptions> {
        Arc::clone(&GLOBAL_STORE)
    }

    /// Get the current options (copied)
    pub fn options(&self) -> WindowOptions {
        *self.options.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn update(&self, f: impl FnOnce(&mut WindowOptions)) {
        let mut options = self.options.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut options);
    }
}

impl OptionStore for SharedOptions {
    fn wrap(&self) -> bool {
        self.options().wrap()
    }

    fn set_wrap(&self, value: bool) {
        self.update(|o| o.set_wrap(value));
    }

    fn line_break(&self) -> bool {
        self.options().line_break()
    }

    fn set_line_break(&self, value: bool) {
        self.update(|o| o.set_line_break(value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_options_get_set() {
        let store = SharedOptions::default();
        assert!(store.wrap());
        assert!(!store.line_break());

        store.set_wrap(false);
        store.set_line_break(true);
        assert!(!store.wrap());
        assert!(store.line_break());
    }

    #[test]
    fn test_shared_options_initial_values() {
        let store = SharedOptions::new(WindowOptions::builder().wrap(false).build());
        assert!(!store.wrap());
        assert_eq!(store.options(), WindowOptions::builder().wrap(false).build());
    }

    #[test]
    fn test_poisoned_lock_recovers() {
        let store = Arc::new(SharedOptions::default());
        let s = Arc::clone(&store);
        let result = std::thread::spawn(move || {
            let _guard = s.options.write().unwrap();
            panic!("poison the lock");
        })
        .join();
        assert!(result.is_err());
        assert!(store.options.is_poisoned());

        assert!(store.wrap());
        store.set_wrap(false);
        assert!(!store.wrap());
    }

    #[test]
    fn test_global_store_is_shared() {
        assert!(Arc::ptr_eq(&SharedOptions::global(), &SharedOptions::global()));
    }
}
