//! `Wren.opt` - editor options as script properties
//!
//! Usage in Rhai:
//! ```rhai
//! Wren.opt.wrap = false;
//! Wren.opt.lineBreak = true;
//! let wrapped = Wren.opt.wrap;
//! ```
//!
//! Every option is a row in [`OPTIONS`]. Reads go straight to the
//! [`OptionStore`]; writes are type-checked first and rejected values never
//! reach it. No value is cached here.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use rhai::{Dynamic, Engine, EvalAltResult};
use serde::Serialize;

use super::handle::GLOBAL_NAME;
use crate::options::OptionStore;
use crate::scripting::error::OptionError;

/// The primitive type an option accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    Boolean,
}

impl OptionKind {
    pub fn name(self) -> &'static str {
        match self {
            OptionKind::Boolean => "boolean",
        }
    }
}

/// A value read from the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OptionValue {
    Boolean(bool),
}

impl From<OptionValue> for Dynamic {
    fn from(value: OptionValue) -> Self {
        match value {
            OptionValue::Boolean(b) => Dynamic::from_bool(b),
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Boolean(b) => write!(f, "{}", b),
        }
    }
}

/// Store primitives for one option. The variant fixes the accepted kind.
#[derive(Clone, Copy)]
pub enum Accessor {
    Boolean {
        get: fn(&dyn OptionStore) -> bool,
        set: fn(&dyn OptionStore, bool),
    },
}

/// One row of the option table
pub struct OptionDescriptor {
    /// Property name as scripts see it
    pub name: &'static str,
    pub accessor: Accessor,
}

/// All options reachable through `Wren.opt`
pub static OPTIONS: &[OptionDescriptor] = &[
    OptionDescriptor {
        name: "wrap",
        accessor: Accessor::Boolean {
            get: |store| store.wrap(),
            set: |store, value| store.set_wrap(value),
        },
    },
    OptionDescriptor {
        name: "lineBreak",
        accessor: Accessor::Boolean {
            get: |store| store.line_break(),
            set: |store, value| store.set_line_break(value),
        },
    },
];

impl OptionDescriptor {
    /// Look up a row by its script name
    pub fn find(name: &str) -> Option<&'static OptionDescriptor> {
        OPTIONS.iter().find(|d| d.name == name)
    }

    pub fn kind(&self) -> OptionKind {
        match self.accessor {
            Accessor::Boolean { .. } => OptionKind::Boolean,
        }
    }

    /// e.g. `Wren.opt.lineBreak`
    pub fn qualified_name(&self) -> String {
        qualify(self.name)
    }

    pub fn read(&self, store: &dyn OptionStore) -> OptionValue {
        match self.accessor {
            Accessor::Boolean { get, .. } => OptionValue::Boolean(get(store)),
        }
    }

    /// Check `value` against the option's kind, then forward it to the store.
    pub fn write(&self, store: &dyn OptionStore, value: &Dynamic) -> Result<(), OptionError> {
        match self.accessor {
            Accessor::Boolean { set, .. } => {
                let v = value.as_bool().map_err(|actual| self.invalid(value, actual))?;
                set(store, v);
            }
        }
        tracing::debug!("{} = {}", self.qualified_name(), value);
        Ok(())
    }

    fn invalid(&self, value: &Dynamic, actual: &str) -> OptionError {
        let err = OptionError::InvalidValue {
            option: self.qualified_name(),
            expected: self.kind().name(),
            value: render(value),
            actual: actual.to_string(),
        };
        tracing::warn!("{}", err);
        err
    }
}

/// Text of a rejected value; unit has no text of its own
fn render(value: &Dynamic) -> String {
    if value.is_unit() {
        "()".to_string()
    } else {
        value.to_string()
    }
}

fn qualify(name: &str) -> String {
    format!("{}.opt.{}", GLOBAL_NAME, name)
}

/// Pass-through view of the option store
#[derive(Clone)]
pub struct OptionsFacade {
    store: Arc<dyn OptionStore>,
}

impl OptionsFacade {
    pub fn new(store: Arc<dyn OptionStore>) -> Self {
        Self { store }
    }

    /// Names of every option, in table order
    pub fn names() -> impl Iterator<Item = &'static str> {
        OPTIONS.iter().map(|d| d.name)
    }

    pub fn get(&self, name: &str) -> Result<OptionValue, OptionError> {
        let descriptor = Self::descriptor(name)?;
        Ok(descriptor.read(self.store.as_ref()))
    }

    pub fn set(&self, name: &str, value: impl Into<Dynamic>) -> Result<(), OptionError> {
        let descriptor = Self::descriptor(name)?;
        descriptor.write(self.store.as_ref(), &value.into())
    }

    /// Current value of every option
    pub fn snapshot(&self) -> BTreeMap<&'static str, OptionValue> {
        OPTIONS
            .iter()
            .map(|d| (d.name, d.read(self.store.as_ref())))
            .collect()
    }

    fn descriptor(name: &str) -> Result<&'static OptionDescriptor, OptionError> {
        OptionDescriptor::find(name).ok_or_else(|| OptionError::UnknownOption {
            option: qualify(name),
        })
    }
}

impl fmt::Debug for OptionsFacade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.snapshot()).finish()
    }
}

impl fmt::Display for OptionsFacade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.opt {{", GLOBAL_NAME)?;
        for (i, (name, value)) in self.snapshot().into_iter().enumerate() {
            let sep = if i == 0 { " " } else { ", " };
            write!(f, "{}{}: {}", sep, name, value)?;
        }
        write!(f, " }}")
    }
}

/// Register the facade type and one property pair per table row
pub fn register(engine: &mut Engine) {
    engine.register_type_with_name::<OptionsFacade>("WrenOpt");

    for descriptor in OPTIONS {
        engine.register_get(descriptor.name, move |opt: &mut OptionsFacade| -> Dynamic {
            descriptor.read(opt.store.as_ref()).into()
        });
        engine.register_set(
            descriptor.name,
            move |opt: &mut OptionsFacade, value: Dynamic| -> Result<(), Box<EvalAltResult>> {
                descriptor
                    .write(opt.store.as_ref(), &value)
                    .map_err(|e| e.to_string().into())
            },
        );
    }

    engine.register_fn("to_string", |opt: &mut OptionsFacade| opt.to_string());
    engine.register_fn("to_debug", |opt: &mut OptionsFacade| opt.to_string());
}

#[cfg(test)]
mod tests {
    use rhai::ImmutableString;

    use super::*;
    use crate::options::SharedOptions;

    fn facade() -> (Arc<SharedOptions>, OptionsFacade) {
        let store = Arc::new(SharedOptions::default());
        let facade = OptionsFacade::new(store.clone());
        (store, facade)
    }

    #[test]
    fn test_table_names() {
        let names: Vec<_> = OptionsFacade::names().collect();
        assert_eq!(names, vec!["wrap", "lineBreak"]);
        assert!(OPTIONS.iter().all(|d| d.kind() == OptionKind::Boolean));
    }

    #[test]
    fn test_get_reads_store() {
        let (store, facade) = facade();
        assert_eq!(facade.get("wrap").unwrap(), OptionValue::Boolean(true));
        store.set_wrap(false);
        assert_eq!(facade.get("wrap").unwrap(), OptionValue::Boolean(false));
    }

    #[test]
    fn test_set_forwards_to_store() {
        let (store, facade) = facade();
        facade.set("lineBreak", true).unwrap();
        assert!(store.line_break());
        facade.set("wrap", false).unwrap();
        assert!(!store.wrap());
    }

    #[test]
    fn test_set_rejects_wrong_type() {
        let (store, facade) = facade();
        let err = facade.set("wrap", ImmutableString::from("true")).unwrap_err();
        assert_eq!(
            err,
            OptionError::InvalidValue {
                option: "Wren.opt.wrap".to_string(),
                expected: "boolean",
                value: "true".to_string(),
                actual: "string".to_string(),
            }
        );
        assert_eq!(
            err.to_string(),
            r#""Wren.opt.wrap" must be a boolean value, but found true (string)"#
        );
        assert!(store.wrap());
    }

    #[test]
    fn test_set_rejects_numbers() {
        let (store, facade) = facade();
        assert!(facade.set("lineBreak", 1_i64).is_err());
        assert!(facade.set("lineBreak", 0.0_f64).is_err());
        assert!(!store.line_break());
    }

    #[test]
    fn test_set_rejects_unit() {
        let (store, facade) = facade();
        let err = facade.set("wrap", Dynamic::UNIT).unwrap_err();
        assert_eq!(
            err.to_string(),
            r#""Wren.opt.wrap" must be a boolean value, but found () (())"#
        );
        assert!(store.wrap());
    }

    #[test]
    fn test_unknown_option() {
        let (_, facade) = facade();
        assert_eq!(
            facade.get("number").unwrap_err(),
            OptionError::UnknownOption {
                option: "Wren.opt.number".to_string()
            }
        );
        assert!(facade.set("number", true).is_err());
    }

    #[test]
    fn test_snapshot() {
        let (store, facade) = facade();
        store.set_line_break(true);
        let json = serde_json::to_string(&facade.snapshot()).unwrap();
        assert_eq!(json, r#"{"lineBreak":true,"wrap":true}"#);
    }

    #[test]
    fn test_display() {
        let (_, facade) = facade();
        assert_eq!(facade.to_string(), "Wren.opt { lineBreak: false, wrap: true }");
    }
}
