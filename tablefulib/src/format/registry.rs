//! Named formatting functions.
//!
//! A formatter turns a raw cell value into a display string. It receives the
//! value, any number of positional arguments (inside a table these are the raw
//! values of sibling columns in the same row) and a map of keyword options.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Deserializer};

use crate::data::value::Value;
use crate::error::TableFuError;
use crate::Result;

use super::builtins::DEFAULT_FORMATTERS;

/// Keyword options passed to a formatter (`decimal_places`, `failure_string`, ...)
pub type FormatOptions = BTreeMap<String, Value>;

/// Signature every formatter implements.
pub type FormatFunction = dyn Fn(&Value, &[Value], &FormatOptions) -> Result<String> + Send + Sync;

/// A formatter reference: either a registry name or a function value.
#[derive(Clone)]
pub enum FormatFn {
    /// Resolved through a [`Formatter`] at call time
    Named(String),
    /// Called directly, bypassing the registry
    Callable(Arc<FormatFunction>),
}

impl FormatFn {
    /// Wrap a closure or function item
    pub fn callable<F>(func: F) -> Self
    where
        F: Fn(&Value, &[Value], &FormatOptions) -> Result<String> + Send + Sync + 'static,
    {
        FormatFn::Callable(Arc::new(func))
    }

    /// The registry name, if this is a named reference
    pub fn name(&self) -> Option<&str> {
        match self {
            FormatFn::Named(name) => Some(name),
            FormatFn::Callable(_) => None,
        }
    }
}

impl fmt::Debug for FormatFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatFn::Named(name) => f.debug_tuple("Named").field(name).finish(),
            FormatFn::Callable(_) => f.write_str("Callable(..)"),
        }
    }
}

impl From<&str> for FormatFn {
    fn from(name: &str) -> Self {
        FormatFn::Named(name.to_string())
    }
}

impl From<String> for FormatFn {
    fn from(name: String) -> Self {
        FormatFn::Named(name)
    }
}

impl<'de> Deserialize<'de> for FormatFn {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(FormatFn::Named)
    }
}

/// Registry of formatting functions, keyed by name.
///
/// `Formatter::new()` comes with the default set installed (`link`, `image`,
/// `intcomma`, `dollars`, `percentage`, `ap_state`, ...). Registering under an
/// existing name replaces the previous function.
///
/// ```rust
/// use tablefulib::{Formatter, Value};
///
/// let formatter = Formatter::new();
/// assert_eq!(formatter.apply(&Value::Int(1200), "intcomma").unwrap(), "1,200");
/// assert_eq!(formatter.apply(&Value::Int(1200), "dollars").unwrap(), "$1,200");
/// ```
#[derive(Clone)]
pub struct Formatter {
    filters: HashMap<String, Arc<FormatFunction>>,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Formatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Formatter")
            .field("filters", &self.names())
            .finish()
    }
}

impl Formatter {
    /// Create a registry with the default formatters installed.
    pub fn new() -> Self {
        let mut formatter = Self::empty();
        for (name, func) in DEFAULT_FORMATTERS {
            formatter.register(*name, *func);
        }
        formatter
    }

    /// Create a registry with nothing installed.
    pub fn empty() -> Self {
        Self {
            filters: HashMap::new(),
        }
    }

    /// Register `func` under `name`. Last registration wins.
    pub fn register<F>(&mut self, name: impl Into<String>, func: F)
    where
        F: Fn(&Value, &[Value], &FormatOptions) -> Result<String> + Send + Sync + 'static,
    {
        self.filters.insert(name.into(), Arc::new(func));
    }

    /// Register a function item under its declared name and return that name.
    ///
    /// Closures have no declared name and register as `{{closure}}`; use
    /// [`register`](Self::register) for those.
    pub fn register_fn<F>(&mut self, func: F) -> String
    where
        F: Fn(&Value, &[Value], &FormatOptions) -> Result<String> + Send + Sync + 'static,
    {
        let name = declared_name::<F>();
        self.register(name.clone(), func);
        name
    }

    /// Remove a formatter. Returns whether one was registered.
    pub fn unregister(&mut self, name: &str) -> bool {
        self.filters.remove(name).is_some()
    }

    /// Check whether a name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.filters.contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.filters.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Call a formatter with a value, positional arguments and options.
    ///
    /// Named references are looked up here; an unknown name fails with
    /// [`TableFuError::UnknownFormatter`]. Errors from the function itself are
    /// returned unchanged.
    pub fn invoke(
        &self,
        value: &Value,
        func: &FormatFn,
        args: &[Value],
        options: &FormatOptions,
    ) -> Result<String> {
        match func {
            FormatFn::Callable(f) => f(value, args, options),
            FormatFn::Named(name) => {
                let f = self
                    .filters
                    .get(name)
                    .ok_or_else(|| TableFuError::UnknownFormatter(name.clone()))?;
                f(value, args, options)
            }
        }
    }

    /// Call a named formatter with no arguments or options.
    pub fn apply(&self, value: &Value, name: &str) -> Result<String> {
        self.invoke(
            value,
            &FormatFn::Named(name.to_string()),
            &[],
            &FormatOptions::new(),
        )
    }
}

/// Last path segment of a function item's type name (`crate::fmt::shout` -> `shout`).
fn declared_name<F>() -> String {
    let full = std::any::type_name::<F>();
    full.rsplit("::").next().unwrap_or(full).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shout(value: &Value, _args: &[Value], _options: &FormatOptions) -> Result<String> {
        Ok(value.to_string().to_uppercase())
    }

    fn echo(value: &Value, args: &[Value], _options: &FormatOptions) -> Result<String> {
        let mut parts = vec![value.to_string()];
        parts.extend(args.iter().map(|a| a.to_string()));
        Ok(parts.join("|"))
    }

    #[test]
    fn test_defaults_installed() {
        let formatter = Formatter::new();
        assert!(formatter.contains("link"));
        assert!(formatter.contains("intcomma"));
        assert!(formatter.contains("ap_state"));
        assert!(Formatter::empty().names().is_empty());
    }

    #[test]
    fn test_register_and_invoke() {
        let mut formatter = Formatter::empty();
        formatter.register("echo", echo);

        let out = formatter
            .invoke(
                &Value::from("a"),
                &FormatFn::from("echo"),
                &[Value::from("b"), Value::Int(3)],
                &FormatOptions::new(),
            )
            .unwrap();
        assert_eq!(out, "a|b|3");
    }

    #[test]
    fn test_register_fn_uses_declared_name() {
        let mut formatter = Formatter::empty();
        let name = formatter.register_fn(shout);
        assert_eq!(name, "shout");
        assert_eq!(formatter.apply(&Value::from("hi"), "shout").unwrap(), "HI");
    }

    #[test]
    fn test_last_registration_wins() {
        let mut formatter = Formatter::empty();
        formatter.register("f", |_: &Value, _: &[Value], _: &FormatOptions| Ok("one".to_string()));
        formatter.register("f", |_: &Value, _: &[Value], _: &FormatOptions| Ok("two".to_string()));
        assert_eq!(formatter.apply(&Value::Empty, "f").unwrap(), "two");
    }

    #[test]
    fn test_unregister_is_noop_when_absent() {
        let mut formatter = Formatter::new();
        assert!(formatter.unregister("link"));
        assert!(!formatter.contains("link"));
        assert!(!formatter.unregister("link"));
    }

    #[test]
    fn test_unknown_formatter() {
        let formatter = Formatter::empty();
        let err = formatter.apply(&Value::Empty, "missing").unwrap_err();
        assert!(matches!(err, TableFuError::UnknownFormatter(name) if name == "missing"));
    }

    #[test]
    fn test_callable_bypasses_registry() {
        let formatter = Formatter::empty();
        let func = FormatFn::callable(|v: &Value, _: &[Value], _: &FormatOptions| {
            Ok(format!("<{}>", v))
        });
        let out = formatter
            .invoke(&Value::from("x"), &func, &[], &FormatOptions::new())
            .unwrap();
        assert_eq!(out, "<x>");
    }

    #[test]
    fn test_errors_propagate_unchanged() {
        let mut formatter = Formatter::empty();
        formatter.register("boom", |_: &Value, _: &[Value], _: &FormatOptions| {
            Err(TableFuError::Format {
                name: "boom".to_string(),
                message: "bad input".to_string(),
            })
        });
        let err = formatter.apply(&Value::Empty, "boom").unwrap_err();
        assert!(matches!(err, TableFuError::Format { message, .. } if message == "bad input"));
    }

    #[test]
    fn test_format_fn_deserializes_from_name() {
        let func: FormatFn = serde_json::from_str("\"link\"").unwrap();
        assert_eq!(func.name(), Some("link"));
    }
}
