use std::collections::HashMap;

use crate::interpreter::value::Value;

/// The mutable variable store of one interpreter instance.
///
/// A single flat mapping from variable name to [`Value`]: the language has no
/// nested scopes and no shadowing, so `if`/`while` bodies read and write the
/// same bindings as top-level code. Assignment is last-write-wins and may
/// change the kind of the stored value. The environment lives as long as its
/// interpreter, which is how variables persist across `run` calls.
#[derive(Debug, Default)]
pub struct Environment {
    bindings: HashMap<String, Value>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self { bindings: HashMap::new(), }
    }

    /// Looks up a variable by name.
    ///
    /// # Parameters
    /// - `name`: Variable name.
    ///
    /// # Returns
    /// A reference to the bound value, or `None` when the name was never
    /// assigned.
    ///
    /// # Example
    /// ```
    /// use petit::interpreter::{env::Environment, value::Value};
    ///
    /// let mut env = Environment::new();
    /// env.set("x", Value::Number(5.0));
    ///
    /// assert_eq!(env.get("x"), Some(&Value::Number(5.0)));
    /// assert_eq!(env.get("y"), None);
    /// ```
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    /// Binds `name` to `value`, replacing any previous binding.
    ///
    /// The previous binding's kind does not matter; a number may overwrite an
    /// array and vice versa.
    ///
    /// # Parameters
    /// - `name`: Variable name.
    /// - `value`: Value to store.
    pub fn set(&mut self, name: &str, value: Value) {
        self.bindings.insert(name.to_string(), value);
    }
}
