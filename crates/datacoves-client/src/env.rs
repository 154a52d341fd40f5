//! Environment-variable access behind a trait, so config resolution stays
//! deterministic in tests.

use std::env;

/// # Thread Safety
///
/// Does **not** require `Send + Sync`. Add the bounds at your call site if
/// you share a reader across tasks.
pub trait ReadEnv {
    fn var(&self, key: &str) -> Result<String, env::VarError>;
}

/// Zero-sized type — delegates to `std::env`.
pub struct SystemEnv;

impl ReadEnv for SystemEnv {
    #[inline]
    fn var(&self, key: &str) -> Result<String, env::VarError> {
        env::var(key)
    }
}

/// `RefCell<HashMap>`-backed env reader for tests. Not `Send + Sync`.
///
/// Enabled with `#[cfg(test)]` or the `test-support` feature:
///
/// ```toml
/// [dev-dependencies]
/// datacoves-client = { path = "...", features = ["test-support"] }
/// ```
#[cfg(any(test, feature = "test-support"))]
pub struct InMemoryEnv {
    vars: std::cell::RefCell<std::collections::HashMap<String, String>>,
}

#[cfg(any(test, feature = "test-support"))]
impl InMemoryEnv {
    pub fn new() -> Self {
        Self {
            vars: std::cell::RefCell::new(std::collections::HashMap::new()),
        }
    }

    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.borrow_mut().insert(key.into(), value.into());
    }
}

#[cfg(any(test, feature = "test-support"))]
impl Default for InMemoryEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(any(test, feature = "test-support"))]
impl ReadEnv for InMemoryEnv {
    fn var(&self, key: &str) -> Result<String, env::VarError> {
        self.vars
            .borrow()
            .get(key)
            .cloned()
            .ok_or(env::VarError::NotPresent)
    }
}
