//! Actions bound to key combinations.

use std::fmt;
use std::sync::Arc;

use crate::error::ActionError;
use crate::host::Host;

/// Callback invoked with the host context.
pub type Callback<H> = Arc<dyn Fn(&H) -> Result<(), ActionError> + Send + Sync>;

/// What a binding does when triggered.
pub enum Action<H> {
    /// Delegate to the host's command executor by name.
    Command(String),
    /// Call directly with the host context.
    Callback(Callback<H>),
}

impl<H: Host> Action<H> {
    pub fn command(name: impl Into<String>) -> Self {
        Self::Command(name.into())
    }

    pub fn callback<F>(f: F) -> Self
    where
        F: Fn(&H) -> Result<(), ActionError> + Send + Sync + 'static,
    {
        Self::Callback(Arc::new(f))
    }

    pub(crate) fn invoke(&self, host: &H) -> Result<(), ActionError> {
        match self {
            Self::Command(name) => host.run_command(name),
            Self::Callback(callback) => callback(host),
        }
    }
}

impl<H> Action<H> {
    /// Human-readable label: the command name, or `<callback>`.
    pub fn label(&self) -> &str {
        match self {
            Self::Command(name) => name,
            Self::Callback(_) => "<callback>",
        }
    }
}

impl<H> Clone for Action<H> {
    fn clone(&self) -> Self {
        match self {
            Self::Command(name) => Self::Command(name.clone()),
            Self::Callback(callback) => Self::Callback(Arc::clone(callback)),
        }
    }
}

impl<H> fmt::Debug for Action<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Command(name) => f.debug_tuple("Command").field(name).finish(),
            Self::Callback(_) => f.write_str("Callback(..)"),
        }
    }
}

impl<H> From<&str> for Action<H> {
    fn from(name: &str) -> Self {
        Self::Command(name.to_string())
    }
}

impl<H> From<String> for Action<H> {
    fn from(name: String) -> Self {
        Self::Command(name)
    }
}
