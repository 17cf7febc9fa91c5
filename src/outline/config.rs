use serde::{Deserialize, Serialize};

/// What to do when a page carries the `span.no-outline` marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptOutPolicy {
    /// The marker suppresses the outline
    #[default]
    Honor,
    /// The marker is not consulted
    Ignore,
}

/// Options for building the outline
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineOptions {
    /// Opt-out marker handling
    #[serde(default)]
    pub opt_out: OptOutPolicy,
}

impl OutlineOptions {
    /// Create options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the opt-out marker policy
    pub fn opt_out(mut self, policy: OptOutPolicy) -> Self {
        self.opt_out = policy;
        self
    }

    /// Shorthand for `opt_out(OptOutPolicy::Ignore)` when `ignore` is true
    pub fn ignore_opt_out(self, ignore: bool) -> Self {
        if ignore {
            self.opt_out(OptOutPolicy::Ignore)
        } else {
            self.opt_out(OptOutPolicy::Honor)
        }
    }
}
