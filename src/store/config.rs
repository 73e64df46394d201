use serde::{Deserialize, Serialize};

/// What `reorder_blocks` does with an index outside `[0, len - 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReorderPolicy {
    /// Fail with `StoreError::IndexOutOfRange` and leave the document alone.
    Reject,
    /// Pull both indices into range before moving.
    Clamp,
}

// Serializable, comparable, explicit defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    pub default_folder_id: String,
    pub default_gradient: String,
    pub reorder_policy: ReorderPolicy,
}

impl StoreConfig {
    pub fn v0() -> Self {
        Self {
            default_folder_id: "default".into(),
            default_gradient: "from-blue-500 to-purple-600".into(),
            reorder_policy: ReorderPolicy::Reject,
        }
    }

    pub fn with_reorder_policy(mut self, policy: ReorderPolicy) -> Self {
        self.reorder_policy = policy;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::v0()
    }
}
