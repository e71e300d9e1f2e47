use serde::{Deserialize, Serialize};

/// A role members can assign to themselves from the autorole panel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoRole {
    pub role_id: u64,
    pub label: String,
    #[serde(default)]
    pub emoji: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}
