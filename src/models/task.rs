use serde::{Deserialize, Serialize};

/// A logged activity entry from `/api/tasks/today`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub name: String,
    pub task: String,
    #[serde(default)]
    pub url: Option<String>,
    pub created_at: String,
}
