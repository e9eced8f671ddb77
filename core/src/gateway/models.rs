use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub content: String,

    #[serde(default)]
    pub description: String,

    pub project_id: String,

    #[serde(default)]
    pub labels: Vec<String>,

    /// API-scale priority (1-4, 4 = most urgent). See `capture::Priority`
    /// for the user-facing inversion.
    #[serde(default)]
    pub priority: u8,

    #[serde(default)]
    pub is_completed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
}

/// Task-creation payload. Optional fields are omitted from the wire format
/// entirely rather than sent empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTask {
    pub content: String,
    pub project_id: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u8>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProject {
    pub name: String,
}
