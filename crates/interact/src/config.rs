//! Helper configuration
//!
//! Every literal the helpers write into the tree lives here so a page can be
//! re-skinned without touching the operations.

use serde::{Deserialize, Serialize};

use dom::Result;

/// How form-owned ids (input, error slot) are derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorScope {
    /// `<form-id>-<id>`: every form owns its own input and error slot
    PerForm,
    /// One global id shared by every form; later forms reuse the first error slot
    Shared,
}

/// Configuration for the interaction helpers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractConfig {
    pub button_label: String,
    pub submit_label: String,
    pub empty_input_message: String,
    pub hidden_class: String,
    pub content_class: String,
    pub input_id: String,
    pub error_id: String,
    pub error_scope: ErrorScope,
}

impl Default for InteractConfig {
    fn default() -> Self {
        Self {
            button_label: "Click me".to_string(),
            submit_label: "Submit".to_string(),
            empty_input_message: "Input cannot be empty".to_string(),
            hidden_class: "hidden".to_string(),
            content_class: "content".to_string(),
            input_id: "user-input".to_string(),
            error_id: "error-message".to_string(),
            error_scope: ErrorScope::PerForm,
        }
    }
}

impl InteractConfig {
    /// Parse from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Id of the tagged text input belonging to `form_id`
    pub fn input_id_for(&self, form_id: &str) -> String {
        self.scoped(form_id, &self.input_id)
    }

    /// Id of the error-message node belonging to `form_id`
    pub fn error_id_for(&self, form_id: &str) -> String {
        self.scoped(form_id, &self.error_id)
    }

    fn scoped(&self, form_id: &str, id: &str) -> String {
        match self.error_scope {
            ErrorScope::PerForm => format!("{}-{}", form_id, id),
            ErrorScope::Shared => id.to_string(),
        }
    }
}
