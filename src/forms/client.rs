use serde::Deserialize;
use validator::Validate;

use crate::domain::service::ServiceCategory;

#[derive(Debug, Clone, Deserialize, Validate)]
/// Form data for creating a client or editing an existing one's profile.
///
/// `service_key` is the catalog key of the single, explicitly chosen primary
/// service; callers resolve multi-selection UI policies before submitting.
pub struct ClientForm {
    /// Identifier of the client being edited; absent when adding.
    #[serde(default)]
    pub id: Option<String>,
    /// Client names; at least one non-blank entry is required.
    #[validate(length(min = 1))]
    pub names: Vec<String>,
    #[serde(default)]
    pub phones: Vec<String>,
    #[serde(default)]
    pub addresses: Vec<String>,
    /// Category of the chosen service.
    pub category: ServiceCategory,
    /// Catalog key of the chosen service.
    #[validate(length(min = 1))]
    pub service_key: String,
    /// User-supplied name, required when the chosen entry is free-text.
    #[serde(default)]
    pub custom_name: Option<String>,
}

impl ClientForm {
    /// The names with blanks dropped, as the validation rules see them.
    pub fn trimmed_names(&self) -> Vec<String> {
        self.names
            .iter()
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect()
    }
}
