use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// The two branches of the practice. Determines which service-definition
/// list and checklist catalog apply.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ServiceCategory {
    #[serde(rename = "PPAT")]
    Ppat,
    #[serde(rename = "NOTARIS")]
    Notaris,
}

impl ServiceCategory {
    pub const ALL: [ServiceCategory; 2] = [ServiceCategory::Ppat, ServiceCategory::Notaris];

    /// Display form, matching the persisted `type` discriminant.
    pub fn as_str(self) -> &'static str {
        match self {
            ServiceCategory::Ppat => "PPAT",
            ServiceCategory::Notaris => "NOTARIS",
        }
    }

    /// Lower-case prefix used when deriving service keys and default
    /// checklist item ids (`ppat_jual_beli`, `notaris_selesai`).
    pub fn prefix(self) -> &'static str {
        match self {
            ServiceCategory::Ppat => "ppat",
            ServiceCategory::Notaris => "notaris",
        }
    }
}

impl Display for ServiceCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The service a client record was opened for, as persisted.
///
/// Only a display name is stored, never the catalog key; the key is
/// re-derived through [`crate::catalog::ServiceCatalog::resolve_service_key`]
/// whenever an edit needs to detect a service change. For free-text services
/// `custom_name` duplicates `name`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceSelection {
    #[serde(rename = "type")]
    pub category: ServiceCategory,
    pub name: String,
    #[serde(rename = "customName", default, skip_serializing_if = "Option::is_none")]
    pub custom_name: Option<String>,
}

impl ServiceSelection {
    /// Selection of a fixed catalog entry; the stored name is the catalog
    /// label verbatim.
    pub fn fixed(category: ServiceCategory, label: impl Into<String>) -> Self {
        Self {
            category,
            name: label.into(),
            custom_name: None,
        }
    }

    /// Selection of the category's free-text entry with a user-supplied name.
    pub fn free_text(category: ServiceCategory, custom_name: impl Into<String>) -> Self {
        let custom_name = custom_name.into();
        Self {
            category,
            name: custom_name.clone(),
            custom_name: Some(custom_name),
        }
    }

    /// Human-readable label, e.g. `PPAT - Jual Beli` or
    /// `NOTARIS - Akta Waris (Akta Waris)` when a distinct custom name exists.
    pub fn display_label(&self) -> String {
        match &self.custom_name {
            Some(custom) if custom != &self.name => {
                format!("{} - {} ({custom})", self.category, self.name)
            }
            _ => format!("{} - {}", self.category, self.name),
        }
    }
}
