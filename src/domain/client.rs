use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::checklist::ChecklistItem;
use crate::domain::file_status::FileStatus;
use crate::domain::payment::PaymentDetails;
use crate::domain::service::ServiceSelection;
use crate::domain::types::{ClientId, ClientName, ServiceKey, normalize_phone};

/// A client record, the aggregate the whole application revolves around.
///
/// Serializes camelCase, field-for-field compatible with the documents the
/// web client keeps in browser local storage, so existing backups import
/// unchanged.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: ClientId,
    pub names: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub phones: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub addresses: Vec<String>,
    pub service: ServiceSelection,
    pub process_checklist: Vec<ChecklistItem>,
    pub payment_details: PaymentDetails,
    pub file_status: FileStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Client {
    /// The names joined for display, `N/A` when somehow empty.
    pub fn display_name(&self) -> String {
        if self.names.is_empty() {
            "N/A".to_string()
        } else {
            self.names.join(", ")
        }
    }
}

/// Data required to open a new client record. Construction normalizes the
/// contact lists; emptiness of `names` is rejected at the store boundary.
#[derive(Clone, Debug)]
pub struct NewClient {
    pub names: Vec<ClientName>,
    pub phones: Vec<String>,
    pub addresses: Vec<String>,
    pub service: ServiceSelection,
    pub service_key: ServiceKey,
}

impl NewClient {
    #[must_use]
    pub fn new(
        names: Vec<String>,
        phones: Vec<String>,
        addresses: Vec<String>,
        service: ServiceSelection,
        service_key: ServiceKey,
    ) -> Self {
        Self {
            names: names
                .into_iter()
                .filter_map(|name| ClientName::new(name).ok())
                .collect(),
            phones: phones
                .iter()
                .filter_map(|phone| normalize_phone(phone))
                .collect(),
            addresses: addresses
                .into_iter()
                .map(|address| address.trim().to_string())
                .filter(|address| !address.is_empty())
                .collect(),
            service,
            service_key,
        }
    }
}

/// Profile updates applied when editing an existing client. The process
/// checklist, payment details, file status and notes are owned by other
/// workflows and are not part of a profile edit.
#[derive(Clone, Debug)]
pub struct UpdateClient {
    pub names: Vec<ClientName>,
    pub phones: Vec<String>,
    pub addresses: Vec<String>,
    pub service: ServiceSelection,
    pub service_key: ServiceKey,
}

impl UpdateClient {
    #[must_use]
    pub fn new(
        names: Vec<String>,
        phones: Vec<String>,
        addresses: Vec<String>,
        service: ServiceSelection,
        service_key: ServiceKey,
    ) -> Self {
        let normalized = NewClient::new(names, phones, addresses, service, service_key);
        Self {
            names: normalized.names,
            phones: normalized.phones,
            addresses: normalized.addresses,
            service: normalized.service,
            service_key: normalized.service_key,
        }
    }
}
