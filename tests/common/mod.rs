#![allow(dead_code)]

use notaris_crm::CLIENTS_STORAGE_KEY;
use notaris_crm::catalog::ServiceCatalog;
use notaris_crm::domain::client::Client;
use notaris_crm::domain::service::ServiceCategory;
use notaris_crm::forms::client::ClientForm;
use notaris_crm::forms::process::{ChecklistItemState, ProcessUpdateForm};
use notaris_crm::repository::KvClientRepository;
use notaris_crm::services::client as client_service;
use notaris_crm::storage::MemoryStore;

pub fn memory_repository() -> KvClientRepository<MemoryStore> {
    KvClientRepository::open(
        MemoryStore::new(),
        ServiceCatalog::standard(),
        CLIENTS_STORAGE_KEY,
    )
    .unwrap()
}

pub fn client_form(name: &str, category: ServiceCategory, service_key: &str) -> ClientForm {
    ClientForm {
        id: None,
        names: vec![name.to_string()],
        phones: Vec::new(),
        addresses: Vec::new(),
        category,
        service_key: service_key.to_string(),
        custom_name: None,
    }
}

pub fn add_client(
    repo: &KvClientRepository<MemoryStore>,
    name: &str,
    category: ServiceCategory,
    service_key: &str,
) -> Client {
    client_service::add_client(
        repo,
        &ServiceCatalog::standard(),
        &client_form(name, category, service_key),
    )
    .unwrap()
}

/// A process form re-saving the client's current checklist with every step
/// set to `checked`.
pub fn process_form(client: &Client, checked: bool) -> ProcessUpdateForm {
    ProcessUpdateForm {
        id: client.id.as_str().to_string(),
        checklist: client
            .process_checklist
            .iter()
            .map(|item| ChecklistItemState {
                id: item.id.clone(),
                checked,
            })
            .collect(),
        payment_status: client.payment_details.status,
        dp_amount: client.payment_details.dp_amount.clone(),
        notes: None,
    }
}
