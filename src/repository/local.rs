use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;

use crate::catalog::ServiceCatalog;
use crate::domain::client::{Client, NewClient};
use crate::domain::file_status::FileStatus;
use crate::domain::payment::PaymentDetails;
use crate::domain::types::ClientId;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{ClientListQuery, ClientReader, ClientWriter};
use crate::storage::KeyValueStore;

/// [`ClientReader`]/[`ClientWriter`] implementation over the key-value
/// persistence port.
///
/// The collection lives in memory and is mirrored whole to the store after
/// every mutation; there is no partial persistence. When the mirror write
/// fails the mutation is kept in memory and the error is surfaced so callers
/// can warn the user.
pub struct KvClientRepository<S: KeyValueStore> {
    store: S,
    catalog: ServiceCatalog,
    storage_key: String,
    clients: RwLock<Vec<Client>>,
}

impl<S: KeyValueStore> KvClientRepository<S> {
    /// Opens the repository, loading any previously persisted collection.
    ///
    /// A document that no longer parses is logged and treated as absent;
    /// a corrupt collection must not block the session.
    pub fn open(
        store: S,
        catalog: ServiceCatalog,
        storage_key: impl Into<String>,
    ) -> RepositoryResult<Self> {
        let storage_key = storage_key.into();
        let clients = match store.load(&storage_key)? {
            Some(document) => match serde_json::from_value::<Vec<Client>>(document) {
                Ok(clients) => clients,
                Err(err) => {
                    log::error!("Failed to parse stored clients under {storage_key}: {err}");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
        Ok(Self {
            store,
            catalog,
            storage_key,
            clients: RwLock::new(clients),
        })
    }

    fn read_guard(&self) -> RwLockReadGuard<'_, Vec<Client>> {
        self.clients.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_guard(&self) -> RwLockWriteGuard<'_, Vec<Client>> {
        self.clients.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Serializes the full collection to the persistence port.
    fn persist(&self, clients: &[Client]) -> RepositoryResult<()> {
        let document = serde_json::to_value(clients)?;
        self.store
            .save(&self.storage_key, &document)
            .map_err(RepositoryError::from)
    }

    fn matches_search(client: &Client, term: &str) -> bool {
        let term = term.to_lowercase();
        let contains = |value: &str| value.to_lowercase().contains(&term);

        client.names.iter().any(|name| contains(name))
            || client.phones.iter().any(|phone| contains(phone))
            || client.addresses.iter().any(|address| contains(address))
            || contains(&client.service.name)
            || client
                .service
                .custom_name
                .as_deref()
                .is_some_and(contains)
            || client
                .file_status
                .retrieved_by
                .as_deref()
                .is_some_and(contains)
            || contains(client.file_status.status.as_str())
    }
}

impl<S: KeyValueStore> ClientReader for KvClientRepository<S> {
    fn get_by_id(&self, id: &ClientId) -> RepositoryResult<Option<Client>> {
        let clients = self.read_guard();
        Ok(clients.iter().find(|client| &client.id == id).cloned())
    }

    fn list(&self, query: ClientListQuery) -> RepositoryResult<Vec<Client>> {
        let clients = self.read_guard();
        Ok(clients
            .iter()
            .filter(|client| {
                query
                    .states
                    .as_ref()
                    .is_none_or(|states| states.contains(&client.file_status.status))
            })
            .filter(|client| {
                query
                    .search
                    .as_deref()
                    .is_none_or(|term| Self::matches_search(client, term))
            })
            .cloned()
            .collect())
    }
}

impl<S: KeyValueStore> ClientWriter for KvClientRepository<S> {
    fn create(&self, new_client: &NewClient) -> RepositoryResult<Client> {
        if new_client.names.is_empty() {
            return Err(RepositoryError::Validation(
                "a client needs at least one name".to_string(),
            ));
        }
        let category = new_client.service.category;
        if self
            .catalog
            .find_by_key(category, &new_client.service_key)
            .is_none()
        {
            return Err(RepositoryError::Validation(format!(
                "unknown service key {}",
                new_client.service_key
            )));
        }

        let client = Client {
            id: ClientId::generate(),
            names: new_client
                .names
                .iter()
                .map(|name| name.as_str().to_string())
                .collect(),
            phones: new_client.phones.clone(),
            addresses: new_client.addresses.clone(),
            service: new_client.service.clone(),
            process_checklist: self.catalog.checklist_for(category, &new_client.service_key),
            payment_details: PaymentDetails::unpaid(),
            file_status: FileStatus::not_processed(),
            notes: Some(String::new()),
            created_at: Utc::now(),
        };

        let snapshot = {
            let mut clients = self.write_guard();
            clients.insert(0, client.clone());
            clients.clone()
        };
        self.persist(&snapshot)?;
        Ok(client)
    }

    fn update(&self, client: &Client) -> RepositoryResult<()> {
        let snapshot = {
            let mut clients = self.write_guard();
            if let Some(slot) = clients.iter_mut().find(|stored| stored.id == client.id) {
                *slot = client.clone();
            }
            clients.clone()
        };
        self.persist(&snapshot)
    }

    fn delete(&self, id: &ClientId) -> RepositoryResult<()> {
        let snapshot = {
            let mut clients = self.write_guard();
            clients.retain(|client| &client.id != id);
            clients.clone()
        };
        self.persist(&snapshot)
    }

    fn replace_all(&self, replacement: &[Client]) -> RepositoryResult<()> {
        let snapshot = {
            let mut clients = self.write_guard();
            *clients = replacement.to_vec();
            clients.clone()
        };
        self.persist(&snapshot)
    }
}
