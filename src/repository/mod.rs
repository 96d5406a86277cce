use crate::domain::client::{Client, NewClient};
use crate::domain::file_status::FileState;
use crate::domain::types::ClientId;
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod local;
#[cfg(feature = "test-mocks")]
pub mod mock;

pub use local::KvClientRepository;

/// Filters applied when listing clients. The collection is small enough that
/// views list it whole and filter; there is no pagination.
#[derive(Debug, Clone, Default)]
pub struct ClientListQuery {
    pub search: Option<String>,
    pub states: Option<Vec<FileState>>,
}

impl ClientListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Case-insensitive match against names, phones, addresses, service
    /// labels, retriever name and status text.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Restricts the listing to clients in any of the given states.
    pub fn states(mut self, states: impl Into<Vec<FileState>>) -> Self {
        self.states = Some(states.into());
        self
    }
}

pub trait ClientReader {
    fn get_by_id(&self, id: &ClientId) -> RepositoryResult<Option<Client>>;
    fn list(&self, query: ClientListQuery) -> RepositoryResult<Vec<Client>>;
}

pub trait ClientWriter {
    /// Validates the new record (at least one name, a catalog-resolvable
    /// service key), instantiates its checklist, assigns identifier and
    /// creation timestamp, and prepends it to the collection.
    fn create(&self, new_client: &NewClient) -> RepositoryResult<Client>;

    /// Replaces the record with the matching identifier. A missing
    /// identifier is a silent no-op; callers do their own existence checks.
    fn update(&self, client: &Client) -> RepositoryResult<()>;

    /// Removes the record. Deleting a non-existent id is a no-op.
    fn delete(&self, id: &ClientId) -> RepositoryResult<()>;

    /// Replaces the whole collection, used by backup restore.
    fn replace_all(&self, clients: &[Client]) -> RepositoryResult<()>;
}
