//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::client::{Client, NewClient};
use crate::domain::types::ClientId;
use crate::repository::errors::RepositoryResult;
use crate::repository::{ClientListQuery, ClientReader, ClientWriter};

mock! {
    pub Repository {}

    impl ClientReader for Repository {
        fn get_by_id(&self, id: &ClientId) -> RepositoryResult<Option<Client>>;
        fn list(&self, query: ClientListQuery) -> RepositoryResult<Vec<Client>>;
    }

    impl ClientWriter for Repository {
        fn create(&self, new_client: &NewClient) -> RepositoryResult<Client>;
        fn update(&self, client: &Client) -> RepositoryResult<()>;
        fn delete(&self, id: &ClientId) -> RepositoryResult<()>;
        fn replace_all(&self, clients: &[Client]) -> RepositoryResult<()>;
    }
}
