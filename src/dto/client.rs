//! DTOs shaped for the client-facing views.

use crate::domain::client::Client;
use crate::dto::notification::Notification;

/// Listing of clients for one of the views, together with the search term
/// that produced it.
#[derive(Debug, Clone)]
pub struct ClientListPage {
    pub clients: Vec<Client>,
    pub search_query: Option<String>,
}

/// Result of a process-affecting mutation: the updated record plus the
/// notifications to surface.
#[derive(Debug, Clone)]
pub struct ProcessOutcome {
    pub client: Client,
    pub notifications: Vec<Notification>,
}
