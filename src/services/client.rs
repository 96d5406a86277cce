use validator::Validate;

use crate::catalog::ServiceCatalog;
use crate::domain::client::{Client, NewClient, UpdateClient};
use crate::domain::file_status::FileState;
use crate::domain::service::ServiceSelection;
use crate::domain::types::{ClientId, ServiceKey};
use crate::dto::client::ClientListPage;
use crate::forms::client::ClientForm;
use crate::repository::{ClientListQuery, ClientReader, ClientWriter};
use crate::services::{ServiceError, ServiceResult};

/// Validates the form and returns the usable names.
fn validated_names(form: &ClientForm) -> ServiceResult<Vec<String>> {
    if let Err(err) = form.validate() {
        log::error!("Failed to validate client form: {err}");
        return Err(ServiceError::Validation(
            "Nama Klien (minimal 1) wajib diisi.".to_string(),
        ));
    }
    let names = form.trimmed_names();
    if names.is_empty() {
        return Err(ServiceError::Validation(
            "Nama Klien (minimal 1) wajib diisi.".to_string(),
        ));
    }
    Ok(names)
}

/// Turns the form's chosen catalog key into a persisted service selection.
/// Free-text entries require a non-blank detail text.
fn resolve_selection(
    catalog: &ServiceCatalog,
    form: &ClientForm,
) -> ServiceResult<(ServiceSelection, ServiceKey)> {
    let key = ServiceKey::new(form.service_key.clone()).map_err(|_| {
        ServiceError::Validation("Pilih setidaknya satu layanan.".to_string())
    })?;
    let definition = catalog.find_by_key(form.category, &key).ok_or_else(|| {
        ServiceError::Validation("Definisi layanan utama tidak ditemukan.".to_string())
    })?;

    if definition.is_free_text {
        let custom = form
            .custom_name
            .as_deref()
            .map(str::trim)
            .filter(|custom| !custom.is_empty())
            .ok_or_else(|| {
                ServiceError::Validation(format!(
                    "Detail untuk layanan \"{}\" harus diisi.",
                    definition.label
                ))
            })?;
        Ok((ServiceSelection::free_text(form.category, custom), key))
    } else {
        Ok((
            ServiceSelection::fixed(form.category, definition.label.clone()),
            key,
        ))
    }
}

/// Validates the add-client form and opens a new client record.
pub fn add_client<R>(
    repo: &R,
    catalog: &ServiceCatalog,
    form: &ClientForm,
) -> ServiceResult<Client>
where
    R: ClientWriter + ?Sized,
{
    let names = validated_names(form)?;
    let (service, service_key) = resolve_selection(catalog, form)?;
    let new_client = NewClient::new(
        names,
        form.phones.clone(),
        form.addresses.clone(),
        service,
        service_key,
    );

    repo.create(&new_client).map_err(|err| {
        log::error!("Failed to add a client: {err}");
        ServiceError::from(err)
    })
}

/// Applies a profile edit to an existing client.
///
/// The stored record's service key is re-derived from its display name; only
/// when the submitted key differs is the process checklist replaced with a
/// fresh template for the new service. The file status is never touched by a
/// profile edit.
pub fn save_client<R>(
    repo: &R,
    catalog: &ServiceCatalog,
    form: &ClientForm,
) -> ServiceResult<Client>
where
    R: ClientReader + ClientWriter + ?Sized,
{
    let names = validated_names(form)?;
    let id = form
        .id
        .as_deref()
        .and_then(|id| ClientId::new(id).ok())
        .ok_or_else(|| {
            ServiceError::Validation("Klien tidak ditemukan untuk diedit.".to_string())
        })?;
    let Some(existing) = repo.get_by_id(&id)? else {
        return Err(ServiceError::NotFound);
    };

    let (service, service_key) = resolve_selection(catalog, form)?;
    let updates = UpdateClient::new(
        names,
        form.phones.clone(),
        form.addresses.clone(),
        service,
        service_key,
    );

    let original_key = catalog.resolve_service_key(
        existing.service.category,
        &existing.service.name,
        existing.service.custom_name.as_deref(),
    );
    let process_checklist = if original_key.as_ref() != Some(&updates.service_key) {
        catalog.checklist_for(updates.service.category, &updates.service_key)
    } else {
        existing.process_checklist.clone()
    };

    let updated = Client {
        names: updates
            .names
            .iter()
            .map(|name| name.as_str().to_string())
            .collect(),
        phones: updates.phones,
        addresses: updates.addresses,
        service: updates.service,
        process_checklist,
        ..existing
    };
    repo.update(&updated).map_err(|err| {
        log::error!("Failed to save client {}: {err}", updated.id);
        ServiceError::from(err)
    })?;
    Ok(updated)
}

/// Removes a client record; deleting an unknown id is a no-op.
pub fn delete_client<R>(repo: &R, id: &ClientId) -> ServiceResult<()>
where
    R: ClientWriter + ?Sized,
{
    repo.delete(id).map_err(|err| {
        log::error!("Failed to delete client {id}: {err}");
        ServiceError::from(err)
    })
}

/// Fetches a client by its identifier.
pub fn get_client<R>(repo: &R, id: &ClientId) -> ServiceResult<Option<Client>>
where
    R: ClientReader + ?Sized,
{
    repo.get_by_id(id).map_err(ServiceError::from)
}

fn load_page<R>(
    repo: &R,
    search: Option<String>,
    states: Option<Vec<FileState>>,
) -> ServiceResult<ClientListPage>
where
    R: ClientReader + ?Sized,
{
    let search_query = search
        .map(|term| term.trim().to_string())
        .filter(|term| !term.is_empty());

    let mut query = ClientListQuery::new();
    if let Some(term) = &search_query {
        query = query.search(term.clone());
    }
    if let Some(states) = states {
        query = query.states(states);
    }

    let clients = repo.list(query).map_err(ServiceError::from)?;
    Ok(ClientListPage {
        clients,
        search_query,
    })
}

/// Loads the client management listing, optionally filtered by a search term.
pub fn load_clients_page<R>(repo: &R, search: Option<String>) -> ServiceResult<ClientListPage>
where
    R: ClientReader + ?Sized,
{
    load_page(repo, search, None)
}

/// Loads clients whose files are still being worked on.
pub fn load_active_processes<R>(repo: &R, search: Option<String>) -> ServiceResult<ClientListPage>
where
    R: ClientReader + ?Sized,
{
    load_page(
        repo,
        search,
        Some(vec![FileState::BelumDiproses, FileState::DalamProses]),
    )
}

/// Loads clients whose files are completed, retrieved or not.
pub fn load_completed_files<R>(repo: &R, search: Option<String>) -> ServiceResult<ClientListPage>
where
    R: ClientReader + ?Sized,
{
    load_page(
        repo,
        search,
        Some(vec![
            FileState::SelesaiBelumDiambil,
            FileState::SelesaiSudahDiambil,
        ]),
    )
}
