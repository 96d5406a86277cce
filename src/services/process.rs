//! The process state machine: derives file-status transitions from checklist
//! edits and the explicit retrieval/undo actions.

use chrono::Utc;
use validator::Validate;

use crate::domain::checklist::{self, ChecklistItem};
use crate::domain::client::Client;
use crate::domain::file_status::{FileState, FileStatus};
use crate::domain::payment::PaymentDetails;
use crate::domain::types::{ClientId, ClientNotes, RetrieverName};
use crate::dto::client::ProcessOutcome;
use crate::dto::notification::Notification;
use crate::forms::process::{ProcessUpdateForm, RetrievalForm};
use crate::models::config::NotificationPrefs;
use crate::repository::{ClientReader, ClientWriter};
use crate::services::{ServiceError, ServiceResult};

/// Derives the next file state from the edited checklist.
///
/// Pure and idempotent: evaluating again with an unchanged checklist returns
/// the state it already produced. An empty checklist is never complete.
pub fn evaluate_transition(current: FileState, items: &[ChecklistItem]) -> FileState {
    let all = checklist::all_checked(items);
    if all && !current.is_completed() {
        return FileState::SelesaiBelumDiambil;
    }
    if !all && current.is_completed() {
        return FileState::DalamProses;
    }
    if current == FileState::BelumDiproses && checklist::any_checked(items) {
        return FileState::DalamProses;
    }
    current
}

/// Rewrites a checklist for the undo-completion action: every step checked
/// except terminal "Selesai" steps, which are forced unchecked.
pub fn undo_completion_checklist(items: &[ChecklistItem]) -> Vec<ChecklistItem> {
    items
        .iter()
        .map(|item| ChecklistItem {
            checked: !item.is_completion_step(),
            ..item.clone()
        })
        .collect()
}

fn fetch<R>(repo: &R, id: &str) -> ServiceResult<Client>
where
    R: ClientReader + ?Sized,
{
    let id = ClientId::new(id)?;
    repo.get_by_id(&id)?.ok_or(ServiceError::NotFound)
}

/// Commits a process-dialog edit: checklist states, payment details and
/// notes, evaluated against the **stored** record so that re-saving an
/// unchanged checklist never re-fires the completion notification.
pub fn save_process<R>(
    repo: &R,
    prefs: &NotificationPrefs,
    form: &ProcessUpdateForm,
) -> ServiceResult<ProcessOutcome>
where
    R: ClientReader + ClientWriter + ?Sized,
{
    if let Err(err) = form.validate() {
        log::error!("Failed to validate process form: {err}");
        return Err(ServiceError::Validation(
            "Data proses tidak valid.".to_string(),
        ));
    }
    let stored = fetch(repo, &form.id)?;
    let client_name = stored.display_name();

    let mut items = stored.process_checklist.clone();
    for state in &form.checklist {
        if let Some(item) = items.iter_mut().find(|item| item.id == state.id) {
            item.checked = state.checked;
        }
    }

    let payment_details = PaymentDetails::normalized(form.payment_status, form.dp_amount.clone());
    let notes = match form.notes.as_deref() {
        Some(raw) => Some(ClientNotes::new(raw).into_inner()),
        None => stored.notes.clone(),
    };

    let next_state = evaluate_transition(stored.file_status.status, &items);
    let file_status = stored.file_status.transition(next_state);
    let status_changed = file_status.status != stored.file_status.status;
    let completion_fired = status_changed
        && file_status.status == FileState::SelesaiBelumDiambil
        && !stored.file_status.status.is_completed();

    let payment_changed = payment_details != stored.payment_details;
    let notes_changed =
        notes.clone().unwrap_or_default() != stored.notes.clone().unwrap_or_default();

    let mut notifications = Vec::new();
    if prefs.notif_pembaruan_proses {
        for item in checklist::toggled_items(&stored.process_checklist, &items) {
            notifications.push(Notification::StageToggled {
                client: client_name.clone(),
                stage: item.label.clone(),
                checked: item.checked,
            });
        }
        if completion_fired {
            notifications.push(Notification::ProcessCompleted {
                client: client_name.clone(),
            });
        } else if !status_changed && payment_changed {
            notifications.push(Notification::PaymentUpdated {
                client: client_name.clone(),
            });
        }
    }
    if notes_changed && prefs.notif_catatan_baru {
        notifications.push(Notification::NoteSaved {
            client: client_name.clone(),
        });
    }

    let updated = Client {
        process_checklist: items,
        payment_details,
        file_status,
        notes,
        ..stored
    };
    repo.update(&updated).map_err(|err| {
        log::error!("Failed to persist process update for {}: {err}", updated.id);
        ServiceError::from(err)
    })?;
    Ok(ProcessOutcome {
        client: updated,
        notifications,
    })
}

/// Marks a completed file as picked up, stamping retriever and timestamp.
pub fn mark_retrieved<R>(
    repo: &R,
    prefs: &NotificationPrefs,
    form: &RetrievalForm,
) -> ServiceResult<ProcessOutcome>
where
    R: ClientReader + ClientWriter + ?Sized,
{
    if form.retrieved_by.trim().is_empty() {
        return Err(ServiceError::Validation(
            "Nama pengambil wajib diisi.".to_string(),
        ));
    }
    let stored = fetch(repo, &form.id)?;
    if stored.file_status.status != FileState::SelesaiBelumDiambil {
        return Err(ServiceError::Validation(
            "Berkas belum siap untuk diambil.".to_string(),
        ));
    }

    let client_name = stored.display_name();
    let retriever = RetrieverName::new(form.retrieved_by.clone())?;
    let updated = Client {
        file_status: FileStatus::retrieved(retriever, Utc::now()),
        ..stored
    };
    repo.update(&updated).map_err(ServiceError::from)?;

    let mut notifications = Vec::new();
    if prefs.notif_pembaruan_proses {
        notifications.push(Notification::FileRetrieved {
            client: client_name,
        });
    }
    Ok(ProcessOutcome {
        client: updated,
        notifications,
    })
}

/// Reverts a picked-up file to awaiting pickup, clearing the retrieval info.
pub fn mark_not_retrieved<R>(
    repo: &R,
    prefs: &NotificationPrefs,
    id: &str,
) -> ServiceResult<ProcessOutcome>
where
    R: ClientReader + ClientWriter + ?Sized,
{
    let stored = fetch(repo, id)?;
    if stored.file_status.status != FileState::SelesaiSudahDiambil {
        return Err(ServiceError::Validation(
            "Berkas belum ditandai diambil.".to_string(),
        ));
    }

    let client_name = stored.display_name();
    let updated = Client {
        file_status: FileStatus::with_state(FileState::SelesaiBelumDiambil),
        ..stored
    };
    repo.update(&updated).map_err(ServiceError::from)?;

    let mut notifications = Vec::new();
    if prefs.notif_pembaruan_proses {
        notifications.push(Notification::FileReturned {
            client: client_name,
        });
    }
    Ok(ProcessOutcome {
        client: updated,
        notifications,
    })
}

/// Undoes completion from either completed state: the file goes back to
/// in-process, retrieval info is cleared, and the checklist is rewritten so
/// only terminal "Selesai" steps are unchecked.
pub fn undo_completion<R>(
    repo: &R,
    prefs: &NotificationPrefs,
    id: &str,
) -> ServiceResult<ProcessOutcome>
where
    R: ClientReader + ClientWriter + ?Sized,
{
    let stored = fetch(repo, id)?;
    if !stored.file_status.status.is_completed() {
        return Err(ServiceError::Validation(
            "Berkas belum selesai diproses.".to_string(),
        ));
    }

    let client_name = stored.display_name();
    let updated = Client {
        process_checklist: undo_completion_checklist(&stored.process_checklist),
        file_status: FileStatus::with_state(FileState::DalamProses),
        ..stored
    };
    repo.update(&updated).map_err(ServiceError::from)?;

    let mut notifications = Vec::new();
    if prefs.notif_pembaruan_proses {
        notifications.push(Notification::CompletionUndone {
            client: client_name,
        });
    }
    Ok(ProcessOutcome {
        client: updated,
        notifications,
    })
}
