use notaris_crm::catalog::ServiceCatalog;
use notaris_crm::domain::file_status::FileState;
use notaris_crm::domain::service::ServiceCategory;
use notaris_crm::dto::notification::Notification;
use notaris_crm::forms::process::RetrievalForm;
use notaris_crm::models::config::NotificationPrefs;
use notaris_crm::services::{client as client_service, process};

mod common;

#[test]
fn new_ppat_sale_client_starts_unprocessed_with_ten_steps() {
    // Scenario A
    let repo = common::memory_repository();
    let client = common::add_client(&repo, "Budi", ServiceCategory::Ppat, "ppat_jual_beli");

    assert_eq!(client.process_checklist.len(), 10);
    assert!(client.process_checklist.iter().all(|item| !item.checked));
    assert_eq!(client.file_status.status, FileState::BelumDiproses);
    assert_eq!(client.file_status.retrieved_by, None);
}

#[test]
fn checking_every_step_completes_the_file() {
    // Scenario B
    let repo = common::memory_repository();
    let prefs = NotificationPrefs::default();
    let client = common::add_client(&repo, "Budi", ServiceCategory::Ppat, "ppat_jual_beli");

    let outcome = process::save_process(&repo, &prefs, &common::process_form(&client, true)).unwrap();
    assert_eq!(
        outcome.client.file_status.status,
        FileState::SelesaiBelumDiambil
    );
    assert!(
        outcome
            .notifications
            .iter()
            .any(|n| matches!(n, Notification::ProcessCompleted { .. }))
    );
}

#[test]
fn partial_progress_moves_to_in_process() {
    let repo = common::memory_repository();
    let prefs = NotificationPrefs::default();
    let client = common::add_client(&repo, "Budi", ServiceCategory::Ppat, "ppat_jual_beli");

    let mut form = common::process_form(&client, false);
    form.checklist[0].checked = true;
    let outcome = process::save_process(&repo, &prefs, &form).unwrap();
    assert_eq!(outcome.client.file_status.status, FileState::DalamProses);
    assert!(
        !outcome
            .notifications
            .iter()
            .any(|n| matches!(n, Notification::ProcessCompleted { .. }))
    );
}

#[test]
fn unchecking_a_step_regresses_to_in_process_exactly() {
    // Scenario C
    let repo = common::memory_repository();
    let prefs = NotificationPrefs::default();
    let client = common::add_client(&repo, "Budi", ServiceCategory::Ppat, "ppat_jual_beli");
    let completed = process::save_process(&repo, &prefs, &common::process_form(&client, true))
        .unwrap()
        .client;

    let mut form = common::process_form(&completed, true);
    form.checklist[3].checked = false;
    let outcome = process::save_process(&repo, &prefs, &form).unwrap();
    assert_eq!(outcome.client.file_status.status, FileState::DalamProses);
}

#[test]
fn resaving_an_unchanged_checklist_never_refires_completion() {
    let repo = common::memory_repository();
    let prefs = NotificationPrefs::default();
    let client = common::add_client(&repo, "Budi", ServiceCategory::Ppat, "ppat_jual_beli");

    let first = process::save_process(&repo, &prefs, &common::process_form(&client, true)).unwrap();
    assert!(
        first
            .notifications
            .iter()
            .any(|n| matches!(n, Notification::ProcessCompleted { .. }))
    );

    let second =
        process::save_process(&repo, &prefs, &common::process_form(&first.client, true)).unwrap();
    assert_eq!(
        second.client.file_status.status,
        FileState::SelesaiBelumDiambil
    );
    assert!(second.notifications.is_empty());
}

#[test]
fn retrieval_stamps_name_and_date() {
    // Scenario D
    let repo = common::memory_repository();
    let prefs = NotificationPrefs::default();
    let client = common::add_client(&repo, "Budi", ServiceCategory::Ppat, "ppat_jual_beli");
    process::save_process(&repo, &prefs, &common::process_form(&client, true)).unwrap();

    let outcome = process::mark_retrieved(
        &repo,
        &prefs,
        &RetrievalForm {
            id: client.id.as_str().to_string(),
            retrieved_by: "Anak".to_string(),
        },
    )
    .unwrap();

    let status = &outcome.client.file_status;
    assert_eq!(status.status, FileState::SelesaiSudahDiambil);
    assert_eq!(status.retrieved_by.as_deref(), Some("Anak"));
    assert!(status.retrieval_date.is_some());
}

#[test]
fn retrieval_requires_a_retriever_name() {
    let repo = common::memory_repository();
    let prefs = NotificationPrefs::default();
    let client = common::add_client(&repo, "Budi", ServiceCategory::Ppat, "ppat_jual_beli");
    process::save_process(&repo, &prefs, &common::process_form(&client, true)).unwrap();

    let err = process::mark_retrieved(
        &repo,
        &prefs,
        &RetrievalForm {
            id: client.id.as_str().to_string(),
            retrieved_by: "   ".to_string(),
        },
    )
    .unwrap_err();
    assert!(matches!(
        err,
        notaris_crm::services::ServiceError::Validation(_)
    ));

    // nothing was mutated
    let stored = client_service::get_client(&repo, &client.id).unwrap().unwrap();
    assert_eq!(stored.file_status.status, FileState::SelesaiBelumDiambil);
}

#[test]
fn unretrieving_clears_the_retrieval_info() {
    let repo = common::memory_repository();
    let prefs = NotificationPrefs::default();
    let client = common::add_client(&repo, "Budi", ServiceCategory::Ppat, "ppat_jual_beli");
    process::save_process(&repo, &prefs, &common::process_form(&client, true)).unwrap();
    process::mark_retrieved(
        &repo,
        &prefs,
        &RetrievalForm {
            id: client.id.as_str().to_string(),
            retrieved_by: "Anak".to_string(),
        },
    )
    .unwrap();

    let outcome = process::mark_not_retrieved(&repo, &prefs, client.id.as_str()).unwrap();
    let status = &outcome.client.file_status;
    assert_eq!(status.status, FileState::SelesaiBelumDiambil);
    assert_eq!(status.retrieved_by, None);
    assert_eq!(status.retrieval_date, None);
}

#[test]
fn undo_completion_rewrites_the_checklist() {
    // Scenario E
    let repo = common::memory_repository();
    let prefs = NotificationPrefs::default();
    let client = common::add_client(&repo, "Budi", ServiceCategory::Ppat, "ppat_jual_beli");
    process::save_process(&repo, &prefs, &common::process_form(&client, true)).unwrap();
    process::mark_retrieved(
        &repo,
        &prefs,
        &RetrievalForm {
            id: client.id.as_str().to_string(),
            retrieved_by: "Anak".to_string(),
        },
    )
    .unwrap();

    let outcome = process::undo_completion(&repo, &prefs, client.id.as_str()).unwrap();
    let updated = &outcome.client;
    assert_eq!(updated.file_status.status, FileState::DalamProses);
    assert_eq!(updated.file_status.retrieved_by, None);
    assert_eq!(updated.file_status.retrieval_date, None);
    for item in &updated.process_checklist {
        if item.label.to_lowercase().starts_with("selesai") {
            assert!(!item.checked, "{}", item.label);
        } else {
            assert!(item.checked, "{}", item.label);
        }
    }
}

#[test]
fn changing_the_service_resets_the_checklist() {
    // Scenario F
    let repo = common::memory_repository();
    let prefs = NotificationPrefs::default();
    let catalog = ServiceCatalog::standard();
    let client = common::add_client(&repo, "Budi", ServiceCategory::Ppat, "ppat_jual_beli");

    // make some progress first so the reset is observable
    let mut form = common::process_form(&client, false);
    form.checklist[0].checked = true;
    process::save_process(&repo, &prefs, &form).unwrap();

    let mut edit = common::client_form("Budi", ServiceCategory::Notaris, "notaris_pt");
    edit.id = Some(client.id.as_str().to_string());
    let updated = client_service::save_client(&repo, &catalog, &edit).unwrap();

    assert_eq!(updated.process_checklist.len(), 7);
    assert!(updated.process_checklist.iter().all(|item| !item.checked));
    // the file status is untouched by a service change
    assert_eq!(updated.file_status.status, FileState::DalamProses);
}

#[test]
fn resaving_the_same_service_keeps_progress() {
    let repo = common::memory_repository();
    let prefs = NotificationPrefs::default();
    let catalog = ServiceCatalog::standard();
    let client = common::add_client(&repo, "Budi", ServiceCategory::Ppat, "ppat_jual_beli");

    let mut form = common::process_form(&client, false);
    form.checklist[0].checked = true;
    process::save_process(&repo, &prefs, &form).unwrap();

    let mut edit = common::client_form("Budi Santoso", ServiceCategory::Ppat, "ppat_jual_beli");
    edit.id = Some(client.id.as_str().to_string());
    let updated = client_service::save_client(&repo, &catalog, &edit).unwrap();

    assert_eq!(updated.names, vec!["Budi Santoso".to_string()]);
    assert!(updated.process_checklist[0].checked);
}

#[test]
fn muted_preferences_suppress_notifications() {
    let repo = common::memory_repository();
    let prefs = NotificationPrefs {
        notif_pembaruan_proses: false,
        notif_catatan_baru: false,
        notif_aktivitas_akun: false,
    };
    let client = common::add_client(&repo, "Budi", ServiceCategory::Ppat, "ppat_jual_beli");

    let mut form = common::process_form(&client, true);
    form.notes = Some("catatan baru".to_string());
    let outcome = process::save_process(&repo, &prefs, &form).unwrap();

    assert!(outcome.notifications.is_empty());
    // the transition itself still happens
    assert_eq!(
        outcome.client.file_status.status,
        FileState::SelesaiBelumDiambil
    );
}

#[test]
fn note_edits_are_sanitized_and_notified() {
    let repo = common::memory_repository();
    let prefs = NotificationPrefs::default();
    let client = common::add_client(&repo, "Budi", ServiceCategory::Ppat, "ppat_jual_beli");

    let mut form = common::process_form(&client, false);
    form.notes = Some("tunggu berkas <script>alert(1)</script>".to_string());
    let outcome = process::save_process(&repo, &prefs, &form).unwrap();

    let notes = outcome.client.notes.clone().unwrap();
    assert!(notes.contains("tunggu berkas"));
    assert!(!notes.contains("<script>"));
    assert!(
        outcome
            .notifications
            .iter()
            .any(|n| matches!(n, Notification::NoteSaved { .. }))
    );
}

#[test]
fn payment_updates_clear_stale_dp_notes() {
    let repo = common::memory_repository();
    let prefs = NotificationPrefs::default();
    let client = common::add_client(&repo, "Budi", ServiceCategory::Ppat, "ppat_jual_beli");

    let mut form = common::process_form(&client, false);
    form.payment_status = notaris_crm::domain::payment::PaymentStatus::Dp;
    form.dp_amount = Some("Rp 500.000,-".to_string());
    let outcome = process::save_process(&repo, &prefs, &form).unwrap();
    assert_eq!(
        outcome.client.payment_details.dp_amount.as_deref(),
        Some("Rp 500.000,-")
    );
    assert!(
        outcome
            .notifications
            .iter()
            .any(|n| matches!(n, Notification::PaymentUpdated { .. }))
    );

    let mut form = common::process_form(&outcome.client, false);
    form.payment_status = notaris_crm::domain::payment::PaymentStatus::Lunas;
    let outcome = process::save_process(&repo, &prefs, &form).unwrap();
    assert_eq!(outcome.client.payment_details.dp_amount, None);
}
