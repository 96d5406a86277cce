//! User-visible notifications emitted by the services layer.

use std::fmt::{Display, Formatter};

/// A notification the caller should surface to the user. Message text
/// matches the application's Indonesian phrasing; gating by the user's
/// notification preferences happens where these are produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// A checklist stage was toggled.
    StageToggled {
        client: String,
        stage: String,
        checked: bool,
    },
    /// The whole checklist was completed; the file moved to the completed
    /// listing.
    ProcessCompleted { client: String },
    /// Payment details changed without a status transition.
    PaymentUpdated { client: String },
    /// The client's note text was saved.
    NoteSaved { client: String },
    /// A completed file was marked as picked up.
    FileRetrieved { client: String },
    /// A picked-up file was marked as not picked up after all.
    FileReturned { client: String },
    /// Completion was undone; the file is back in process.
    CompletionUndone { client: String },
}

impl Notification {
    /// Short heading, as shown in the application's toasts.
    pub fn title(&self) -> &'static str {
        match self {
            Notification::StageToggled { .. } => "Update Proses",
            Notification::ProcessCompleted { .. } => "Proses Selesai",
            Notification::PaymentUpdated { .. } => "Update Proses",
            Notification::NoteSaved { .. } => "Catatan Disimpan",
            Notification::FileRetrieved { .. } => "Sukses Update Proses",
            Notification::FileReturned { .. } => "Info Update Proses",
            Notification::CompletionUndone { .. } => "Status Dibatalkan",
        }
    }
}

impl Display for Notification {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Notification::StageToggled {
                client,
                stage,
                checked,
            } => {
                let outcome = if *checked {
                    "ditandai selesai"
                } else {
                    "ditandai belum selesai"
                };
                write!(f, "Tahapan '{stage}' untuk {client} {outcome}.")
            }
            Notification::ProcessCompleted { client } => write!(
                f,
                "Berkas untuk {client} telah selesai dan dipindahkan ke Berkas Selesai."
            ),
            Notification::PaymentUpdated { client } => write!(
                f,
                "Detail pembayaran untuk klien {client} berhasil diperbarui."
            ),
            Notification::NoteSaved { client } => {
                write!(f, "Catatan untuk klien {client} berhasil disimpan.")
            }
            Notification::FileRetrieved { client } => write!(
                f,
                "Status berkas {client} berhasil diperbarui menjadi 'Sudah Diambil'."
            ),
            Notification::FileReturned { client } => {
                write!(f, "Status berkas {client} diubah menjadi 'Belum Diambil'.")
            }
            Notification::CompletionUndone { client } => write!(
                f,
                "Status berkas untuk {client} telah dikembalikan ke 'Dalam Proses' dan checklist disesuaikan."
            ),
        }
    }
}
