use std::fmt::{Display, Formatter};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::RetrieverName;

/// Where a client's file sits in its lifecycle. Serialized with the exact
/// display strings the stored documents carry.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum FileState {
    #[serde(rename = "Belum Diproses")]
    BelumDiproses,
    #[serde(rename = "Dalam Proses")]
    DalamProses,
    #[serde(rename = "Selesai - Belum Diambil")]
    SelesaiBelumDiambil,
    #[serde(rename = "Selesai - Sudah Diambil")]
    SelesaiSudahDiambil,
}

impl FileState {
    pub fn as_str(self) -> &'static str {
        match self {
            FileState::BelumDiproses => "Belum Diproses",
            FileState::DalamProses => "Dalam Proses",
            FileState::SelesaiBelumDiambil => "Selesai - Belum Diambil",
            FileState::SelesaiSudahDiambil => "Selesai - Sudah Diambil",
        }
    }

    /// Both completed states: the file is done, retrieved or not.
    pub fn is_completed(self) -> bool {
        matches!(
            self,
            FileState::SelesaiBelumDiambil | FileState::SelesaiSudahDiambil
        )
    }
}

impl Display for FileState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// File status as persisted on a client.
///
/// Invariant: `retrieved_by` and `retrieval_date` are present iff the state
/// is [`FileState::SelesaiSudahDiambil`]. All constructors and transitions
/// uphold this.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileStatus {
    pub status: FileState,
    #[serde(rename = "retrievedBy", default, skip_serializing_if = "Option::is_none")]
    pub retrieved_by: Option<String>,
    #[serde(
        rename = "retrievalDate",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub retrieval_date: Option<DateTime<Utc>>,
}

impl FileStatus {
    /// Initial status for a freshly created client.
    pub fn not_processed() -> Self {
        Self::with_state(FileState::BelumDiproses)
    }

    /// Status in the given state with no retrieval information.
    pub fn with_state(status: FileState) -> Self {
        Self {
            status,
            retrieved_by: None,
            retrieval_date: None,
        }
    }

    /// Marks the file as picked up by `retrieved_by` at `retrieval_date`.
    pub fn retrieved(retrieved_by: RetrieverName, retrieval_date: DateTime<Utc>) -> Self {
        Self {
            status: FileState::SelesaiSudahDiambil,
            retrieved_by: Some(retrieved_by.into_inner()),
            retrieval_date: Some(retrieval_date),
        }
    }

    /// Moves to `next`, keeping retrieval information only while the file
    /// stays retrieved.
    pub fn transition(&self, next: FileState) -> Self {
        if next == FileState::SelesaiSudahDiambil && self.status == FileState::SelesaiSudahDiambil {
            self.clone()
        } else {
            Self::with_state(next)
        }
    }
}

impl Default for FileStatus {
    fn default() -> Self {
        Self::not_processed()
    }
}
