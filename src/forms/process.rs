use serde::Deserialize;
use validator::Validate;

use crate::domain::payment::PaymentStatus;

/// Edited checked-state of one checklist step.
#[derive(Debug, Clone, Deserialize)]
pub struct ChecklistItemState {
    pub id: String,
    pub checked: bool,
}

#[derive(Debug, Clone, Deserialize, Validate)]
/// Form data from the process dialog: checklist states, payment details and
/// notes, committed wholesale on save.
pub struct ProcessUpdateForm {
    /// Identifier of the client being processed.
    #[validate(length(min = 1))]
    pub id: String,
    /// Checked-state per checklist item id; ids missing from the stored
    /// checklist are ignored.
    #[serde(default)]
    pub checklist: Vec<ChecklistItemState>,
    pub payment_status: PaymentStatus,
    /// Down-payment note, only meaningful with [`PaymentStatus::Dp`].
    #[serde(default)]
    pub dp_amount: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
/// Form data for marking a completed file as picked up.
pub struct RetrievalForm {
    /// Identifier of the client whose file was picked up.
    #[validate(length(min = 1))]
    pub id: String,
    /// Who picked the file up; must be non-blank.
    #[validate(length(min = 1))]
    pub retrieved_by: String,
}
