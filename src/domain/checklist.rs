use serde::{Deserialize, Serialize};

/// One step of a client's process checklist.
///
/// Instantiated from a catalog template at creation or service-change time;
/// ids are unique within a client's checklist and match the template's ids.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChecklistItem {
    pub id: String,
    pub label: String,
    pub checked: bool,
}

impl ChecklistItem {
    /// Fresh, unchecked instance of a template step.
    pub fn unchecked(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            checked: false,
        }
    }

    /// Whether this step is a terminal "Selesai" step. Matched on the label,
    /// case-insensitively, because default templates carry per-category ids
    /// (`ppat_selesai`) while specific templates use plain `selesai`.
    pub fn is_completion_step(&self) -> bool {
        self.label.to_lowercase().starts_with("selesai")
    }
}

/// True when every step is checked. An empty checklist is never complete.
pub fn all_checked(items: &[ChecklistItem]) -> bool {
    !items.is_empty() && items.iter().all(|item| item.checked)
}

/// True when at least one step is checked.
pub fn any_checked(items: &[ChecklistItem]) -> bool {
    items.iter().any(|item| item.checked)
}

/// Items whose checked state differs between the stored checklist and an
/// edited copy, in the edited copy's order. Pairs items by id.
pub fn toggled_items<'a>(
    before: &[ChecklistItem],
    after: &'a [ChecklistItem],
) -> Vec<&'a ChecklistItem> {
    after
        .iter()
        .filter(|item| {
            before
                .iter()
                .find(|prior| prior.id == item.id)
                .is_some_and(|prior| prior.checked != item.checked)
        })
        .collect()
}
