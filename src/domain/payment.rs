use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Payment progress for a client's file.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PaymentStatus {
    #[serde(rename = "Belum Bayar")]
    BelumBayar,
    #[serde(rename = "DP")]
    Dp,
    #[serde(rename = "Lunas")]
    Lunas,
}

impl PaymentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PaymentStatus::BelumBayar => "Belum Bayar",
            PaymentStatus::Dp => "DP",
            PaymentStatus::Lunas => "Lunas",
        }
    }
}

impl Display for PaymentStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Payment details as persisted on a client.
///
/// `dp_amount` is a free-text note ("Rp 500.000,-" or similar) and is only
/// meaningful while the status is down payment; it is dropped on any other
/// status.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaymentDetails {
    pub status: PaymentStatus,
    #[serde(rename = "dpAmount", default, skip_serializing_if = "Option::is_none")]
    pub dp_amount: Option<String>,
}

impl PaymentDetails {
    /// Default state for a freshly created client.
    pub fn unpaid() -> Self {
        Self {
            status: PaymentStatus::BelumBayar,
            dp_amount: None,
        }
    }

    /// Builds details upholding the `dp_amount` invariant: the note is kept
    /// only under [`PaymentStatus::Dp`], and blank notes are treated as
    /// absent.
    pub fn normalized(status: PaymentStatus, dp_amount: Option<String>) -> Self {
        let dp_amount = match status {
            PaymentStatus::Dp => dp_amount
                .map(|note| note.trim().to_string())
                .filter(|note| !note.is_empty()),
            _ => None,
        };
        Self { status, dp_amount }
    }
}

impl Default for PaymentDetails {
    fn default() -> Self {
        Self::unpaid()
    }
}
