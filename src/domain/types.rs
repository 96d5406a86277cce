//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (e.g., non-blank names, sanitized
//! note text) so that once a value reaches the domain layer it can be treated
//! as trusted.
use std::fmt::{Display, Formatter};
use std::ops::Deref;

use phonenumber::{Mode, country, parse};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided value failed custom validation.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

/// Wrapper for non-empty, trimmed strings.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct NonEmptyString(String);

impl NonEmptyString {
    /// Trims whitespace and rejects empty inputs.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self(trimmed))
    }

    /// Borrow the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper returning the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for NonEmptyString {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed, non-empty value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                let inner = NonEmptyString::new(value)?;
                Ok(Self(inner.into_inner()))
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

non_empty_string_newtype!(
    ClientName,
    "Client display name enforcing trimmed, non-empty values."
);

non_empty_string_newtype!(
    RetrieverName,
    "Name of the person who picked up a completed file, trimmed and non-empty."
);

non_empty_string_newtype!(
    ServiceKey,
    "Canonical catalog key of a service definition (e.g. `ppat_jual_beli`)."
);

/// Unique identifier of a client record.
///
/// Stored documents written by older versions of the application carry
/// millisecond-epoch identifiers; any non-empty string is accepted so those
/// records keep their ids on import. Fresh identifiers are random UUIDs.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClientId(String);

impl ClientId {
    /// Wraps an existing identifier, rejecting blank values.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let inner = NonEmptyString::new(value)?;
        Ok(Self(inner.into_inner()))
    }

    /// Generates a new random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Borrow the identifier as a `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the owned inner `String`.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for ClientId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ClientId {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for ClientId {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ClientId> for String {
    fn from(value: ClientId) -> Self {
        value.0
    }
}

/// Free-form note text attached to a client, sanitized of any HTML.
///
/// Empty notes are allowed; the wrapper only guarantees the text is safe to
/// render verbatim.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ClientNotes(String);

impl ClientNotes {
    /// Sanitizes the provided text and wraps it.
    pub fn new<S: Into<String>>(value: S) -> Self {
        Self(ammonia::clean(&value.into()))
    }

    /// Borrow the note text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for ClientNotes {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ClientNotes {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for ClientNotes {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Normalizes a phone number to E.164 where possible.
///
/// Client phones are captured as free text; numbers that parse with the
/// Indonesian default region are normalized, anything else is kept trimmed
/// as entered.
pub fn normalize_phone(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    match parse(Some(country::ID), trimmed) {
        Ok(parsed) => Some(parsed.format().mode(Mode::E164).to_string()),
        Err(_) => Some(trimmed.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_name_rejects_blank() {
        assert_eq!(
            ClientName::new("   "),
            Err(TypeConstraintError::EmptyString)
        );
        assert_eq!(ClientName::new(" Budi ").unwrap().as_str(), "Budi");
    }

    #[test]
    fn client_id_keeps_legacy_values() {
        let id = ClientId::new("1718873000000").unwrap();
        assert_eq!(id.as_str(), "1718873000000");
    }

    #[test]
    fn generated_ids_are_unique() {
        assert_ne!(ClientId::generate(), ClientId::generate());
    }

    #[test]
    fn notes_are_sanitized() {
        let notes = ClientNotes::new("hello <script>alert(1)</script>");
        assert!(!notes.as_str().contains("<script>"));
    }

    #[test]
    fn phone_normalization_is_best_effort() {
        assert_eq!(normalize_phone("  "), None);
        assert_eq!(
            normalize_phone("0812-3456-789"),
            Some("+628123456789".to_string())
        );
        assert_eq!(normalize_phone("ext. 12"), Some("ext. 12".to_string()));
    }
}
