//! User types for library membership records.
//!
//! This module provides the registered-member entity, its identifier
//! newtype, and the membership status enumeration.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::loan::ValidationError;

/// A unique identifier for a registered user.
///
/// Wraps the `SQLite` rowid assigned at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Creates a user id from a raw database rowid.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw id value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Membership status of a registered user.
///
/// Stored as lowercase text in the database.
///
/// # Examples
///
/// ```
/// use biblio::MembershipStatus;
///
/// assert_eq!(MembershipStatus::parse("active").unwrap(), MembershipStatus::Active);
/// assert_eq!(format!("{}", MembershipStatus::Suspended), "suspended");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MembershipStatus {
    /// Membership is current and in good standing.
    Active,
    /// Membership is temporarily suspended.
    Suspended,
    /// Membership has lapsed.
    Expired,
}

impl MembershipStatus {
    /// Parses a membership status from a string.
    ///
    /// Recognizes: "active", "suspended", "expired" (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not recognized.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        match s.to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "suspended" => Ok(Self::Suspended),
            "expired" => Ok(Self::Expired),
            _ => Err(ValidationError {
                field: "membership_status".into(),
                message: format!("unrecognized membership status: {s}"),
            }),
        }
    }

    /// Returns the canonical lowercase form stored in the database.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Suspended => "suspended",
            Self::Expired => "expired",
        }
    }
}

impl fmt::Display for MembershipStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A registered library member.
///
/// Users are created by registration and never mutated by circulation
/// operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: String,
    contact: String,
    membership_status: MembershipStatus,
}

impl User {
    /// Assembles a user from stored fields.
    #[must_use]
    pub const fn new(
        id: UserId,
        name: String,
        contact: String,
        membership_status: MembershipStatus,
    ) -> Self {
        Self {
            id,
            name,
            contact,
            membership_status,
        }
    }

    /// Returns the user id.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the user's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the user's contact details.
    #[must_use]
    pub fn contact(&self) -> &str {
        &self.contact
    }

    /// Returns the user's membership status.
    #[must_use]
    pub const fn membership_status(&self) -> MembershipStatus {
        self.membership_status
    }
}

/// A user registration request, validated before insertion.
///
/// # Examples
///
/// ```
/// use biblio::{MembershipStatus, NewUser};
///
/// let user = NewUser::new("Ada Lovelace", "ada@example.org", MembershipStatus::Active);
/// assert!(user.is_ok());
///
/// let invalid = NewUser::new("", "ada@example.org", MembershipStatus::Active);
/// assert!(invalid.is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    /// The member's name.
    pub name: String,
    /// Contact details (email or phone).
    pub contact: String,
    /// Initial membership status.
    pub membership_status: MembershipStatus,
}

impl NewUser {
    /// Creates a validated registration request.
    ///
    /// Name and contact are trimmed of surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns an error if the name or contact is empty after trimming.
    pub fn new(
        name: &str,
        contact: &str,
        membership_status: MembershipStatus,
    ) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError {
                field: "name".into(),
                message: "name must be non-empty after trimming whitespace".into(),
            });
        }

        let contact = contact.trim();
        if contact.is_empty() {
            return Err(ValidationError {
                field: "contact".into(),
                message: "contact must be non-empty after trimming whitespace".into(),
            });
        }

        Ok(Self {
            name: name.to_string(),
            contact: contact.to_string(),
            membership_status,
        })
    }
}
