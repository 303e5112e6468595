//! User identity model.
//!
//! Users are owned by an external identity system. This service only needs
//! the identifier to decide whether a caller organizes a webinar.

use std::fmt;

/// Validation errors returned by the identifier constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentifierValidationError {
    /// The identifier is the empty string.
    Empty,
    /// The identifier has leading or trailing whitespace.
    Padded,
}

impl fmt::Display for IdentifierValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "identifier must not be empty"),
            Self::Padded => write!(f, "identifier must not have surrounding whitespace"),
        }
    }
}

impl std::error::Error for IdentifierValidationError {}

/// Shared validation for opaque string identifiers.
pub(crate) fn validate_identifier(raw: &str) -> Result<(), IdentifierValidationError> {
    if raw.is_empty() {
        return Err(IdentifierValidationError::Empty);
    }
    if raw.trim() != raw {
        return Err(IdentifierValidationError::Padded);
    }
    Ok(())
}

/// Opaque user identifier.
///
/// # Examples
/// ```
/// use webinars::domain::UserId;
///
/// let id = UserId::new("alice").expect("valid id");
/// assert_eq!(id.as_ref(), "alice");
/// assert!(UserId::new(" alice").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    /// Validate and construct a [`UserId`].
    pub fn new(id: impl Into<String>) -> Result<Self, IdentifierValidationError> {
        let id = id.into();
        validate_identifier(&id)?;
        Ok(Self(id))
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A registered user as seen by this service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    email: String,
    password_hash: String,
}

impl User {
    /// Construct a user from already-validated parts.
    pub fn new(id: UserId, email: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
            password_hash: password_hash.into(),
        }
    }

    /// Stable identifier.
    #[must_use]
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Contact address.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Stored credential hash. Never logged.
    #[must_use]
    pub fn password_hash(&self) -> &str {
        self.password_hash.as_str()
    }
}
