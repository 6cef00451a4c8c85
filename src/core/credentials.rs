use std::fmt;

use crate::core::IgError;

/// A validated account handle.
///
/// Parsing trims surrounding whitespace and strips exactly one leading `@`.
/// The remainder must be non-empty, made of ASCII letters, digits, `_` or `.`,
/// and not periods alone.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// Validates a raw handle as typed by the user.
    ///
    /// # Errors
    ///
    /// Returns [`IgError::InvalidInput`] when the handle is empty, is only
    /// periods, or contains characters outside `[A-Za-z0-9_.]`.
    pub fn parse(raw: &str) -> Result<Self, IgError> {
        let trimmed = raw.trim();
        let name = trimmed.strip_prefix('@').unwrap_or(trimmed);

        if name.is_empty() {
            return Err(IgError::InvalidInput("username is required".into()));
        }
        // `.` / `..` are dot segments once joined into a profile URL
        if name.chars().all(|c| c == '.') {
            return Err(IgError::InvalidInput(format!(
                "username '{name}' cannot consist of periods only"
            )));
        }
        if let Some(bad) = name
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '.'))
        {
            return Err(IgError::InvalidInput(format!(
                "username contains invalid character '{}'",
                bad.escape_default()
            )));
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The opaque `sessionid` cookie value of an authenticated browser session.
///
/// `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    /// # Errors
    ///
    /// Returns [`IgError::InvalidInput`] when the token is empty after trimming.
    pub fn parse(raw: &str) -> Result<Self, IgError> {
        let token = raw.trim();
        if token.is_empty() {
            return Err(IgError::InvalidInput("session id is required".into()));
        }
        Ok(Self(token.to_string()))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    /// The `Cookie` header value carrying this session.
    pub(crate) fn cookie_header(&self) -> String {
        format!("sessionid={}", self.0)
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(***)")
    }
}

/// Everything one investigation needs. Lives only for the duration of a run.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: Username,
    pub session: SessionToken,
}

impl Credentials {
    pub fn new(username: Username, session: SessionToken) -> Self {
        Self { username, session }
    }

    /// Validates both raw inputs before any network call is made.
    ///
    /// # Errors
    ///
    /// Returns [`IgError::InvalidInput`] if either value is rejected.
    pub fn parse(username: &str, session: &str) -> Result<Self, IgError> {
        Ok(Self {
            username: Username::parse(username)?,
            session: SessionToken::parse(session)?,
        })
    }
}
