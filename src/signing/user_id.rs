use std::fmt;

use crate::error::{CryptoError, Result};

/// Characters that would make the rendered id ambiguous.
const FORBIDDEN: [char; 5] = ['(', ')', '<', '>', '\0'];

/// The name, comment and email an identity certifies.
///
/// Rendered as `name (comment) <email>`, omitting empty parts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId {
    name: String,
    comment: String,
    email: String,
}

impl UserId {
    pub fn new(name: &str, comment: &str, email: &str) -> Result<Self> {
        let user_id = Self {
            name: name.to_string(),
            comment: comment.to_string(),
            email: email.to_string(),
        };
        user_id.validate()?;
        Ok(user_id)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("name", &self.name),
            ("comment", &self.comment),
            ("email", &self.email),
        ] {
            if value.contains(FORBIDDEN) {
                return Err(CryptoError::InvalidUserId(format!(
                    "{field} must not contain parentheses, angle brackets or NUL"
                )));
            }
        }
        Ok(())
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if !self.comment.is_empty() {
            write!(f, " ({})", self.comment)?;
        }
        if !self.email.is_empty() {
            write!(f, " <{}>", self.email)?;
        }
        Ok(())
    }
}
