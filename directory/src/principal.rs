// Principal Identifier
//
// The registry never inspects who a principal is; it only compares them.
// The textual form is validated once at the boundary and the parsed value
// is opaque afterwards.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum length of the textual form (bytes)
pub const MAX_PRINCIPAL_LENGTH: usize = 63;

/// Error produced by the fallible textual parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PrincipalError {
    #[error("principal text cannot be empty")]
    Empty,

    #[error("principal text exceeds {} bytes", MAX_PRINCIPAL_LENGTH)]
    TooLong,

    #[error("invalid character {0:?} in principal text")]
    InvalidChar(char),

    #[error("misplaced '-' separator in principal text")]
    BadDash,
}

/// Opaque, comparable caller identifier.
///
/// Constructed only through [`Principal::from_text`]: groups of lowercase
/// ASCII alphanumerics separated by single dashes, with no leading or
/// trailing dash.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Principal(String);

impl Principal {
    /// Parse and validate the textual form.
    pub fn from_text(text: &str) -> Result<Self, PrincipalError> {
        if text.is_empty() {
            return Err(PrincipalError::Empty);
        }
        if text.len() > MAX_PRINCIPAL_LENGTH {
            return Err(PrincipalError::TooLong);
        }

        // No leading/trailing dash, no consecutive dashes
        let mut prev_is_dash = true;
        for c in text.chars() {
            if c == '-' {
                if prev_is_dash {
                    return Err(PrincipalError::BadDash);
                }
                prev_is_dash = true;
            } else if c.is_ascii_lowercase() || c.is_ascii_digit() {
                prev_is_dash = false;
            } else {
                return Err(PrincipalError::InvalidChar(c));
            }
        }
        if prev_is_dash {
            return Err(PrincipalError::BadDash);
        }

        Ok(Self(text.to_owned()))
    }

    /// The validated textual form.
    pub fn as_text(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Principal {
    type Err = PrincipalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_text(s)
    }
}

impl TryFrom<String> for Principal {
    type Error = PrincipalError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Self::from_text(&text)
    }
}

impl From<Principal> for String {
    fn from(principal: Principal) -> Self {
        principal.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_principals() {
        assert!(Principal::from_text("aaaaa-aa").is_ok());
        assert!(Principal::from_text("w7x7r-cok77-xa").is_ok());
        assert!(Principal::from_text("user1").is_ok());
        assert!(Principal::from_text("2vxsx-fae").is_ok());
    }

    #[test]
    fn rejects_empty_and_oversized() {
        assert_eq!(Principal::from_text(""), Err(PrincipalError::Empty));
        let long = "a".repeat(MAX_PRINCIPAL_LENGTH + 1);
        assert_eq!(Principal::from_text(&long), Err(PrincipalError::TooLong));
        assert!(Principal::from_text(&"a".repeat(MAX_PRINCIPAL_LENGTH)).is_ok());
    }

    #[test]
    fn rejects_invalid_characters() {
        assert_eq!(
            Principal::from_text("User1"),
            Err(PrincipalError::InvalidChar('U'))
        );
        assert_eq!(
            Principal::from_text("aa_bb"),
            Err(PrincipalError::InvalidChar('_'))
        );
    }

    #[test]
    fn rejects_misplaced_dashes() {
        assert_eq!(Principal::from_text("-abc"), Err(PrincipalError::BadDash));
        assert_eq!(Principal::from_text("abc-"), Err(PrincipalError::BadDash));
        assert_eq!(Principal::from_text("ab--cd"), Err(PrincipalError::BadDash));
    }

    #[test]
    fn parse_roundtrips_through_text() {
        let principal = Principal::from_text("w7x7r-cok77-xa").expect("valid");
        assert_eq!(principal.as_text(), "w7x7r-cok77-xa");
        assert_eq!(principal.to_string(), "w7x7r-cok77-xa");
        assert_eq!("w7x7r-cok77-xa".parse::<Principal>(), Ok(principal));
    }

    #[test]
    fn deserialization_goes_through_validation() {
        let principal: Principal = serde_json::from_str(r#""aaaaa-aa""#).expect("valid text");
        assert_eq!(principal.as_text(), "aaaaa-aa");
        assert!(serde_json::from_str::<Principal>(r#""AAAAA-AA""#).is_err());
        assert_eq!(
            serde_json::to_string(&principal).expect("serialize"),
            r#""aaaaa-aa""#
        );
    }
}
