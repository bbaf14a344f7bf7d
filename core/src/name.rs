//! Validated name tokens.
//!
//! Both token types are value objects: the only way to obtain one is through
//! a constructor that checks the pattern, so an invalid instance never exists.
//!
//! - `Name` names concept types and facets: `^[A-Z][A-Za-z0-9]{1,}$`
//! - `Identifier` names concept instances: `^[A-Z][A-Za-z0-9_-]{1,}$`

use crate::{NameError, NameKind, NameResult};
use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

pub(crate) const NAME_PATTERN: &str = "^[A-Z][A-Za-z0-9]{1,}$";
pub(crate) const IDENTIFIER_PATTERN: &str = "^[A-Z][A-Za-z0-9_-]{1,}$";

fn name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(NAME_PATTERN).expect("name pattern is a valid regex"))
}

fn identifier_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(IDENTIFIER_PATTERN).expect("identifier pattern is a valid regex"))
}

/// Check a string against the rule for `kind` without constructing a token.
pub fn is_valid(kind: NameKind, value: &str) -> bool {
    match kind {
        NameKind::Name => name_regex().is_match(value),
        NameKind::Identifier => identifier_regex().is_match(value),
    }
}

macro_rules! validated_token {
    ($(#[$meta:meta])* $ty:ident, $kind:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $ty(String);

        impl $ty {
            /// Create a new token, checking it against the pattern.
            pub fn new(value: impl Into<String>) -> NameResult<Self> {
                let value = value.into();
                if is_valid($kind, &value) {
                    Ok(Self(value))
                } else {
                    Err(NameError::invalid_pattern($kind, value))
                }
            }

            /// Get the underlying string.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the token, returning the underlying string.
            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl Borrow<str> for $ty {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl FromStr for $ty {
            type Err = NameError;

            fn from_str(s: &str) -> NameResult<Self> {
                Self::new(s)
            }
        }

        impl TryFrom<String> for $ty {
            type Error = NameError;

            fn try_from(value: String) -> NameResult<Self> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $ty {
            type Error = NameError;

            fn try_from(value: &str) -> NameResult<Self> {
                Self::new(value)
            }
        }

        impl From<$ty> for String {
            fn from(token: $ty) -> String {
                token.0
            }
        }

        impl PartialEq<str> for $ty {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $ty {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

validated_token!(
    /// Name of a concept type or facet.
    Name,
    NameKind::Name
);

validated_token!(
    /// Globally unique identifier of a concept instance.
    Identifier,
    NameKind::Identifier
);
