use serde::{Deserialize, Serialize};

/// Token value some deployments seed into fresh clients. Never proves a
/// session.
pub const PLACEHOLDER_TOKEN: &str = "demo-token";

/// Opaque bearer credential proving an authenticated client.
///
/// The client never inspects the token beyond validity: a non-empty,
/// non-placeholder value is authenticated, everything else is not. There
/// is no distinction between "never logged in" and "expired" - both read
/// as an absent session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// A token proves a session only when non-empty and not the
    /// development placeholder.
    pub fn is_valid(&self) -> bool {
        !self.0.is_empty() && self.0 != PLACEHOLDER_TOKEN
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last four characters, for status output and logs. The full value
    /// never leaves the store.
    pub fn redacted(&self) -> String {
        let tail: String = self
            .0
            .chars()
            .rev()
            .take(4)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        format!("...{}", tail)
    }
}

impl From<&str> for SessionToken {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_token() {
        assert!(SessionToken::new("abc123").is_valid());
    }

    #[test]
    fn test_empty_token_is_invalid() {
        assert!(!SessionToken::new("").is_valid());
    }

    #[test]
    fn test_placeholder_token_is_invalid() {
        assert!(!SessionToken::new(PLACEHOLDER_TOKEN).is_valid());
    }

    #[test]
    fn test_redacted_shows_only_tail() {
        let token = SessionToken::new("abcdef123456");
        assert_eq!(token.redacted(), "...3456");
        assert!(!token.redacted().contains("abcdef"));
    }
}
