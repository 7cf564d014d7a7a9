use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::model::category::Category;

/// Error returned when a scope tag cannot be parsed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown scope tag: {raw}")]
pub struct ParseScopeError {
    raw: String,
}

impl ParseScopeError {
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

/// Which slice of the bank a session draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionScope {
    /// The whole bank.
    All,
    /// A random sample of [`SessionScope::RANDOM_SAMPLE_SIZE`] questions.
    Random10,
    /// Every question tagged with one category.
    Category(Category),
}

impl SessionScope {
    /// How many questions [`SessionScope::Random10`] draws from the bank.
    pub const RANDOM_SAMPLE_SIZE: usize = 10;

    /// Human-readable name for pickers and headings.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SessionScope::All => "Everything",
            SessionScope::Random10 => "Random 10 challenge",
            SessionScope::Category(category) => category.label(),
        }
    }
}

impl fmt::Display for SessionScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionScope::All => f.write_str("all"),
            SessionScope::Random10 => f.write_str("random10"),
            SessionScope::Category(category) => f.write_str(category.tag()),
        }
    }
}

impl FromStr for SessionScope {
    type Err = ParseScopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(SessionScope::All),
            "random10" => Ok(SessionScope::Random10),
            other => other
                .parse::<Category>()
                .map(SessionScope::Category)
                .map_err(|_| ParseScopeError { raw: s.to_owned() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_tags_round_trip() {
        let scopes = [
            SessionScope::All,
            SessionScope::Random10,
            SessionScope::Category(Category::Distribution),
        ];
        for scope in scopes {
            let parsed: SessionScope = scope.to_string().parse().unwrap();
            assert_eq!(parsed, scope);
        }
    }

    #[test]
    fn category_tags_parse_as_scopes() {
        let scope: SessionScope = "hypothesis-test".parse().unwrap();
        assert_eq!(scope, SessionScope::Category(Category::HypothesisTest));
    }

    #[test]
    fn unknown_scope_is_rejected() {
        let err = "random5".parse::<SessionScope>().unwrap_err();
        assert_eq!(err.raw(), "random5");
    }
}
