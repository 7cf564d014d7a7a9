use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Error returned when a category tag cannot be parsed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown category tag: {raw}")]
pub struct ParseCategoryError {
    raw: String,
}

impl ParseCategoryError {
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

//
// ─── CATEGORY ─────────────────────────────────────────────────────────────────
//

/// Topic tag that partitions the question bank.
///
/// The set is closed: adding a category is a compile-time change, so match
/// arms over categories stay exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Formula recall (expected values, variances, standardization).
    Formula,
    /// Short numeric drills meant to be done mentally.
    Calculation,
    /// Conceptual statements: interpretation, definitions, pitfalls.
    Concept,
    /// Properties of the standard distributions.
    Distribution,
    /// Hypothesis testing: error types, p-values, rejection points.
    HypothesisTest,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 5] = [
        Category::Formula,
        Category::Calculation,
        Category::Concept,
        Category::Distribution,
        Category::HypothesisTest,
    ];

    /// Canonical kebab-case tag, stable across releases.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Category::Formula => "formula",
            Category::Calculation => "calculation",
            Category::Concept => "concept",
            Category::Distribution => "distribution",
            Category::HypothesisTest => "hypothesis-test",
        }
    }

    /// Human-readable name for pickers and headings.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Category::Formula => "Formula mastery",
            Category::Calculation => "Calculation drills",
            Category::Concept => "Concept check",
            Category::Distribution => "Distribution facts",
            Category::HypothesisTest => "Hypothesis testing",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.tag() == s)
            .ok_or_else(|| ParseCategoryError { raw: s.to_owned() })
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
