//! Classifier result types.

use serde::{Deserialize, Serialize};

/// Machine-readable reason a token was not recognized as a utility.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "detail")]
pub enum UnrecognizedReason {
    /// Nothing left after removing modifiers and the important marker.
    #[serde(rename = "EMPTY_BASE")]
    EmptyBase,

    /// A utility prefix is configured and the class does not carry it.
    #[serde(rename = "MISSING_PREFIX")]
    MissingPrefix(String),

    /// No group rule accepts the class.
    #[serde(rename = "UNKNOWN_CLASS")]
    UnknownClass(String),
}

impl UnrecognizedReason {
    /// Get a machine-readable string representation.
    pub fn to_code(&self) -> String {
        match self {
            UnrecognizedReason::EmptyBase => "EMPTY_BASE".to_string(),
            UnrecognizedReason::MissingPrefix(p) => format!("MISSING_PREFIX:{}", p),
            UnrecognizedReason::UnknownClass(c) => format!("UNKNOWN_CLASS:{}", c),
        }
    }
}

/// Result of classifying one class token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClassifierResult {
    /// The token as given.
    pub token: String,

    /// Whether the token belongs to a known utility group.
    pub recognized: bool,

    /// Utility group id. None when unrecognized.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,

    /// Sorted modifiers joined by the separator, plus `!` when important.
    /// Two tokens only conflict when their modifier ids are equal.
    pub modifier_id: String,

    /// Whether the postfix modifier took part in classification.
    #[serde(default)]
    pub has_postfix: bool,

    /// Why the token was not recognized.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<UnrecognizedReason>,
}

impl ClassifierResult {
    /// Create a recognized result.
    pub fn recognized(token: &str, group_id: String, modifier_id: String, has_postfix: bool) -> Self {
        Self {
            token: token.to_string(),
            recognized: true,
            group_id: Some(group_id),
            modifier_id,
            has_postfix,
            reason: None,
        }
    }

    /// Create an unrecognized result.
    pub fn unrecognized(token: &str, modifier_id: String, reason: UnrecognizedReason) -> Self {
        Self {
            token: token.to_string(),
            recognized: false,
            group_id: None,
            modifier_id,
            has_postfix: false,
            reason: Some(reason),
        }
    }

    /// Get the unrecognized reason as a machine-readable string.
    pub fn reason_code(&self) -> Option<String> {
        self.reason.as_ref().map(|r| r.to_code())
    }
}
