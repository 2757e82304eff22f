//! Merge decision report
//!
//! Records why each token survived or was dropped, as structured JSON and
//! as human-readable text for the `explain` command.

use serde::{Deserialize, Serialize};

/// Why a token was dropped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "detail")]
pub enum DropReason {
    /// A later token claimed the same group under the same modifiers.
    #[serde(rename = "OVERRIDDEN")]
    Overridden { by: String, group: String },

    /// A later occurrence of the same unrecognized class.
    #[serde(rename = "DUPLICATE")]
    Duplicate { by: String },
}

impl DropReason {
    /// Get a machine-readable string representation.
    pub fn to_code(&self) -> String {
        match self {
            DropReason::Overridden { by, group } => format!("OVERRIDDEN:{}:{}", group, by),
            DropReason::Duplicate { by } => format!("DUPLICATE:{}", by),
        }
    }
}

/// Decision taken for a single input token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenDecision {
    /// Position in the flattened token list.
    pub index: usize,

    pub token: String,

    /// Utility group, None for unrecognized classes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub modifier_id: String,

    pub kept: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<DropReason>,
}

impl TokenDecision {
    pub(crate) fn new(
        index: usize,
        token: &str,
        group: Option<String>,
        modifier_id: String,
        reason: Option<DropReason>,
    ) -> Self {
        Self {
            index,
            token: token.to_string(),
            group,
            modifier_id,
            kept: reason.is_none(),
            reason,
        }
    }
}

/// Full report of a merge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeReport {
    /// Flattened input tokens in call order.
    pub input_tokens: Vec<String>,

    /// The merged class string.
    pub output: String,

    /// One decision per input token, in input order.
    pub decisions: Vec<TokenDecision>,
}

impl MergeReport {
    pub(crate) fn new(tokens: &[&str], output: String, decisions: Vec<TokenDecision>) -> Self {
        Self {
            input_tokens: tokens.iter().map(|t| t.to_string()).collect(),
            output,
            decisions,
        }
    }

    /// Decisions for dropped tokens.
    pub fn dropped(&self) -> impl Iterator<Item = &TokenDecision> {
        self.decisions.iter().filter(|d| !d.kept)
    }

    /// Dropped-token reasons as machine-readable strings.
    pub fn drop_codes(&self) -> Vec<String> {
        self.dropped()
            .filter_map(|d| d.reason.as_ref().map(DropReason::to_code))
            .collect()
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Render as human-readable text.
    pub fn to_human(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!("Input:  {}", self.input_tokens.join(" ")));
        lines.push(format!("Output: {}", self.output));
        lines.push(String::new());

        if self.decisions.is_empty() {
            lines.push("No classes.".to_string());
            return lines.join("\n");
        }

        let width = self
            .decisions
            .iter()
            .map(|d| d.token.len())
            .max()
            .unwrap_or(0);

        for decision in &self.decisions {
            let group = match &decision.group {
                Some(g) => format!("group={}", g),
                None => "unrecognized".to_string(),
            };
            let verdict = match &decision.reason {
                None => "kept".to_string(),
                Some(DropReason::Overridden { by, .. }) => format!("dropped (overridden by {})", by),
                Some(DropReason::Duplicate { by }) => format!("dropped (duplicate of {})", by),
            };
            lines.push(format!(
                "  [{}] {:<width$}  {:<24} {}",
                decision.index,
                decision.token,
                group,
                verdict,
                width = width
            ));
        }

        let dropped = self.dropped().count();
        lines.push(String::new());
        lines.push(format!(
            "{} kept, {} dropped",
            self.decisions.len() - dropped,
            dropped
        ));

        lines.join("\n")
    }
}
