//! Class-name merger.
//!
//! Flattens inputs into tokens, then resolves conflicts from last to first:
//! each recognized token claims its `(modifier id, group)` key plus the keys
//! of every group it overrides, and an earlier token whose key is already
//! claimed is dropped.

mod explain;

pub use explain::{DropReason, MergeReport, TokenDecision};

use cnmerge_classifier::{Classifier, ClassifierConfig};
use std::collections::HashMap;
use tracing::trace;

use crate::config::{ConfigError, MergeConfig};
use crate::input::ClassInput;

/// Merges class names, resolving utility conflicts in favor of later ones.
#[derive(Debug, Clone)]
pub struct Merger {
    classifier: Classifier,
    dedupe_unknown: bool,
}

impl Default for Merger {
    fn default() -> Self {
        Self {
            classifier: Classifier::default(),
            dedupe_unknown: false,
        }
    }
}

impl Merger {
    pub fn new(classifier: Classifier) -> Self {
        Self {
            classifier,
            dedupe_unknown: false,
        }
    }

    /// Build a merger from a loaded configuration.
    pub fn from_config(config: &MergeConfig) -> Result<Self, ConfigError> {
        let classifier = Classifier::new(config.classifier.clone())?;
        Ok(Self::new(classifier).with_dedupe_unknown(config.dedupe_unknown))
    }

    /// Build a merger from a classifier configuration alone.
    pub fn with_classifier_config(config: ClassifierConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(Classifier::new(config)?))
    }

    /// Collapse exact duplicates of unrecognized classes (default: off).
    pub fn with_dedupe_unknown(mut self, dedupe: bool) -> Self {
        self.dedupe_unknown = dedupe;
        self
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Merge inputs into a single class string.
    pub fn merge<I>(&self, inputs: I) -> String
    where
        I: IntoIterator,
        I::Item: Into<ClassInput>,
    {
        let inputs: Vec<ClassInput> = inputs.into_iter().map(Into::into).collect();
        let mut tokens = Vec::new();
        for input in &inputs {
            input.collect_tokens(&mut tokens);
        }
        join_kept(&tokens, &self.resolve(&tokens))
    }

    /// Merge an already space-separated class string.
    pub fn merge_str(&self, classes: &str) -> String {
        let tokens: Vec<&str> = classes.split_whitespace().collect();
        join_kept(&tokens, &self.resolve(&tokens))
    }

    /// Merge inputs and report the decision taken for every token.
    pub fn report<I>(&self, inputs: I) -> MergeReport
    where
        I: IntoIterator,
        I::Item: Into<ClassInput>,
    {
        let inputs: Vec<ClassInput> = inputs.into_iter().map(Into::into).collect();
        let mut tokens = Vec::new();
        for input in &inputs {
            input.collect_tokens(&mut tokens);
        }
        let decisions = self.resolve(&tokens);
        let output = join_kept(&tokens, &decisions);
        MergeReport::new(&tokens, output, decisions)
    }

    /// Decide, for each token, whether it survives.
    fn resolve(&self, tokens: &[&str]) -> Vec<TokenDecision> {
        let mut claimed: HashMap<(String, String), usize> = HashMap::new();
        let mut seen_unknown: HashMap<&str, usize> = HashMap::new();
        let mut decisions: Vec<TokenDecision> = Vec::with_capacity(tokens.len());

        for (index, token) in tokens.iter().enumerate().rev() {
            let result = self.classifier.classify(token);

            let Some(group) = result.group_id else {
                let reason = if self.dedupe_unknown {
                    match seen_unknown.get(token) {
                        Some(&winner) => Some(DropReason::Duplicate {
                            by: tokens[winner].to_string(),
                        }),
                        None => {
                            seen_unknown.insert(*token, index);
                            None
                        }
                    }
                } else {
                    None
                };
                decisions.push(TokenDecision::new(index, token, None, result.modifier_id, reason));
                continue;
            };

            let key = (result.modifier_id.clone(), group.clone());
            if let Some(&winner) = claimed.get(&key) {
                let reason = DropReason::Overridden {
                    by: tokens[winner].to_string(),
                    group: group.clone(),
                };
                decisions.push(TokenDecision::new(
                    index,
                    token,
                    Some(group),
                    result.modifier_id,
                    Some(reason),
                ));
                continue;
            }

            for other in self.classifier.conflicts(&group, result.has_postfix) {
                claimed
                    .entry((result.modifier_id.clone(), other.to_string()))
                    .or_insert(index);
            }
            claimed.insert(key, index);
            decisions.push(TokenDecision::new(index, token, Some(group), result.modifier_id, None));
        }

        decisions.reverse();
        for decision in decisions.iter().filter(|d| !d.kept) {
            trace!(token = %decision.token, reason = ?decision.reason, "dropped class");
        }
        decisions
    }
}

fn join_kept(tokens: &[&str], decisions: &[TokenDecision]) -> String {
    let mut out = String::new();
    for (token, decision) in tokens.iter().zip(decisions) {
        if !decision.kept {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(token);
    }
    out
}
