//! Utility-group classifier for CSS class tokens.
//!
//! The classifier parses a class token (`md:hover:!px-4`) and maps its base
//! class to a utility group (`px`), producing the key the merger uses to
//! detect conflicting classes.

mod config;
mod defaults;
mod parser;
mod result;
mod table;
mod validators;

pub use config::{ClassifierConfig, ConfigError, TableOverlay, DEFAULT_SEPARATOR};
pub use defaults::{default_table, DEFAULT_CONFLICTS, DEFAULT_POSTFIX_CONFLICTS};
pub use parser::{parse_class, sort_modifiers, ParsedClass};
pub use result::{ClassifierResult, UnrecognizedReason};
pub use table::{arbitrary_property_group, GroupRule, GroupTable, ARBITRARY_PROPERTY_GROUP};
pub use validators::{ArbitraryValue, ValueKind};

use tracing::{debug, trace};

/// Important marker appended to the modifier id.
const IMPORTANT_SUFFIX: &str = "!";

/// Classifies class tokens against a group table.
#[derive(Debug, Clone)]
pub struct Classifier {
    config: ClassifierConfig,
    table: GroupTable,
}

impl Default for Classifier {
    fn default() -> Self {
        Self {
            config: ClassifierConfig::default(),
            table: default_table(),
        }
    }
}

impl Classifier {
    /// Create a classifier, building its table from the config.
    pub fn new(config: ClassifierConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut table = if config.use_default_groups {
            default_table()
        } else {
            GroupTable::new()
        };
        config.apply(&mut table)?;

        debug!(
            groups = table.groups().len(),
            prefix = config.prefix.as_deref().unwrap_or(""),
            separator = %config.separator,
            "built class group table"
        );

        Ok(Self { config, table })
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    pub fn table(&self) -> &GroupTable {
        &self.table
    }

    /// Groups overridden by a member of `group`.
    pub fn conflicts(&self, group: &str, has_postfix: bool) -> Vec<&str> {
        self.table.conflicts(group, has_postfix)
    }

    /// Classify a single class token.
    ///
    /// This is a pure function: (token, config) -> ClassifierResult
    pub fn classify(&self, token: &str) -> ClassifierResult {
        let parsed = parse_class(token, &self.config.separator);

        let mut modifier_id = sort_modifiers(&parsed.modifiers).join(&self.config.separator);
        if parsed.important {
            modifier_id.push_str(IMPORTANT_SUFFIX);
        }

        if parsed.base.is_empty() {
            return ClassifierResult::unrecognized(token, modifier_id, UnrecognizedReason::EmptyBase);
        }

        // Try without the postfix first: `bg-red-500/50` is `bg-red-500`
        // with an opacity modifier.
        if parsed.postfix_position.is_some() {
            if let Ok(group) = self.group_id(parsed.base_without_postfix()) {
                return ClassifierResult::recognized(token, group, modifier_id, true);
            }
        }

        match self.group_id(&parsed.base) {
            Ok(group) => ClassifierResult::recognized(token, group, modifier_id, false),
            Err(reason) => {
                trace!(token, reason = %reason.to_code(), "unrecognized class");
                ClassifierResult::unrecognized(token, modifier_id, reason)
            }
        }
    }

    /// Resolve the group of a base class.
    fn group_id(&self, base: &str) -> Result<String, UnrecognizedReason> {
        if let Some(group) = arbitrary_property_group(base) {
            return Ok(group);
        }

        let unsigned = base.strip_prefix('-').filter(|s| !s.is_empty()).unwrap_or(base);

        let class = match &self.config.prefix {
            Some(prefix) if !prefix.is_empty() => unsigned
                .strip_prefix(prefix.as_str())
                .ok_or_else(|| UnrecognizedReason::MissingPrefix(prefix.clone()))?,
            _ => unsigned,
        };

        self.table
            .lookup(class)
            .map(str::to_string)
            .ok_or_else(|| UnrecognizedReason::UnknownClass(base.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(token: &str) -> ClassifierResult {
        Classifier::default().classify(token)
    }

    #[test]
    fn test_classify_simple_utility() {
        let result = classify("px-4");
        assert!(result.recognized);
        assert_eq!(result.group_id.as_deref(), Some("px"));
        assert_eq!(result.modifier_id, "");
    }

    #[test]
    fn test_classify_unknown_class() {
        let result = classify("base-class");
        assert!(!result.recognized);
        assert_eq!(
            result.reason,
            Some(UnrecognizedReason::UnknownClass("base-class".to_string()))
        );
    }

    #[test]
    fn test_modifier_id_is_sorted() {
        let a = classify("hover:focus:p-2");
        let b = classify("focus:hover:p-4");
        assert_eq!(a.modifier_id, "focus:hover");
        assert_eq!(a.modifier_id, b.modifier_id);
    }

    #[test]
    fn test_important_in_modifier_id() {
        let result = classify("md:!p-4");
        assert_eq!(result.modifier_id, "md!");
        assert_eq!(result.group_id.as_deref(), Some("p"));
    }

    #[test]
    fn test_negative_value() {
        let result = classify("-mt-4");
        assert_eq!(result.group_id.as_deref(), Some("mt"));
    }

    #[test]
    fn test_postfix_modifier() {
        let result = classify("bg-red-500/50");
        assert_eq!(result.group_id.as_deref(), Some("bg-color"));
        assert!(result.has_postfix);

        let result = classify("text-lg/7");
        assert_eq!(result.group_id.as_deref(), Some("font-size"));
        assert!(result.has_postfix);
    }

    #[test]
    fn test_fraction_value() {
        let result = classify("w-1/2");
        assert_eq!(result.group_id.as_deref(), Some("w"));
    }

    #[test]
    fn test_arbitrary_property() {
        let result = classify("hover:[mask-type:luminance]");
        assert_eq!(result.group_id.as_deref(), Some("arbitrary..mask-type"));
        assert_eq!(result.modifier_id, "hover");
    }

    #[test]
    fn test_empty_base() {
        let result = classify("hover:");
        assert!(!result.recognized);
        assert_eq!(result.reason, Some(UnrecognizedReason::EmptyBase));
    }

    #[test]
    fn test_prefix_required() {
        let classifier = Classifier::new(ClassifierConfig {
            prefix: Some("tw-".to_string()),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(classifier.classify("tw-px-4").group_id.as_deref(), Some("px"));
        assert_eq!(classifier.classify("-tw-mt-2").group_id.as_deref(), Some("mt"));
        assert_eq!(
            classifier.classify("px-4").reason,
            Some(UnrecognizedReason::MissingPrefix("tw-".to_string()))
        );
    }

    #[test]
    fn test_custom_separator() {
        let classifier = Classifier::new(ClassifierConfig {
            separator: "_".to_string(),
            ..Default::default()
        })
        .unwrap();
        let result = classifier.classify("hover_px-4");
        assert_eq!(result.modifier_id, "hover");
        assert_eq!(result.group_id.as_deref(), Some("px"));
    }

    #[test]
    fn test_extend_groups_and_conflicts() {
        let mut config = ClassifierConfig::default();
        config.extend.groups.push(
            GroupRule::prefixed("text-shadow", "text-shadow")
                .bare()
                .keywords(&["sm", "lg"]),
        );
        config
            .extend
            .conflicts
            .insert("text-shadow".to_string(), vec!["shadow".to_string()]);
        let classifier = Classifier::new(config).unwrap();

        assert_eq!(
            classifier.classify("text-shadow-lg").group_id.as_deref(),
            Some("text-shadow")
        );
        assert_eq!(classifier.conflicts("text-shadow", false), vec!["shadow"]);
    }

    #[test]
    fn test_override_replaces_group_rules() {
        let mut config = ClassifierConfig::default();
        config
            .replace
            .groups
            .push(GroupRule::exact("sr", &["visually-hidden"]));
        let classifier = Classifier::new(config).unwrap();

        assert_eq!(
            classifier.classify("visually-hidden").group_id.as_deref(),
            Some("sr")
        );
        assert!(!classifier.classify("sr-only").recognized);
    }

    #[test]
    fn test_unknown_conflict_group_rejected() {
        let mut config = ClassifierConfig::default();
        config
            .extend
            .conflicts
            .insert("p".to_string(), vec!["nope".to_string()]);
        let err = Classifier::new(config).unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnknownGroup {
                group: "p".to_string(),
                unknown: "nope".to_string(),
            }
        );
    }

    #[test]
    fn test_without_default_groups() {
        let mut config = ClassifierConfig {
            use_default_groups: false,
            ..Default::default()
        };
        config.extend.groups.push(GroupRule::exact("btn-size", &["btn-sm", "btn-lg"]));
        let classifier = Classifier::new(config).unwrap();

        assert!(classifier.classify("btn-sm").recognized);
        assert!(!classifier.classify("px-4").recognized);
    }
}
