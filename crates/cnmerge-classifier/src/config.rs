//! Classifier configuration types.

use crate::table::{GroupRule, GroupTable, ARBITRARY_PROPERTY_GROUP};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default modifier separator (`hover:p-4`).
pub const DEFAULT_SEPARATOR: &str = ":";

/// Error types for classifier configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("separator must not be empty")]
    EmptySeparator,

    #[error("separator must not contain whitespace: {0:?}")]
    WhitespaceSeparator(String),

    #[error("group rule has an empty id")]
    EmptyGroupId,

    #[error("group '{0}' needs at least one of 'classes' or 'prefix'")]
    EmptyRule(String),

    #[error("conflict for '{group}' references unknown group '{unknown}'")]
    UnknownGroup { group: String, unknown: String },
}

/// Additions or replacements applied on top of the base table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableOverlay {
    /// Group rules.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<GroupRule>,

    /// Group id -> groups it overrides.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub conflicts: BTreeMap<String, Vec<String>>,

    /// Group id -> groups it overrides when a postfix modifier is present.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub postfix_conflicts: BTreeMap<String, Vec<String>>,
}

impl TableOverlay {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty() && self.conflicts.is_empty() && self.postfix_conflicts.is_empty()
    }
}

/// Configuration for the classifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Utility prefix (e.g., "tw-"); classes without it are unrecognized.
    #[serde(default)]
    pub prefix: Option<String>,

    /// Modifier separator.
    #[serde(default = "default_separator")]
    pub separator: String,

    /// Start from the built-in taxonomy.
    #[serde(default = "default_true")]
    pub use_default_groups: bool,

    /// Replaces rules and conflicts of the groups it names.
    #[serde(default, rename = "override", skip_serializing_if = "TableOverlay::is_empty")]
    pub replace: TableOverlay,

    /// Appends rules and conflicts.
    #[serde(default, skip_serializing_if = "TableOverlay::is_empty")]
    pub extend: TableOverlay,
}

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            prefix: None,
            separator: default_separator(),
            use_default_groups: true,
            replace: TableOverlay::default(),
            extend: TableOverlay::default(),
        }
    }
}

impl ClassifierConfig {
    /// Check the parts of the config that do not depend on the table.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.separator.is_empty() {
            return Err(ConfigError::EmptySeparator);
        }
        if self.separator.chars().any(char::is_whitespace) {
            return Err(ConfigError::WhitespaceSeparator(self.separator.clone()));
        }

        for rule in self.replace.groups.iter().chain(&self.extend.groups) {
            if rule.id.is_empty() {
                return Err(ConfigError::EmptyGroupId);
            }
            if rule.classes.is_empty() && rule.prefix.is_none() {
                return Err(ConfigError::EmptyRule(rule.id.clone()));
            }
        }

        Ok(())
    }

    /// Apply both overlays to `table`.
    pub(crate) fn apply(&self, table: &mut GroupTable) -> Result<(), ConfigError> {
        let mut replaced: Vec<&str> = Vec::new();
        for rule in &self.replace.groups {
            if !replaced.contains(&rule.id.as_str()) {
                table.remove_group_rules(&rule.id);
                replaced.push(&rule.id);
            }
        }
        for rule in &self.replace.groups {
            table.add_rule(rule.clone());
        }
        for rule in &self.extend.groups {
            table.add_rule(rule.clone());
        }

        for (group, overridden) in &self.replace.conflicts {
            check_groups(table, group, overridden)?;
            table.set_conflicts(group, overridden.clone());
        }
        for (group, overridden) in &self.replace.postfix_conflicts {
            check_groups(table, group, overridden)?;
            table.set_postfix_conflicts(group, overridden.clone());
        }
        for (group, overridden) in &self.extend.conflicts {
            check_groups(table, group, overridden)?;
            table.add_conflicts(group, overridden);
        }
        for (group, overridden) in &self.extend.postfix_conflicts {
            check_groups(table, group, overridden)?;
            table.add_postfix_conflicts(group, overridden);
        }

        Ok(())
    }
}

fn check_groups(table: &GroupTable, group: &str, overridden: &[String]) -> Result<(), ConfigError> {
    for id in std::iter::once(group).chain(overridden.iter().map(String::as_str)) {
        if !id.starts_with(ARBITRARY_PROPERTY_GROUP) && !table.has_group(id) {
            return Err(ConfigError::UnknownGroup {
                group: group.to_string(),
                unknown: id.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClassifierConfig::default();
        assert!(config.prefix.is_none());
        assert_eq!(config.separator, ":");
        assert!(config.use_default_groups);
        assert!(config.extend.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_separator_rejected() {
        let config = ClassifierConfig {
            separator: String::new(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::EmptySeparator));
    }

    #[test]
    fn test_rule_without_matcher_rejected() {
        let mut config = ClassifierConfig::default();
        config.extend.groups.push(GroupRule {
            id: "nothing".to_string(),
            ..Default::default()
        });
        assert_eq!(
            config.validate(),
            Err(ConfigError::EmptyRule("nothing".to_string()))
        );
    }

    #[test]
    fn test_config_from_toml() {
        let config: ClassifierConfig = toml::from_str(
            r#"
            prefix = "tw-"

            [[extend.groups]]
            id = "text-shadow"
            prefix = "text-shadow"
            bare = true
            keywords = ["sm", "lg"]
            kinds = ["arbitrary"]

            [extend.conflicts]
            "text-shadow" = ["shadow"]

            [[override.groups]]
            id = "sr"
            classes = ["visually-hidden"]
            "#,
        )
        .unwrap();

        assert_eq!(config.prefix.as_deref(), Some("tw-"));
        assert_eq!(config.separator, ":");
        assert_eq!(config.extend.groups.len(), 1);
        assert!(config.extend.groups[0].bare);
        assert_eq!(config.extend.conflicts["text-shadow"], vec!["shadow".to_string()]);
        assert_eq!(config.replace.groups[0].classes, vec!["visually-hidden".to_string()]);
    }

    #[test]
    fn test_config_serialization() {
        let config = ClassifierConfig {
            prefix: Some("tw-".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: ClassifierConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
