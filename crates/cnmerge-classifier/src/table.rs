//! Utility group table.
//!
//! Maps a base class (no modifiers, no important marker) to the id of the
//! utility group it belongs to, and records which groups override which.

use crate::validators::ValueKind;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};

/// Group id prefix used for arbitrary properties (`[mask-type:alpha]`).
pub const ARBITRARY_PROPERTY_GROUP: &str = "arbitrary..";

/// One way of recognizing members of a utility group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupRule {
    /// Group id (e.g., "px", "font-size").
    pub id: String,

    /// Exact class names that belong to the group.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,

    /// Prefix before the value (e.g., "px" for `px-4`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,

    /// Whether the prefix alone is a member (`border`, `shadow`).
    #[serde(default)]
    pub bare: bool,

    /// Literal values accepted after the prefix.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,

    /// Value kinds accepted after the prefix.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub kinds: Vec<ValueKind>,
}

impl GroupRule {
    /// Rule matching exact class names.
    pub fn exact(id: &str, classes: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            classes: classes.iter().map(|c| c.to_string()).collect(),
            ..Default::default()
        }
    }

    /// Rule matching `prefix-<value>`.
    pub fn prefixed(id: &str, prefix: &str) -> Self {
        Self {
            id: id.to_string(),
            prefix: Some(prefix.to_string()),
            ..Default::default()
        }
    }

    /// Accept the prefix on its own.
    pub fn bare(mut self) -> Self {
        self.bare = true;
        self
    }

    /// Accept these literal values.
    pub fn keywords(mut self, keywords: &[&str]) -> Self {
        self.keywords.extend(keywords.iter().map(|k| k.to_string()));
        self
    }

    /// Accept values of these kinds.
    pub fn kinds(mut self, kinds: &[ValueKind]) -> Self {
        self.kinds.extend_from_slice(kinds);
        self
    }
}

#[derive(Debug, Clone)]
struct PrefixEntry {
    group: String,
    bare: bool,
    keywords: HashSet<String>,
    kinds: Vec<ValueKind>,
}

impl PrefixEntry {
    fn accepts(&self, value: &str) -> bool {
        if value.is_empty() {
            return self.bare;
        }
        self.keywords.contains(value) || self.kinds.iter().any(|k| k.accepts(value))
    }
}

/// Lookup table from classes to utility groups.
#[derive(Debug, Clone, Default)]
pub struct GroupTable {
    /// Group ids in declaration order.
    order: Vec<String>,
    rules: Vec<GroupRule>,
    exact: HashMap<String, String>,
    prefixed: HashMap<String, Vec<PrefixEntry>>,
    conflicts: BTreeMap<String, Vec<String>>,
    postfix_conflicts: BTreeMap<String, Vec<String>>,
}

impl GroupTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule. Earlier rules win when two accept the same class.
    pub fn add_rule(&mut self, rule: GroupRule) {
        if !self.order.contains(&rule.id) {
            self.order.push(rule.id.clone());
        }

        for class in &rule.classes {
            self.exact
                .entry(class.clone())
                .or_insert_with(|| rule.id.clone());
        }

        if let Some(prefix) = &rule.prefix {
            self.prefixed
                .entry(prefix.clone())
                .or_default()
                .push(PrefixEntry {
                    group: rule.id.clone(),
                    bare: rule.bare,
                    keywords: rule.keywords.iter().cloned().collect(),
                    kinds: rule.kinds.clone(),
                });
        }

        self.rules.push(rule);
    }

    /// Drop every rule of a group, keeping its conflicts.
    pub fn remove_group_rules(&mut self, id: &str) {
        let rules = std::mem::take(&mut self.rules);
        self.exact.clear();
        self.prefixed.clear();
        let order = std::mem::take(&mut self.order);
        for rule in rules.into_iter().filter(|r| r.id != id) {
            self.add_rule(rule);
        }
        self.order = order.into_iter().filter(|g| g != id).collect();
    }

    /// Append groups overridden by `group`.
    pub fn add_conflicts(&mut self, group: &str, overridden: &[String]) {
        let entry = self.conflicts.entry(group.to_string()).or_default();
        for other in overridden {
            if !entry.contains(other) {
                entry.push(other.clone());
            }
        }
    }

    /// Replace the groups overridden by `group`.
    pub fn set_conflicts(&mut self, group: &str, overridden: Vec<String>) {
        self.conflicts.insert(group.to_string(), overridden);
    }

    /// Append groups overridden by `group` when it carries a postfix modifier.
    pub fn add_postfix_conflicts(&mut self, group: &str, overridden: &[String]) {
        let entry = self.postfix_conflicts.entry(group.to_string()).or_default();
        for other in overridden {
            if !entry.contains(other) {
                entry.push(other.clone());
            }
        }
    }

    pub fn set_postfix_conflicts(&mut self, group: &str, overridden: Vec<String>) {
        self.postfix_conflicts.insert(group.to_string(), overridden);
    }

    /// Whether any rule declares this group.
    pub fn has_group(&self, id: &str) -> bool {
        self.order.iter().any(|g| g == id)
    }

    /// Group ids in declaration order.
    pub fn groups(&self) -> &[String] {
        &self.order
    }

    pub fn rules(&self) -> &[GroupRule] {
        &self.rules
    }

    /// Groups overridden by a member of `group`.
    pub fn conflicts(&self, group: &str, has_postfix: bool) -> Vec<&str> {
        let mut out: Vec<&str> = self
            .conflicts
            .get(group)
            .map(|v| v.iter().map(String::as_str).collect())
            .unwrap_or_default();
        if has_postfix {
            if let Some(extra) = self.postfix_conflicts.get(group) {
                out.extend(extra.iter().map(String::as_str));
            }
        }
        out
    }

    /// Look up the group of a class that has already had its prefix and
    /// negative sign removed.
    pub fn lookup(&self, class: &str) -> Option<&str> {
        if let Some(group) = self.exact.get(class) {
            return Some(group.as_str());
        }

        // Try the longest prefix first. `border-t-2` must hit `border-t`
        // before `border`.
        let dashes: Vec<usize> = class.match_indices('-').map(|(i, _)| i).collect();
        let candidates = std::iter::once(class.len()).chain(dashes.into_iter().rev());

        for split in candidates {
            let prefix = &class[..split];
            let value = if split == class.len() {
                ""
            } else {
                &class[split + 1..]
            };
            if prefix.is_empty() || (value.is_empty() && split != class.len()) {
                continue;
            }
            if let Some(entries) = self.prefixed.get(prefix) {
                if let Some(entry) = entries.iter().find(|e| e.accepts(value)) {
                    return Some(entry.group.as_str());
                }
            }
        }

        None
    }
}

/// Group id for an arbitrary property class (`[mask-type:luminance]`).
pub fn arbitrary_property_group(class: &str) -> Option<String> {
    let inner = class.strip_prefix('[')?.strip_suffix(']')?;
    let (property, value) = inner.split_once(':')?;
    if property.is_empty() || value.is_empty() {
        return None;
    }
    Some(format!("{ARBITRARY_PROPERTY_GROUP}{property}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> GroupTable {
        let mut table = GroupTable::new();
        table.add_rule(GroupRule::exact("display", &["block", "flex", "hidden"]));
        table.add_rule(GroupRule::prefixed("border-w", "border").bare().kinds(&[ValueKind::Length]));
        table.add_rule(GroupRule::prefixed("border-w-t", "border-t").bare().kinds(&[ValueKind::Length]));
        table.add_rule(GroupRule::prefixed("border-style", "border").keywords(&["solid", "dashed"]));
        table.add_rule(GroupRule::prefixed("border-color", "border").kinds(&[ValueKind::Any]));
        table.add_conflicts("border-w", &["border-w-t".to_string()]);
        table
    }

    #[test]
    fn test_exact_lookup() {
        let table = sample_table();
        assert_eq!(table.lookup("flex"), Some("display"));
        assert_eq!(table.lookup("grid"), None);
    }

    #[test]
    fn test_longest_prefix_wins() {
        let table = sample_table();
        assert_eq!(table.lookup("border-t-2"), Some("border-w-t"));
        assert_eq!(table.lookup("border-2"), Some("border-w"));
    }

    #[test]
    fn test_bare_prefix() {
        let table = sample_table();
        assert_eq!(table.lookup("border"), Some("border-w"));
        assert_eq!(table.lookup("border-t"), Some("border-w-t"));
    }

    #[test]
    fn test_declaration_order_within_prefix() {
        let table = sample_table();
        assert_eq!(table.lookup("border-dashed"), Some("border-style"));
        assert_eq!(table.lookup("border-red-500"), Some("border-color"));
    }

    #[test]
    fn test_conflicts() {
        let table = sample_table();
        assert_eq!(table.conflicts("border-w", false), vec!["border-w-t"]);
        assert!(table.conflicts("border-color", false).is_empty());
    }

    #[test]
    fn test_postfix_conflicts_only_with_postfix() {
        let mut table = sample_table();
        table.add_postfix_conflicts("border-w", &["border-style".to_string()]);
        assert_eq!(table.conflicts("border-w", false), vec!["border-w-t"]);
        assert_eq!(
            table.conflicts("border-w", true),
            vec!["border-w-t", "border-style"]
        );
    }

    #[test]
    fn test_remove_group_rules() {
        let mut table = sample_table();
        table.remove_group_rules("border-style");
        assert_eq!(table.lookup("border-dashed"), Some("border-color"));
        assert!(!table.has_group("border-style"));
    }

    #[test]
    fn test_arbitrary_property_group() {
        assert_eq!(
            arbitrary_property_group("[mask-type:luminance]"),
            Some("arbitrary..mask-type".to_string())
        );
        assert_eq!(arbitrary_property_group("[mask-type]"), None);
        assert_eq!(arbitrary_property_group("p-4"), None);
    }
}
