//! Value validators for utility classes.
//!
//! A utility class is a prefix plus a value (`px` + `4`, `bg` + `[url(..)]`).
//! Each group rule lists the value kinds it accepts; these decide which
//! group a value-carrying class falls into.

use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Kind of value a group rule accepts after its prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    /// Any non-empty value (colors, font families, grid templates).
    Any,
    /// Numbers, fractions and the `px`/`full`/`screen` keywords.
    Length,
    /// Integer or decimal number.
    Number,
    /// Non-negative integer.
    Integer,
    /// Number followed by `%`.
    Percent,
    /// `xs`, `sm`, `md`, `lg`, `xl`, `2xl`, ...
    TshirtSize,
    /// Any bracketed arbitrary value.
    Arbitrary,
    /// Arbitrary value that is a CSS length.
    ArbitraryLength,
    /// Arbitrary value that is a number.
    ArbitraryNumber,
    /// Arbitrary value explicitly labelled as a size.
    ArbitrarySize,
    /// Arbitrary value explicitly labelled as a position.
    ArbitraryPosition,
    /// Arbitrary value that is an image (`url(..)`, gradients).
    ArbitraryImage,
    /// Arbitrary value that is a box shadow.
    ArbitraryShadow,
}

impl ValueKind {
    /// Check whether `value` is accepted by this kind.
    pub fn accepts(self, value: &str) -> bool {
        if value.is_empty() {
            return false;
        }
        match self {
            ValueKind::Any => true,
            ValueKind::Length => is_length(value),
            ValueKind::Number => is_number(value),
            ValueKind::Integer => is_integer(value),
            ValueKind::Percent => is_percent(value),
            ValueKind::TshirtSize => tshirt_regex().is_match(value),
            ValueKind::Arbitrary => ArbitraryValue::parse(value).is_some(),
            ValueKind::ArbitraryLength => ArbitraryValue::parse(value)
                .is_some_and(|a| a.matches(&["length"], is_length_value)),
            ValueKind::ArbitraryNumber => ArbitraryValue::parse(value)
                .is_some_and(|a| a.matches(&["number"], is_number)),
            ValueKind::ArbitrarySize => ArbitraryValue::parse(value)
                .is_some_and(|a| a.matches(&["length", "size", "percentage"], |_| false)),
            ValueKind::ArbitraryPosition => ArbitraryValue::parse(value)
                .is_some_and(|a| a.matches(&["position"], |_| false)),
            ValueKind::ArbitraryImage => ArbitraryValue::parse(value)
                .is_some_and(|a| a.matches(&["image", "url"], is_image)),
            ValueKind::ArbitraryShadow => ArbitraryValue::parse(value)
                .is_some_and(|a| a.matches(&["shadow"], is_shadow)),
        }
    }
}

/// A bracketed arbitrary value, optionally carrying a type label
/// (`[length:2px]`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArbitraryValue<'a> {
    pub label: Option<&'a str>,
    pub value: &'a str,
}

impl<'a> ArbitraryValue<'a> {
    /// Parse `[label:value]` or `[value]`.
    pub fn parse(input: &'a str) -> Option<Self> {
        let caps = arbitrary_value_regex().captures(input)?;
        let value = caps.get(2)?.as_str();
        let label = caps.get(1).map(|m| m.as_str());
        Some(Self { label, value })
    }

    /// A labelled value matches when the label is in `labels`; an
    /// unlabelled value is tested with `test`.
    fn matches(&self, labels: &[&str], test: impl Fn(&str) -> bool) -> bool {
        match self.label {
            Some(label) => labels.contains(&label),
            None => test(self.value),
        }
    }
}

const LENGTH_KEYWORDS: &[&str] = &["px", "full", "screen"];

fn arbitrary_value_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^\[(?:([a-z-]+):)?(.+)\]$").expect("arbitrary value pattern is valid")
    })
}

fn fraction_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d+/\d+$").expect("fraction pattern is valid"))
}

fn tshirt_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(\d+(\.\d+)?)?(xs|sm|md|lg|xl)$").expect("t-shirt pattern is valid")
    })
}

fn length_unit_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"\d+(%|px|r?em|[sdl]?v([hwib]|min|max)|pt|pc|in|cm|mm|cap|ch|ex|r?lh|cq(w|h|i|b|min|max))|\b(calc|min|max|clamp)\(.+\)|^0$",
        )
        .expect("length unit pattern is valid")
    })
}

fn color_function_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(rgba?|hsla?|hwb|(ok)?(lab|lch))\(.+\)$")
            .expect("color function pattern is valid")
    })
}

fn image_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^(url|image|image-set|cross-fade|element|(repeating-)?(linear|radial|conic)-gradient)\(.+\)$",
        )
        .expect("image pattern is valid")
    })
}

fn shadow_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(inset_)?-?((\d+)?\.?(\d+)[a-z]+|0)_-?((\d+)?\.?(\d+)[a-z]+|0)")
            .expect("shadow pattern is valid")
    })
}

/// Decimal number such as `4`, `0.5` or `.5`.
pub fn is_number(value: &str) -> bool {
    let mut seen_digit = false;
    let mut seen_dot = false;
    for c in value.chars() {
        match c {
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => return false,
        }
    }
    seen_digit
}

pub fn is_integer(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

pub fn is_percent(value: &str) -> bool {
    value.strip_suffix('%').is_some_and(is_number)
}

pub fn is_length(value: &str) -> bool {
    is_number(value) || LENGTH_KEYWORDS.contains(&value) || fraction_regex().is_match(value)
}

fn is_length_value(value: &str) -> bool {
    // rgb(1px 2px 3px) looks like a length but is a color.
    length_unit_regex().is_match(value) && !color_function_regex().is_match(value)
}

fn is_image(value: &str) -> bool {
    image_regex().is_match(value)
}

fn is_shadow(value: &str) -> bool {
    shadow_regex().is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers() {
        assert!(is_number("4"));
        assert!(is_number("0.5"));
        assert!(is_number(".5"));
        assert!(!is_number("1.2.3"));
        assert!(!is_number("inf"));
        assert!(!is_number("NaN"));
        assert!(!is_number(""));
    }

    #[test]
    fn test_length() {
        assert!(ValueKind::Length.accepts("4"));
        assert!(ValueKind::Length.accepts("1/2"));
        assert!(ValueKind::Length.accepts("px"));
        assert!(ValueKind::Length.accepts("full"));
        assert!(!ValueKind::Length.accepts("red-500"));
        assert!(!ValueKind::Length.accepts(""));
    }

    #[test]
    fn test_tshirt_sizes() {
        assert!(ValueKind::TshirtSize.accepts("lg"));
        assert!(ValueKind::TshirtSize.accepts("2xl"));
        assert!(!ValueKind::TshirtSize.accepts("base"));
    }

    #[test]
    fn test_percent() {
        assert!(ValueKind::Percent.accepts("10%"));
        assert!(!ValueKind::Percent.accepts("10"));
    }

    #[test]
    fn test_arbitrary_value_parse() {
        let value = ArbitraryValue::parse("[length:2px]").unwrap();
        assert_eq!(value.label, Some("length"));
        assert_eq!(value.value, "2px");

        let value = ArbitraryValue::parse("[#fff]").unwrap();
        assert_eq!(value.label, None);
        assert_eq!(value.value, "#fff");

        assert!(ArbitraryValue::parse("fff").is_none());
    }

    #[test]
    fn test_arbitrary_length() {
        assert!(ValueKind::ArbitraryLength.accepts("[12px]"));
        assert!(ValueKind::ArbitraryLength.accepts("[calc(100%-2rem)]"));
        assert!(ValueKind::ArbitraryLength.accepts("[length:var(--x)]"));
        assert!(!ValueKind::ArbitraryLength.accepts("[#fff]"));
        assert!(!ValueKind::ArbitraryLength.accepts("[rgb(1px,2px,3px)]"));
    }

    #[test]
    fn test_arbitrary_image() {
        assert!(ValueKind::ArbitraryImage.accepts("[url(/a.png)]"));
        assert!(ValueKind::ArbitraryImage.accepts("[linear-gradient(red,blue)]"));
        assert!(!ValueKind::ArbitraryImage.accepts("[#fff]"));
    }

    #[test]
    fn test_arbitrary_shadow() {
        assert!(ValueKind::ArbitraryShadow.accepts("[0_35px_60px_-15px_rgba(0,0,0,0.3)]"));
        assert!(!ValueKind::ArbitraryShadow.accepts("[red]"));
    }

    #[test]
    fn test_labelled_only_kinds() {
        assert!(ValueKind::ArbitrarySize.accepts("[size:200px_100px]"));
        assert!(!ValueKind::ArbitrarySize.accepts("[200px_100px]"));
        assert!(ValueKind::ArbitraryPosition.accepts("[position:center_top]"));
    }

    #[test]
    fn test_value_kind_serde() {
        let kind: ValueKind = serde_json::from_str("\"arbitrary_length\"").unwrap();
        assert_eq!(kind, ValueKind::ArbitraryLength);
    }
}
