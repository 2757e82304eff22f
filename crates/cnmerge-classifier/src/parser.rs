//! Class token parser.
//!
//! Splits a single class token into its variant modifiers, important flag,
//! base class and postfix modifier.

/// Important marker, accepted as either a leading or a trailing character.
const IMPORTANT_MODIFIER: char = '!';

/// Postfix modifier marker (`bg-red-500/50`, `text-lg/7`).
const POSTFIX_MARKER: u8 = b'/';

/// Parsed class token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedClass {
    /// Variant modifiers in source order (e.g., `["md", "hover"]`).
    pub modifiers: Vec<String>,

    /// Whether the class carries the important marker.
    pub important: bool,

    /// The base class without modifiers or important marker.
    /// Still includes the postfix modifier, if any.
    pub base: String,

    /// Byte offset of the postfix marker inside `base`, if present.
    pub postfix_position: Option<usize>,
}

impl ParsedClass {
    /// Base class with the postfix modifier removed.
    pub fn base_without_postfix(&self) -> &str {
        match self.postfix_position {
            Some(pos) => &self.base[..pos],
            None => &self.base,
        }
    }

    /// The postfix modifier value (text after `/`).
    pub fn postfix(&self) -> Option<&str> {
        self.postfix_position.map(|pos| &self.base[pos + 1..])
    }
}

/// Parse a class token into a structured representation.
///
/// The separator only splits at the top level: separators inside `[...]`
/// or `(...)` belong to arbitrary values and variants.
pub fn parse_class(token: &str, separator: &str) -> ParsedClass {
    let bytes = token.as_bytes();
    let sep = separator.as_bytes();

    let mut modifiers = Vec::new();
    let mut bracket_depth = 0usize;
    let mut paren_depth = 0usize;
    let mut modifier_start = 0usize;
    let mut postfix_position: Option<usize> = None;

    let mut i = 0;
    while i < bytes.len() {
        if bracket_depth == 0 && paren_depth == 0 {
            if !sep.is_empty() && bytes[i..].starts_with(sep) {
                modifiers.push(token[modifier_start..i].to_string());
                i += sep.len();
                modifier_start = i;
                continue;
            }
            if bytes[i] == POSTFIX_MARKER {
                postfix_position = Some(i);
                i += 1;
                continue;
            }
        }

        match bytes[i] {
            b'[' => bracket_depth += 1,
            b']' => bracket_depth = bracket_depth.saturating_sub(1),
            b'(' => paren_depth += 1,
            b')' => paren_depth = paren_depth.saturating_sub(1),
            _ => {}
        }
        i += 1;
    }

    let mut base = &token[modifier_start..];
    let mut offset = modifier_start;
    let mut important = false;

    if let Some(stripped) = base.strip_prefix(IMPORTANT_MODIFIER) {
        base = stripped;
        offset += 1;
        important = true;
    } else if let Some(stripped) = base.strip_suffix(IMPORTANT_MODIFIER) {
        base = stripped;
        important = true;
    }

    // A marker before the base (inside a modifier) is not a postfix.
    let postfix_position = postfix_position
        .filter(|pos| *pos > offset && *pos < offset + base.len())
        .map(|pos| pos - offset);

    ParsedClass {
        modifiers,
        important,
        base: base.to_string(),
        postfix_position,
    }
}

/// Sort modifiers so that equivalent variant stacks compare equal.
///
/// Arbitrary variants (`[&>*]`) are order-sensitive and keep their place;
/// plain modifiers between them are sorted alphabetically.
pub fn sort_modifiers(modifiers: &[String]) -> Vec<String> {
    if modifiers.len() <= 1 {
        return modifiers.to_vec();
    }

    let mut sorted = Vec::with_capacity(modifiers.len());
    let mut run: Vec<String> = Vec::new();

    for modifier in modifiers {
        if modifier.starts_with('[') {
            run.sort();
            sorted.append(&mut run);
            sorted.push(modifier.clone());
        } else {
            run.push(modifier.clone());
        }
    }

    run.sort();
    sorted.append(&mut run);
    sorted
}
