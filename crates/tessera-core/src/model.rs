//! The typed token tree.
//!
//! A token document is an ordered map of top-level families (colors,
//! spacing, shadows, ...), each a group of nested groups and leaves.
//! Values are a tagged union per token kind instead of free-form JSON,
//! so resolution functions can match exhaustively.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of token kinds understood by the pipeline.
///
/// Kinds not in this list deserialize into `Other` and are treated as
/// opaque scalars during resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenKind {
    Color,
    Spacing,
    Size,
    Radius,
    Shadow,
    Blur,
    FontFamily,
    FontSize,
    FontWeight,
    LineHeight,
    LetterSpacing,
    Breakpoint,
    Duration,
    Easing,
    TextStyle,
    #[serde(untagged)]
    Other(String),
}

impl TokenKind {
    /// The kind's name as spelled in the input format.
    pub fn as_str(&self) -> &str {
        match self {
            TokenKind::Color => "color",
            TokenKind::Spacing => "spacing",
            TokenKind::Size => "size",
            TokenKind::Radius => "radius",
            TokenKind::Shadow => "shadow",
            TokenKind::Blur => "blur",
            TokenKind::FontFamily => "fontFamily",
            TokenKind::FontSize => "fontSize",
            TokenKind::FontWeight => "fontWeight",
            TokenKind::LineHeight => "lineHeight",
            TokenKind::LetterSpacing => "letterSpacing",
            TokenKind::Breakpoint => "breakpoint",
            TokenKind::Duration => "duration",
            TokenKind::Easing => "easing",
            TokenKind::TextStyle => "textStyle",
            TokenKind::Other(name) => name,
        }
    }
}

/// A scalar token value: a bare number or a string that may embed
/// `{dotted.path}` references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(f64),
    Text(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Number(n) => write!(f, "{}", n),
            Scalar::Text(s) => write!(f, "{}", s),
        }
    }
}

/// A single layer of a box shadow.
///
/// The offsets, blur radius and color are required; a shadow object
/// missing one of them is rejected at parse time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShadowLayer {
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub inset: bool,
    pub offset_x: String,
    pub offset_y: String,
    pub blur_radius: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spread_radius: Option<String>,
    pub color: String,
}

/// A composite text style. Every field is optional; absent fields are
/// simply omitted from the generated utility class. Unknown fields are
/// rejected so this variant cannot swallow malformed shadow objects in
/// the untagged [`TokenValue`] union.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TextStyleValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height: Option<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<Scalar>,
}

/// A raw token value, one variant per shape the input format allows.
///
/// Variant order matters: serde tries untagged variants top to bottom,
/// so the shadow shapes must come before the catch-all `TextStyle` map
/// and the string fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenValue {
    Number(f64),
    Shadow(ShadowLayer),
    Shadows(Vec<ShadowLayer>),
    FontStack(Vec<String>),
    TextStyle(TextStyleValue),
    Text(String),
}

/// A display context that selects one of a token's mode values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Light,
    Dark,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Light, Mode::Dark];

    /// The mode's name as used in file names and the input format.
    pub fn key(self) -> &'static str {
        match self {
            Mode::Light => "light",
            Mode::Dark => "dark",
        }
    }
}

/// A light/dark value pair from `$extensions.mode`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModeValues {
    pub light: TokenValue,
    pub dark: TokenValue,
}

impl ModeValues {
    pub fn get(&self, mode: Mode) -> &TokenValue {
        match mode {
            Mode::Light => &self.light,
            Mode::Dark => &self.dark,
        }
    }
}

/// A token leaf: a declared kind, a value, and optionally a description
/// and a light/dark mode pair.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenLeaf {
    pub kind: TokenKind,
    pub value: TokenValue,
    pub description: Option<String>,
    pub modes: Option<ModeValues>,
}

/// A token group: nested named children, optionally sharing a kind.
///
/// A group without a kind is a pure namespace container.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TokenGroup {
    pub kind: Option<TokenKind>,
    pub description: Option<String>,
    pub children: IndexMap<String, TokenNode>,
}

/// A node in the token tree.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenNode {
    Leaf(TokenLeaf),
    Group(TokenGroup),
}

impl TokenNode {
    pub fn as_leaf(&self) -> Option<&TokenLeaf> {
        match self {
            TokenNode::Leaf(leaf) => Some(leaf),
            TokenNode::Group(_) => None,
        }
    }

    pub fn as_group(&self) -> Option<&TokenGroup> {
        match self {
            TokenNode::Group(group) => Some(group),
            TokenNode::Leaf(_) => None,
        }
    }
}

/// A whole token document: top-level family name to group, in source
/// order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TokenDocument {
    pub families: IndexMap<String, TokenGroup>,
}

impl TokenDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterate over families in source order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &TokenGroup)> {
        self.families.iter()
    }

    /// Look up a leaf by dotted path (e.g. "colors.blue.5").
    pub fn lookup(&self, path: &str) -> Option<&TokenLeaf> {
        let mut segments = path.split('.');
        let family = segments.next()?;
        let mut group = self.families.get(family)?;

        let mut leaf: Option<&TokenLeaf> = None;
        for segment in segments {
            // A leaf terminates the walk; a path continuing past one
            // names nothing.
            if leaf.is_some() {
                return None;
            }
            match group.children.get(segment)? {
                TokenNode::Group(g) => group = g,
                TokenNode::Leaf(l) => leaf = Some(l),
            }
        }
        leaf
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_kind_deserializes_camel_case() {
        let kind: TokenKind = serde_json::from_str("\"fontFamily\"").unwrap();
        assert_eq!(kind, TokenKind::FontFamily);
    }

    #[test]
    fn test_unknown_kind_falls_through_to_other() {
        let kind: TokenKind = serde_json::from_str("\"gradient\"").unwrap();
        assert_eq!(kind, TokenKind::Other("gradient".to_string()));
    }

    #[test]
    fn test_value_shapes() {
        let v: TokenValue = serde_json::from_str("\"{colors.blue.5}\"").unwrap();
        assert!(matches!(v, TokenValue::Text(_)));

        let v: TokenValue = serde_json::from_str("0.5").unwrap();
        assert!(matches!(v, TokenValue::Number(_)));

        let v: TokenValue = serde_json::from_str("[\"Arial\", \"sans-serif\"]").unwrap();
        assert!(matches!(v, TokenValue::FontStack(_)));

        let v: TokenValue = serde_json::from_value(serde_json::json!({
            "offsetX": "0px",
            "offsetY": "4px",
            "blurRadius": "6px",
            "color": "rgba(0,0,0,0.1)"
        }))
        .unwrap();
        assert!(matches!(v, TokenValue::Shadow(_)));

        let v: TokenValue = serde_json::from_value(serde_json::json!([
            { "offsetX": "0px", "offsetY": "1px", "blurRadius": "2px", "color": "#000" },
            { "offsetX": "0px", "offsetY": "4px", "blurRadius": "8px", "color": "#000" }
        ]))
        .unwrap();
        assert!(matches!(v, TokenValue::Shadows(ref layers) if layers.len() == 2));

        let v: TokenValue = serde_json::from_value(serde_json::json!({
            "fontSize": "{fontSizes.xl}",
            "fontWeight": 600
        }))
        .unwrap();
        assert!(matches!(v, TokenValue::TextStyle(_)));
    }

    #[test]
    fn test_lookup_nested_leaf() {
        let mut blue = TokenGroup::default();
        blue.children.insert(
            "5".to_string(),
            TokenNode::Leaf(TokenLeaf {
                kind: TokenKind::Color,
                value: TokenValue::Text("#1e40af".to_string()),
                description: None,
                modes: None,
            }),
        );
        let mut colors = TokenGroup {
            kind: Some(TokenKind::Color),
            ..Default::default()
        };
        colors
            .children
            .insert("blue".to_string(), TokenNode::Group(blue));

        let mut doc = TokenDocument::new();
        doc.families.insert("colors".to_string(), colors);

        let leaf = doc.lookup("colors.blue.5").unwrap();
        assert_eq!(leaf.value, TokenValue::Text("#1e40af".to_string()));
        assert!(doc.lookup("colors.blue.99").is_none());
        assert!(doc.lookup("colors.blue").is_none());
    }

    #[test]
    fn test_lookup_path_extending_past_a_leaf_fails() {
        let mut blue = TokenGroup::default();
        for key in ["1", "5"] {
            blue.children.insert(
                key.to_string(),
                TokenNode::Leaf(TokenLeaf {
                    kind: TokenKind::Color,
                    value: TokenValue::Text(format!("#{}", key)),
                    description: None,
                    modes: None,
                }),
            );
        }
        let mut colors = TokenGroup {
            kind: Some(TokenKind::Color),
            ..Default::default()
        };
        colors
            .children
            .insert("blue".to_string(), TokenNode::Group(blue));

        let mut doc = TokenDocument::new();
        doc.families.insert("colors".to_string(), colors);

        // Must not fall back to matching "1" against the leaf's parent
        // group (which holds a sibling named "1").
        assert!(doc.lookup("colors.blue.5.1").is_none());
        assert!(doc.lookup("colors.blue.5.1.x").is_none());
    }
}
