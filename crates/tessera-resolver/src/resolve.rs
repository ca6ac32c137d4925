//! Single-value resolution.
//!
//! Converts one raw token value into target text: references become
//! `var(--...)` expressions for the CSS target and pass through
//! unchanged for the config target (the styling preset consumes the
//! same brace syntax natively). Composite shapes serialize here too:
//! shadow layers to a single CSS shadow string, font stacks to a
//! comma-joined list.

use tessera_core::model::{ShadowLayer, TextStyleValue, TokenValue};
use tessera_core::path::{reference_to_css_var, substitute_references};

/// Output format a value is being resolved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// CSS custom properties; references become `var(--...)`.
    Css,
    /// Theme-config JSON; references stay in brace syntax.
    Config,
}

/// A resolved token value.
#[derive(Debug, PartialEq)]
pub enum Resolved<'a> {
    /// A single declaration-ready string.
    Text(String),
    /// A composite text style, routed to the utility-class generator
    /// instead of a single declaration.
    Composite(&'a TextStyleValue),
}

/// Resolve a raw value for the given target.
///
/// Every kind except `textStyle` resolves to text; unknown kinds fall
/// through as opaque scalars with reference substitution applied.
pub fn resolve_value<'a>(value: &'a TokenValue, target: Target) -> Resolved<'a> {
    match value {
        TokenValue::Number(n) => Resolved::Text(n.to_string()),
        TokenValue::Text(s) => Resolved::Text(resolve_text(s, target)),
        TokenValue::Shadow(layer) => Resolved::Text(shadow_to_css(layer, target)),
        TokenValue::Shadows(layers) => Resolved::Text(shadows_to_css(layers, target)),
        TokenValue::FontStack(families) => Resolved::Text(
            families
                .iter()
                .map(|f| resolve_text(f, target))
                .collect::<Vec<_>>()
                .join(", "),
        ),
        TokenValue::TextStyle(style) => Resolved::Composite(style),
    }
}

/// Resolve a value that is known to be non-composite, falling back to
/// an empty string for text styles. Callers that route composites
/// separately use [`resolve_value`] directly.
pub fn resolve_scalar(value: &TokenValue, target: Target) -> String {
    match resolve_value(value, target) {
        Resolved::Text(text) => text,
        Resolved::Composite(_) => String::new(),
    }
}

/// Substitute every `{dotted.path}` reference in a string for the
/// target's handle form.
pub fn resolve_text(value: &str, target: Target) -> String {
    match target {
        Target::Css => substitute_references(value, |path| reference_to_css_var(path)),
        Target::Config => value.to_string(),
    }
}

/// Serialize one shadow layer:
/// `[inset ]<offset-x> <offset-y> <blur-radius>[ <spread-radius>] <color>`.
pub fn shadow_to_css(layer: &ShadowLayer, target: Target) -> String {
    let mut out = String::new();
    if layer.inset {
        out.push_str("inset ");
    }
    out.push_str(&resolve_text(&layer.offset_x, target));
    out.push(' ');
    out.push_str(&resolve_text(&layer.offset_y, target));
    out.push(' ');
    out.push_str(&resolve_text(&layer.blur_radius, target));
    if let Some(spread) = &layer.spread_radius {
        out.push(' ');
        out.push_str(&resolve_text(spread, target));
    }
    out.push(' ');
    out.push_str(&resolve_text(&layer.color, target));
    out
}

/// Serialize layered shadows, joined with `", "`.
pub fn shadows_to_css(layers: &[ShadowLayer], target: Target) -> String {
    layers
        .iter()
        .map(|layer| shadow_to_css(layer, target))
        .collect::<Vec<_>>()
        .join(", ")
}
