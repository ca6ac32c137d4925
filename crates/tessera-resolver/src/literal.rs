//! Literal reference resolution for the design-tool exports.
//!
//! Unlike the CSS target, which maps a reference to a variable handle,
//! the design-tool snapshots need every reference chased against the
//! base token tree until only concrete values remain. An explicit
//! resolution stack detects cycles and fails with the full chain
//! instead of recursing unboundedly.

use serde_json::{Map, Value};
use tessera_core::errors::ResolveError;
use tessera_core::model::{Scalar, ShadowLayer, TokenDocument, TokenLeaf, TokenValue};
use tessera_core::path::try_substitute_references;

/// Resolves token values to concrete literals against a base document.
pub struct LiteralResolver<'a> {
    base: &'a TokenDocument,
    /// Current chain of reference paths, for cycle detection.
    stack: Vec<String>,
}

impl<'a> LiteralResolver<'a> {
    pub fn new(base: &'a TokenDocument) -> Self {
        Self {
            base,
            stack: Vec::new(),
        }
    }

    /// Resolve a raw value to a JSON value with every reference
    /// replaced by its concrete base-token text. Numbers stay numbers
    /// and structured shapes stay structured; only reference strings
    /// change.
    pub fn resolve(&mut self, value: &TokenValue) -> Result<Value, ResolveError> {
        match value {
            TokenValue::Number(n) => Ok(Value::from(*n)),
            TokenValue::Text(s) => Ok(Value::String(self.resolve_string(s)?)),
            TokenValue::Shadow(layer) => self.shadow_to_json(layer),
            TokenValue::Shadows(layers) => Ok(Value::Array(
                layers
                    .iter()
                    .map(|layer| self.shadow_to_json(layer))
                    .collect::<Result<Vec<_>, _>>()?,
            )),
            TokenValue::FontStack(families) => Ok(Value::Array(
                families
                    .iter()
                    .map(|f| self.resolve_string(f).map(Value::String))
                    .collect::<Result<Vec<_>, _>>()?,
            )),
            TokenValue::TextStyle(style) => {
                let mut map = Map::new();
                let fields = [
                    ("fontFamily", &style.font_family),
                    ("fontSize", &style.font_size),
                    ("fontWeight", &style.font_weight),
                    ("lineHeight", &style.line_height),
                    ("letterSpacing", &style.letter_spacing),
                ];
                for (key, field) in fields {
                    if let Some(scalar) = field {
                        map.insert(key.to_string(), self.scalar_to_json(scalar)?);
                    }
                }
                Ok(Value::Object(map))
            }
        }
    }

    /// Resolve every `{dotted.path}` in a string to the referenced
    /// token's literal text.
    pub fn resolve_string(&mut self, text: &str) -> Result<String, ResolveError> {
        try_substitute_references(text, |path| self.resolve_reference(path))
    }

    fn resolve_reference(&mut self, path: &str) -> Result<String, ResolveError> {
        if self.stack.iter().any(|p| p == path) {
            let mut cycle = self.stack.clone();
            cycle.push(path.to_string());
            return Err(ResolveError::CircularReference { cycle });
        }

        let leaf = self
            .base
            .lookup(path)
            .ok_or_else(|| ResolveError::UndefinedToken {
                path: path.to_string(),
            })?;

        self.stack.push(path.to_string());
        let resolved = self.leaf_to_text(leaf);
        self.stack.pop();
        resolved
    }

    /// The literal text form of a leaf, with nested references chased.
    fn leaf_to_text(&mut self, leaf: &TokenLeaf) -> Result<String, ResolveError> {
        match &leaf.value {
            TokenValue::Number(n) => Ok(n.to_string()),
            TokenValue::Text(s) => self.resolve_string(s),
            TokenValue::Shadow(layer) => self.shadow_to_text(layer),
            TokenValue::Shadows(layers) => Ok(layers
                .iter()
                .map(|layer| self.shadow_to_text(layer))
                .collect::<Result<Vec<_>, _>>()?
                .join(", ")),
            TokenValue::FontStack(families) => Ok(families
                .iter()
                .map(|f| self.resolve_string(f))
                .collect::<Result<Vec<_>, _>>()?
                .join(", ")),
            // A text style has no single-string form; referencing one
            // from inside another value contributes nothing.
            TokenValue::TextStyle(_) => Ok(String::new()),
        }
    }

    fn shadow_to_text(&mut self, layer: &ShadowLayer) -> Result<String, ResolveError> {
        let mut out = String::new();
        if layer.inset {
            out.push_str("inset ");
        }
        out.push_str(&self.resolve_string(&layer.offset_x)?);
        out.push(' ');
        out.push_str(&self.resolve_string(&layer.offset_y)?);
        out.push(' ');
        out.push_str(&self.resolve_string(&layer.blur_radius)?);
        if let Some(spread) = &layer.spread_radius {
            out.push(' ');
            out.push_str(&self.resolve_string(spread)?);
        }
        out.push(' ');
        out.push_str(&self.resolve_string(&layer.color)?);
        Ok(out)
    }

    fn shadow_to_json(&mut self, layer: &ShadowLayer) -> Result<Value, ResolveError> {
        let mut map = Map::new();
        if layer.inset {
            map.insert("inset".to_string(), Value::Bool(true));
        }
        map.insert(
            "offsetX".to_string(),
            Value::String(self.resolve_string(&layer.offset_x)?),
        );
        map.insert(
            "offsetY".to_string(),
            Value::String(self.resolve_string(&layer.offset_y)?),
        );
        map.insert(
            "blurRadius".to_string(),
            Value::String(self.resolve_string(&layer.blur_radius)?),
        );
        if let Some(spread) = &layer.spread_radius {
            map.insert(
                "spreadRadius".to_string(),
                Value::String(self.resolve_string(spread)?),
            );
        }
        map.insert(
            "color".to_string(),
            Value::String(self.resolve_string(&layer.color)?),
        );
        Ok(Value::Object(map))
    }

    fn scalar_to_json(&mut self, scalar: &Scalar) -> Result<Value, ResolveError> {
        match scalar {
            Scalar::Number(n) => Ok(Value::from(*n)),
            Scalar::Text(s) => Ok(Value::String(self.resolve_string(s)?)),
        }
    }
}
