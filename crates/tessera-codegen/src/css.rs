//! CSS variable and utility-class generation.
//!
//! Emits a `:root` block holding base variables, light-mode semantic
//! color variables, and the remaining semantic variables, followed by a
//! `:root[data-color-mode="dark"]` block with the dark semantic color
//! variables. Composite `textStyle` tokens become utility classes in a
//! second stylesheet.
//!
//! Only color tokens get the dual-scoped mode treatment; a mode-bearing
//! non-color token surfaces its light value in `:root` and nothing in
//! the dark block. That asymmetry is part of the output contract.

use tessera_core::model::{Scalar, TextStyleValue, TokenDocument};
use tessera_core::path::css_var_name;
use tessera_resolver::flatten::flatten_document;
use tessera_resolver::resolve::{resolve_scalar, resolve_value, Resolved, Target};

/// The two generated stylesheets. `utilities_css` is absent when no
/// textStyle tokens exist.
#[derive(Debug, Clone, PartialEq)]
pub struct CssOutput {
    pub tokens_css: String,
    pub utilities_css: Option<String>,
}

const TOKENS_HEADER: &str = "/**\n * Design Tokens - CSS Variables\n * Auto-generated from tokens.json and semantic-tokens.json\n * Do not edit this file directly\n */\n\n";

const UTILITIES_HEADER: &str = "/**\n * Design Tokens - Utility Classes\n * Auto-generated composite tokens (text styles, etc.)\n * Do not edit this file directly\n */\n\n";

/// Generate both stylesheets from the base and semantic documents.
pub fn generate(base: &TokenDocument, semantic: &TokenDocument) -> CssOutput {
    let mut base_vars = Vec::new();
    let mut light_color_vars = Vec::new();
    let mut dark_color_vars = Vec::new();
    let mut semantic_vars = Vec::new();
    let mut text_styles: Vec<(String, TextStyleValue)> = Vec::new();

    // Base tokens carry no mode support; modes are ignored here.
    for entry in flatten_document(base) {
        let name = css_var_name(&entry.path);
        match resolve_value(&entry.leaf.value, Target::Css) {
            Resolved::Composite(style) => text_styles.push((name, style.clone())),
            Resolved::Text(value) => base_vars.push(declaration(&name, &value)),
        }
    }

    for entry in flatten_document(semantic) {
        let name = css_var_name(&entry.path);
        let value = match resolve_value(&entry.leaf.value, Target::Css) {
            Resolved::Composite(style) => {
                text_styles.push((name, style.clone()));
                continue;
            }
            Resolved::Text(value) => value,
        };

        let is_color = entry.path.starts_with("colors-");
        match &entry.leaf.modes {
            Some(modes) if is_color => {
                light_color_vars
                    .push(declaration(&name, &resolve_scalar(&modes.light, Target::Css)));
                dark_color_vars
                    .push(declaration(&name, &resolve_scalar(&modes.dark, Target::Css)));
            }
            // Non-color tokens with modes surface only their light value.
            Some(modes) => {
                semantic_vars
                    .push(declaration(&name, &resolve_scalar(&modes.light, Target::Css)));
            }
            None => semantic_vars.push(declaration(&name, &value)),
        }
    }

    let tokens_css = assemble_tokens_css(
        &base_vars,
        &light_color_vars,
        &dark_color_vars,
        &semantic_vars,
    );

    let utilities_css = if text_styles.is_empty() {
        None
    } else {
        Some(assemble_utilities_css(&text_styles))
    };

    CssOutput {
        tokens_css,
        utilities_css,
    }
}

fn declaration(name: &str, value: &str) -> String {
    format!("  --{}: {};", name, value)
}

fn assemble_tokens_css(
    base_vars: &[String],
    light_color_vars: &[String],
    dark_color_vars: &[String],
    semantic_vars: &[String],
) -> String {
    let mut css = String::from(TOKENS_HEADER);

    css.push_str(":root {\n");
    css.push_str(&base_vars.join("\n"));
    if !base_vars.is_empty() && (!light_color_vars.is_empty() || !semantic_vars.is_empty()) {
        css.push_str("\n\n");
    }
    if !light_color_vars.is_empty() {
        css.push_str(&light_color_vars.join("\n"));
        if !semantic_vars.is_empty() {
            css.push_str("\n\n");
        }
    }
    if !semantic_vars.is_empty() {
        css.push_str(&semantic_vars.join("\n"));
    }
    css.push_str("\n}\n\n");

    if !dark_color_vars.is_empty() {
        css.push_str(":root[data-color-mode=\"dark\"] {\n");
        css.push_str(&dark_color_vars.join("\n"));
        css.push_str("\n}\n");
    }

    css
}

fn assemble_utilities_css(text_styles: &[(String, TextStyleValue)]) -> String {
    let mut css = String::from(UTILITIES_HEADER);

    for (class_name, style) in text_styles {
        css.push_str(&format!(".{} {{\n", class_name));
        let properties = [
            ("font-family", &style.font_family),
            ("font-size", &style.font_size),
            ("font-weight", &style.font_weight),
            ("line-height", &style.line_height),
            ("letter-spacing", &style.letter_spacing),
        ];
        for (property, field) in properties {
            if let Some(scalar) = field {
                css.push_str(&format!("  {}: {};\n", property, scalar_css(scalar)));
            }
        }
        css.push_str("}\n\n");
    }

    let mut css = css.trim_end().to_string();
    css.push('\n');
    css
}

fn scalar_css(scalar: &Scalar) -> String {
    match scalar {
        Scalar::Text(s) => tessera_resolver::resolve::resolve_text(s, Target::Css),
        Scalar::Number(n) => n.to_string(),
    }
}
