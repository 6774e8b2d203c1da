//! Value transformation policy.
//!
//! Both output passes share one policy object: the custom-property pass asks
//! for the text that sits in a declaration, the config pass asks for the
//! expression that references it. Dispatch keys off the first path segment:
//! the fixed color-bearing framework sections get color handling, `fontSize`
//! gets its tuple special case, everything else passes through.
//!
//! Color handling comes in two renderings. The default keeps the author's
//! value in the custom property and builds opacity-capable references with
//! `color-mix()`, so any color syntax the browser understands works. The
//! legacy rendering stores bare `R G B` channels and wraps references in
//! `rgb()`, which predates `color-mix()` support but loses any alpha baked
//! into the token.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use themeswap_color::Rgba;

use crate::naming::canonical_name;
use crate::tokens::TokenValue;

/// Framework config sections whose values are colors.
pub const COLOR_CONFIG_KEYS: &[&str] = &[
    "accentColor",
    "backgroundColor",
    "borderColor",
    "caretColor",
    "colors",
    "divideColor",
    "fill",
    "gradientColorStops",
    "placeholderColor",
    "ringColor",
    "ringOffsetColor",
    "stroke",
    "textColor",
];

/// How color tokens render into properties and references.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenderMode {
    /// Keep the author's color value as-is; reference it through
    /// `color-mix(in srgb, var(--name) calc(100% * <alpha-value>), transparent)`.
    #[default]
    ColorMix,
    /// Store bare `R G B` channels; reference them through
    /// `rgb(var(--name) / <alpha-value>)`. Non-color references carry their
    /// value as a `var()` fallback.
    RgbChannels,
}

/// Whether non-fatal diagnostics (currently the font-size tuple warning)
/// are emitted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Diagnostics {
    #[default]
    Enabled,
    Disabled,
}

/// The value-transform policy.
///
/// One instance drives every theme in a run, so property values and config
/// references can never disagree on how a token renders.
#[derive(Clone, Copy, Debug, Default)]
pub struct ValueTransformer {
    mode: RenderMode,
    diagnostics: Diagnostics,
}

impl ValueTransformer {
    pub fn new(mode: RenderMode, diagnostics: Diagnostics) -> Self {
        Self { mode, diagnostics }
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    /// Render a leaf for its custom-property declaration.
    pub fn custom_property_value(&self, path: &[&str], value: &TokenValue) -> String {
        if self.mode == RenderMode::RgbChannels && in_color_section(path) {
            if let Some(color) = detect_color(value) {
                let [r, g, b] = color.channels();
                return format!("{r} {g} {b}");
            }
        }

        if let Some(size) = self.reduced_font_size(path, value) {
            return size;
        }

        if let TokenValue::List(items) = value {
            return join_list(items);
        }

        value.scalar_css().unwrap_or_default()
    }

    /// Render a leaf's configuration-reference expression.
    ///
    /// Colors in color sections become opacity-capable expressions; anything
    /// else becomes `var(--name)`, with the original value carried as a
    /// fallback in the legacy rendering.
    pub fn config_reference(&self, path: &[&str], value: &TokenValue) -> String {
        let name = canonical_name(path);

        if in_color_section(path) && detect_color(value).is_some() {
            return match self.mode {
                RenderMode::ColorMix => format!(
                    "color-mix(in srgb, var(--{name}) calc(100% * <alpha-value>), transparent)"
                ),
                RenderMode::RgbChannels => format!("rgb(var(--{name}) / <alpha-value>)"),
            };
        }

        let fallback = if let Some(size) = self.reduced_font_size(path, value) {
            size
        } else if let TokenValue::List(items) = value {
            join_list(items)
        } else {
            value.scalar_css().unwrap_or_default()
        };

        match self.mode {
            RenderMode::ColorMix => format!("var(--{name})"),
            RenderMode::RgbChannels if fallback.is_empty() => format!("var(--{name})"),
            RenderMode::RgbChannels => format!("var(--{name}, {fallback})"),
        }
    }

    /// The `fontSize` tuple case: `["22px", { lineHeight: "1.2rem" }]` keeps
    /// only the size, because the metadata cannot ride along in a custom
    /// property. Returns `None` for everything that is not a `fontSize` list.
    fn reduced_font_size(&self, path: &[&str], value: &TokenValue) -> Option<String> {
        if path.first() != Some(&"fontSize") {
            return None;
        }
        let TokenValue::List(items) = value else {
            return None;
        };

        if self.diagnostics == Diagnostics::Enabled {
            warn!(
                token = %canonical_name(path),
                "font-size token carries extra metadata; only the size survives"
            );
        }
        Some(items.first().and_then(TokenValue::scalar_css).unwrap_or_default())
    }
}

/// A leaf counts as a color when the color parser accepts it. Parse failure
/// is not an error here, it just means the value is something else.
fn detect_color(value: &TokenValue) -> Option<Rgba> {
    match value {
        TokenValue::Str(s) => themeswap_color::parse(s).ok(),
        _ => None,
    }
}

fn in_color_section(path: &[&str]) -> bool {
    path.first().is_some_and(|first| COLOR_CONFIG_KEYS.contains(first))
}

/// Join list items with `", "`. Items without a scalar form (nested tables
/// or lists) are skipped.
fn join_list(items: &[TokenValue]) -> String {
    let mut parts = Vec::with_capacity(items.len());
    for item in items {
        match item.scalar_css() {
            Some(text) => parts.push(text),
            None => debug!("list item without scalar form skipped while joining"),
        }
    }
    parts.join(", ")
}

// ============ Tests ============
