//! Plugin surface: configuration, orchestration, and the host seam.
//!
//! A [`ThemeSwapper`] is built once from [`ThemeSwapOptions`] and then asked
//! for its two outputs: base-layer style rules for every configured theme,
//! and the `theme.extend` config carrying references into the base theme's
//! custom properties. [`install`](ThemeSwapper::install) pushes both into
//! anything that implements [`PluginHost`]: the in-memory
//! [`Stylesheet`](crate::css::Stylesheet) in tests and tooling, a framework
//! adapter in production.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::css::BaseStyle;
use crate::flatten::theme_custom_properties;
use crate::resolve::resolve_theme_config;
use crate::tokens::TokenTree;
use crate::transform::{Diagnostics, RenderMode, ValueTransformer};

/// The theme whose resolved references feed the config extension.
const BASE_THEME_NAME: &str = "base";

// ============ Configuration ============

/// One named theme: its token tree and where its custom properties apply.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeDescriptor {
    pub name: String,
    /// Design tokens. May be empty; an empty theme emits empty rules.
    #[serde(default)]
    pub theme: TokenTree,
    /// Selectors the custom properties are scoped to, emitted as one
    /// comma-joined rule.
    #[serde(default)]
    pub selectors: Vec<String>,
    /// Media query wrapping a `:root` block with the same properties.
    #[serde(default)]
    pub media_query: Option<String>,
}

/// Plugin configuration: the themes plus rendering knobs.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeSwapOptions {
    pub themes: Vec<ThemeDescriptor>,
    pub mode: RenderMode,
    pub diagnostics: Diagnostics,
}

// ============ Host seam ============

/// The two side effects the engine delegates to its host framework.
pub trait PluginHost {
    /// Register one base-layer style rule.
    fn add_base(&mut self, style: BaseStyle);
    /// Merge the plugin's config extension.
    fn extend_theme(&mut self, extension: ConfigExtension);
}

/// The framework config contributed by the plugin, shaped for the host's
/// `theme.extend` merge point: serializes as `{"theme":{"extend":{...}}}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigExtension {
    pub theme: ThemeExtension,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeExtension {
    pub extend: TokenTree,
}

// ============ Orchestration ============

/// The plugin orchestrator: one pass over the configured themes.
#[derive(Clone, Debug, Default)]
pub struct ThemeSwapper {
    options: ThemeSwapOptions,
    transformer: ValueTransformer,
}

impl ThemeSwapper {
    /// Build a swapper. One transformer drives every theme, so property
    /// names and references stay consistent across the whole run.
    pub fn new(options: ThemeSwapOptions) -> Self {
        let transformer = ValueTransformer::new(options.mode, options.diagnostics);
        Self { options, transformer }
    }

    pub fn options(&self) -> &ThemeSwapOptions {
        &self.options
    }

    /// Base-layer rules for every configured theme, in configuration order.
    ///
    /// A descriptor with selectors gets one comma-joined rule; a descriptor
    /// with a media query additionally gets that query wrapping a `:root`
    /// block. A descriptor with neither emits nothing (its tokens are
    /// unreachable) and is logged at DEBUG.
    pub fn base_styles(&self) -> Vec<BaseStyle> {
        let mut styles = Vec::new();
        for descriptor in &self.options.themes {
            let has_selectors = !descriptor.selectors.is_empty();
            if has_selectors {
                styles.push(BaseStyle::declarations(
                    descriptor.selectors.join(", "),
                    theme_custom_properties(&descriptor.theme, &self.transformer),
                ));
            }
            if let Some(media_query) = &descriptor.media_query {
                let mut rules = IndexMap::new();
                rules.insert(
                    ":root".to_string(),
                    theme_custom_properties(&descriptor.theme, &self.transformer),
                );
                styles.push(BaseStyle::nested(media_query.clone(), rules));
            } else if !has_selectors {
                debug!(
                    theme = %descriptor.name,
                    "theme has no selectors or media query, emitting no css"
                );
            }
        }
        styles
    }

    /// The config extension: the base theme's tree resolved to references,
    /// or an empty extension when no theme is named `base`.
    pub fn config_extension(&self) -> ConfigExtension {
        let extend = self
            .options
            .themes
            .iter()
            .find(|descriptor| descriptor.name == BASE_THEME_NAME)
            .map(|descriptor| resolve_theme_config(&descriptor.theme, &self.transformer))
            .unwrap_or_default();

        ConfigExtension {
            theme: ThemeExtension { extend },
        }
    }

    /// Run against a host: register every base style, then hand over the
    /// config extension.
    pub fn install<H: PluginHost>(&self, host: &mut H) {
        for style in self.base_styles() {
            host.add_base(style);
        }
        host.extend_theme(self.config_extension());
    }
}

// ============ Tests ============
