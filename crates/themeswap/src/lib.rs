//! Theme swapping for utility CSS frameworks.
//!
//! Declare named themes of design tokens once; swap them at runtime through
//! CSS custom properties instead of rebuilding utility classes per theme.
//!
//! # Overview
//!
//! The engine turns each configured theme into two coordinated outputs:
//!
//! - **Custom properties**: the theme's token tree flattened into
//!   `--kebab-case-name: value` declarations, scoped to the theme's
//!   selectors or media query
//! - **Config references**: the same tree with every leaf replaced by the
//!   `var()` / `color-mix()` expression that reads the matching property,
//!   handed to the framework's `theme.extend` merge point
//!
//! Utility classes are generated once against the references; swapping a
//! theme just swaps which rule's custom properties apply.
//!
//! # Quick Start
//!
//! ```rust
//! use themeswap::{Stylesheet, ThemeDescriptor, ThemeSwapOptions, ThemeSwapper, TokenTree};
//!
//! let theme: TokenTree = serde_json::from_value(serde_json::json!({
//!     "colors": { "primary": "#1e66f5" },
//!     "spacing": { "md": "16px" }
//! }))
//! .unwrap();
//!
//! let swapper = ThemeSwapper::new(ThemeSwapOptions {
//!     themes: vec![ThemeDescriptor {
//!         name: "base".into(),
//!         theme,
//!         selectors: vec![":root".into()],
//!         ..Default::default()
//!     }],
//!     ..Default::default()
//! });
//!
//! let mut sheet = Stylesheet::new();
//! swapper.install(&mut sheet);
//!
//! assert!(sheet.to_css().contains("--colors-primary: #1e66f5;"));
//!
//! let extension = serde_json::to_value(swapper.config_extension()).unwrap();
//! assert_eq!(extension["theme"]["extend"]["spacing"]["md"], "var(--spacing-md)");
//! ```
//!
//! # Architecture
//!
//! One [`ValueTransformer`] drives both outputs, so a declaration and the
//! reference that reads it can never disagree on a name or rendering:
//!
//! - [`tokens`]: the [`TokenTree`] / [`TokenValue`] data model themes
//!   deserialize into
//! - [`naming`]: canonical kebab-case names, `default` elision, `.` to `_`
//! - [`flatten`]: tree to flat map, for the custom-property pass
//! - [`resolve`]: tree to isomorphic reference tree, for the config pass
//! - [`css`]: rule rendering and the in-memory [`Stylesheet`] host
//! - [`plugin`]: [`ThemeSwapper`] orchestration over the [`PluginHost`] seam
//!
//! Color parsing lives in the `themeswap_color` crate.

pub mod css;
pub mod flatten;
pub mod naming;
pub mod plugin;
pub mod resolve;
pub mod tokens;
pub mod transform;

pub use css::{BaseStyle, CustomPropertyMap, RuleBody, Stylesheet};
pub use flatten::{flatten, theme_custom_properties};
pub use naming::{canonical_name, custom_property_name, kebab_case};
pub use plugin::{
    ConfigExtension, PluginHost, ThemeDescriptor, ThemeExtension, ThemeSwapOptions, ThemeSwapper,
};
pub use resolve::resolve_theme_config;
pub use tokens::{TokenTree, TokenValue};
pub use transform::{Diagnostics, RenderMode, ValueTransformer, COLOR_CONFIG_KEYS};
