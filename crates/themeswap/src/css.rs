//! CSS output: base-layer style rules and the in-memory stylesheet host.

use std::fmt;

use indexmap::IndexMap;

use crate::plugin::{ConfigExtension, PluginHost};

/// Flat `--name` to value declarations for one rule body, in emit order.
pub type CustomPropertyMap = IndexMap<String, String>;

/// One base-layer style rule registered by the plugin.
#[derive(Clone, Debug, PartialEq)]
pub struct BaseStyle {
    /// A comma-joined selector list, or an at-rule prelude such as
    /// `@media (prefers-color-scheme: dark)`.
    pub selector: String,
    pub body: RuleBody,
}

/// The body of a [`BaseStyle`].
#[derive(Clone, Debug, PartialEq)]
pub enum RuleBody {
    /// Declarations directly under the selector.
    Declarations(CustomPropertyMap),
    /// Selector blocks nested inside an at-rule.
    Nested(IndexMap<String, CustomPropertyMap>),
}

impl BaseStyle {
    /// A rule with a flat declaration body.
    pub fn declarations(selector: impl Into<String>, declarations: CustomPropertyMap) -> Self {
        Self {
            selector: selector.into(),
            body: RuleBody::Declarations(declarations),
        }
    }

    /// An at-rule wrapping `selector -> declarations` blocks.
    pub fn nested(selector: impl Into<String>, rules: IndexMap<String, CustomPropertyMap>) -> Self {
        Self {
            selector: selector.into(),
            body: RuleBody::Nested(rules),
        }
    }

    /// Render this rule as CSS text, two-space indented.
    pub fn to_css(&self) -> String {
        let mut out = String::new();
        self.write_css(&mut out);
        out
    }

    fn write_css(&self, out: &mut String) {
        match &self.body {
            RuleBody::Declarations(declarations) => {
                write_block(out, &self.selector, declarations, 0);
            }
            RuleBody::Nested(rules) => {
                out.push_str(&self.selector);
                out.push_str(" {\n");
                for (i, (selector, declarations)) in rules.iter().enumerate() {
                    if i > 0 {
                        out.push('\n');
                    }
                    write_block(out, selector, declarations, 1);
                }
                out.push_str("}\n");
            }
        }
    }
}

impl fmt::Display for BaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

fn write_block(out: &mut String, selector: &str, declarations: &CustomPropertyMap, depth: usize) {
    let indent = "  ".repeat(depth);
    out.push_str(&indent);
    out.push_str(selector);
    out.push_str(" {\n");
    for (name, value) in declarations {
        out.push_str(&indent);
        out.push_str("  ");
        out.push_str(name);
        out.push_str(": ");
        out.push_str(value);
        out.push_str(";\n");
    }
    out.push_str(&indent);
    out.push_str("}\n");
}

// ============ Stylesheet ============

/// An in-memory plugin host: collects registered rules and the config
/// extension, and renders the whole sheet as CSS text.
///
/// This is what tests and build tooling run against; an adapter for a real
/// framework implements [`PluginHost`] the same way.
#[derive(Clone, Debug, Default)]
pub struct Stylesheet {
    styles: Vec<BaseStyle>,
    extension: Option<ConfigExtension>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Registered rules, in registration order.
    pub fn styles(&self) -> &[BaseStyle] {
        &self.styles
    }

    /// The config extension, once the plugin has handed one over.
    pub fn extension(&self) -> Option<&ConfigExtension> {
        self.extension.as_ref()
    }

    /// Render every registered rule, blank-line separated.
    pub fn to_css(&self) -> String {
        let mut out = String::new();
        for (i, style) in self.styles.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            style.write_css(&mut out);
        }
        out
    }
}

impl PluginHost for Stylesheet {
    fn add_base(&mut self, style: BaseStyle) {
        self.styles.push(style);
    }

    fn extend_theme(&mut self, extension: ConfigExtension) {
        self.extension = Some(extension);
    }
}

impl fmt::Display for Stylesheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

// ============ Tests ============
