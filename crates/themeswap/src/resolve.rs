//! Config resolution: rebuild a theme tree with reference leaves.
//!
//! Where flattening collapses a tree for CSS output, resolution preserves its
//! shape for the framework config: the result has exactly the keys and
//! nesting of the input, with every leaf swapped for the expression that
//! reads the matching custom property. Handing that tree to the framework's
//! `theme.extend` keeps utility generation working while the actual values
//! live in swappable custom properties.

use crate::tokens::{TokenTree, TokenValue};
use crate::transform::ValueTransformer;

/// Rebuild `tree` with every leaf replaced by its configuration-reference
/// expression.
pub fn resolve_theme_config(tree: &TokenTree, transformer: &ValueTransformer) -> TokenTree {
    let mut path = Vec::new();
    walk(tree, &mut path, transformer)
}

fn walk<'t>(
    tree: &'t TokenTree,
    path: &mut Vec<&'t str>,
    transformer: &ValueTransformer,
) -> TokenTree {
    let mut resolved = TokenTree::new();
    for (key, value) in tree.iter() {
        path.push(key);
        let replacement = match value {
            TokenValue::Tree(subtree) => TokenValue::Tree(walk(subtree, path, transformer)),
            leaf => TokenValue::Str(transformer.config_reference(path.as_slice(), leaf)),
        };
        path.pop();
        resolved.insert(key, replacement);
    }
    resolved
}

// ============ Tests ============

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flatten::flatten;
    use crate::transform::{Diagnostics, RenderMode};
    use serde_json::json;

    fn tree(source: serde_json::Value) -> TokenTree {
        serde_json::from_value(source).unwrap()
    }

    fn fixture() -> TokenTree {
        tree(json!({
            "colors": {
                "red": "#f00",
                "primary": { "default": "#f00", "darker": "#400" }
            },
            "fontSize": { "base": "1rem" }
        }))
    }

    #[test]
    fn test_resolve_builds_references() {
        let resolved = resolve_theme_config(&fixture(), &ValueTransformer::default());

        assert_eq!(
            resolved.get_path(&["colors", "red"]),
            Some(&TokenValue::from(
                "color-mix(in srgb, var(--colors-red) calc(100% * <alpha-value>), transparent)"
            ))
        );
        // The default leaf references the elided name...
        assert_eq!(
            resolved.get_path(&["colors", "primary", "default"]),
            Some(&TokenValue::from(
                "color-mix(in srgb, var(--colors-primary) calc(100% * <alpha-value>), transparent)"
            ))
        );
        // ...while its sibling keeps the full path.
        assert_eq!(
            resolved.get_path(&["colors", "primary", "darker"]),
            Some(&TokenValue::from(
                "color-mix(in srgb, var(--colors-primary-darker) calc(100% * <alpha-value>), transparent)"
            ))
        );
        assert_eq!(
            resolved.get_path(&["fontSize", "base"]),
            Some(&TokenValue::from("var(--font-size-base)"))
        );
    }

    #[test]
    fn test_resolve_legacy_mode() {
        let transformer = ValueTransformer::new(RenderMode::RgbChannels, Diagnostics::Enabled);
        let resolved = resolve_theme_config(&fixture(), &transformer);

        assert_eq!(
            resolved.get_path(&["colors", "red"]),
            Some(&TokenValue::from("rgb(var(--colors-red) / <alpha-value>)"))
        );
        assert_eq!(
            resolved.get_path(&["fontSize", "base"]),
            Some(&TokenValue::from("var(--font-size-base, 1rem)"))
        );
    }

    #[test]
    fn test_resolve_preserves_shape() {
        let source = fixture();
        let resolved = resolve_theme_config(&source, &ValueTransformer::default());

        // Same leaf paths on both sides: resolution is an isomorphism on the
        // tree shape.
        let source_paths: Vec<String> = flatten(
            &source,
            |path: &[&str]| path.join("/"),
            |_: &[&str], _: &TokenValue| (),
        )
        .into_keys()
        .collect();
        let resolved_paths: Vec<String> = flatten(
            &resolved,
            |path: &[&str]| path.join("/"),
            |_: &[&str], _: &TokenValue| (),
        )
        .into_keys()
        .collect();
        assert_eq!(source_paths, resolved_paths);
    }

    #[test]
    fn test_resolve_empty_tree() {
        let resolved = resolve_theme_config(&TokenTree::new(), &ValueTransformer::default());
        assert!(resolved.is_empty());
    }
}
