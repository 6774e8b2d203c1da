//! Tree flattening: token trees to flat, ordered maps.

use indexmap::IndexMap;
use tracing::debug;

use crate::css::CustomPropertyMap;
use crate::naming::custom_property_name;
use crate::tokens::{TokenTree, TokenValue};
use crate::transform::ValueTransformer;

/// Flatten a token tree into a single-level map.
///
/// `transform_key` sees the key path of each leaf and produces the output
/// key; `transform_value` produces the output value. Interior
/// [`TokenValue::Tree`] nodes recurse; everything else, lists included, is a
/// leaf. Output order is a depth-first walk in document order.
///
/// Distinct paths may normalize to the same output key; that is how
/// `default` elision collapses `{ default: ... }` onto its parent. The
/// later-visited path wins, and the overwrite is logged at DEBUG.
pub fn flatten<T, K, V>(
    tree: &TokenTree,
    transform_key: K,
    transform_value: V,
) -> IndexMap<String, T>
where
    K: Fn(&[&str]) -> String,
    V: Fn(&[&str], &TokenValue) -> T,
{
    let mut flattened = IndexMap::new();
    let mut path = Vec::new();
    walk(tree, &mut path, &mut flattened, &transform_key, &transform_value);
    flattened
}

fn walk<'t, T, K, V>(
    tree: &'t TokenTree,
    path: &mut Vec<&'t str>,
    flattened: &mut IndexMap<String, T>,
    transform_key: &K,
    transform_value: &V,
) where
    K: Fn(&[&str]) -> String,
    V: Fn(&[&str], &TokenValue) -> T,
{
    for (key, value) in tree.iter() {
        path.push(key);
        match value {
            TokenValue::Tree(subtree) => {
                walk(subtree, path, flattened, transform_key, transform_value);
            }
            leaf => {
                let name = transform_key(path.as_slice());
                if flattened.contains_key(&name) {
                    debug!(key = %name, "flattened key collision, later value wins");
                }
                flattened.insert(name, transform_value(path.as_slice(), leaf));
            }
        }
        path.pop();
    }
}

/// Flatten a theme tree into its custom-property declarations: keys are
/// `--<canonical-name>`, values go through the transformer.
pub fn theme_custom_properties(
    tree: &TokenTree,
    transformer: &ValueTransformer,
) -> CustomPropertyMap {
    flatten(tree, custom_property_name, |path: &[&str], value: &TokenValue| {
        transformer.custom_property_value(path, value)
    })
}

// ============ Tests ============
