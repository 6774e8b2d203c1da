//! Canonical token naming.
//!
//! Key paths become custom-property names through one deterministic pipeline:
//! camelCase splits into kebab-case, whitespace runs collapse to a single
//! `-`, and `.` becomes `_` so numeric steps like `5.5` stay distinct from
//! the `-` that joins path segments. Segments spelled `default` (any case)
//! are placeholders and drop out entirely, which is how
//! `{ borderRadius: { default: "5px" } }` ends up as `--border-radius`.
//!
//! Both output passes go through this module, so a generated custom property
//! and the `var()` that references it can never disagree on a name.

/// Convert one key segment to kebab-case.
///
/// Lowercase-to-uppercase boundaries get a `-` (`fontSize` becomes
/// `font-size`), whitespace runs become one `-`, `.` becomes `_`, and the
/// result is lowercased.
pub fn kebab_case(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len() + 4);
    let mut prev_was_lower = false;
    let mut prev_was_space = false;

    for ch in segment.chars() {
        if ch.is_whitespace() {
            if !prev_was_space {
                out.push('-');
            }
            prev_was_space = true;
            prev_was_lower = false;
            continue;
        }
        prev_was_space = false;

        if ch == '.' {
            out.push('_');
            prev_was_lower = false;
            continue;
        }

        if ch.is_ascii_uppercase() && prev_was_lower {
            out.push('-');
        }
        prev_was_lower = ch.is_ascii_lowercase();
        for lower in ch.to_lowercase() {
            out.push(lower);
        }
    }

    out
}

/// Build the canonical name for a key path.
///
/// `default` segments are elided, the rest are kebab-cased and joined with
/// `-`: `["colors", "primary", "DEFAULT"]` and `["colors", "primary"]` name
/// the same token.
pub fn canonical_name(path: &[&str]) -> String {
    let mut out = String::new();
    for segment in path {
        if segment.eq_ignore_ascii_case("default") {
            continue;
        }
        if !out.is_empty() {
            out.push('-');
        }
        out.push_str(&kebab_case(segment));
    }
    out
}

/// The custom-property name for a key path: `--` plus the canonical name.
pub fn custom_property_name(path: &[&str]) -> String {
    format!("--{}", canonical_name(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kebab_case_camel_boundaries() {
        assert_eq!(kebab_case("fontSize"), "font-size");
        assert_eq!(kebab_case("gradientColorStops"), "gradient-color-stops");
        assert_eq!(kebab_case("ringOffsetColor"), "ring-offset-color");
        assert_eq!(kebab_case("colors"), "colors");
    }

    #[test]
    fn test_kebab_case_runs_of_uppercase() {
        // Only a lower-to-upper boundary splits; runs of capitals fold flat.
        assert_eq!(kebab_case("ABCdef"), "abcdef");
        assert_eq!(kebab_case("HTMLcolor"), "htmlcolor");
    }

    #[test]
    fn test_kebab_case_whitespace() {
        assert_eq!(kebab_case("Font A"), "font-a");
        assert_eq!(kebab_case("a  \t b"), "a-b");
        assert_eq!(kebab_case(" leading"), "-leading");
    }

    #[test]
    fn test_kebab_case_dots() {
        assert_eq!(kebab_case("5.5"), "5_5");
        assert_eq!(kebab_case("2.5rem"), "2_5rem");
    }

    #[test]
    fn test_canonical_name_joins_segments() {
        assert_eq!(canonical_name(&["fontSize"]), "font-size");
        assert_eq!(canonical_name(&["fontFamily", "sans"]), "font-family-sans");
        assert_eq!(canonical_name(&["colors", "red"]), "colors-red");
        assert_eq!(
            canonical_name(&["colors", "primary", "darker"]),
            "colors-primary-darker"
        );
        assert_eq!(canonical_name(&["fontSize", "sm"]), "font-size-sm");
    }

    #[test]
    fn test_canonical_name_elides_default() {
        assert_eq!(canonical_name(&["borderRadius", "default"]), "border-radius");
        assert_eq!(canonical_name(&["borderRadius", "DEFAULT"]), "border-radius");
        assert_eq!(
            canonical_name(&["colors", "primary", "default"]),
            canonical_name(&["colors", "primary"])
        );
        // Elision happens mid-path too.
        assert_eq!(canonical_name(&["a", "default", "b"]), "a-b");
    }

    #[test]
    fn test_custom_property_name() {
        assert_eq!(custom_property_name(&["spacing", "5.5"]), "--spacing-5_5");
        assert_eq!(custom_property_name(&["borderRadius", "default"]), "--border-radius");
    }
}
