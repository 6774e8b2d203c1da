//! End-to-end plugin behavior: options in, CSS text and config extension out.

use serde_json::json;
use themeswap::{
    RenderMode, Stylesheet, ThemeSwapOptions, ThemeSwapper, TokenTree, TokenValue,
};

fn fixture_options() -> ThemeSwapOptions {
    serde_json::from_value(json!({
        "themes": [
            {
                "name": "base",
                "selectors": [":root", ".light"],
                "theme": {
                    "colors": {
                        "hotpink": "hotpink",
                        "with-opacity": "rgba(255, 0, 0, 0.5)",
                        "primary": { "default": "#f00", "darker": "#400" }
                    },
                    "spacing": { "fart": "69px", "5.5": "550px" },
                    "borderRadius": { "default": "5px" },
                    "fontFamily": { "sans": ["Font A", "Font B", "Font C"] },
                    "fontSize": {
                        "sm": "12px",
                        "complex": ["22px", { "lineHeight": "1.2rem" }]
                    }
                }
            },
            {
                "name": "dark",
                "mediaQuery": "@media (prefers-color-scheme: dark)",
                "theme": {
                    "colors": {
                        "primary": { "default": "#fff", "darker": "#aaa" }
                    }
                }
            }
        ]
    }))
    .unwrap()
}

fn reference<'a>(tree: &'a TokenTree, path: &[&str]) -> &'a str {
    match tree.get_path(path) {
        Some(TokenValue::Str(s)) => s,
        other => panic!("expected reference at {path:?}, got {other:?}"),
    }
}

#[test]
fn custom_properties_render_for_every_theme_scope() {
    let swapper = ThemeSwapper::new(fixture_options());
    let mut sheet = Stylesheet::new();
    swapper.install(&mut sheet);

    let expected = "\
:root, .light {
  --colors-hotpink: hotpink;
  --colors-with-opacity: rgba(255, 0, 0, 0.5);
  --colors-primary: #f00;
  --colors-primary-darker: #400;
  --spacing-fart: 69px;
  --spacing-5_5: 550px;
  --border-radius: 5px;
  --font-family-sans: Font A, Font B, Font C;
  --font-size-sm: 12px;
  --font-size-complex: 22px;
}

@media (prefers-color-scheme: dark) {
  :root {
    --colors-primary: #fff;
    --colors-primary-darker: #aaa;
  }
}
";
    assert_eq!(sheet.to_css(), expected);
}

#[test]
fn config_extension_references_the_base_theme() {
    let swapper = ThemeSwapper::new(fixture_options());
    let extend = swapper.config_extension().theme.extend;

    assert_eq!(
        reference(&extend, &["colors", "hotpink"]),
        "color-mix(in srgb, var(--colors-hotpink) calc(100% * <alpha-value>), transparent)"
    );
    assert_eq!(
        reference(&extend, &["colors", "with-opacity"]),
        "color-mix(in srgb, var(--colors-with-opacity) calc(100% * <alpha-value>), transparent)"
    );
    assert_eq!(
        reference(&extend, &["colors", "primary", "default"]),
        "color-mix(in srgb, var(--colors-primary) calc(100% * <alpha-value>), transparent)"
    );
    assert_eq!(
        reference(&extend, &["colors", "primary", "darker"]),
        "color-mix(in srgb, var(--colors-primary-darker) calc(100% * <alpha-value>), transparent)"
    );
    assert_eq!(reference(&extend, &["spacing", "fart"]), "var(--spacing-fart)");
    assert_eq!(reference(&extend, &["spacing", "5.5"]), "var(--spacing-5_5)");
    assert_eq!(
        reference(&extend, &["borderRadius", "default"]),
        "var(--border-radius)"
    );
    assert_eq!(
        reference(&extend, &["fontFamily", "sans"]),
        "var(--font-family-sans)"
    );
    assert_eq!(reference(&extend, &["fontSize", "sm"]), "var(--font-size-sm)");
    assert_eq!(
        reference(&extend, &["fontSize", "complex"]),
        "var(--font-size-complex)"
    );
}

#[test]
fn numeric_step_names_agree_between_passes() {
    let swapper = ThemeSwapper::new(fixture_options());

    let mut sheet = Stylesheet::new();
    swapper.install(&mut sheet);
    assert!(sheet.to_css().contains("--spacing-5_5: 550px;"));

    let extend = swapper.config_extension().theme.extend;
    assert_eq!(reference(&extend, &["spacing", "5.5"]), "var(--spacing-5_5)");
}

#[test]
fn empty_options_install_nothing() {
    let swapper = ThemeSwapper::new(ThemeSwapOptions::default());
    let mut sheet = Stylesheet::new();
    swapper.install(&mut sheet);

    assert_eq!(sheet.to_css(), "");
    let extension = serde_json::to_value(sheet.extension().unwrap()).unwrap();
    assert_eq!(extension, json!({ "theme": { "extend": {} } }));
}

#[test]
fn base_theme_without_tokens_emits_empty_rule_and_extension() {
    let options: ThemeSwapOptions = serde_json::from_value(json!({
        "themes": [{ "name": "base", "selectors": [":root"] }]
    }))
    .unwrap();
    let swapper = ThemeSwapper::new(options);

    let mut sheet = Stylesheet::new();
    swapper.install(&mut sheet);

    assert_eq!(sheet.to_css(), ":root {\n}\n");
    assert!(swapper.config_extension().theme.extend.is_empty());
}

#[test]
fn theme_without_scope_emits_no_css_but_still_resolves() {
    let options: ThemeSwapOptions = serde_json::from_value(json!({
        "themes": [{
            "name": "base",
            "theme": { "spacing": { "sm": "4px" } }
        }]
    }))
    .unwrap();
    let swapper = ThemeSwapper::new(options);

    assert!(swapper.base_styles().is_empty());
    let extend = swapper.config_extension().theme.extend;
    assert_eq!(reference(&extend, &["spacing", "sm"]), "var(--spacing-sm)");
}

#[test]
fn legacy_mode_renders_channels_and_fallbacks() {
    let mut options = fixture_options();
    options.mode = RenderMode::RgbChannels;
    let swapper = ThemeSwapper::new(options);

    let mut sheet = Stylesheet::new();
    swapper.install(&mut sheet);
    let css = sheet.to_css();
    assert!(css.contains("--colors-primary: 255 0 0;"));
    assert!(css.contains("--colors-with-opacity: 255 0 0;"));
    assert!(css.contains("--spacing-fart: 69px;"));

    let extend = swapper.config_extension().theme.extend;
    assert_eq!(
        reference(&extend, &["colors", "primary", "default"]),
        "rgb(var(--colors-primary) / <alpha-value>)"
    );
    assert_eq!(
        reference(&extend, &["spacing", "fart"]),
        "var(--spacing-fart, 69px)"
    );
    assert_eq!(
        reference(&extend, &["fontFamily", "sans"]),
        "var(--font-family-sans, Font A, Font B, Font C)"
    );
    assert_eq!(
        reference(&extend, &["fontSize", "complex"]),
        "var(--font-size-complex, 22px)"
    );
}

#[test]
fn options_load_from_toml() {
    let options: ThemeSwapOptions = toml::from_str(
        r#"
        mode = "color-mix"

        [[themes]]
        name = "base"
        selectors = [":root"]

        [themes.theme.colors]
        hotpink = "hotpink"

        [[themes]]
        name = "dark"
        mediaQuery = "@media (prefers-color-scheme: dark)"

        [themes.theme.colors]
        hotpink = "deeppink"
        "#,
    )
    .unwrap();

    assert_eq!(options.mode, RenderMode::ColorMix);
    assert_eq!(options.themes.len(), 2);

    let swapper = ThemeSwapper::new(options);
    let mut sheet = Stylesheet::new();
    swapper.install(&mut sheet);

    let css = sheet.to_css();
    assert!(css.contains(":root {\n  --colors-hotpink: hotpink;\n}"));
    assert!(css.contains(
        "@media (prefers-color-scheme: dark) {\n  :root {\n    --colors-hotpink: deeppink;\n  }\n}"
    ));
}
