//! Theme Swapping Demo
//!
//! Builds a base/dark theme pair, installs it into an in-memory stylesheet,
//! and prints the two outputs:
//! - The generated base-layer CSS (custom properties per theme scope)
//! - The `theme.extend` config JSON (references into the base theme)
//!
//! The `fontSize.complex` token carries line-height metadata, so this also
//! shows the reduction warning on stderr.
//!
//! Run with: cargo run -p themeswap --example theme_swap_demo

use anyhow::Result;
use serde_json::json;
use themeswap::{Stylesheet, ThemeSwapOptions, ThemeSwapper};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let options: ThemeSwapOptions = serde_json::from_value(json!({
        "themes": [
            {
                "name": "base",
                "selectors": [":root", ".light"],
                "theme": {
                    "colors": {
                        "primary": { "default": "#1e66f5", "darker": "#1e40af" },
                        "surface": "white"
                    },
                    "spacing": { "sm": "4px", "md": "16px", "5.5": "22px" },
                    "fontFamily": { "sans": ["Inter", "Helvetica", "sans-serif"] },
                    "fontSize": {
                        "base": "16px",
                        "complex": ["22px", { "lineHeight": "1.2rem" }]
                    }
                }
            },
            {
                "name": "dark",
                "selectors": [".dark"],
                "mediaQuery": "@media (prefers-color-scheme: dark)",
                "theme": {
                    "colors": {
                        "primary": { "default": "#89b4fa", "darker": "#3b5bdb" },
                        "surface": "#11111b"
                    }
                }
            }
        ]
    }))?;

    let swapper = ThemeSwapper::new(options);
    let mut sheet = Stylesheet::new();
    swapper.install(&mut sheet);

    println!("/* base layer */");
    println!("{sheet}");

    let extension = sheet
        .extension()
        .map(serde_json::to_value)
        .transpose()?
        .unwrap_or_default();
    println!("/* theme.extend */");
    println!("{}", serde_json::to_string_pretty(&extension)?);

    Ok(())
}
