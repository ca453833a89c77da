//! Theme Engine Demo
//!
//! Builds a theme context over in-memory providers, walks the resolution
//! surface, and prints the projected CSS variables for both schemes.
//!
//! Run with: cargo run -p tincture_theme --example theme_demo

use std::sync::Arc;
use tincture_platform::{MemoryDocument, MemoryPreferences, StaticScheme};
use tincture_theme::{ColorRole, ColorScheme, StandardTheme, ThemeContext};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .init();

    let document = Arc::new(MemoryDocument::new());
    let context = ThemeContext::new(
        StandardTheme::bundle(),
        Arc::new(MemoryPreferences::new()),
        document.clone(),
        Arc::new(StaticScheme(Some(ColorScheme::Dark))),
    );
    context.init();

    println!("mounted: {}, scheme: {}", context.mounted(), context.scheme());
    println!(
        "brand.primary = {}",
        context.color(ColorRole::BrandPrimary).to_css_string()
    );
    println!(
        "resolve(\"surface.elevated\") = {}",
        context.resolve("surface.elevated").to_css_string()
    );
    println!(
        "resolve_token(\"neutral.200\") = {}",
        context.resolve_token("neutral.200").to_css_string()
    );
    // Misses degrade instead of failing
    println!(
        "resolve(\"no.such.role\") = {}",
        context.resolve("no.such.role").to_css_string()
    );

    for scheme in [ColorScheme::Light, ColorScheme::Dark] {
        context.set_scheme(scheme);
        println!("\n--- projected variables ({scheme}) ---");
        let mut vars: Vec<_> = document.properties().into_iter().collect();
        vars.sort();
        for (name, value) in vars.iter().take(8) {
            println!("{name}: {value}");
        }
        println!("... {} properties total", vars.len());
        println!(
            "meta theme-color: {}",
            document.meta_theme_color().unwrap_or_default()
        );
    }

    Ok(())
}
