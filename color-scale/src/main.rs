use palette::scale::{ScaleConfig, ScaleError};
use tracing_subscriber::EnvFilter;

const CSS_CLASS: &str = "airport";

fn main() -> Result<(), ScaleError> {
    // Diagnostics go to stderr; stdout carries only the CSS rules.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let config = ScaleConfig::soft()?;
    let entries = config.generate()?;
    tracing::debug!(positions = entries.len(), class = CSS_CLASS, "scale generated");

    for entry in entries {
        println!("{}", entry.css_rule(CSS_CLASS));
    }
    Ok(())
}
