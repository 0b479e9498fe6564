use anyhow::{Context, Result};
use phrasevo_sim::simulation::GaConfig;
use std::path::Path;

/// Write the default engine configuration as JSON, to `output` or stdout.
///
/// The result is a valid starting point for `phrasevo run --config`.
pub fn write_default_config(output: Option<&Path>) -> Result<()> {
    let json = GaConfig::default()
        .to_json_pretty()
        .context("Failed to serialize default configuration")?;

    match output {
        Some(path) => {
            std::fs::write(path, format!("{json}\n"))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("✓ Default configuration written to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
