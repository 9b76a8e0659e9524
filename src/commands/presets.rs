//! Presets command handler

use anyhow::Result;

use gas_avg::{Config, Preset};

/// List presets, marking the default one.
#[cfg(not(tarpaulin_include))]
pub fn handle(config: &Config) -> Result<()> {
    print!("{}", render(&config.presets(), &config.default_preset));
    Ok(())
}

fn render(presets: &[Preset], default: &str) -> String {
    let mut out = String::new();
    for preset in presets {
        let marker = if preset.name == default { " (default)" } else { "" };
        out.push_str(&format!("{}{}\n", preset.name, marker));
        out.push_str(&format!("  label:     {}\n", preset.label));
        out.push_str(&format!("  contracts: {}\n", preset.contracts.join(", ")));
    }
    out
}
