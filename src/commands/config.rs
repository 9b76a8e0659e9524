//! Config subcommands handler

use anyhow::Result;

use gas_avg::Config;

/// Show effective configuration as TOML, built-in presets included.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(config: &Config) -> Result<()> {
    let effective = Config {
        presets: config.presets(),
        ..config.clone()
    };
    let toml_str = toml::to_string_pretty(&effective)?;
    print!("{}", toml_str);
    Ok(())
}
