//! Summarize command handler

use anyhow::{Context, Result};

use gas_avg::cli::{OutputFormat, SummarizeArgs};
use gas_avg::preset::DEFAULT_LABEL;
use gas_avg::{Config, Report, Summarizer, Summary};

/// Summarize the report and print the total.
///
/// Output is rendered in full before anything is written, so a failure
/// part-way through the report leaves stdout empty.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: &SummarizeArgs, config: &Config) -> Result<()> {
    let summarizer = summarizer_for(args, config)?;
    let path = args.report.as_deref().unwrap_or(&config.report);

    let report = Report::load(path)?;
    let summary = summarizer
        .summarize(&report)
        .with_context(|| format!("Failed to summarize {}", path.display()))?;

    print!("{}", render(&summary, args.format, args.breakdown)?);
    Ok(())
}

/// Build the summarizer from `--contract`/`--label` or a preset.
fn summarizer_for(args: &SummarizeArgs, config: &Config) -> Result<Summarizer> {
    if !args.contracts.is_empty() {
        let label = args.label.as_deref().unwrap_or(DEFAULT_LABEL);
        return Ok(Summarizer::new(label, args.contracts.iter().cloned()));
    }
    let preset = config.preset(args.preset.as_deref())?;
    tracing::debug!(preset = %preset.name, contracts = ?preset.contracts, "using preset");
    Ok(Summarizer::from_preset(&preset))
}

/// Render a summary for stdout, newline-terminated.
fn render(summary: &Summary, format: OutputFormat, breakdown: bool) -> Result<String> {
    let mut out = String::new();
    match format {
        OutputFormat::Json => {
            out.push_str(&serde_json::to_string_pretty(summary)?);
            out.push('\n');
        }
        OutputFormat::Text => {
            if breakdown {
                for row in &summary.included {
                    out.push_str(&format!(
                        "{}  {}  {}\n",
                        row.contract,
                        row.method.as_deref().unwrap_or("-"),
                        row.average_gas
                    ));
                }
            }
            out.push_str(&format!("{}\n", summary));
        }
    }
    Ok(out)
}
