use anyhow::{Context, Result};
use clap::ValueEnum;
use emporium_game::{ShopSummary, catalog};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Machine-readable receipt
    Json,
    /// Receipt table for pasting into notes
    Markdown,
}

/// Everything needed to reproduce and audit a visit.
#[derive(Debug, Serialize)]
pub struct VisitReport<'a> {
    pub seed: u64,
    pub shop: &'a str,
    #[serde(flatten)]
    pub summary: &'a ShopSummary,
}

pub fn generate_json_report<W: Write + ?Sized>(
    out: &mut W,
    report: &VisitReport<'_>,
) -> Result<()> {
    let json_output = serde_json::to_string_pretty(report)?;
    writeln!(out, "{json_output}")?;
    Ok(())
}

pub fn generate_markdown_report<W: Write + ?Sized>(
    out: &mut W,
    report: &VisitReport<'_>,
) -> Result<()> {
    let summary = report.summary;
    writeln!(out, "# {} receipt\n", report.shop)?;
    writeln!(out, "- **Customer**: {}", summary.player)?;
    writeln!(out, "- **Seed**: {}", report.seed)?;
    writeln!(out, "- **Purchases**: {}", summary.purchases)?;
    writeln!(out, "- **Refused for lack of gold**: {}", summary.rejected)?;
    writeln!(out, "- **Gold remaining**: {}\n", summary.gold)?;

    writeln!(out, "| Potion | Qty | Unit price | Subtotal |")?;
    writeln!(out, "|--------|-----|------------|----------|")?;
    for entry in catalog() {
        let count = summary.count_of(entry.kind);
        if count == 0 {
            continue;
        }
        let subtotal = u64::from(entry.price) * u64::from(count);
        writeln!(
            out,
            "| {} | {count} | {} | {subtotal} |",
            entry.name, entry.price
        )?;
    }
    Ok(())
}

/// Write the report to `path`, or to stdout when no path is given.
pub fn write_report(
    format: ReportFormat,
    path: Option<&Path>,
    report: &VisitReport<'_>,
) -> Result<()> {
    let mut writer: Box<dyn Write> = match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(stdout())),
    };

    match format {
        ReportFormat::Json => generate_json_report(&mut writer, report)?,
        ReportFormat::Markdown => generate_markdown_report(&mut writer, report)?,
    }
    writer.flush()?;
    Ok(())
}
