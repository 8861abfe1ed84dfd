mod report;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use emporium_game::ShopConfig;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::io::{stdin, stdout};
use std::path::{Path, PathBuf};

use report::{ReportFormat, VisitReport, write_report};

const PROGRAM_NAME: &str = "Roscoe's Potion Emporium";

#[derive(Debug, Parser)]
#[command(name = "potion-emporium", version)]
#[command(about = "Spend a randomized purse on potions at Roscoe's emporium")]
struct Args {
    /// Player name (skips the name prompt)
    #[arg(long)]
    name: Option<String>,

    /// Seed for the starting purse; a random seed is drawn when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file overriding the shop name or starting gold range
    #[arg(long)]
    config: Option<PathBuf>,

    /// Emit a receipt after the visit
    #[arg(long, value_enum)]
    report: Option<ReportFormat>,

    /// Optional path to write the receipt instead of stdout
    #[arg(long, requires = "report")]
    output: Option<PathBuf>,

    /// Verbose logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = load_config(args.config.as_deref())?;
    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("starting purse seed {seed}");

    announce_banner();

    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let summary = emporium_game::play(
        &config,
        args.name,
        &mut rng,
        stdin().lock(),
        stdout().lock(),
    )
    .context("shop session failed")?;

    if let Some(format) = args.report {
        let report = VisitReport {
            seed,
            shop: &config.shop_name,
            summary: &summary,
        };
        write_report(format, args.output.as_deref(), &report)?;
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn load_config(path: Option<&Path>) -> Result<ShopConfig> {
    let Some(path) = path else {
        return Ok(ShopConfig::default());
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let config = ShopConfig::from_json(&raw)
        .with_context(|| format!("invalid shop config in {}", path.display()))?;
    log::debug!("loaded shop config from {}", path.display());
    Ok(config)
}

fn announce_banner() {
    println!(
        "{}",
        format!("{PROGRAM_NAME} v{}", env!("CARGO_PKG_VERSION"))
            .bright_cyan()
            .bold()
    );
    println!("{}\n", format!("By {}", env!("CARGO_PKG_AUTHORS")).cyan());
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn temp_path(label: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "emporium-main-{label}-{}",
            std::process::id()
        ))
    }

    #[test]
    fn args_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn parses_seed_name_and_report() {
        let args = Args::try_parse_from([
            "potion-emporium",
            "--name",
            "Ada",
            "--seed",
            "99",
            "--report",
            "markdown",
        ])
        .unwrap();
        assert_eq!(args.name.as_deref(), Some("Ada"));
        assert_eq!(args.seed, Some(99));
        assert_eq!(args.report, Some(ReportFormat::Markdown));
        assert!(!args.verbose);
    }

    #[test]
    fn output_requires_report() {
        assert!(Args::try_parse_from(["potion-emporium", "--output", "x.json"]).is_err());
    }

    #[test]
    fn missing_config_path_uses_defaults() {
        assert_eq!(load_config(None).unwrap(), ShopConfig::default());
    }

    #[test]
    fn config_file_is_loaded_and_validated() {
        let good = temp_path("good.json");
        std::fs::write(&good, r#"{"shop_name": "Test Shop"}"#).unwrap();
        let config = load_config(Some(good.as_path())).unwrap();
        assert_eq!(config.shop_name, "Test Shop");
        assert_eq!(config.starting_gold.min, 80);

        let bad = temp_path("bad.json");
        std::fs::write(&bad, r#"{"starting_gold": {"min": 9, "max": 1}}"#).unwrap();
        let err = load_config(Some(bad.as_path())).unwrap_err();
        assert!(format!("{err:#}").contains("exceeds maximum"));

        let _ = std::fs::remove_file(good);
        let _ = std::fs::remove_file(bad);
    }

    #[test]
    fn unreadable_config_reports_path() {
        let missing = temp_path("missing.json");
        let err = load_config(Some(missing.as_path())).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
