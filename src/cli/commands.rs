//! Command implementation for the QSO Mapper CLI
//!
//! This module contains the run workflow: logging setup, layered settings,
//! log parsing, contact processing, the console summary and JSON export.

use crate::app::models::{Contact, LogFormat};
use crate::app::services::adif_parser::AdifParser;
use crate::app::services::contact_processor::{ContactProcessor, ProcessingStats};
use crate::app::services::parse_result::{ParseResult, ParseStats};
use crate::app::services::wspr_parser::WsprParser;
use crate::cli::args::Args;
use crate::config::{DateFilter, Settings};
use crate::Error;
use anyhow::{Context, Result};
use colored::*;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Outcome of one run, for reporting and tests
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub log_file: PathBuf,
    pub format: LogFormat,
    pub parse_stats: ParseStats,
    pub processing_stats: ProcessingStats,
    /// Mappable contacts after processing
    pub contacts: Vec<Contact>,
    /// Where the contacts were written, when exported
    pub export_path: Option<PathBuf>,
}

impl RunSummary {
    pub fn contact_count(&self) -> usize {
        self.contacts.len()
    }
}

/// Set up structured logging
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("qso_mapper={}", log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
            .context("Failed to initialize logging")?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
            .context("Failed to initialize logging")?;
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Settings file used for this run
pub fn settings_path(args: &Args) -> Result<PathBuf> {
    match &args.settings_file {
        Some(path) => Ok(path.clone()),
        None => Settings::default_settings_path().context("Could not locate settings file"),
    }
}

/// Load settings using the layered approach (defaults -> file -> args)
pub fn load_settings(args: &Args, path: &Path) -> Result<Settings> {
    info!("Loading settings from {}", path.display());

    let mut settings = Settings::load_or_default(path);
    apply_cli_overrides(&mut settings, args)?;
    settings.validate()?;

    Ok(settings)
}

/// Apply command-line overrides to settings
pub fn apply_cli_overrides(settings: &mut Settings, args: &Args) -> Result<()> {
    if let Some(log_file) = &args.log_file {
        settings.default_log_file = log_file.clone();
    }
    if let Some(grid) = &args.operator_grid {
        settings.operator_gridsquare = grid.trim().to_string();
    }
    if let Some(band) = &args.band {
        settings.band = Some(band.trim().to_string());
    }

    settings.date_filter = args.date_filter()?;
    Ok(())
}

/// Parse a log file with the parser for `format`
pub fn parse_log(format: LogFormat, log_file: &Path, date_filter: DateFilter) -> ParseResult {
    match format {
        LogFormat::Adif => AdifParser::new(date_filter).parse_file(log_file),
        LogFormat::Wspr => WsprParser::new(date_filter).parse_file(log_file),
    }
}

/// Default export location: `<OUTPUT_DIRECTORY>/contacts_<timestamp>.json`
pub fn default_export_path(settings: &Settings) -> PathBuf {
    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    settings
        .output_directory
        .join(format!("contacts_{}.json", timestamp))
}

/// Write contacts as a pretty-printed JSON array, creating parent directories
pub fn export_contacts(contacts: &[Contact], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(contacts).context("Failed to serialize contacts")?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write contacts to {}", path.display()))?;

    info!("Exported {} contacts to {}", contacts.len(), path.display());
    Ok(())
}

/// Main command runner
///
/// 1. Validate arguments and load settings
/// 2. Select the log format and parse the log
/// 3. Resolve coordinates and filter contacts
/// 4. Export and report
pub fn run(args: Args) -> Result<RunSummary> {
    let start_time = Instant::now();
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let settings_file = settings_path(&args)?;
    let settings = load_settings(&args, &settings_file)?;
    debug!("Effective settings: {:?}", settings);

    let log_file = settings.default_log_file.clone();
    if !log_file.exists() {
        return Err(Error::file_not_found(log_file.display().to_string()).into());
    }

    let format = args.format.resolve(&settings, &log_file);
    info!("Reading {} log {}", format, log_file.display());

    let parsed = parse_log(format, &log_file, settings.date_filter);
    let processed = ContactProcessor::from_settings(&settings).process_contacts(parsed.contacts);

    if processed.is_empty() {
        warn!("No mappable contacts found in {}", log_file.display());
    }

    let export_path = if args.wants_export() {
        let path = args
            .output
            .clone()
            .unwrap_or_else(|| default_export_path(&settings));
        export_contacts(&processed.contacts, &path)?;
        Some(path)
    } else {
        None
    };

    if args.save_settings {
        settings
            .save(&settings_file)
            .with_context(|| format!("Failed to save settings to {}", settings_file.display()))?;
    }

    let summary = RunSummary {
        log_file,
        format,
        parse_stats: parsed.stats,
        processing_stats: processed.stats,
        contacts: processed.contacts,
        export_path,
    };

    if args.show_summary() {
        print_summary(&summary, start_time.elapsed().as_millis());
    }

    Ok(summary)
}

fn print_summary(summary: &RunSummary, elapsed_ms: u128) {
    let parse = &summary.parse_stats;
    let processing = &summary.processing_stats;

    println!("\n{}", "QSO Mapper Summary".bright_green().bold());
    println!(
        "  {} {} ({})",
        "Log file:".bright_cyan(),
        summary.log_file.display().to_string().bright_white(),
        summary.format
    );
    println!(
        "  {} {}ms",
        "Time elapsed:".bright_cyan(),
        elapsed_ms.to_string().bright_white()
    );
    println!(
        "  {} {}",
        "Contacts parsed:".bright_cyan(),
        parse.contacts_parsed.to_string().bright_white()
    );
    if parse.records_filtered > 0 {
        println!(
            "  {} {}",
            "Filtered by date:".bright_cyan(),
            parse.records_filtered.to_string().bright_white()
        );
    }
    if parse.stopped_early {
        println!(
            "  {}",
            "Stopped at first spot outside the date range".bright_yellow()
        );
    }
    if parse.lines_skipped > 0 {
        println!(
            "  {} {}",
            "Lines skipped:".bright_red(),
            parse.lines_skipped.to_string().bright_red().bold()
        );
    }
    if processing.band_filtered > 0 {
        println!(
            "  {} {}",
            "Filtered by band:".bright_cyan(),
            processing.band_filtered.to_string().bright_white()
        );
    }
    if processing.unmappable > 0 {
        println!(
            "  {} {}",
            "Without location:".bright_yellow(),
            processing.unmappable.to_string().bright_yellow()
        );
    }
    println!(
        "  {} {}",
        "Mappable contacts:".bright_cyan(),
        summary.contact_count().to_string().bright_white().bold()
    );
    if let Some(path) = &summary.export_path {
        println!(
            "  {} {}",
            "Exported to:".bright_cyan(),
            path.display().to_string().bright_white()
        );
    }
}
