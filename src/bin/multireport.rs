use std::convert::Infallible;
use std::error::Error;
use std::path::PathBuf;

use multireport::cli::TargetArgs;
use multireport::{
    FileEntry, ReportContext, ReportSettings, Reporter, ScannedFile, TargetList, report_message,
};
use sarge::ArgumentType;
use sarge::prelude::*;
use tracing_subscriber::EnvFilter;

const DEFAULT_TARGET: &str = "multireport.log";
const DEFAULT_MAX_FILE_SIZE: u64 = 32 * 1024 * 1024;

/// Comma-separated paths, accumulated across repeated `--path` options.
#[derive(Debug, Clone, Default)]
struct PathArgs(Vec<PathBuf>);

impl ArgumentType for PathArgs {
    type Error = Infallible;

    const REPEATABLE: bool = true;

    fn from_value(val: Option<&str>) -> sarge::ArgResult<Self> {
        let paths = val
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .collect();
        Some(Ok(PathArgs(paths)))
    }

    fn default_value() -> Option<Self> {
        Some(PathArgs::default())
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  multireport [--report <targets>] [--path <p1,p2>] [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!(
        "  -r, --report <targets>      space-separated report targets ({}), repeatable",
        TargetList::TYPE_NAME
    );
    eprintln!("  -p, --path <paths>          comma-separated files to inventory");
    eprintln!("  -s, --max-file-size <n>     skip files larger than n bytes, 0 disables");
    eprintln!("  -H, --set-hostname <name>   hostname stamped on every record");
    eprintln!("  -l, --loglevel <filter>     log filter, e.g. info or multireport=debug");
    eprintln!("  -c, --config <file>         JSON settings file");
    eprintln!();
    eprintln!("Targets:");
    eprintln!("  /path/report.log            plain text (default {DEFAULT_TARGET})");
    eprintln!("  /path/report.json,format=tsjson");
    eprintln!("  file:///path/report.log,format=plain");
}

fn init_logging(level: Option<&str>) -> Result<(), Box<dyn Error>> {
    let filter = match level {
        Some(level) => EnvFilter::try_new(level)?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
    Ok(())
}

fn scan(
    reporter: &Reporter,
    hostname: &str,
    paths: &[PathBuf],
    max_file_size: u64,
) -> Result<(), Box<dyn Error>> {
    report_message!(reporter, "scan started on {}", hostname)?;
    for path in paths {
        let file = ScannedFile::new(path.clone());
        let size = match std::fs::metadata(path) {
            Ok(meta) if meta.is_file() => meta.len(),
            Ok(_) => {
                report_message!(reporter, "skipping {}: not a regular file", path.display())?;
                continue;
            }
            Err(e) => {
                report_message!(reporter, "skipping {}: {}", path.display(), e)?;
                continue;
            }
        };
        if max_file_size > 0 && size > max_file_size {
            report_message!(
                reporter,
                "skipping {}: {} bytes exceeds limit of {}",
                path.display(),
                size,
                max_file_size
            )?;
            continue;
        }
        let entry = FileEntry::new(&file, "inventory", "file inspected")
            .with_extra("max_file_size", max_file_size.to_string());
        reporter.report_file_entry(&entry)?;
    }
    report_message!(reporter, "scan finished, {} path(s) given", paths.len())?;
    Ok(())
}

fn run() -> Result<(), Box<dyn Error>> {
    let mut reader = ArgumentReader::new();

    reader.add::<TargetArgs>(tag::both('r', "report"));
    let path_ref = reader.add::<PathArgs>(tag::both('p', "path"));
    let max_size_ref = reader.add::<u64>(tag::both('s', "max-file-size"));
    let hostname_ref = reader.add::<String>(tag::both('H', "set-hostname"));
    let level_ref = reader.add::<String>(tag::both('l', "loglevel"));
    let config_ref = reader.add::<String>(tag::both('c', "config"));

    let argv: Vec<String> = std::env::args().collect();
    let args = reader.parse_provided(&argv, std::env::vars())?;

    let settings = match config_ref.get(&args) {
        Some(Ok(path)) => ReportSettings::from_path(path)?,
        _ => ReportSettings::new(),
    };

    let level = match level_ref.get(&args) {
        Some(Ok(level)) => Some(level),
        _ => settings.log_level.clone(),
    };
    init_logging(level.as_deref())?;

    let context = match hostname_ref.get(&args) {
        Some(Ok(hostname)) => ReportContext::new(hostname),
        _ => settings.context(),
    };

    let report = TargetArgs::from_occurrences(&argv, 'r', "report")?;
    let paths = match path_ref.get(&args) {
        Some(Ok(paths)) => paths.0,
        _ => Vec::new(),
    };
    let max_file_size = match max_size_ref.get(&args) {
        Some(result) => result?,
        None => DEFAULT_MAX_FILE_SIZE,
    };

    let hostname = context.hostname().to_string();
    let mut targets = TargetList::with_defaults(context, DEFAULT_TARGET)?;
    for spec in &settings.targets {
        targets.apply(spec)?;
    }
    if !report.is_empty() {
        targets.apply(&report.render())?;
    }
    let targets = targets.with_mode(settings.error_policy()?);
    tracing::info!(targets = %targets, "reporting to {} target(s)", targets.len());

    let reporter = Reporter::new(targets);
    let scanned = scan(&reporter, &hostname, &paths, max_file_size);
    if let Err(e) = &scanned {
        tracing::error!(error = %e, "scan aborted");
    }
    // Finish even after a failed scan so every tsjson array gets closed.
    reporter.finish()?;
    scanned
}

fn main() {
    if let Err(e) = run() {
        eprintln!("multireport error: {e}");
        print_usage();
        std::process::exit(1);
    }
}
