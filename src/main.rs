//! CLI entry point for `emlextract`.

use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use indicatif::{ProgressBar, ProgressStyle};

use emlextract::config;
use emlextract::extract::{self, csv, ExtractOptions, ExtractReport};
use emlextract::resolver::{self, EmlFile};

const MANUAL: &str = "\
emlextract is a tool to extract attachments from EML files.

The input can be a single EML file, or a directory searched recursively \
for EML files. Extracted attachments are saved to the current working \
directory by default, or to a designated folder using the -o flag.

Extract the attachments of a single file:
    emlextract -f /mail/invoice.eml

Extract attachments from every EML file under a folder:
    emlextract -i /mail -o /mail/output

Also export a CSV mapping each attachment to its originating EML file:
    emlextract -v -i /mail -o /mail/output -c results.csv";

#[derive(Parser)]
#[command(
    name = "emlextract",
    version,
    about = "Extract file attachments from EML files",
    after_long_help = MANUAL
)]
struct Cli {
    /// Print the extended manual
    #[arg(short, long)]
    man: bool,

    /// Verbose logging of discovered attachments (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Single input EML file
    #[arg(short = 'f', long = "inputFile", value_name = "FILE")]
    input_file: Option<PathBuf>,

    /// Input directory of EML files, searched recursively
    #[arg(short = 'i', long = "inputdir", value_name = "DIR")]
    input_dir: Option<PathBuf>,

    /// Directory to store extracted attachments in (default: current directory)
    #[arg(short = 'o', long = "outputdir", value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Name of a CSV file to export the attachment → EML mapping to
    #[arg(short = 'c', long = "csv", value_name = "FILE")]
    csv: Option<PathBuf>,

    /// The tool takes no positional arguments; any supplied aborts with usage text
    #[arg(value_name = "EML_SOURCE", hide = true)]
    positional: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.man {
        Cli::command().print_long_help()?;
        return Ok(());
    }

    if !cli.positional.is_empty() {
        Cli::command().print_help()?;
        return Ok(());
    }

    let config = config::load_config();
    setup_logging(cli.verbose, &config);

    // An empty -o value means the same as no -o at all: the current
    // working directory.
    let opts = ExtractOptions {
        output_dir: cli
            .output_dir
            .clone()
            .filter(|p| !p.as_os_str().is_empty())
            .or_else(|| config.extract.default_output_dir.clone()),
    };

    // One resolver feeds one pipeline, whether the input is a file, a
    // directory, or both (single file first, as the tool always behaved).
    let mut files: Vec<EmlFile> = Vec::new();
    if let Some(path) = &cli.input_file {
        files.extend(resolver::resolve_single_file(path));
    }
    if let Some(dir) = &cli.input_dir {
        files.extend(resolver::resolve_dir(dir)?);
    }

    let pb = (files.len() > 1 && cli.verbose == 0).then(|| {
        let pb = ProgressBar::new(files.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} Extracting [{bar:40.cyan/blue}] {pos}/{len}")
                .expect("valid template")
                .progress_chars("#>-"),
        );
        pb
    });

    let report = match &pb {
        Some(bar) => extract::extract_all(
            &files,
            &opts,
            Some(&|current: usize, _total: usize| {
                bar.set_position(current as u64);
            }),
        )?,
        None => extract::extract_all(&files, &opts, None)?,
    };

    if let Some(bar) = &pb {
        bar.finish_and_clear();
    }

    if let Some(csv_name) = &cli.csv {
        let csv_path = opts
            .output_dir
            .clone()
            .unwrap_or_default()
            .join(csv_name);
        csv::export_mapping(&report.mapping, &csv_path)?;
        println!("  Wrote mapping CSV to {}", csv_path.display());
    }

    print_summary(&report);
    Ok(())
}

/// Set up tracing to stderr; `-v` count overrides the configured level.
fn setup_logging(verbose: u8, config: &config::Config) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let level = match verbose {
        0 => config.general.log_level.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .init();
}

/// Print the end-of-run summary.
fn print_summary(report: &ExtractReport) {
    use humansize::{format_size, BINARY};

    println!();
    println!("  {:<25} {}", "Files processed", report.files_processed);
    println!(
        "  {:<25} {}",
        "Attachments extracted", report.attachments_written
    );
    println!(
        "  {:<25} {}",
        "Total size",
        format_size(report.bytes_written, BINARY)
    );
    println!();
}
