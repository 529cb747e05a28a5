//! The extraction pipeline: load each resolved EML file, enumerate its
//! attachments, write payloads, and record the attachment → source mapping.

pub mod csv;
pub mod writer;

use std::path::{Path, PathBuf};

use crate::error::{ExtractError, Result};
use crate::model::mapping::MappingEntry;
use crate::parser::mime;
use crate::resolver::EmlFile;

/// Options for one extraction run.
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    /// Directory extracted attachments are written to. `None` means the
    /// current working directory, announced per write.
    pub output_dir: Option<PathBuf>,
}

/// Outcome of one extraction run.
///
/// The mapping is owned here rather than living in process-global state, so
/// the CSV exporter receives exactly what this run recorded, in write order.
#[derive(Debug, Default)]
pub struct ExtractReport {
    /// EML files successfully read and parsed.
    pub files_processed: usize,
    /// Attachments written to disk.
    pub attachments_written: usize,
    /// Total payload bytes written.
    pub bytes_written: u64,
    /// One entry per written attachment, in write order.
    pub mapping: Vec<MappingEntry>,
}

/// Ensure the output directory exists, creating missing parents.
///
/// Returns the directory attachment paths are joined against. For the cwd
/// default this is empty, so joins resolve relative to the working
/// directory.
pub fn prepare_output_dir(opts: &ExtractOptions) -> Result<PathBuf> {
    match &opts.output_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir).map_err(|e| ExtractError::OutputDir {
                path: dir.clone(),
                source: e,
            })?;
            Ok(dir.clone())
        }
        None => Ok(PathBuf::new()),
    }
}

/// Run the extraction over a resolved sequence of EML files.
///
/// File-level errors (missing file, unreadable content, parse failure) and
/// attachment-level write errors are logged and skipped; only output
/// directory preparation can fail the whole run here. The progress callback
/// receives `(current, total)`.
pub fn extract_all(
    files: &[EmlFile],
    opts: &ExtractOptions,
    progress: Option<&dyn Fn(usize, usize)>,
) -> Result<ExtractReport> {
    let output_dir = prepare_output_dir(opts)?;
    let announce_cwd = opts.output_dir.is_none();

    let mut report = ExtractReport::default();
    let total = files.len();

    for (i, file) in files.iter().enumerate() {
        if let Some(cb) = progress {
            cb(i, total);
        }
        if let Err(e) = extract_one(file, &output_dir, announce_cwd, &mut report) {
            tracing::error!(source = %file.path.display(), error = %e, "Skipping file");
        }
    }
    if let Some(cb) = progress {
        cb(total, total);
    }

    Ok(report)
}

/// Extract the attachments of a single EML file into `output_dir`.
fn extract_one(
    file: &EmlFile,
    output_dir: &Path,
    announce_cwd: bool,
    report: &mut ExtractReport,
) -> Result<()> {
    let raw = std::fs::read(&file.path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ExtractError::FileNotFound(file.path.clone())
        } else {
            ExtractError::io(&file.path, e)
        }
    })?;

    let message = mime::parse(&raw).ok_or_else(|| ExtractError::Parse(file.path.clone()))?;
    report.files_processed += 1;

    for record in mime::enumerate_attachments(&message) {
        let filename = writer::normalize_filename(&record.filename);
        tracing::info!(
            attachment = %filename,
            content_type = %record.content_type,
            source = %file.source_label,
            "Found attachment"
        );

        match writer::write_attachment(output_dir, &filename, &record.payload) {
            Ok(path) => {
                if announce_cwd {
                    let dest = std::env::current_dir()
                        .map(|cwd| cwd.join(&path))
                        .unwrap_or_else(|_| path.clone());
                    println!("Saving attachment to: {}", dest.display());
                }
                if record.is_nested_message {
                    println!("The attachment '{filename}' is itself an email message.");
                }
                report.attachments_written += 1;
                report.bytes_written += record.payload.len() as u64;
                report.mapping.push(MappingEntry {
                    attachment: filename,
                    source: file.source_label.clone(),
                });
            }
            Err(e) => {
                tracing::error!(source = %file.source_label, error = %e, "Failed to write attachment");
            }
        }
    }

    Ok(())
}
