//! Attachment → source-file mapping entries.

/// One row of the attachment → source-file report.
///
/// Entries are appended in write order by the extraction run; the CSV
/// export preserves that order. The list lives in the run's
/// [`ExtractReport`](crate::extract::ExtractReport), not in process-global
/// state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingEntry {
    /// Normalized attachment filename, as written to disk.
    pub attachment: String,

    /// The EML file the attachment came from: the path as given on the
    /// command line in single-file mode, the bare file name in directory
    /// mode.
    pub source: String,
}
