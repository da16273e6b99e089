//! File-level operations built on the streaming layer.
//!
//! Several inputs compressed into one output share a single encoder
//! session, so the output decodes with one decoder session into the
//! concatenation of the inputs.

use std::ffi::OsString;
use std::fs::File;
use std::path::{Path, PathBuf};

use tracing::{info, warn};
use walkdir::WalkDir;

use crate::config::Config;
use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::error::Result;
use crate::io::{compress_stream, decompress_stream, StreamStats};

/// Extension appended to compressed files.
pub const COMPRESSED_EXTENSION: &str = "lzw";

/// Extensions that `compress_tree` leaves alone.
pub const SKIPPED_EXTENSIONS: &[&str] = &["lzw", "huffman"];

/// A file that was processed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileReport {
    /// Input path.
    pub path: PathBuf,
    /// Counters for the input.
    pub stats: StreamStats,
}

/// A file that was not processed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedFile {
    /// Input path.
    pub path: PathBuf,
    /// Why it was skipped.
    pub reason: String,
}

/// Outcome of a batch operation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Files processed, in order.
    pub processed: Vec<FileReport>,
    /// Files skipped, in order.
    pub skipped: Vec<SkippedFile>,
}

impl BatchReport {
    /// Total bytes read across processed files.
    pub fn bytes_in(&self) -> u64 {
        self.processed.iter().map(|f| f.stats.bytes_in).sum()
    }

    /// Total bytes written across processed files.
    pub fn bytes_out(&self) -> u64 {
        self.processed.iter().map(|f| f.stats.bytes_out).sum()
    }
}

/// Compress `inputs`, in order, into `output` with one encoder session.
///
/// An input that cannot be opened, or is not a regular file, is logged,
/// recorded as skipped, and does not touch the session.
///
/// # Errors
/// Fails if `output` cannot be created or on any I/O error after an input
/// was opened.
pub fn compress_files<P: AsRef<Path>>(
    output: &Path,
    inputs: &[P],
    config: &Config,
) -> Result<BatchReport> {
    let mut out = File::create(output)?;
    let mut encoder = Encoder::with_config(config);
    let mut report = BatchReport::default();

    for input in inputs {
        let path = input.as_ref();
        let file = match open_regular(path) {
            Ok(file) => file,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "cannot open input, skipping");
                report.skipped.push(SkippedFile {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                });
                continue;
            }
        };
        let stats = compress_stream(&mut encoder, file, &mut out)?;
        report.processed.push(FileReport {
            path: path.to_path_buf(),
            stats,
        });
    }

    encoder.close();
    info!(
        output = %output.display(),
        files = report.processed.len(),
        skipped = report.skipped.len(),
        "compression completed"
    );
    Ok(report)
}

/// Decompress `input` into `output` with one decoder session.
pub fn decompress_file(input: &Path, output: &Path, config: &Config) -> Result<StreamStats> {
    let reader = File::open(input)?;
    let writer = File::create(output)?;
    let mut decoder = Decoder::with_config(config);
    let stats = decompress_stream(&mut decoder, reader, writer)?;
    decoder.close();
    Ok(stats)
}

/// Compress every regular file under `root` to a sibling `<file>.lzw`.
///
/// Symbolic links are followed. Each file gets its own session. Files already carrying one of
/// [`SKIPPED_EXTENSIONS`] are recorded as skipped.
pub fn compress_tree(root: &Path, config: &Config) -> Result<BatchReport> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
        let entry = entry.map_err(std::io::Error::from)?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }

    let mut report = BatchReport::default();
    for path in files {
        if has_skipped_extension(&path) {
            report.skipped.push(SkippedFile {
                path,
                reason: "already compressed".to_string(),
            });
            continue;
        }
        let target = compressed_path(&path);
        let reader = File::open(&path)?;
        let writer = File::create(&target)?;
        let mut encoder = Encoder::with_config(config);
        let stats = compress_stream(&mut encoder, reader, writer)?;
        encoder.close();
        report.processed.push(FileReport { path, stats });
    }

    info!(
        root = %root.display(),
        files = report.processed.len(),
        skipped = report.skipped.len(),
        "tree compression completed"
    );
    Ok(report)
}

fn open_regular(path: &Path) -> std::io::Result<File> {
    let file = File::open(path)?;
    if !file.metadata()?.is_file() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "not a regular file",
        ));
    }
    Ok(file)
}

/// `path` with `.lzw` appended to its file name.
pub fn compressed_path(path: &Path) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(".");
    name.push(COMPRESSED_EXTENSION);
    PathBuf::from(name)
}

fn has_skipped_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SKIPPED_EXTENSIONS.contains(&ext))
}
