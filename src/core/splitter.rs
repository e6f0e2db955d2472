use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tracing::{debug, info};

use crate::core::classifier::contains_separator;
use crate::core::naming::{base_name, format_file_name};
use crate::core::sink::{FileSinkFactory, Sink, SinkFactory};
use crate::error::SplitError;
use crate::models::{SplitOptions, SplitReport};

/// Tracks where chunk boundaries fall while rows stream past
#[derive(Debug, Clone)]
pub struct ChunkCursor {
    rows_per_chunk: usize,
    rows_in_chunk: usize,
    sequence: usize,
}

impl ChunkCursor {
    pub fn new(rows_per_chunk: usize) -> Self {
        Self {
            rows_per_chunk: rows_per_chunk.max(1),
            rows_in_chunk: 0,
            sequence: 0,
        }
    }

    /// Account for one more data row.
    ///
    /// Returns the 1-based sequence number of a new chunk when this row is the
    /// first one of that chunk.
    pub fn advance(&mut self) -> Option<usize> {
        let starts_chunk = self.sequence == 0 || self.rows_in_chunk == self.rows_per_chunk;
        if starts_chunk {
            self.sequence += 1;
            self.rows_in_chunk = 0;
        }
        self.rows_in_chunk += 1;
        starts_chunk.then_some(self.sequence)
    }

    /// Number of chunks started so far
    pub fn chunks(&self) -> usize {
        self.sequence
    }
}

/// Chunk whose sink is currently open
struct OpenChunk<S> {
    path: PathBuf,
    sink: S,
}

/// Split a delimited file into header-preserving chunks on disk
pub async fn split(
    source: &Path,
    output_dir: &Path,
    options: &SplitOptions,
) -> Result<SplitReport, SplitError> {
    split_with(&FileSinkFactory, source, output_dir, options).await
}

/// Split a delimited file, writing chunks through `sinks`
pub async fn split_with<F: SinkFactory>(
    sinks: &F,
    source: &Path,
    output_dir: &Path,
    options: &SplitOptions,
) -> Result<SplitReport, SplitError> {
    options.validate()?;

    let file = File::open(source)
        .await
        .map_err(|e| SplitError::source_open(source.to_path_buf(), e))?;
    let mut reader = BufReader::new(file);

    let mut report = SplitReport {
        source: source.to_path_buf(),
        ..SplitReport::default()
    };
    let mut line = Vec::new();

    // Preamble: drop non-tabular lines until the header shows up
    let header = loop {
        if !next_line(&mut reader, &mut line, source).await? {
            break None;
        }
        if contains_separator(&line, options.separator) {
            break Some(line.clone());
        }
        report.preamble_lines_skipped += 1;
    };

    if report.preamble_lines_skipped > 0 {
        info!(
            "Discarded {} metadata line(s) from the beginning of {}",
            report.preamble_lines_skipped,
            source.display()
        );
    }

    let Some(header) = header else {
        info!("No tabular line found in {}, nothing to split", source.display());
        return Ok(report);
    };
    debug!("Captured header: {}", String::from_utf8_lossy(&header));
    report.header = Some(String::from_utf8_lossy(&header).into_owned());

    let base = base_name(source);
    let mut cursor = ChunkCursor::new(options.rows_per_chunk);
    let mut current: Option<OpenChunk<F::Sink>> = None;

    while next_line(&mut reader, &mut line, source).await? {
        if let Some(sequence) = cursor.advance() {
            if let Some(chunk) = current.take() {
                finish_chunk(chunk, &mut report).await?;
            }
            let file_name = format_file_name(&options.name_template, &base, sequence);
            current = Some(open_chunk(sinks, output_dir.join(file_name), &header).await?);
        }

        if let Some(chunk) = current.as_mut() {
            chunk
                .sink
                .write_line(&line)
                .await
                .map_err(|e| SplitError::SinkWrite(chunk.path.clone(), e))?;
        }
        report.data_lines += 1;
    }

    if let Some(chunk) = current.take() {
        finish_chunk(chunk, &mut report).await?;
    }

    info!(
        "Split {} into {} files with up to {} lines per file (excluding header)",
        source.display(),
        report.files_written,
        options.rows_per_chunk
    );

    Ok(report)
}

/// Read the next line into `buf` without its line ending.
///
/// Returns `false` at end of input.
async fn next_line<R: AsyncRead + Unpin>(
    reader: &mut BufReader<R>,
    buf: &mut Vec<u8>,
    source: &Path,
) -> Result<bool, SplitError> {
    buf.clear();
    let read = reader
        .read_until(b'\n', buf)
        .await
        .map_err(|e| SplitError::SourceRead(source.to_path_buf(), e))?;
    if read == 0 {
        return Ok(false);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
    }
    // Also covers an unterminated final line ending in `\r`
    if buf.last() == Some(&b'\r') {
        buf.pop();
    }
    Ok(true)
}

async fn open_chunk<F: SinkFactory>(
    sinks: &F,
    path: PathBuf,
    header: &[u8],
) -> Result<OpenChunk<F::Sink>, SplitError> {
    info!("Creating file: {}", path.display());
    let mut sink = sinks
        .create(&path)
        .await
        .map_err(|e| SplitError::SinkCreate(path.clone(), e))?;
    sink.write_line(header)
        .await
        .map_err(|e| SplitError::SinkWrite(path.clone(), e))?;
    Ok(OpenChunk { path, sink })
}

async fn finish_chunk<S: Sink>(
    chunk: OpenChunk<S>,
    report: &mut SplitReport,
) -> Result<(), SplitError> {
    let OpenChunk { path, sink } = chunk;
    sink.close()
        .await
        .map_err(|e| SplitError::SinkWrite(path.clone(), e))?;
    report.files_written += 1;
    report.output_files.push(path);
    Ok(())
}
