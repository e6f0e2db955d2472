use std::io;
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};

/// An open, writable output for one chunk
#[allow(async_fn_in_trait)]
pub trait Sink {
    /// Write `line` followed by a newline
    async fn write_line(&mut self, line: &[u8]) -> io::Result<()>;

    /// Flush and release the sink
    async fn close(self) -> io::Result<()>;
}

/// Creates sinks for output paths
#[allow(async_fn_in_trait)]
pub trait SinkFactory {
    type Sink: Sink;

    /// Create (or truncate) the output at `path`
    async fn create(&self, path: &Path) -> io::Result<Self::Sink>;
}

/// Buffered output file on disk
pub struct FileSink {
    writer: BufWriter<File>,
}

impl Sink for FileSink {
    async fn write_line(&mut self, line: &[u8]) -> io::Result<()> {
        self.writer.write_all(line).await?;
        self.writer.write_all(b"\n").await
    }

    async fn close(mut self) -> io::Result<()> {
        self.writer.flush().await?;
        self.writer.shutdown().await
    }
}

/// Creates [`FileSink`]s on the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSinkFactory;

impl SinkFactory for FileSinkFactory {
    type Sink = FileSink;

    async fn create(&self, path: &Path) -> io::Result<FileSink> {
        let file = File::create(path).await?;
        Ok(FileSink {
            writer: BufWriter::new(file),
        })
    }
}
