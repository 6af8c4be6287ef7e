//! Temp capture file for the child's combined output.
//!
//! The file's path is owned by a [`TempPath`], so it is deleted when the
//! capture is dropped on any exit path. [`TempCapture::remove`] deletes it
//! explicitly so a failure can be reported.

use crate::error::{LaunchError, Result};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use std::process::Stdio;
use tempfile::{Builder, TempPath};

/// Scoped temp file that receives a child's stdout and stderr.
#[derive(Debug)]
pub struct TempCapture {
    /// Write handle, `None` once closed.
    writer: Option<File>,
    path: TempPath,
}

impl TempCapture {
    /// Create the capture file in `dir`, or in the system temp directory.
    pub fn create(dir: Option<&Path>) -> Result<Self> {
        let mut builder = Builder::new();
        builder.prefix("txt").suffix(".tmp");
        let file = match dir {
            Some(dir) => builder.tempfile_in(dir),
            None => builder.tempfile(),
        }
        .map_err(|source| LaunchError::TempFile { source })?;

        let (writer, path) = file.into_parts();
        let capture = Self {
            writer: Some(writer),
            path,
        };
        tracing::debug!(path = %capture.path().display(), "created temp capture file");
        Ok(capture)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write handles for the child's stdout and stderr.
    ///
    /// Both are clones of the capture file's handle, so output from the two
    /// streams is interleaved in the order it was written.
    pub fn stdio(&self) -> Result<(Stdio, Stdio)> {
        let writer = self.writer.as_ref().ok_or_else(|| LaunchError::TempFile {
            source: io::Error::other("capture file is already closed for writing"),
        })?;
        let clone = || {
            writer
                .try_clone()
                .map_err(|source| LaunchError::TempFile { source })
        };
        let stdout = clone()?;
        let stderr = clone()?;
        Ok((Stdio::from(stdout), Stdio::from(stderr)))
    }

    /// Close this process's write handle. The file itself stays on disk.
    pub fn close_writer(&mut self) {
        if self.writer.take().is_some() {
            tracing::debug!("closed temp capture write handle");
        }
    }

    /// Read at most `limit` bytes from the start of the file.
    pub fn read_back(&self, limit: usize) -> Result<Vec<u8>> {
        let file = File::open(&self.path).map_err(|source| LaunchError::OpenTemp { source })?;

        let mut buf = Vec::with_capacity(limit);
        file.take(limit as u64)
            .read_to_end(&mut buf)
            .map_err(|source| LaunchError::ReadOutput { source })?;
        Ok(buf)
    }

    /// Delete the file now, reporting failure.
    pub fn remove(mut self) -> Result<()> {
        self.close_writer();
        let path = self.path.to_path_buf();
        self.path
            .close()
            .map_err(|source| LaunchError::DeleteTemp { path, source })
    }
}
