use crate::error::{BenchError, Result};

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Buffer capacity hint for reading log files.
pub const FILE_IO_BUF_SIZE: usize = 4096;

pub const CLIENT_LOG_FILE: &str = "client_output.log";
pub const SERVER_LOG_FILE: &str = "server_output.log";

/// Read a whole log file into memory. Bytes that are not valid UTF-8 are
/// replaced with U+FFFD rather than rejected.
pub fn read_log(path: &Path, buf_size: usize) -> Result<String> {
    let wrap = |source| BenchError::Read {
        path: path.to_path_buf(),
        source,
    };
    let f = File::open(path).map_err(wrap)?;
    let mut reader = BufReader::with_capacity(buf_size.max(1), f);
    let mut raw = Vec::new();
    reader.read_to_end(&mut raw).map_err(wrap)?;
    let text = String::from_utf8_lossy(&raw).into_owned();
    tracing::debug!(path = %path.display(), bytes = text.len(), "log read");
    Ok(text)
}
