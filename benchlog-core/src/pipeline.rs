use crate::domain::TrialRecord;
use crate::error::Result;
use crate::join::join_benchmarks;
use crate::parse::client::ClientParser;
use crate::parse::server::ServerParser;
use crate::reader::{CLIENT_LOG_FILE, FILE_IO_BUF_SIZE, SERVER_LOG_FILE, read_log};

use std::path::{Path, PathBuf};

#[derive(Clone, Debug)]
pub struct PipelineOptions {
    pub client_log: PathBuf,
    pub server_log: PathBuf,
    pub buf_size: usize,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            client_log: PathBuf::from(CLIENT_LOG_FILE),
            server_log: PathBuf::from(SERVER_LOG_FILE),
            buf_size: FILE_IO_BUF_SIZE,
        }
    }
}

/// Parsed client records from one log file.
pub fn load_client(path: &Path, buf_size: usize) -> Result<Vec<TrialRecord>> {
    let logs = read_log(path, buf_size)?;
    let parser = ClientParser::new()?;
    parser.parse_trials(&parser.extract_sections(&logs))
}

/// Parsed server records from one log file.
pub fn load_server(path: &Path, buf_size: usize) -> Result<Vec<TrialRecord>> {
    let logs = read_log(path, buf_size)?;
    let parser = ServerParser::new()?;
    parser.parse_trials(&parser.extract_sections(&logs))
}

/// Read both logs, parse them, and join the trials.
pub fn run(opts: &PipelineOptions) -> Result<Vec<TrialRecord>> {
    // both files are read before any parsing, server first
    let server_logs = read_log(&opts.server_log, opts.buf_size)?;
    let client_logs = read_log(&opts.client_log, opts.buf_size)?;

    let server_parser = ServerParser::new()?;
    let client_parser = ClientParser::new()?;
    // client first, so a doubly broken run reports the client side
    let client = client_parser.parse_trials(&client_parser.extract_sections(&client_logs))?;
    let server = server_parser.parse_trials(&server_parser.extract_sections(&server_logs))?;

    join_benchmarks(&client, &server)
}
