use std::io::Write;
use std::path::PathBuf;

use benchlog_core::error::Result;
use benchlog_core::{PipelineOptions, TrialRecord, load_client, load_server, render};

use crate::presentation::cli::OutputArgs;

fn print_records(records: &[TrialRecord], output: &OutputArgs) -> Result<()> {
    let text = render(records, output.format.into())?;
    let mut out = std::io::stdout().lock();
    writeln!(out, "{text}")?;
    Ok(())
}

pub fn handle_join(client: PathBuf, server: PathBuf, output: OutputArgs) -> Result<()> {
    let opts = PipelineOptions {
        client_log: client,
        server_log: server,
        buf_size: output.buf_size,
    };
    tracing::debug!(client = %opts.client_log.display(), server = %opts.server_log.display(), "join");
    let joined = benchlog_core::run(&opts)?;
    print_records(&joined, &output)
}

pub fn handle_client(path: PathBuf, output: OutputArgs) -> Result<()> {
    let records = load_client(&path, output.buf_size)?;
    print_records(&records, &output)
}

pub fn handle_server(path: PathBuf, output: OutputArgs) -> Result<()> {
    let records = load_server(&path, output.buf_size)?;
    print_records(&records, &output)
}
