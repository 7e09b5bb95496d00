pub mod handlers;

use crate::presentation::cli::{Commands, OutputArgs};
use benchlog_core::error::Result;
use benchlog_core::reader::{CLIENT_LOG_FILE, SERVER_LOG_FILE};
use std::path::PathBuf;

pub fn run(command: Option<Commands>) -> Result<()> {
    match command {
        Some(Commands::Join {
            client,
            server,
            output,
        }) => handlers::handle_join(client, server, output),
        Some(Commands::Client { path, output }) => handlers::handle_client(path, output),
        Some(Commands::Server { path, output }) => handlers::handle_server(path, output),
        None => handlers::handle_join(
            PathBuf::from(CLIENT_LOG_FILE),
            PathBuf::from(SERVER_LOG_FILE),
            OutputArgs::default(),
        ),
    }
}
