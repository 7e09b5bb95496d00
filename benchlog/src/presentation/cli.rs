use benchlog_core::OutputFormat;
use benchlog_core::reader::{CLIENT_LOG_FILE, FILE_IO_BUF_SIZE, SERVER_LOG_FILE};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Join client QOS and server encoder benchmark logs", long_about = None)]
pub struct Cli {
    /// Log parser progress to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Defaults to `join` with the default log paths
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum FormatArg {
    /// One-line list of mappings
    #[default]
    Text,
    /// JSON array of objects
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Args, Clone)]
pub struct OutputArgs {
    #[arg(short, long, value_enum, default_value_t = FormatArg::Text)]
    pub format: FormatArg,

    /// Read buffer capacity in bytes
    #[arg(long, default_value_t = FILE_IO_BUF_SIZE)]
    pub buf_size: usize,
}

impl Default for OutputArgs {
    fn default() -> Self {
        Self {
            format: FormatArg::Text,
            buf_size: FILE_IO_BUF_SIZE,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse both logs and print the combined per-trial records
    Join {
        #[arg(long, default_value = CLIENT_LOG_FILE)]
        client: PathBuf,
        #[arg(long, default_value = SERVER_LOG_FILE)]
        server: PathBuf,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Print the parsed client QOS records only
    Client {
        #[arg(default_value = CLIENT_LOG_FILE)]
        path: PathBuf,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Print the parsed server encoder records only
    Server {
        #[arg(default_value = SERVER_LOG_FILE)]
        path: PathBuf,
        #[command(flatten)]
        output: OutputArgs,
    },
}
