#![forbid(unsafe_code)]

pub mod domain;
pub mod error;
pub mod join;
pub mod parse;
pub mod pipeline;
pub mod reader;
pub mod report;

// Re-exports: stable API surface
pub use domain::{ClientTrial, ServerTrial, TrialRecord};
pub use join::join_benchmarks;
pub use parse::client::ClientParser;
pub use parse::server::ServerParser;
pub use pipeline::{PipelineOptions, load_client, load_server, run};
pub use report::{OutputFormat, render};
