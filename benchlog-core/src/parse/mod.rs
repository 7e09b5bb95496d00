use regex::Captures;

/// Named capture, trimmed; empty when the group did not take part.
fn field(caps: &Captures<'_>, name: &str) -> String {
    caps.name(name)
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

pub mod client;
pub mod server;
