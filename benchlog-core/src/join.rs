use crate::domain::TrialRecord;
use crate::error::{BenchError, Result};

/// Join client and server records position by position.
///
/// Both lists must already be in the same trial order; the pair at each
/// position must carry the same `trial`. The combined record is the client
/// record with every server field laid over it, so `bitrate` ends up as
/// the server value.
pub fn join_benchmarks(
    client: &[TrialRecord],
    server: &[TrialRecord],
) -> Result<Vec<TrialRecord>> {
    if client.len() != server.len() {
        return Err(BenchError::SizeMismatch {
            client: client.len(),
            server: server.len(),
        });
    }

    let mut out = Vec::with_capacity(client.len());
    for (position, (c, s)) in client.iter().zip(server).enumerate() {
        if c.trial() != s.trial() {
            return Err(BenchError::TrialMismatch {
                position,
                client: c.trial().to_string(),
                server: s.trial().to_string(),
            });
        }
        let mut rec = c.clone();
        rec.overlay(s);
        out.push(rec);
    }
    tracing::info!(trials = out.len(), "client and server benchmarks joined");
    Ok(out)
}
