//! Client QOS statistics.
//!
//! Each trial in the client log starts with a `Created output file:` line
//! naming the recorded stream (`..._trial_<n>_video-H265...`) and ends with
//! `end_QOS_statistics`. In between the client prints packet counters and
//! min/avg/max lines for bitrate and inter-packet gap:
//!
//! ```text
//! Created output file: out_trial_7_video-H265.mkv
//! begin_QOS_statistics
//! num_packets_received 120
//! num_packets_lost 3
//! kbits_per_second_min 500
//! kbits_per_second_ave 550
//! kbits_per_second_max 600
//! inter_packet_gap_ms_min 1
//! inter_packet_gap_ms_ave 2
//! inter_packet_gap_ms_max 5
//! end_QOS_statistics
//! ```

use crate::domain::{ClientTrial, TrialRecord};
use crate::error::{BenchError, Result, Side};

use super::field;

use regex::Regex;

const SECTION_PATTERN: &str = r"(?s)Created output file:(.*?)end_QOS_statistics";

const TRIAL_PATTERN: &str = concat!(
    r"(?s)^.*trial_(?P<trial>[0-9]{1,3})_video-H265",
    r".*num_packets_received\s(?P<received>[0-9]+)",
    r".*num_packets_lost\s(?P<lost>[0-9]+)",
    r".*kbits_per_second_min\s(?P<br_min>.*?)\n",
    r".*kbits_per_second_ave\s(?P<br_avg>.*?)\n",
    r".*kbits_per_second_max\s(?P<br_max>.*?)\n",
    r".*inter_packet_gap_ms_min\s(?P<gap_min>.*?)\n",
    r".*inter_packet_gap_ms_ave\s(?P<gap_avg>.*?)\n",
    r".*inter_packet_gap_ms_max\s(?P<gap_max>.*?)\n",
);

/// Compiled client patterns; build once, reuse for every segment.
pub struct ClientParser {
    section: Regex,
    trial: Regex,
}

impl ClientParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            section: Regex::new(SECTION_PATTERN)?,
            trial: Regex::new(TRIAL_PATTERN)?,
        })
    }

    /// Text between each `Created output file:` / `end_QOS_statistics` pair.
    pub fn extract_sections<'a>(&self, logs: &'a str) -> Vec<&'a str> {
        let sections: Vec<&str> = self
            .section
            .captures_iter(logs)
            .filter_map(|c| c.get(1))
            .map(|m| m.as_str())
            .collect();
        tracing::debug!(count = sections.len(), "client sections");
        sections
    }

    /// Parse one segment; `index` is only used in the error.
    pub fn parse_trial(&self, segment: &str, index: usize) -> Result<ClientTrial> {
        let caps = self.trial.captures(segment).ok_or(BenchError::Format {
            side: Side::Client,
            index,
        })?;
        let t = ClientTrial {
            trial: field(&caps, "trial"),
            num_packets_received: field(&caps, "received"),
            num_packets_lost: field(&caps, "lost"),
            bitrate_min: field(&caps, "br_min"),
            bitrate_avg: field(&caps, "br_avg"),
            bitrate_max: field(&caps, "br_max"),
            inter_packet_gap_min: field(&caps, "gap_min"),
            inter_packet_gap_avg: field(&caps, "gap_avg"),
            inter_packet_gap_max: field(&caps, "gap_max"),
        };
        tracing::debug!(trial = %t.trial, "client trial parsed");
        Ok(t)
    }

    pub fn parse_trials(&self, segments: &[&str]) -> Result<Vec<TrialRecord>> {
        segments
            .iter()
            .enumerate()
            .map(|(i, s)| self.parse_trial(s, i).map(TrialRecord::from))
            .collect()
    }
}
