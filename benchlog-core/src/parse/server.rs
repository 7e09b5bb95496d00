//! Server encoder statistics.
//!
//! A server trial runs from the `trial: <n>` banner up to the x265 summary
//! line `consecutive B-frames: 100.0%`. The fields picked out of it are the
//! configured output framerate, target bitrate, UDP datagram size, the max
//! NALU size, and the average QP / bitrate from the x265 `frame I:` summary.

use crate::domain::{ServerTrial, TrialRecord};
use crate::error::{BenchError, Result, Side};

use super::field;

use regex::Regex;

const SECTION_PATTERN: &str = r"(?s)(trial.*?)consecutive B-frames: 100\.0%";

const TRIAL_PATTERN: &str = concat!(
    r"(?s)^trial:\s(?P<trial>[0-9]{1,3})",
    r".*out_framerate:\s(?P<fps>[0-9]+)",
    r".*bitrate:\s(?P<bitrate>[0-9]{3})",
    r".*UDP:\s(?P<datagram>[0-9]{3,4})",
    r".*Max NALU size:\s(?P<nalu>[0-9]+)",
    r".*x265 \[info\]: frame I:.*, Avg QP:(?P<qp>.*?)\skb/s: (?P<kbps>.*?)\n",
);

pub struct ServerParser {
    section: Regex,
    trial: Regex,
}

impl ServerParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            section: Regex::new(SECTION_PATTERN)?,
            trial: Regex::new(TRIAL_PATTERN)?,
        })
    }

    /// Spans from `trial` up to (not including) the B-frames summary.
    pub fn extract_sections<'a>(&self, logs: &'a str) -> Vec<&'a str> {
        let sections: Vec<&str> = self
            .section
            .captures_iter(logs)
            .filter_map(|c| c.get(1))
            .map(|m| m.as_str())
            .collect();
        tracing::debug!(count = sections.len(), "server sections");
        sections
    }

    pub fn parse_trial(&self, segment: &str, index: usize) -> Result<ServerTrial> {
        let caps = self.trial.captures(segment).ok_or(BenchError::Format {
            side: Side::Server,
            index,
        })?;
        let t = ServerTrial {
            trial: field(&caps, "trial"),
            fps: field(&caps, "fps"),
            bitrate: field(&caps, "bitrate"),
            datagram_size: field(&caps, "datagram"),
            nalu: field(&caps, "nalu"),
            qp: field(&caps, "qp"),
            codec_bitrate: field(&caps, "kbps"),
        };
        tracing::debug!(trial = %t.trial, "server trial parsed");
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

#[cfg(test)]
mod tests {
    use super::*;

    fn trial_block(trial: u32, bitrate: u32) -> String {
        format!(
            "trial: {trial}\n\
             in_framerate: 30 out_framerate: 30\n\
             bitrate: {bitrate}\n\
             UDP: 1400\n\
             Max NALU size: 9000\n\
             x265 [info]: frame I:      3, Avg QP:22.5  kb/s: 500.12 \n\
             x265 [info]: consecutive B-frames: 100.0%\n"
        )
    }

    #[test]
    fn parses_documented_layout() {
        let p = ServerParser::new().unwrap();
        let log = trial_block(3, 512);
        let sections = p.extract_sections(&log);
        assert_eq!(sections.len(), 1);
        let rec: TrialRecord = p.parse_trial(sections[0], 0).unwrap().into();
        let expected = TrialRecord::from_iter([
            ("trial", "3"),
            ("fps", "30"),
            ("bitrate", "512"),
            ("datagram_size", "1400"),
            ("nalu", "9000"),
            ("qp", "22.5"),
            ("codec_bitrate", "500.12"),
        ]);
        assert_eq!(rec, expected);
    }

    #[test]
    fn section_keeps_leading_trial_token() {
        let p = ServerParser::new().unwrap();
        let log = format!("encoder up\n{}{}", trial_block(1, 256), trial_block(2, 768));
        let sections = p.extract_sections(&log);
        assert_eq!(sections.len(), 2);
        assert!(sections[0].starts_with("trial: 1"));
        assert!(sections[1].starts_with("trial: 2"));
        assert!(!sections[0].contains("consecutive B-frames"));

        let recs = p.parse_trials(&sections).unwrap();
        assert_eq!(recs[0].get("bitrate"), Some("256"));
        assert_eq!(recs[1].get("bitrate"), Some("768"));
    }

    #[test]
    fn no_markers_yields_empty() {
        let p = ServerParser::new().unwrap();
        assert!(p.extract_sections("").is_empty());
        assert!(p.extract_sections("trial: 1\nbitrate: 512\n").is_empty());
    }

    #[test]
    fn bitrate_must_be_three_digits() {
        let p = ServerParser::new().unwrap();
        let log = trial_block(1, 64);
        let err = p.parse_trial(p.extract_sections(&log)[0], 2).unwrap_err();
        assert!(matches!(
            err,
            BenchError::Format {
                side: Side::Server,
                index: 2
            }
        ));
    }

    #[test]
    fn segment_must_open_with_trial_banner() {
        let p = ServerParser::new().unwrap();
        let block = trial_block(1, 512).replacen("trial: 1", "trial_count: 1", 1);
        let sections = p.extract_sections(&block);
        assert_eq!(sections.len(), 1);
        assert!(p.parse_trial(sections[0], 0).is_err());
    }

    #[test]
    fn non_ascii_digits_are_rejected() {
        let p = ServerParser::new().unwrap();
        let block = trial_block(3, 512).replacen("trial: 3", "trial: \u{663}", 1);
        let sections = p.extract_sections(&block);
        assert_eq!(sections.len(), 1);
        assert!(p.parse_trial(sections[0], 0).is_err());
    }

    #[test]
    fn last_avg_qp_after_frame_i_wins() {
        let p = ServerParser::new().unwrap();
        let block = trial_block(1, 512).replacen(
            "x265 [info]: consecutive",
            "x265 [info]: frame P:    297, Avg QP:27.10  kb/s: 210.40\n\
             x265 [info]: consecutive",
            1,
        );
        let t = p.parse_trial(p.extract_sections(&block)[0], 0).unwrap();
        assert_eq!(t.qp, "27.10");
        assert_eq!(t.codec_bitrate, "210.40");
    }

    #[test]
    fn parse_is_pure() {
        let p = ServerParser::new().unwrap();
        let log = trial_block(9, 999);
        let a = p.parse_trials(&p.extract_sections(&log)).unwrap();
        let b = p.parse_trials(&p.extract_sections(&log)).unwrap();
        assert_eq!(a, b);
    }
}
