// benchlog_core/src/domain.rs
use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Field-name → value mapping for one trial. Values stay as the text
/// captured from the log; keys keep their first insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrialRecord {
    fields: Vec<(String, String)>,
}

impl TrialRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key`, replacing the value in place when it already exists.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// The `trial` field; empty when the record was built by hand without one.
    pub fn trial(&self) -> &str {
        self.get("trial").unwrap_or("")
    }

    /// Copy every field of `other` over this record; `other` wins on collision.
    pub fn overlay(&mut self, other: &TrialRecord) {
        for (k, v) in &other.fields {
            self.insert(k.as_str(), v.as_str());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TrialRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut rec = TrialRecord::new();
        for (k, v) in iter {
            rec.insert(k, v);
        }
        rec
    }
}

impl Serialize for TrialRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (k, v) in &self.fields {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// Renders as `{'key': 'value', ...}`, each string quoted the way a byte
/// string `repr` would be.
impl fmt::Display for TrialRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (k, v)) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", quote(k), quote(v))?;
        }
        f.write_str("}")
    }
}

/// Single quotes unless the text holds `'` and no `"`. Backslash, the
/// chosen quote, tab, CR, LF and anything outside printable ASCII are
/// escaped, non-ASCII as `\xNN` per UTF-8 byte.
fn quote(s: &str) -> String {
    let q = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };
    let mut out = String::with_capacity(s.len() + 2);
    out.push(q);
    for b in s.bytes() {
        match b {
            b'\\' => out.push_str("\\\\"),
            b'\t' => out.push_str("\\t"),
            b'\n' => out.push_str("\\n"),
            b'\r' => out.push_str("\\r"),
            _ if b == q as u8 => {
                out.push('\\');
                out.push(q);
            }
            0x20..=0x7e => out.push(b as char),
            _ => out.push_str(&format!("\\x{b:02x}")),
        }
    }
    out.push(q);
    out
}

/// QOS statistics reported by the streaming client for one trial.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientTrial {
    pub trial: String,
    pub num_packets_received: String,
    pub num_packets_lost: String,
    pub bitrate_min: String,
    pub bitrate_avg: String,
    pub bitrate_max: String,
    pub inter_packet_gap_min: String,
    pub inter_packet_gap_avg: String,
    pub inter_packet_gap_max: String,
}

impl From<ClientTrial> for TrialRecord {
    fn from(t: ClientTrial) -> Self {
        TrialRecord::from_iter([
            ("trial", t.trial),
            ("num_packets_received", t.num_packets_received),
            ("num_packets_lost", t.num_packets_lost),
            ("bitrate_min", t.bitrate_min),
            ("bitrate_avg", t.bitrate_avg),
            ("bitrate_max", t.bitrate_max),
            ("inter_packet_gap_min", t.inter_packet_gap_min),
            ("inter_packet_gap_avg", t.inter_packet_gap_avg),
            ("inter_packet_gap_max", t.inter_packet_gap_max),
        ])
    }
}

/// Encoder settings and x265 statistics reported by the server for one trial.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerTrial {
    pub trial: String,
    pub fps: String,
    pub bitrate: String,
    pub datagram_size: String,
    pub nalu: String,
    pub qp: String,
    pub codec_bitrate: String,
}

impl From<ServerTrial> for TrialRecord {
    fn from(t: ServerTrial) -> Self {
        TrialRecord::from_iter([
            ("trial", t.trial),
            ("fps", t.fps),
            ("bitrate", t.bitrate),
            ("datagram_size", t.datagram_size),
            ("nalu", t.nalu),
            ("qp", t.qp),
            ("codec_bitrate", t.codec_bitrate),
        ])
    }
}
