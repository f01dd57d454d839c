use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::showdown::{PotResult, ShowdownResult};

/// One settled hand, serialized as a single JSONL line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementRecord {
    /// Unique identifier for this hand (format: YYYYMMDD-NNNNNN)
    pub hand_id: String,
    /// Community cards at showdown
    pub board: Vec<Card>,
    /// Per-pot outcome, main pot first
    pub pots: Vec<PotResult>,
    /// Everyone who won at least one pot
    pub winners: Vec<usize>,
    /// Chips left undistributed because no contender was eligible
    #[serde(default)]
    pub unclaimed: u32,
    /// Timestamp when the hand was settled (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

impl SettlementRecord {
    pub fn new(hand_id: String, board: &[Card], result: &ShowdownResult) -> Self {
        Self {
            hand_id,
            board: board.to_vec(),
            pots: result.pot_results.clone(),
            winners: result.winner_ids.clone(),
            unclaimed: result.unclaimed.iter().map(|p| p.amount).sum(),
            ts: None,
        }
    }
}

pub fn format_hand_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct HandLogger {
    writer: Option<BufWriter<std::fs::File>>,
    date: String,
    seq: u32,
}

impl HandLogger {
    /// Opens `path` for appending, creating parent directories as needed.
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_hand_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &SettlementRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
