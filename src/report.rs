//! Rendering ranked masks to an output stream.

use std::io::Write;

use serde::Serialize;

use crate::config::TopN;
use crate::counter::MaskCounts;
use crate::error::Result;
use crate::rank::RankedMask;

const SEPARATOR: &str = "-----------------------------";
const MASK_WIDTH: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Numbered table for the console.
    #[default]
    Text,
    Json,
    Csv,
    /// Bare masks, one per line, usable as a hashcat .hcmask file.
    Hcmask,
}

#[derive(Debug, Serialize)]
pub struct Entry {
    pub rank: usize,
    pub mask: String,
    pub count: u64,
    pub percent: f64,
}

#[derive(Debug, Serialize)]
pub struct Report {
    pub top: Option<usize>,
    pub qualifying: u64,
    pub distinct: usize,
    pub masks: Vec<Entry>,
}

impl Report {
    pub fn new(ranked: &[RankedMask<'_>], counts: &MaskCounts, top: TopN) -> Self {
        let qualifying = counts.qualifying();
        let masks = ranked
            .iter()
            .enumerate()
            .map(|(i, r)| Entry {
                rank: i + 1,
                mask: r.mask.to_string(),
                count: r.count,
                percent: percent(r.count, qualifying),
            })
            .collect();
        Self {
            top: top.limit(),
            qualifying,
            distinct: counts.distinct(),
            masks,
        }
    }
}

fn percent(count: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 * 100.0 / total as f64
    }
}

/// Write `ranked` to `out` in the chosen format.
pub fn write_report<W: Write>(
    out: &mut W,
    format: OutputFormat,
    ranked: &[RankedMask<'_>],
    counts: &MaskCounts,
    top: TopN,
) -> Result<()> {
    match format {
        OutputFormat::Text => write_text(out, ranked, top),
        OutputFormat::Hcmask => {
            for r in ranked {
                writeln!(out, "{}", r.mask)?;
            }
            Ok(())
        }
        OutputFormat::Json => {
            let report = Report::new(ranked, counts, top);
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
            Ok(())
        }
        OutputFormat::Csv => {
            let report = Report::new(ranked, counts, top);
            let mut wtr = csv::Writer::from_writer(&mut *out);
            for entry in &report.masks {
                wtr.serialize(entry)?;
            }
            if report.masks.is_empty() {
                wtr.write_record(["rank", "mask", "count", "percent"])?;
            }
            wtr.flush()?;
            Ok(())
        }
    }
}

/// Console table: header, separator, then `<rank>. <mask>: <count>` lines.
pub fn write_text<W: Write>(out: &mut W, ranked: &[RankedMask<'_>], top: TopN) -> Result<()> {
    match top {
        TopN::All => writeln!(out, "\tTop Password Masks")?,
        TopN::Count(n) => writeln!(out, "\tTop {n} Password Masks")?,
    }
    writeln!(out, "{SEPARATOR}")?;
    for (i, r) in ranked.iter().enumerate() {
        writeln!(out, "{}. {:<width$}: {}", i + 1, r.mask, r.count, width = MASK_WIDTH)?;
    }
    Ok(())
}
