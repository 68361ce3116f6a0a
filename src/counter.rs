//! Mask counting over a wordlist.

use std::io::BufRead;
use std::path::Path;

use indexmap::IndexMap;

use crate::config::{CountOptions, LengthBasis};
use crate::error::{MaskError, Result};
use crate::mask::Mask;
use crate::progress::IngestProgress;
use crate::wordlist::{self, Line, WordlistReader};

/// Result of one ingestion pass.
///
/// Masks iterate in the order they were first seen. The sum of all counts
/// equals [`MaskCounts::qualifying`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaskCounts {
    frequencies: IndexMap<Mask, u64>,
    qualifying: u64,
    lines: u64,
    filtered: u64,
}

impl MaskCounts {
    pub fn get(&self, mask: &Mask) -> Option<u64> {
        self.frequencies.get(mask).copied()
    }

    /// `(mask, count)` pairs in first-encounter order.
    pub fn iter(&self) -> impl Iterator<Item = (&Mask, u64)> + '_ {
        self.frequencies.iter().map(|(m, &c)| (m, c))
    }

    /// Number of distinct masks.
    pub fn distinct(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Words that passed the length filter.
    pub fn qualifying(&self) -> u64 {
        self.qualifying
    }

    /// All lines read, qualifying or not.
    pub fn lines(&self) -> u64 {
        self.lines
    }

    /// Lines rejected by the length filter.
    pub fn filtered(&self) -> u64 {
        self.filtered
    }

    /// Largest count of any mask, 0 when empty.
    pub fn max_count(&self) -> u64 {
        self.frequencies.values().copied().max().unwrap_or(0)
    }
}

/// Accumulates masks line by line.
pub struct MaskCounter {
    options: CountOptions,
    counts: MaskCounts,
}

impl MaskCounter {
    pub fn new(options: CountOptions) -> Self {
        Self {
            options,
            counts: MaskCounts::default(),
        }
    }

    /// Record one wordlist line, applying the length filter.
    pub fn record(&mut self, line: &Line<'_>) {
        self.counts.lines += 1;
        let word = line.word();
        let len = match self.options.length_basis {
            LengthBasis::Raw => line.raw_len(),
            LengthBasis::Word => word.chars().count(),
        };
        if !self.options.min_length.accepts(len) {
            self.counts.filtered += 1;
            return;
        }
        self.record_word(word);
    }

    /// Record a word that is already known to qualify.
    pub fn record_word(&mut self, word: &str) {
        let mask = Mask::of(word, self.options.class_mode);
        *self.counts.frequencies.entry(mask).or_insert(0) += 1;
        self.counts.qualifying += 1;
    }

    pub fn distinct(&self) -> usize {
        self.counts.frequencies.len()
    }

    pub fn finish(self) -> MaskCounts {
        self.counts
    }
}

/// Count masks over every line of `input`.
pub fn count<R: BufRead>(input: R, options: &CountOptions) -> Result<MaskCounts> {
    count_with_progress(input, options, &IngestProgress::hidden())
}

pub fn count_with_progress<R: BufRead>(
    input: R,
    options: &CountOptions,
    progress: &IngestProgress,
) -> Result<MaskCounts> {
    let mut reader = WordlistReader::new(input, options.encoding);
    drain(&mut reader, options, progress)
}

/// Count masks in the wordlist at `path`.
pub fn count_path(path: &Path, options: &CountOptions, progress: &IngestProgress) -> Result<MaskCounts> {
    let mut reader = wordlist::open(path, options.encoding)?;
    drain(&mut reader, options, progress).map_err(|err| match err {
        MaskError::Stream(e) => MaskError::from_io(path, e),
        other => other,
    })
}

fn drain<R: BufRead>(
    reader: &mut WordlistReader<R>,
    options: &CountOptions,
    progress: &IngestProgress,
) -> Result<MaskCounts> {
    let mut counter = MaskCounter::new(options.clone());
    while let Some(line) = reader.next_line()? {
        counter.record(&line);
        progress.tick(line.number, counter.distinct());
    }
    progress.finish(reader.lines_read());
    Ok(counter.finish())
}
