//! Bucket-sort ranking of masks by frequency.
//!
//! Counts are bounded integers, so masks are grouped into bins indexed by
//! count and the bins are walked from the highest count down. No comparison
//! sort is involved; masks sharing a count keep first-encounter order.

use crate::config::TopN;
use crate::counter::MaskCounts;
use crate::mask::Mask;

/// A mask together with its occurrence count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedMask<'a> {
    pub mask: &'a Mask,
    pub count: u64,
}

/// Masks grouped by occurrence count. Bin `k` holds the masks seen exactly
/// `k` times; bin 0 is always empty.
#[derive(Debug)]
pub struct FrequencyBuckets<'a> {
    bins: Vec<Vec<&'a Mask>>,
}

impl<'a> FrequencyBuckets<'a> {
    /// Single pass over `counts`, sized by the largest observed count.
    pub fn build(counts: &'a MaskCounts) -> Self {
        let max = counts.max_count() as usize;
        let mut bins: Vec<Vec<&'a Mask>> = vec![Vec::new(); max + 1];
        for (mask, count) in counts.iter() {
            bins[count as usize].push(mask);
        }
        Self { bins }
    }

    /// Masks seen exactly `count` times.
    pub fn bin(&self, count: u64) -> &[&'a Mask] {
        usize::try_from(count)
            .ok()
            .and_then(|i| self.bins.get(i))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn max_count(&self) -> u64 {
        (self.bins.len() - 1) as u64
    }

    /// Total masks across all bins.
    pub fn total(&self) -> usize {
        self.bins.iter().map(Vec::len).sum()
    }

    /// Walk masks from highest count to lowest.
    pub fn descending(&self) -> impl Iterator<Item = RankedMask<'a>> + '_ {
        self.bins
            .iter()
            .enumerate()
            .skip(1)
            .rev()
            .flat_map(|(count, masks)| {
                masks.iter().map(move |&mask| RankedMask {
                    mask,
                    count: count as u64,
                })
            })
    }
}

/// Top masks by count.
///
/// `TopN::Count(n)` yields the first `min(n, distinct)` masks, so asking for
/// more masks than exist returns all of them.
pub fn rank(counts: &MaskCounts, top: TopN) -> Vec<RankedMask<'_>> {
    let buckets = FrequencyBuckets::build(counts);
    match top.limit() {
        Some(n) => buckets.descending().take(n).collect(),
        None => buckets.descending().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CountOptions;
    use crate::counter::count;
    use std::io::Cursor;

    fn counts_of(text: &str) -> MaskCounts {
        count(Cursor::new(text.to_string()), &CountOptions::default()).unwrap()
    }

    fn masks(ranked: &[RankedMask<'_>]) -> Vec<String> {
        ranked.iter().map(|r| r.mask.to_string()).collect()
    }

    #[test]
    fn top_one() {
        let counts = counts_of("abc123\nABC123\nabc123\n");
        let ranked = rank(&counts, TopN::Count(1));
        assert_eq!(masks(&ranked), vec!["?l?l?l?d?d?d"]);
        assert_eq!(ranked[0].count, 2);
    }

    #[test]
    fn all_masks_descending() {
        let counts = counts_of("a\n1\n1\nA\nA\nA\n");
        let ranked = rank(&counts, TopN::All);
        assert_eq!(masks(&ranked), vec!["?u", "?d", "?l"]);
        assert_eq!(ranked.iter().map(|r| r.count).collect::<Vec<_>>(), vec![3, 2, 1]);
    }

    #[test]
    fn ties_keep_first_encounter_order() {
        let counts = counts_of("1\nb\nB\n!\n");
        let ranked = rank(&counts, TopN::All);
        assert_eq!(masks(&ranked), vec!["?d", "?l", "?u", "?s"]);
    }

    #[test]
    fn n_larger_than_distinct_returns_everything() {
        let counts = counts_of("a\nb\nC\n");
        let ranked = rank(&counts, TopN::Count(10));
        assert_eq!(masks(&ranked), vec!["?l", "?u"]);
    }

    #[test]
    fn empty_counts() {
        let counts = counts_of("");
        assert!(rank(&counts, TopN::All).is_empty());
        assert!(rank(&counts, TopN::Count(3)).is_empty());
        let buckets = FrequencyBuckets::build(&counts);
        assert_eq!(buckets.max_count(), 0);
        assert_eq!(buckets.total(), 0);
    }

    #[test]
    fn zero_limit_is_empty() {
        let counts = counts_of("a\n");
        assert!(rank(&counts, TopN::Count(0)).is_empty());
    }

    #[test]
    fn buckets_hold_masks_by_count() {
        let counts = counts_of("a\nb\n1\nA\n");
        let buckets = FrequencyBuckets::build(&counts);
        assert_eq!(buckets.max_count(), 2);
        assert!(buckets.bin(0).is_empty());
        assert_eq!(buckets.bin(1).len(), 2);
        assert_eq!(buckets.bin(2).len(), 1);
        assert_eq!(buckets.bin(2)[0].to_string(), "?l");
        assert!(buckets.bin(99).is_empty());
        assert_eq!(buckets.total(), counts.distinct());
    }
}
