use super::EMPTY;
use super::buckets::{bucket_end_offsets, bucket_start_offsets};
use crate::sequence::{Sequence, Symbol};

// The two induction passes. Both expect the buffer to contain already placed
// suffix indices (or EMPTY) and derive further entries from them, each with
// its own fresh set of running bucket cursors.

// ---------- left-to-right scan, places L-type suffixes ----------
pub fn induce_sort_l<Q: Sequence + ?Sized>(seq: &Q, counts: &[usize], sa: &mut [usize]) {
    let mut bucket_starts = bucket_start_offsets(counts);

    // The virtual sentinel would occupy the cell before the first one of the
    // suffix array. It induces the last suffix, which is always L-type.
    let last_suffix_index = seq.len() - 1;
    let bucket_start = &mut bucket_starts[seq.at(last_suffix_index).rank()];
    sa[*bucket_start] = last_suffix_index;
    *bucket_start += 1;

    for scan_index in 0..sa.len() {
        let suffix_index = sa[scan_index];
        if suffix_index == EMPTY || suffix_index == 0 {
            continue;
        }

        // the predecessor suffix is L-type iff seq[p - 1] >= seq[p]
        let predecessor_symbol = seq.at(suffix_index - 1);
        if predecessor_symbol >= seq.at(suffix_index) {
            let bucket_start = &mut bucket_starts[predecessor_symbol.rank()];
            sa[*bucket_start] = suffix_index - 1;
            *bucket_start += 1;
        }
    }
}

// ---------- right-to-left scan, places S-type suffixes ----------
pub fn induce_sort_s<Q: Sequence + ?Sized>(seq: &Q, counts: &[usize], sa: &mut [usize]) {
    let mut bucket_ends = bucket_end_offsets(counts);

    for scan_index in (0..sa.len()).rev() {
        let suffix_index = sa[scan_index];
        if suffix_index == EMPTY || suffix_index == 0 {
            continue;
        }

        // The predecessor suffix is S-type iff seq[p - 1] < seq[p], or both
        // symbols are equal and the bucket end cursor has not yet moved past
        // the scan position. The cursor test substitutes for a full
        // classification re-check of seq[p - 1].
        let predecessor_symbol = seq.at(suffix_index - 1);
        let current_symbol = seq.at(suffix_index);

        let predecessor_is_s_type = predecessor_symbol < current_symbol
            || (predecessor_symbol == current_symbol
                && bucket_ends[predecessor_symbol.rank()] <= scan_index);

        if predecessor_is_s_type {
            let bucket_end = &mut bucket_ends[predecessor_symbol.rank()];
            *bucket_end -= 1;
            sa[*bucket_end] = suffix_index - 1;
        }
    }

    // the sentinel induces nothing on this scan, the position before it is
    // always L-type
}
