use crate::sequence::{Sequence, Symbol};

// Bucket bookkeeping for the induction passes. A bucket is the contiguous
// subrange of the output reserved for suffixes starting with one symbol.
//
// Offsets are recomputed fresh before every pass, because each pass consumes
// its running cursors.

pub fn symbol_counts<Q: Sequence + ?Sized>(seq: &Q, alphabet_size: usize) -> Vec<usize> {
    let mut counts = vec![0; alphabet_size];

    for index in 0..seq.len() {
        counts[seq.at(index).rank()] += 1;
    }

    counts
}

// offset of the first cell of each bucket
pub fn bucket_start_offsets(counts: &[usize]) -> Vec<usize> {
    counts
        .iter()
        .scan(0, |running_offset, count| {
            let start = *running_offset;
            *running_offset += count;
            Some(start)
        })
        .collect()
}

// offset one past the last cell of each bucket, meant to be decremented
// before each placement
pub fn bucket_end_offsets(counts: &[usize]) -> Vec<usize> {
    counts
        .iter()
        .scan(0, |running_offset, count| {
            *running_offset += count;
            Some(*running_offset)
        })
        .collect()
}
