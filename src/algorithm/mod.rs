mod buckets;
mod classify;
mod inducing;


use crate::sequence::{Sequence, Symbol};

use buckets::{bucket_end_offsets, symbol_counts};
use classify::{for_each_lms_reversed, is_lms_type};

// marks unfilled buffer cells, outside the valid index range [0, n)
pub const EMPTY: usize = usize::MAX;

// Sorts all suffixes of seq into sa, as described in, Ge Nong, "Two Efficient
// Algorithms for Linear Time Suffix Array Construction," IEEE Transactions on
// Computers, vol. 60, no. 10, Oct. 2011, with optimizations from, [Nong 11,
// OSACA] Ge Nong, "An Optimal Suffix Array Construction Algorithm," Technical
// Report, Sun Yat-sen University, 2011.
//
// Expects sa to be of the same length as seq. Every symbol rank of seq must
// be smaller than alphabet_size.
pub fn suffix_array_induced_sort<Q: Sequence + ?Sized>(
    seq: &Q,
    sa: &mut [usize],
    alphabet_size: usize,
) {
    let n = seq.len();
    if n == 0 {
        return;
    }

    debug_assert_eq!(sa.len(), n);
    sa.fill(EMPTY);

    let counts = symbol_counts(seq, alphabet_size);

    // ---------- stage 1: reduce the problem by at least half ----------

    // an approximate placement, grouping LMS suffixes by first symbol, is
    // enough for the inductions to sort them as substrings
    seed_lms_suffixes(seq, &counts, sa);
    inducing::induce_sort_l(seq, &counts, sa);
    inducing::induce_sort_s(seq, &counts, sa);

    let num_lms = compact_lms_indices(seq, sa);
    if num_lms == 0 {
        // without LMS positions, the inductions above already sorted everything
        return;
    }

    let num_names = name_lms_substrings(seq, sa, num_lms);

    // ---------- stage 2: solve the reduced problem ----------

    if num_names < num_lms {
        // Names are not yet unique, recurse on the name sequence. It lives in
        // sa[num_lms, 2 * num_lms) and its suffix array fits in front of it,
        // because 2 * num_lms <= n. The split hands out the two disjoint
        // windows of the one buffer.
        let (reduced_sa, rest) = sa.split_at_mut(num_lms);
        let reduced_seq = rest.view(0, num_lms);

        suffix_array_induced_sort(reduced_seq, reduced_sa, num_names);
    } else {
        // all names are distinct, so the reduced suffix array is simply the
        // inverse permutation of the name sequence
        for reduced_index in 0..num_lms {
            let name = sa[num_lms + reduced_index];
            sa[name] = reduced_index;
        }
    }

    // ---------- stage 3: induce the result for the original problem ----------

    finalize_from_sorted_lms_suffixes(seq, &counts, sa, num_lms);
}

// Visits LMS positions right to left and places each at the running end of
// its symbol's bucket.
fn seed_lms_suffixes<Q: Sequence + ?Sized>(seq: &Q, counts: &[usize], sa: &mut [usize]) {
    let mut bucket_ends = bucket_end_offsets(counts);

    for_each_lms_reversed(seq, |lms_index| {
        let bucket_end = &mut bucket_ends[seq.at(lms_index).rank()];
        *bucket_end -= 1;
        sa[*bucket_end] = lms_index;
    });
}

// Moves all entries denoting LMS positions to the front of sa, keeping their
// order, and returns how many there are. After the stage 1 inductions this
// yields the LMS suffixes sorted as substrings.
fn compact_lms_indices<Q: Sequence + ?Sized>(seq: &Q, sa: &mut [usize]) -> usize {
    let mut num_lms = 0;

    for scan_index in 0..sa.len() {
        let suffix_index = sa[scan_index];
        if is_lms_type(seq, suffix_index) {
            sa[num_lms] = suffix_index;
            num_lms += 1;
        }
    }

    num_lms
}

// Assigns an integer name to every LMS substring, equal substrings sharing a
// name, and compacts the name sequence into sa[num_lms, 2 * num_lms) in text
// order of the LMS positions. Returns the number of distinct names.
fn name_lms_substrings<Q: Sequence + ?Sized>(seq: &Q, sa: &mut [usize], num_lms: usize) -> usize {
    let n = seq.len();

    // Scratch region for names, addressed by half the LMS position. Two LMS
    // positions are always at least two apart, so the addressing is injective
    // and the region fits behind the compacted indices.
    sa[num_lms..num_lms + n / 2].fill(EMPTY);

    // record each LMS substring's length: the span to the next LMS position
    // inclusive, the last one bounded by the implicit sentinel
    let mut next_lms_index = n;
    for_each_lms_reversed(seq, |lms_index| {
        sa[num_lms + lms_index / 2] = next_lms_index - lms_index + 1;
        next_lms_index = lms_index;
    });

    let mut num_names = 0;
    let mut previous_begin = n;
    let mut previous_length = 0;

    for compacted_index in 0..num_lms {
        let begin = sa[compacted_index];
        let length = sa[num_lms + begin / 2];

        if !lms_substrings_are_equal(seq, previous_begin, previous_length, begin, length) {
            num_names += 1;
            previous_begin = begin;
            previous_length = length;
        }

        sa[num_lms + begin / 2] = num_names - 1;
    }

    // move the names over to the left, into sa[num_lms, 2 * num_lms)
    let mut write_index = num_lms;
    for read_index in num_lms..num_lms + n / 2 {
        if sa[read_index] != EMPTY {
            sa[write_index] = sa[read_index];
            write_index += 1;
        }
    }

    num_names
}

// Compares by length and content. The substring reaching the implicit
// sentinel never equals any other, which the bounds test catches.
fn lms_substrings_are_equal<Q: Sequence + ?Sized>(
    seq: &Q,
    left_begin: usize,
    left_length: usize,
    right_begin: usize,
    right_length: usize,
) -> bool {
    if left_length != right_length
        || left_begin + left_length >= seq.len()
        || right_begin + right_length >= seq.len()
    {
        return false;
    }

    (0..left_length).all(|offset| seq.at(left_begin + offset) == seq.at(right_begin + offset))
}

// Translates the reduced suffix array in sa[0, num_lms) back to original text
// positions, re-seeds them in their now exact order and repeats the two
// induction passes to sort all remaining suffixes.
fn finalize_from_sorted_lms_suffixes<Q: Sequence + ?Sized>(
    seq: &Q,
    counts: &[usize],
    sa: &mut [usize],
    num_lms: usize,
) {
    let n = seq.len();

    // rebuild the LMS positions in increasing text order in
    // sa[num_lms, 2 * num_lms), mapping reduced index -> text position
    let mut write_index = 2 * num_lms;
    for_each_lms_reversed(seq, |lms_index| {
        write_index -= 1;
        sa[write_index] = lms_index;
    });

    for rank in 0..num_lms {
        let reduced_index = sa[rank];
        sa[rank] = sa[reduced_index + num_lms];
    }

    sa[num_lms..n].fill(EMPTY);

    // seed the sorted LMS suffixes into their bucket ends, right to left so
    // no cell is overwritten before it has been consumed
    let mut bucket_ends = bucket_end_offsets(counts);
    for rank in (0..num_lms).rev() {
        let suffix_index = sa[rank];
        sa[rank] = EMPTY;

        let bucket_end = &mut bucket_ends[seq.at(suffix_index).rank()];
        *bucket_end -= 1;
        sa[*bucket_end] = suffix_index;
    }

    inducing::induce_sort_l(seq, counts, sa);
    inducing::induce_sort_s(seq, counts, sa);
}
