use crate::sequence::Sequence;

use std::cmp::Ordering;

// S/L type classification, computed on demand instead of being materialized.
//
// A position is S-type if its suffix is lexicographically smaller than the
// suffix starting one position later. The final position is always L-type,
// because it is followed by the implicit minimal sentinel.

pub fn is_s_type<Q: Sequence + ?Sized>(seq: &Q, index: usize) -> bool {
    let mut current = seq.at(index);

    for next_index in index + 1..seq.len() {
        let next = seq.at(next_index);

        match current.cmp(&next) {
            Ordering::Less => return true,
            Ordering::Greater => return false,
            Ordering::Equal => current = next,
        }
    }

    false
}

// A position is LMS if it is S-type and its left neighbor is L-type.
// Position 0 is never LMS by definition.
//
// The neighbor test runs first, so the rightward scan of is_s_type only
// starts at the head of an equal-symbol run, never inside one.
pub fn is_lms_type<Q: Sequence + ?Sized>(seq: &Q, index: usize) -> bool {
    index != 0 && seq.at(index - 1) > seq.at(index) && is_s_type(seq, index)
}

// Visits all LMS positions in decreasing position order, classifying the
// text in a single right-to-left scan.
pub fn for_each_lms_reversed<Q: Sequence + ?Sized>(seq: &Q, mut visit: impl FnMut(usize)) {
    let n = seq.len();
    if n < 2 {
        return;
    }

    // type of the position right of the current one, position n - 1 is L-type
    let mut right_neighbor_is_s_type = false;

    for index in (0..n - 1).rev() {
        match seq.at(index).cmp(&seq.at(index + 1)) {
            Ordering::Greater => {
                if right_neighbor_is_s_type {
                    visit(index + 1);
                }
                right_neighbor_is_s_type = false;
            }
            Ordering::Less => right_neighbor_is_s_type = true,
            Ordering::Equal => {}
        }
    }
}
