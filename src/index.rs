use crate::sequence::Sequence;

use std::cmp::Ordering;
use std::iter::FusedIterator;

/// A compiled suffix array bundled with the text it was built from.
///
/// Immutable once created. All suffixes starting with a given needle occupy
/// one contiguous run of the permutation, which [`search`](Self::search)
/// locates by binary search.
pub struct SuffixArrayIndex<'s, Q: Sequence + ?Sized> {
    permutation: Vec<usize>,
    text: &'s Q,
}

impl<'s, Q: Sequence + ?Sized> SuffixArrayIndex<'s, Q> {
    /// Bundles a previously obtained permutation with the text it was built
    /// from. No metadata beyond the two is needed, so an index can be
    /// reconstructed after the permutation round-tripped through a
    /// collaborator's storage.
    pub fn from_parts(permutation: Vec<usize>, text: &'s Q) -> Self {
        assert_eq!(permutation.len(), text.len());

        Self { permutation, text }
    }

    /// Read access to the underlying sorted-order array.
    pub fn raw(&self) -> &[usize] {
        &self.permutation
    }

    pub fn text(&self) -> &'s Q {
        self.text
    }

    pub fn len(&self) -> usize {
        self.permutation.len()
    }

    pub fn is_empty(&self) -> bool {
        self.permutation.is_empty()
    }

    /// Returns a lazy cursor over the starting positions of all suffixes
    /// that begin with `needle`, in ascending lexicographic order of the
    /// full suffix (by what follows the matched prefix, not by position).
    ///
    /// The empty needle matches every suffix.
    pub fn search<'a>(&'a self, needle: &'a [Q::Symbol]) -> Matches<'a, Q> {
        // lowest rank whose suffix does not sort before the needle; all
        // matches form one contiguous run starting there, if it matches
        let start_rank = self.permutation.partition_point(|&suffix_index| {
            compare_suffix_with_needle(self.text, suffix_index, needle) == Ordering::Less
        });

        let state = if start_rank < self.permutation.len()
            && compare_suffix_with_needle(self.text, self.permutation[start_rank], needle)
                == Ordering::Equal
        {
            CursorState::Positioned { rank: start_rank }
        } else {
            CursorState::Exhausted
        };

        Matches {
            permutation: &self.permutation,
            text: self.text,
            needle,
            state,
        }
    }
}

// Compares seq[begin..] against the needle, up to the needle's length. A
// suffix that runs out of symbols first sorts before the needle. Matching
// the entire needle length counts as equal, so the needle being a prefix of
// the suffix is a match.
fn compare_suffix_with_needle<Q: Sequence + ?Sized>(
    text: &Q,
    begin: usize,
    needle: &[Q::Symbol],
) -> Ordering {
    for (offset, needle_symbol) in needle.iter().enumerate() {
        let position = begin + offset;
        if position >= text.len() {
            return Ordering::Less;
        }

        match text.at(position).cmp(needle_symbol) {
            Ordering::Equal => {}
            decided => return decided,
        }
    }

    Ordering::Equal
}

enum CursorState {
    // the entry at rank is a validated match
    Positioned { rank: usize },
    // the entry at rank is the next candidate, not yet validated
    Advancing { rank: usize },
    Exhausted,
}

/// Single-pass cursor over match positions, created by
/// [`SuffixArrayIndex::search`].
///
/// The first element was validated by the binary search and is not checked
/// again; every further element is validated lazily on advance. Once
/// exhausted, the cursor stays exhausted (the iterator is fused).
pub struct Matches<'a, Q: Sequence + ?Sized> {
    permutation: &'a [usize],
    text: &'a Q,
    needle: &'a [Q::Symbol],
    state: CursorState,
}

impl<Q: Sequence + ?Sized> Iterator for Matches<'_, Q> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        match self.state {
            CursorState::Positioned { rank } => {
                self.state = CursorState::Advancing { rank: rank + 1 };
                Some(self.permutation[rank])
            }
            CursorState::Advancing { rank } => {
                let still_matches = rank < self.permutation.len()
                    && compare_suffix_with_needle(self.text, self.permutation[rank], self.needle)
                        == Ordering::Equal;

                if still_matches {
                    self.state = CursorState::Advancing { rank: rank + 1 };
                    Some(self.permutation[rank])
                } else {
                    self.state = CursorState::Exhausted;
                    None
                }
            }
            CursorState::Exhausted => None,
        }
    }
}

impl<Q: Sequence + ?Sized> FusedIterator for Matches<'_, Q> {}
