//! Suffix array construction and exact-substring queries.
//!
//! The suffix array is built with SA-IS (linear-time, recursive induced
//! sorting) over any [`Sequence`] of integer-like symbols. The resulting
//! [`SuffixArrayIndex`] answers "find all suffixes starting with this
//! needle" in time proportional to the needle length plus the match count.

mod algorithm;
mod index;
pub mod sequence;

pub use index::{Matches, SuffixArrayIndex};
pub use sequence::{Sequence, Symbol};

// symbol types whose full value range is at most this large get a
// full-range histogram, wider types get a scan of the text instead
const FULL_RANGE_ALPHABET_LIMIT: usize = u16::MAX as usize;

/// Builds suffix arrays and indexes from indexable sequences.
///
/// ```
/// use sufdex::SuffixArrayCompiler;
///
/// let text: &[u8] = b"abracadabra";
/// let index = SuffixArrayCompiler::new().compile(text);
///
/// let positions: Vec<usize> = index.search(b"ab").collect();
/// assert_eq!(positions, [7, 0]);
/// ```
pub struct SuffixArrayCompiler {
    alphabet_size: Option<usize>,
}

impl SuffixArrayCompiler {
    pub fn new() -> Self {
        Self {
            alphabet_size: None,
        }
    }

    /// Bounds the symbol alphabet: every symbol rank of a compiled text must
    /// be smaller than this. Unset, the bound is derived from the symbol
    /// type, or from the text itself for wide symbol types.
    pub fn with_alphabet_size(&mut self, alphabet_size: usize) -> &mut Self {
        assert!(alphabet_size > 0);
        self.alphabet_size = Some(alphabet_size);
        self
    }

    /// Builds the full index: the sorted-order permutation bundled with the
    /// text it was built from.
    pub fn compile<'s, Q: Sequence + ?Sized>(&self, text: &'s Q) -> SuffixArrayIndex<'s, Q> {
        SuffixArrayIndex::from_parts(self.construct_permutation(text), text)
    }

    /// The permutation of `[0, n)` ordering all suffixes of `text`
    /// lexicographically, the conceptual end of the text sorting before
    /// every symbol.
    pub fn construct_permutation<Q: Sequence + ?Sized>(&self, text: &Q) -> Vec<usize> {
        let mut permutation = vec![algorithm::EMPTY; text.len()];

        algorithm::suffix_array_induced_sort(
            text,
            &mut permutation,
            self.resolve_alphabet_size(text),
        );

        permutation
    }

    /// Like [`construct_permutation`](Self::construct_permutation), writing
    /// the result into the front of a caller-provided buffer.
    pub fn construct_permutation_inplace<Q: Sequence + ?Sized>(
        &self,
        text: &Q,
        permutation_buffer: &mut [usize],
    ) {
        assert!(text.len() <= permutation_buffer.len());

        algorithm::suffix_array_induced_sort(
            text,
            &mut permutation_buffer[..text.len()],
            self.resolve_alphabet_size(text),
        );
    }

    fn resolve_alphabet_size<Q: Sequence + ?Sized>(&self, text: &Q) -> usize {
        if let Some(alphabet_size) = self.alphabet_size {
            return alphabet_size;
        }

        let max_rank_of_type = Q::Symbol::max_symbol().rank();
        if max_rank_of_type <= FULL_RANGE_ALPHABET_LIMIT {
            max_rank_of_type + 1
        } else {
            (0..text.len())
                .map(|index| text.at(index).rank())
                .max()
                .map_or(0, |max_rank| max_rank + 1)
        }
    }
}

impl Default for SuffixArrayCompiler {
    fn default() -> Self {
        Self::new()
    }
}
