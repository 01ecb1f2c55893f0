use proptest::prelude::*;

use sufdex::SuffixArrayCompiler;

// example from
// https://ae.iti.kit.edu/download/kurpicz/2022_text_indexing/02_suffix_tree_and_array_handout_ws2223.pdf
static ABC_TEXT: &[u8] = b"ababcabcabba";

static ABRA_TEXT: &[u8] = b"abracadabra";

#[test]
fn whole_algorithm_u8_abc_text() {
    let result = SuffixArrayCompiler::new().construct_permutation(ABC_TEXT);
    let expected_suffix_array = [11, 0, 8, 5, 2, 10, 1, 9, 6, 3, 7, 4];

    assert!(is_suffix_array(&result, ABC_TEXT));
    assert_eq!(result, expected_suffix_array);
}

#[test]
fn whole_algorithm_u8_abra_text() {
    let result = SuffixArrayCompiler::new().construct_permutation(ABRA_TEXT);
    let expected_suffix_array = [10, 7, 0, 3, 5, 8, 1, 4, 6, 9, 2];

    assert!(is_suffix_array(&result, ABRA_TEXT));
    assert_eq!(result, expected_suffix_array);
}

#[test]
fn whole_algorithm_short_texts() {
    let empty_text: [u8; 0] = [];
    let result_zero = SuffixArrayCompiler::new().construct_permutation(empty_text.as_slice());
    let result_one = SuffixArrayCompiler::new().construct_permutation([42u8].as_slice());
    let result_two = SuffixArrayCompiler::new()
        .with_alphabet_size(43)
        .construct_permutation([42usize, 3].as_slice());

    assert_eq!(result_zero, []);
    assert_eq!(result_one, [0]);
    assert_eq!(result_two, [1, 0]);
}

#[test]
fn whole_algorithm_no_lms_mini_text() {
    let text = [0u8, 1];
    let suffix_array = SuffixArrayCompiler::new().construct_permutation(text.as_slice());

    assert_eq!(suffix_array, [0, 1]);
}

#[test]
fn whole_algorithm_one_lms_mini_text() {
    let text: &[u8] = b"424";
    let suffix_array = SuffixArrayCompiler::new().construct_permutation(text);

    assert_eq!(suffix_array, [1, 2, 0]);
}

#[test]
fn whole_algorithm_two_lms_mini_text() {
    let text: &[u8] = b"yxyxy";
    let suffix_array = SuffixArrayCompiler::new().construct_permutation(text);

    assert_eq!(suffix_array, [3, 1, 4, 2, 0]);
}

#[test]
fn whole_algorithm_all_identical_symbols() {
    let text = vec![7u8; 200];
    let suffix_array = SuffixArrayCompiler::new().construct_permutation(text.as_slice());

    // suffixes of an all-identical text compare by length only
    let expected: Vec<usize> = (0..200).rev().collect();
    assert_eq!(suffix_array, expected);
}

#[test]
fn whole_algorithm_inplace_with_oversized_buffer() {
    let allocating = SuffixArrayCompiler::new().construct_permutation(ABRA_TEXT);

    // leftover contents of the buffer must not influence the result
    let mut buffer = vec![3; ABRA_TEXT.len() + 10];
    SuffixArrayCompiler::new().construct_permutation_inplace(ABRA_TEXT, &mut buffer);

    assert_eq!(&buffer[..ABRA_TEXT.len()], allocating.as_slice());
    assert_eq!(&buffer[ABRA_TEXT.len()..], vec![3; 10].as_slice());
}

#[test]
fn whole_algorithm_repeated_compilation_is_idempotent() {
    let compiler = SuffixArrayCompiler::new();

    let first = compiler.construct_permutation(ABC_TEXT);
    let second = compiler.construct_permutation(ABC_TEXT);

    assert_eq!(first, second);
}

#[test]
#[should_panic]
fn zero_alphabet_size_is_rejected() {
    SuffixArrayCompiler::new().with_alphabet_size(0);
}

fn is_suffix_array(maybe_suffix_array: &[usize], text: &[u8]) -> bool {
    if maybe_suffix_array.len() != text.len() {
        return false;
    }

    for suffix_indices in maybe_suffix_array.windows(2) {
        if text[suffix_indices[0]..] > text[suffix_indices[1]..] {
            return false;
        }
    }

    true
}

fn brute_force_suffix_array(text: &[u8]) -> Vec<usize> {
    let mut permutation: Vec<usize> = (0..text.len()).collect();
    permutation.sort_by(|&left, &right| text[left..].cmp(&text[right..]));

    permutation
}

proptest! {
    #[test]
    fn whole_algorithm_correctness_random_texts(text in prop::collection::vec(any::<u8>(), 0..10_000)) {
        let maybe_suffix_array = SuffixArrayCompiler::new().construct_permutation(text.as_slice());

        prop_assert!(is_suffix_array(&maybe_suffix_array, &text));
    }

    // small alphabets produce long equal-symbol runs and deep recursions,
    // checked against a brute force differential oracle
    #[test]
    fn whole_algorithm_matches_brute_force_small_alphabets(
        text in prop::collection::vec(0u8..4, 0..200),
    ) {
        let suffix_array = SuffixArrayCompiler::new().construct_permutation(text.as_slice());

        prop_assert_eq!(suffix_array, brute_force_suffix_array(&text));
    }
}
