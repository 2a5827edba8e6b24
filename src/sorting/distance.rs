/// Damerau–Levenshtein distance (optimal string alignment variant) between
/// two strings, compared char by char.
///
/// Insertion, deletion, substitution and transposition of two adjacent
/// characters all cost 1. The full `(len(a)+1) × (len(b)+1)` table is filled.
pub fn damerau_levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let rows = a.len() + 1;
    let cols = b.len() + 1;
    let mut d = vec![vec![0usize; cols]; rows];

    for (i, row) in d.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in d[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..rows {
        for j in 1..cols {
            let cost = usize::from(a[i - 1] != b[j - 1]);

            let del = d[i - 1][j] + 1;
            let ins = d[i][j - 1] + 1;
            let sub = d[i - 1][j - 1] + cost;
            d[i][j] = del.min(ins).min(sub);

            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                d[i][j] = d[i][j].min(d[i - 2][j - 2] + 1);
            }
        }
    }

    d[rows - 1][cols - 1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_identical_strings() {
        assert_eq!(damerau_levenshtein("Beatles", "Beatles"), 0);
        assert_eq!(damerau_levenshtein("", ""), 0);
    }

    #[test]
    fn test_empty_side_is_length_of_other() {
        assert_eq!(damerau_levenshtein("", "abc"), 3);
        assert_eq!(damerau_levenshtein("abc", ""), 3);
        // counted in chars, not bytes
        assert_eq!(damerau_levenshtein("", "Ärzte"), 5);
    }

    #[test]
    fn test_transposition_costs_one() {
        assert_eq!(damerau_levenshtein("ab", "ba"), 1);
        assert_eq!(damerau_levenshtein("Beatles", "Beatels"), 1);
    }

    #[test]
    fn test_basic_edits() {
        assert_eq!(damerau_levenshtein("Beatles", "Beattles"), 1);
        assert_eq!(damerau_levenshtein("Beatles", "Beatle"), 1);
        assert_eq!(damerau_levenshtein("Beatles", "Bextles"), 1);
        assert_eq!(damerau_levenshtein("kitten", "sitting"), 3);
        assert_eq!(damerau_levenshtein("abc", "xyz"), 3);
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(damerau_levenshtein("beatles", "Beatles"), 1);
    }

    proptest! {
        #[test]
        fn test_matches_strsim_osa(a in "[abcÄ]{0,6}", b in "[abcÄ]{0,6}") {
            prop_assert_eq!(damerau_levenshtein(&a, &b), strsim::osa_distance(&a, &b));
        }

        #[test]
        fn test_symmetric(a in "\\PC{0,8}", b in "\\PC{0,8}") {
            prop_assert_eq!(damerau_levenshtein(&a, &b), damerau_levenshtein(&b, &a));
        }

        #[test]
        fn test_zero_only_for_equal(a in "[abAB]{0,4}", b in "[abAB]{0,4}") {
            prop_assert_eq!(damerau_levenshtein(&a, &b) == 0, a == b);
            prop_assert_eq!(damerau_levenshtein(&a, &a), 0);
        }

        #[test]
        fn test_empty_side_is_char_count(s in "\\PC{0,12}") {
            prop_assert_eq!(damerau_levenshtein("", &s), s.chars().count());
            prop_assert_eq!(damerau_levenshtein(&s, ""), s.chars().count());
        }
    }
}
