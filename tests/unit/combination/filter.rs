//! Tests for the prefix adjacency rules

#[cfg(test)]
mod tests {
    use tilestack::combination::filter::{
        MAX_DISTINCT_PREFIXES, is_valid_combination, is_valid_prefix_sequence,
    };
    use tilestack::combination::Combination;
    use tilestack::parts::PartName;

    fn all_sequences(alphabet: &[char], length: usize) -> Vec<Vec<char>> {
        let mut sequences = vec![Vec::new()];
        for _ in 0..length {
            sequences = sequences
                .into_iter()
                .flat_map(|prefix| {
                    alphabet.iter().map(move |&symbol| {
                        let mut next = prefix.clone();
                        next.push(symbol);
                        next
                    })
                })
                .collect();
        }
        sequences
    }

    fn parse_all(names: [&str; 6]) -> Vec<PartName> {
        names.iter().map(|name| PartName::parse(name).unwrap()).collect()
    }

    // Tests strict two-prefix alternation is rejected
    // Verified by dropping the window check
    #[test]
    fn test_alternation_rejected() {
        assert!(!is_valid_prefix_sequence(&["A", "B", "A", "B", "A", "B"]));
    }

    // Tests a single repeated prefix passes
    // Verified by rejecting sequences with one distinct prefix
    #[test]
    fn test_single_prefix_accepted() {
        assert!(is_valid_prefix_sequence(&["A", "A", "A", "A", "A", "A"]));
    }

    // Tests the regression case is evaluated literally: no slot repeats the
    // prefix two back, so it passes
    // Verified by comparing against the slot directly before instead
    #[test]
    fn test_paired_runs_regression_case() {
        assert!(is_valid_prefix_sequence(&["A", "B", "B", "A", "A", "B"]));
        assert!(is_valid_prefix_sequence(&["A", "A", "B", "B", "A", "A"]));
    }

    // Tests a single bounce back is enough to reject
    // Verified by requiring two consecutive violations
    #[test]
    fn test_single_bounce_rejected() {
        assert!(!is_valid_prefix_sequence(&["A", "B", "A", "A", "A", "A"]));
        assert!(!is_valid_prefix_sequence(&["A", "A", "A", "B", "A", "A"]));
        assert!(!is_valid_prefix_sequence(&["B", "B", "B", "B", "A", "B"]));
    }

    // Tests runs and a late switch pass
    // Verified by rejecting any prefix change
    #[test]
    fn test_runs_accepted() {
        assert!(is_valid_prefix_sequence(&["A", "A", "A", "A", "A", "B"]));
        assert!(is_valid_prefix_sequence(&["A", "A", "A", "B", "B", "B"]));
        assert!(is_valid_prefix_sequence(&["B", "A", "A", "B", "B", "A"]));
    }

    // Tests every arrangement of three distinct prefixes is rejected
    // Verified by raising the distinct prefix limit
    #[test]
    fn test_three_prefixes_always_rejected() {
        for sequence in all_sequences(&['A', 'B', 'C'], 6) {
            let mut distinct = sequence.clone();
            distinct.sort_unstable();
            distinct.dedup();
            if distinct.len() > MAX_DISTINCT_PREFIXES {
                assert!(
                    !is_valid_prefix_sequence(sequence.as_slice()),
                    "accepted {sequence:?}"
                );
            }
        }
    }

    // Tests the number of accepted sequences over two and three prefixes
    // Verified by flipping the inequality in the window check
    #[test]
    fn test_accepted_sequence_counts() {
        let two = all_sequences(&['A', 'B'], 6)
            .iter()
            .filter(|sequence| is_valid_prefix_sequence(sequence.as_slice()))
            .count();
        assert_eq!(two, 26);

        let three = all_sequences(&['A', 'B', 'C'], 6)
            .iter()
            .filter(|sequence| is_valid_prefix_sequence(sequence.as_slice()))
            .count();
        assert_eq!(three, 75);
    }

    // Tests short sequences only face the distinct prefix limit
    // Verified by indexing past the sequence end
    #[test]
    fn test_short_sequences() {
        assert!(is_valid_prefix_sequence::<&str>(&[]));
        assert!(is_valid_prefix_sequence(&["A", "B"]));
        assert!(!is_valid_prefix_sequence(&["A", "B", "C"]));
    }

    // Tests the filter is driven by part prefixes only
    // Verified by comparing full file names instead of prefixes
    #[test]
    fn test_combination_uses_prefixes() {
        let runs = parse_all([
            "GR1a.png", "GR2b.png", "GR3.png", "MN4.png", "MN5x.png", "MN6.png",
        ]);
        let alternating = parse_all([
            "GR1.png", "MN2.png", "GR3.png", "MN4.png", "GR5.png", "MN6.png",
        ]);

        let runs_combination = Combination::new([
            &runs[0], &runs[1], &runs[2], &runs[3], &runs[4], &runs[5],
        ]);
        let alternating_combination = Combination::new([
            &alternating[0],
            &alternating[1],
            &alternating[2],
            &alternating[3],
            &alternating[4],
            &alternating[5],
        ]);

        assert!(is_valid_combination(&runs_combination));
        assert!(runs_combination.is_valid());
        assert!(!is_valid_combination(&alternating_combination));
    }

    // Tests the filter is deterministic
    // Verified by introducing state between calls
    #[test]
    fn test_idempotent() {
        let sequence = ["MN", "GR", "GR", "MN", "MN", "GR"];
        let first = is_valid_prefix_sequence(&sequence);
        for _ in 0..3 {
            assert_eq!(is_valid_prefix_sequence(&sequence), first);
        }
    }
}
