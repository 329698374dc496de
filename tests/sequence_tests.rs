//! Integration tests for sequence operations

mod sequence_integration_tests {
    use number_array::prelude::*;

    #[test]
    fn test_render_after_parse() {
        let seq = ops::parse_from_text("1, 2, 3").unwrap();
        assert!(ops::render(&seq).starts_with("1 2 3"));
    }

    #[test]
    fn test_remove_modes_on_duplicates() {
        let seq = NumberSequence::from(vec![1, 2, 3, 2]);

        let first = ops::remove(&seq, 2, RemovalMode::FirstOccurrence);
        assert_eq!(first.sequence.as_slice(), &[1, 3, 2]);

        let all = ops::remove(&seq, 2, RemovalMode::AllOccurrences);
        assert_eq!(all.sequence.as_slice(), &[1, 3]);

        // Input is never modified
        assert_eq!(seq.as_slice(), &[1, 2, 3, 2]);
    }

    #[test]
    fn test_generate_random_default_bounds() {
        for _ in 0..100 {
            let seq = ops::generate_random(2, 20).unwrap();
            assert!((2..=20).contains(&seq.len()));
        }
    }

    #[test]
    fn test_generate_random_invalid_ranges() {
        assert!(matches!(
            ops::generate_random(5, 2),
            Err(SequenceError::InvalidRange {
                min_len: 5,
                max_len: 2
            })
        ));
        assert!(matches!(
            ops::generate_random(0, 3),
            Err(SequenceError::InvalidRange { .. })
        ));
        assert!(matches!(
            ops::generate_random(3, 0),
            Err(SequenceError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_min_max_example() {
        let seq = NumberSequence::from(vec![5, 3, 8, 1, 4]);
        assert_eq!(ops::find_max(&seq).unwrap(), 8);
        assert_eq!(ops::find_min(&seq).unwrap(), 1);
    }

    #[test]
    fn test_min_max_extremes() {
        let seq = NumberSequence::from(vec![i32::MAX, 0, i32::MIN]);
        assert_eq!(ops::find_max(&seq).unwrap(), i32::MAX);
        assert_eq!(ops::find_min(&seq).unwrap(), i32::MIN);
    }

    #[test]
    fn test_clear_renders_empty_message() {
        let cleared = ops::clear();
        assert!(cleared.is_empty());
        assert_eq!(ops::render(&cleared), "There are no numbers in the array.");
    }

    #[test]
    fn test_parse_failure_is_atomic() {
        let err = ops::parse_from_text("4, 5, six, 7").unwrap_err();
        assert_eq!(err, SequenceError::InvalidInput("Invalid number: six".to_string()));
        assert_eq!(err.to_string(), "Invalid number: six");
    }

    #[test]
    fn test_invalid_range_message() {
        let err = LengthBounds::new(5, 2).unwrap_err();
        assert!(err.to_string().starts_with("Invalid length range"));
    }
}
