//! Property tests for map name validation.

use proptest::prelude::*;

use mapprep::MapName;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Accepted names never contain path separators or dots.
    #[test]
    fn property_parsed_names_are_path_safe(s in "(?s).{0,64}") {
        if let Ok(name) = MapName::parse(&s) {
            let name = name.as_str();
            prop_assert!(!name.is_empty());
            prop_assert!(!name.contains('/'));
            prop_assert!(!name.contains('\\'));
            prop_assert!(!name.contains('.'));
        }
    }

    /// PROPERTY: Identifier-like names always parse and round-trip.
    #[test]
    fn property_identifier_names_parse(s in "[a-z][a-z0-9_-]{0,31}") {
        let name = MapName::parse(&s).unwrap();
        prop_assert_eq!(name.as_str(), s.as_str());
    }
}
