//! Property tests for compiled name reconciliation.

use proptest::prelude::*;

use mapprep::domain::services::reconcile_name;

fn segment() -> impl Strategy<Value = String> {
    // No underscores, so the marker can only appear where it is placed
    proptest::string::string_regex("[a-z0-9]{1,12}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Reconciliation never panics on arbitrary names.
    #[test]
    fn property_reconcile_never_panics(s in "(?s).{0,128}") {
        let _ = reconcile_name(&s);
    }

    /// PROPERTY: `{base}_png_{token}.{ext}` becomes `{base}_png.{ext}`.
    #[test]
    fn property_token_is_stripped(
        base in segment(),
        token in segment(),
        ext in segment()
    ) {
        let name = format!("{base}_png_{token}.{ext}");
        prop_assert_eq!(reconcile_name(&name), Some(format!("{base}_png.{ext}")));
    }

    /// PROPERTY: A canonical name is a fixed point.
    #[test]
    fn property_canonical_names_are_untouched(
        base in segment(),
        ext in segment()
    ) {
        let name = format!("{base}_png.{ext}");
        prop_assert_eq!(reconcile_name(&name), None);
    }

    /// PROPERTY: Two markers make the name ambiguous, so nothing is renamed.
    #[test]
    fn property_multiple_markers_are_a_noop(
        a in segment(),
        b in segment(),
        token in segment(),
        ext in segment()
    ) {
        let name = format!("{a}_png_{b}_png_{token}.{ext}");
        prop_assert_eq!(reconcile_name(&name), None);
    }

    /// PROPERTY: A renamed file is shorter and ends in the canonical `_png.` form.
    #[test]
    fn property_renamed_is_canonical(s in "[a-z_.]{0,32}") {
        if let Some(renamed) = reconcile_name(&s) {
            prop_assert!(renamed.contains("_png."));
            prop_assert!(renamed.len() < s.len());
        }
    }
}
