//! Compiled file name reconciliation
//!
//! The resource compiler writes some outputs as
//! `{base}_png_{token}.{ext}` where `token` is compiler-generated. The game
//! expects `{base}_png.{ext}`, so the token is stripped.
//!
//! Names with zero or several markers are left alone: guessing which marker
//! the compiler added could rename an unrelated file.

/// Literal marker the token follows
pub const INFIX_MARKER: &str = "_png_";

/// Canonical name for a compiled file, or `None` if the name does not match
/// `{base}_png_{token}.{ext}` exactly once.
///
/// ```
/// use mapprep::domain::services::reconcile_name;
///
/// assert_eq!(reconcile_name("foo_png_abcd.vmat_c").as_deref(), Some("foo_png.vmat_c"));
/// assert_eq!(reconcile_name("foo_png.vmat_c"), None);
/// ```
pub fn reconcile_name(file_name: &str) -> Option<String> {
    if file_name.matches(INFIX_MARKER).count() != 1 {
        return None;
    }

    let (base, _) = file_name.split_once(INFIX_MARKER)?;
    if base.is_empty() {
        return None;
    }

    reconcile_stem(file_name, &format!("{}_png", base))
}

/// Canonical name for a compiled file of a known stem:
/// `{stem}_{token}.{ext}` becomes `{stem}.{ext}`.
///
/// The stem may itself contain the marker (map `kz_png` has stems like
/// `kz_png_1_png`); the token may not.
///
/// ```
/// use mapprep::domain::services::reconcile_stem;
///
/// assert_eq!(
///     reconcile_stem("kz_png_1_png_abcd.vmat_c", "kz_png_1_png").as_deref(),
///     Some("kz_png_1_png.vmat_c")
/// );
/// ```
pub fn reconcile_stem(file_name: &str, stem: &str) -> Option<String> {
    let rest = file_name.strip_prefix(stem)?.strip_prefix('_')?;
    if rest.contains(INFIX_MARKER) {
        return None;
    }

    let (token, ext) = rest.split_once('.')?;
    if token.is_empty() || ext.is_empty() {
        return None;
    }

    Some(format!("{}.{}", stem, ext))
}
