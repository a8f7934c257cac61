/// Normalize a raw skill string into its canonical comparison form
///
/// Lower-cases and trims surrounding whitespace. Internal whitespace is
/// preserved so multi-word skills ("machine learning") stay intact.
///
/// Total over all inputs (empty in, empty out) and idempotent:
/// `normalize(normalize(s)) == normalize(s)`.
#[inline]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Stricter comparison form: normalized with `.` and `-` stripped
///
/// Equates punctuation variants like "react.js" / "react-js" / "reactjs".
/// Used only by the relatedness resolver, never for exact-match checks or
/// set membership.
#[inline]
pub fn fold(raw: &str) -> String {
    normalize(raw)
        .chars()
        .filter(|c| *c != '.' && *c != '-')
        .collect()
}
