use crate::core::normalize::{fold, normalize};

/// Skill abbreviation -> full-form synonyms
///
/// Process-wide compatibility table, never mutated at runtime. Entries are
/// kept verbatim (dotted forms included); only the compared tokens are
/// punctuation-folded.
static SYNONYMS: &[(&str, &[&str])] = &[
    ("ml", &["machine learning"]),
    ("ai", &["artificial intelligence"]),
    ("dl", &["deep learning"]),
    ("nlp", &["natural language processing"]),
    ("js", &["javascript"]),
    ("ts", &["typescript"]),
    ("py", &["python"]),
    ("db", &["database", "databases"]),
    ("sql", &["mysql", "postgresql", "postgres"]),
    ("react", &["reactjs", "react.js"]),
    ("node", &["nodejs", "node.js"]),
    ("vue", &["vuejs", "vue.js"]),
    ("angular", &["angularjs", "angular.js"]),
    ("stats", &["statistics"]),
    ("viz", &["visualization", "data visualization"]),
    ("ux", &["user experience", "ux design"]),
    ("ui", &["user interface", "ui design"]),
];

/// Decide whether two skill tokens denote the same competency
///
/// Checks, short-circuiting on first hit:
/// 1. exact equality after normalization;
/// 2. substring containment in either direction — intentionally permissive
///    ("python" matches "python programming", but also "java" matches
///    "javascript"); accepted imprecision, kept for compatibility;
/// 3. synonym/abbreviation relation: both tokens (punctuation-folded) must
///    hit the candidate set of the *same* synonym entry.
///
/// Total over any two strings; inputs are normalized on entry, so passing
/// already-normalized tokens changes nothing.
pub fn are_related(a: &str, b: &str) -> bool {
    let a = normalize(a);
    let b = normalize(b);

    if a == b {
        return true;
    }

    if a.contains(&b) || b.contains(&a) {
        return true;
    }

    let fa = fold(&a);
    let fb = fold(&b);

    for (key, full_forms) in SYNONYMS {
        let candidates = std::iter::once(*key).chain(full_forms.iter().copied());
        let hit_a = candidates.clone().any(|c| fa.contains(c));
        let hit_b = candidates.clone().any(|c| fb.contains(c));
        if hit_a && hit_b {
            return true;
        }
    }

    false
}
