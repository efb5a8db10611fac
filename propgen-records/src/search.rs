//! Fuzzy name suggestions for record and definition lookups

use strsim::levenshtein;

/// A candidate name close to what the user asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub candidate: String,
    pub distance: usize,
}

/// Rank `candidates` by closeness to `name`.
///
/// The exact name is never suggested. A case-only difference scores 0, a
/// substring relationship scores 1, anything else scores its Levenshtein
/// distance and is dropped past `max_distance`. Ties keep candidate order.
pub fn suggest_similar<'a, I>(name: &str, candidates: I, max_distance: usize) -> Vec<Suggestion>
where
    I: IntoIterator<Item = &'a str>,
{
    let wanted = name.to_lowercase();
    let mut suggestions: Vec<Suggestion> = candidates
        .into_iter()
        .filter(|candidate| *candidate != name)
        .filter_map(|candidate| {
            let lowered = candidate.to_lowercase();
            let distance = if lowered == wanted {
                0
            } else if lowered.contains(&wanted) || wanted.contains(&lowered) {
                1
            } else {
                levenshtein(name, candidate)
            };
            (distance <= max_distance).then(|| Suggestion {
                candidate: candidate.to_string(),
                distance,
            })
        })
        .collect();
    suggestions.sort_by_key(|s| s.distance);
    suggestions
}
