//! Text helpers shared across the workspace

/// Compute the Levenshtein edit distance between two strings
///
/// Comparison is done on Unicode scalar values, so multi-byte characters
/// count as a single edit.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Single-row DP over the shorter dimension
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.iter().enumerate() {
        let mut prev = row[0];
        row[0] = i + 1;

        for (j, cb) in b.iter().enumerate() {
            let substitution = if ca == cb { prev } else { prev + 1 };
            prev = row[j + 1];
            row[j + 1] = substitution.min(prev + 1).min(row[j] + 1);
        }
    }

    row[b.len()]
}

/// Find the candidate closest to `input`, if any is within `max_distance`
///
/// Comparison is case-insensitive. Ties are broken by candidate order, so
/// earlier registrations win.
pub fn closest_match<'a, I>(input: &str, candidates: I, max_distance: usize) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let input = input.to_lowercase();
    let mut best: Option<(&str, usize)> = None;

    for candidate in candidates {
        let distance = edit_distance(&input, &candidate.to_lowercase());
        if distance <= max_distance && best.is_none_or(|(_, d)| distance < d) {
            best = Some((candidate, distance));
        }
    }

    best.map(|(candidate, _)| candidate)
}
