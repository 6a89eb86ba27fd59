//! Text display helpers

/// Initials for an avatar badge
///
/// First letter of each whitespace-separated word, uppercased, at most
/// two characters. Runs of whitespace never produce empty words and an
/// empty name yields an empty string.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(|c| c.to_uppercase())
        .take(2)
        .collect()
}
