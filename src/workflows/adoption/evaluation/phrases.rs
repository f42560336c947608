//! Versioned phrase lists scanned against free-text answers.
//!
//! Matching is plain case-insensitive substring containment so the lists can
//! grow without touching the scoring logic. Entries are kept in the language
//! the forms are served in; accented and unaccented spellings are listed
//! separately because no normalization is applied before matching.

/// Sleep-location answers that indicate the pet sleeps inside the home.
pub(crate) const INDOOR_SLEEP: &[&str] = &["interior", "habitación", "sala"];

/// Sleep-location answers that indicate the pet sleeps outside.
pub(crate) const OUTDOOR_SLEEP: &[&str] = &["exterior", "azotea", "patio abierto"];

/// Red-flag phrases in the prior-pet-outcome narrative. Any single match
/// applies one flat penalty; matches are not cumulative.
pub(crate) const NEGATIVE_HISTORY: &[&str] = &[
    "abandono",
    "regalé",
    "regale",
    "perdí",
    "perdi",
    "murió por envenenamiento",
    "murio por envenenamiento",
    "lo dejé",
    "lo deje",
    "lo soltamos",
    "se escapó",
    "se escapo",
    "lo entregué",
    "lo entregue",
    "maltrato",
    "maltrató",
    "maltrato animal",
    "maltrato a un animal",
    "no lo cuidé",
    "no lo cuide",
    "no podía con él",
    "no podia con él",
    "problemas económicos",
    "problemas economicos",
    "problemas de espacio",
    "problemas de tiempo",
    "alergia",
];

pub(crate) fn contains_any(text: &str, phrases: &[&str]) -> bool {
    let lowered = text.to_lowercase();
    phrases.iter().any(|phrase| lowered.contains(phrase))
}
