//! Display-name derivation for raw catalog identifiers.
//!
//! The catalog names species in lowercase-with-hyphens ("mr-mime",
//! "charizard-mega-x"); most hyphens mark a form suffix we track separately,
//! but some are part of the actual name, and two species carry gender symbols
//! no rule can derive.

/// Names whose display form cannot be derived mechanically.
const SPECIAL_NAMES: &[(&str, &str)] = &[("nidoran-f", "Nidoran ♀"), ("nidoran-m", "Nidoran ♂")];

/// Names where the hyphen is part of the name itself, not a form suffix.
const REAL_HYPHEN_NAMES: &[&str] = &[
    "mr-mime",
    "mime-jr",
    "ho-oh",
    "porygon-z",
    "mr-rime",
    "type-null",
    "jangmo-o",
    "hakamo-o",
    "kommo-o",
    "tapu-koko",
    "tapu-lele",
    "tapu-bulu",
    "tapu-fini",
    "great-tusk",
    "scream-tail",
    "brute-bonnet",
    "flutter-mane",
    "slither-wing",
    "sandy-shocks",
    "iron-treads",
    "iron-bundle",
    "iron-hands",
    "iron-jugulis",
    "iron-moth",
    "iron-thorns",
    "roaring-moon",
    "walking-wake",
    "iron-valiant",
    "wo-chien",
    "chien-pao",
    "ting-lu",
    "chi-yu",
    "gouging-fire",
    "raging-bolt",
    "iron-boulder",
    "iron-crown",
    "iron-leaves",
];

/// Derive the display name for a raw catalog identifier.
///
/// Precedence: exact special cases, then real-hyphen names (capitalize every
/// segment), then hyphenated form names (keep the base, drop the suffix),
/// then plain capitalization. Total over any input, no failure mode.
pub fn display_name(raw: &str) -> String {
    if let Some((_, display)) = SPECIAL_NAMES.iter().find(|(name, _)| *name == raw) {
        return (*display).to_string();
    }

    if REAL_HYPHEN_NAMES.contains(&raw) {
        return raw.split('-').map(capitalize).collect::<Vec<_>>().join("-");
    }

    match raw.split_once('-') {
        // Everything after the first hyphen is a form suffix; the form is
        // tracked by its own key, not in the display name.
        Some((base, _)) => capitalize(base),
        None => capitalize(raw),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_names_get_capitalized() {
        assert_eq!(display_name("pikachu"), "Pikachu");
        assert_eq!(display_name("eevee"), "Eevee");
    }

    #[test]
    fn gender_symbol_special_cases() {
        assert_eq!(display_name("nidoran-f"), "Nidoran ♀");
        assert_eq!(display_name("nidoran-m"), "Nidoran ♂");
    }

    #[test]
    fn real_hyphen_names_keep_the_hyphen() {
        assert_eq!(display_name("mr-mime"), "Mr-Mime");
        assert_eq!(display_name("ho-oh"), "Ho-Oh");
        assert_eq!(display_name("tapu-koko"), "Tapu-Koko");
        assert_eq!(display_name("iron-valiant"), "Iron-Valiant");
    }

    #[test]
    fn form_suffixes_are_dropped() {
        assert_eq!(display_name("charizard-mega-x"), "Charizard");
        assert_eq!(display_name("deoxys-attack"), "Deoxys");
        assert_eq!(display_name("giratina-origin"), "Giratina");
    }

    #[test]
    fn degenerate_input_does_not_panic() {
        assert_eq!(display_name(""), "");
        assert_eq!(display_name("-"), "");
        assert_eq!(display_name("x"), "X");
    }
}
