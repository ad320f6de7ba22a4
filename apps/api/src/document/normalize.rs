/// Normalizes extracted document text for matching: folds the ligatures and
/// typographic characters PDF extraction tends to emit, lower-cases, and
/// collapses all whitespace runs to single spaces.
pub fn normalize(text: &str) -> String {
    text
        // Ligatures
        .replace('\u{FB00}', "ff")
        .replace('\u{FB01}', "fi")
        .replace('\u{FB02}', "fl")
        .replace('\u{FB03}', "ffi")
        .replace('\u{FB04}', "ffl")
        .replace('\u{FB05}', "st")
        .replace('\u{FB06}', "st")
        // Typographic punctuation
        .replace('\u{2019}', "'")
        .replace('\u{2018}', "'")
        .replace('\u{201C}', "\"")
        .replace('\u{201D}', "\"")
        .replace('\u{2013}', "-")
        .replace('\u{2014}', "-")
        .replace('\u{2026}', "...")
        .replace('\u{00A0}', " ")
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_collapses_whitespace() {
        assert_eq!(
            normalize("  Senior\tData\n\nAnalyst "),
            "senior data analyst"
        );
    }

    #[test]
    fn test_folds_ligatures() {
        assert_eq!(normalize("o\u{FB03}ce o\u{FB00}er"), "office offer");
    }

    #[test]
    fn test_replaces_typographic_punctuation() {
        assert_eq!(normalize("team\u{2019}s goals \u{2013} met"), "team's goals - met");
    }

    #[test]
    fn test_empty_input_stays_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \n "), "");
    }
}
