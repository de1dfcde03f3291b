//! Arabic character tables and scorer-input normalization
//!
//! The tables here are fixed vocabularies: the sentence punctuation that
//! drives segment splitting, the extra marks folded by the cleanup pass,
//! and the letter/diacritic ranges the normalizer keeps or strips.
//!
//! [`normalize`] prepares text for the scoring oracle only. Output returned
//! to callers is never normalized.

use unicode_normalization::UnicodeNormalization;

/// Sentence punctuation marks recognized by the punctuation splitter.
///
/// A segment is closed whenever one of these is scanned, and a sentence
/// whose words all end here is never followed by more chunks in
/// punctuation-aware mode.
pub const SENTENCE_PUNCTUATION: &[char] = &[
    '.',
    '!',
    ':',
    '…',
    '\u{060C}', // Arabic comma (،)
    '\u{061B}', // Arabic semicolon (؛)
    '\u{061F}', // Arabic question mark (؟)
];

/// Additional marks collapsed together with [`SENTENCE_PUNCTUATION`] by the
/// cleanup pass when punctuation splitting is disabled.
pub const EXTRA_COLLAPSE_MARKS: &[char] = &['?', ';', '-', '\n', '@', '#', '$', '='];

/// ASCII punctuation, used only when measuring markup span length.
pub const LATIN_PUNCTUATION: &[char] = &[
    '.', ',', ';', ':', '?', '!', '"', '\'', '(', ')', '[', ']', '{', '}', '-',
];

/// Tatweel (kashida), the elongation mark.
pub const TATWEEL: char = '\u{0640}';

/// True for characters in the recognized sentence punctuation set.
pub fn is_sentence_punctuation(ch: char) -> bool {
    SENTENCE_PUNCTUATION.contains(&ch)
}

/// True for Arabic letters.
///
/// Covers the base alphabet including the hamza forms, ta marbuta and alef
/// maqsura (U+0621..U+063A, U+0641..U+064A).
pub fn is_arabic_letter(ch: char) -> bool {
    matches!(ch, '\u{0621}'..='\u{063A}' | '\u{0641}'..='\u{064A}')
}

/// True for tashkeel, in the extended sense: harakat and tanween
/// (U+064B..U+065F), the superscript alef (U+0670), the small high signs
/// (U+0610..U+061A) and the Quranic annotation marks (U+06D6..U+06ED).
pub fn is_tashkeel(ch: char) -> bool {
    matches!(
        ch,
        '\u{0610}'..='\u{061A}'
            | '\u{064B}'..='\u{065F}'
            | '\u{0670}'
            | '\u{06D6}'..='\u{06DC}'
            | '\u{06DF}'..='\u{06E8}'
            | '\u{06EA}'..='\u{06ED}'
    )
}

/// Normalize text for scoring.
///
/// In order: merge Unicode compatibility forms (NFKC), strip tashkeel and
/// tatweel, replace every character that is neither a space nor an Arabic
/// letter with a space, and collapse runs of spaces into one. Runs are
/// collapsed but the ends are not trimmed, so a single boundary space can
/// survive.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.nfkc() {
        if is_tashkeel(ch) || ch == TATWEEL {
            continue;
        }
        if ch == ' ' || is_arabic_letter(ch) {
            if ch == ' ' && out.ends_with(' ') {
                continue;
            }
            out.push(ch);
        } else if !out.ends_with(' ') {
            out.push(' ');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_tashkeel_and_tatweel() {
        // "مُحَمَّد" with full diacritics reduces to the bare letters
        assert_eq!(normalize("\u{0645}\u{064F}\u{062D}\u{064E}\u{0645}\u{0651}\u{064E}\u{062F}"), "محمد");
        assert_eq!(normalize("الـــسلام"), "السلام");
    }

    #[test]
    fn replaces_foreign_characters_with_space() {
        assert_eq!(normalize("abc مرحبا 123"), " مرحبا ");
        assert_eq!(normalize("مرحبا، بكم"), "مرحبا بكم");
    }

    #[test]
    fn collapses_space_runs() {
        assert_eq!(normalize("مرحبا    بكم"), "مرحبا بكم");
        // non-Arabic runs fold into a single space, not one per character
        assert_eq!(normalize("مرحبا ... بكم"), "مرحبا بكم");
    }

    #[test]
    fn pure_function_keeps_arabic_text_intact() {
        let text = "مرحبا بكم";
        assert_eq!(normalize(text), text);
    }

    #[test]
    fn punctuation_tables_are_disjoint_from_letters() {
        for &ch in SENTENCE_PUNCTUATION {
            assert!(!is_arabic_letter(ch));
        }
        for &ch in EXTRA_COLLAPSE_MARKS {
            assert!(!is_arabic_letter(ch));
        }
    }
}
