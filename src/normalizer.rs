//! Character classification and text cleanup shared by the tokenizer stages.
//!
//! Classification follows the BERT reference rules: categories come from the
//! Unicode general category table, with a few ASCII ranges forced into the
//! punctuation class so that symbols such as `$`, `+` and `^` split words
//! the way the pretrained vocabularies expect.

use unicode_general_category::{get_general_category, GeneralCategory};
use unicode_normalization::UnicodeNormalization;

/// CJK Unified Ideograph blocks (plus compatibility ideographs).
///
/// Hangul, Hiragana and Katakana are deliberately absent: they are written
/// with spaces and handled like any other script.
const CJK_RANGES: &[(u32, u32)] = &[
    (0x4E00, 0x9FFF),
    (0x3400, 0x4DBF),
    (0x20000, 0x2A6DF),
    (0x2A700, 0x2B73F),
    (0x2B740, 0x2B81F),
    (0x2B820, 0x2CEAF),
    (0xF900, 0xFAFF),
    (0x2F800, 0x2FA1F),
];

/// Characters the whitespace splitter breaks on (`\s` in the reference).
const SPLIT_CHARS: [char; 6] = [' ', '\t', '\n', '\u{0B}', '\u{0C}', '\r'];

/// Returns `true` for characters `clean` turns into a plain space.
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
        || get_general_category(c) == GeneralCategory::SpaceSeparator
}

/// Returns `true` for characters `clean` drops.
///
/// Tab, newline and carriage return are control characters but count as
/// whitespace here.
pub fn is_control(c: char) -> bool {
    if matches!(c, '\t' | '\n' | '\r') {
        return false;
    }
    matches!(
        get_general_category(c),
        GeneralCategory::Control
            | GeneralCategory::Format
            | GeneralCategory::PrivateUse
            | GeneralCategory::Surrogate
            | GeneralCategory::Unassigned
    )
}

/// Returns `true` for characters that always form a token of their own.
pub fn is_punctuation(c: char) -> bool {
    let cp = c as u32;
    if (33..=47).contains(&cp)
        || (58..=64).contains(&cp)
        || (91..=96).contains(&cp)
        || (123..=126).contains(&cp)
    {
        return true;
    }
    matches!(
        get_general_category(c),
        GeneralCategory::ConnectorPunctuation
            | GeneralCategory::DashPunctuation
            | GeneralCategory::ClosePunctuation
            | GeneralCategory::FinalPunctuation
            | GeneralCategory::InitialPunctuation
            | GeneralCategory::OtherPunctuation
            | GeneralCategory::OpenPunctuation
    )
}

/// Returns `true` if `c` lies in one of the CJK ideograph blocks.
pub fn is_chinese_char(c: char) -> bool {
    let cp = c as u32;
    CJK_RANGES
        .iter()
        .any(|&(lo, hi)| (lo..=hi).contains(&cp))
}

/// Removes invalid characters and normalizes whitespace.
///
/// NUL, U+FFFD and every control/format/private-use/unassigned character are
/// dropped; any whitespace character becomes a single ASCII space. Runs of
/// whitespace are kept as runs (the splitter collapses them later).
pub fn clean(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    for c in text.chars() {
        if c == '\0' || c == '\u{FFFD}' || is_control(c) {
            continue;
        }
        if is_whitespace(c) {
            output.push(' ');
        } else {
            output.push(c);
        }
    }
    output
}

/// Puts whitespace around every CJK ideograph so each one splits into its
/// own word.
///
/// A space is only inserted where the ideograph does not already touch a
/// space or an edge of the text, so `"中文"` becomes `"中 文"` rather than
/// `" 中  文 "`. Both split into the same words.
pub fn space_chinese_chars(text: &str) -> String {
    let mut output = String::with_capacity(text.len() + text.len() / 2);
    let mut space_after = false;

    for c in text.chars() {
        if space_after && c != ' ' {
            output.push(' ');
        }
        space_after = false;

        if is_chinese_char(c) {
            if !output.is_empty() && !output.ends_with(' ') {
                output.push(' ');
            }
            space_after = true;
        }
        output.push(c);
    }
    output
}

/// Decomposes `word` (NFD) and drops every nonspacing mark.
///
/// The result is not recomposed, so any remaining combining characters stay
/// in decomposed form.
pub fn strip_accents(word: &str) -> String {
    word.nfd()
        .filter(|&c| get_general_category(c) != GeneralCategory::NonspacingMark)
        .collect()
}

/// Trims `text` and splits it on runs of ASCII whitespace.
///
/// Trimming removes every character up to U+0020 from both ends. Returns an
/// empty vector when nothing is left.
pub fn whitespace_tokenize(text: &str) -> Vec<&str> {
    text.trim_matches(|c: char| c <= '\u{20}')
        .split(SPLIT_CHARS)
        .filter(|word| !word.is_empty())
        .collect()
}
