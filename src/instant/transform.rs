//! Pure text transformations.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static NON_SLUG: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s-]").unwrap());
static HYPHEN_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"-+").unwrap());

/// Repeats the text, clamped to 1..=100 repetitions.
pub fn repeat_text(text: &str, count: u32) -> String {
    text.repeat(count.clamp(1, 100) as usize)
}

pub fn reverse_text(text: &str) -> String {
    text.chars().rev().collect()
}

/// Target casing for [`convert_case`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseKind {
    Uppercase,
    Lowercase,
    Titlecase,
    Sentencecase,
    Camelcase,
    Snakecase,
    Kebabcase,
}

pub fn convert_case(text: &str, kind: CaseKind) -> String {
    match kind {
        CaseKind::Uppercase => text.to_uppercase(),
        CaseKind::Lowercase => text.to_lowercase(),
        CaseKind::Titlecase => text
            .split(' ')
            .map(capitalize)
            .collect::<Vec<_>>()
            .join(" "),
        CaseKind::Sentencecase => capitalize(text),
        CaseKind::Camelcase => text
            .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
            .filter(|w| !w.is_empty())
            .enumerate()
            .map(|(i, w)| {
                if i == 0 {
                    w.to_lowercase()
                } else {
                    capitalize(w)
                }
            })
            .collect(),
        CaseKind::Snakecase => WHITESPACE_RUN
            .replace_all(&text.to_lowercase(), "_")
            .into_owned(),
        CaseKind::Kebabcase => WHITESPACE_RUN
            .replace_all(&text.to_lowercase(), "-")
            .into_owned(),
    }
}

/// Uppercases the first character and lowercases the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// Maps letters to their Unicode superscript forms where one exists.
pub fn small_text(text: &str) -> String {
    text.chars().map(|c| superscript(c).unwrap_or(c)).collect()
}

fn superscript(c: char) -> Option<char> {
    Some(match c {
        'a' => 'ᵃ',
        'b' => 'ᵇ',
        'c' => 'ᶜ',
        'd' => 'ᵈ',
        'e' => 'ᵉ',
        'f' => 'ᶠ',
        'g' => 'ᵍ',
        'h' => 'ʰ',
        'i' => 'ⁱ',
        'j' => 'ʲ',
        'k' => 'ᵏ',
        'l' => 'ˡ',
        'm' => 'ᵐ',
        'n' => 'ⁿ',
        'o' => 'ᵒ',
        'p' => 'ᵖ',
        'r' => 'ʳ',
        's' => 'ˢ',
        't' => 'ᵗ',
        'u' => 'ᵘ',
        'v' => 'ᵛ',
        'w' => 'ʷ',
        'x' => 'ˣ',
        'y' => 'ʸ',
        'z' => 'ᶻ',
        'A' => 'ᴬ',
        'B' => 'ᴮ',
        'D' => 'ᴰ',
        'E' => 'ᴱ',
        'G' => 'ᴳ',
        'H' => 'ᴴ',
        'I' => 'ᴵ',
        'J' => 'ᴶ',
        'K' => 'ᴷ',
        'L' => 'ᴸ',
        'M' => 'ᴹ',
        'N' => 'ᴺ',
        'O' => 'ᴼ',
        'P' => 'ᴾ',
        'R' => 'ᴿ',
        'T' => 'ᵀ',
        'U' => 'ᵁ',
        'W' => 'ᵂ',
        _ => return None,
    })
}

/// Lowercase slug: special characters stripped, whitespace runs collapsed
/// to single hyphens, no leading or trailing hyphen.
pub fn seo_friendly_url(text: &str) -> String {
    let lowered = text.to_lowercase();
    let cleaned = NON_SLUG.replace_all(lowered.trim(), "");
    let hyphenated = WHITESPACE_RUN.replace_all(&cleaned, "-");
    HYPHEN_RUN
        .replace_all(&hyphenated, "-")
        .trim_matches('-')
        .to_string()
}

pub fn acronym(text: &str) -> String {
    text.split(|c: char| c.is_whitespace() || c == '-')
        .filter(|w| !w.is_empty())
        .filter_map(|w| w.chars().next())
        .flat_map(|c| c.to_uppercase())
        .collect()
}

pub fn combine_words(text: &str, separator: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(separator)
}
