//! Rule-based text analysis.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static CODE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(<[^>]+>|`{1,3}[^`]*`{1,3}|//.*|/\*[\s\S]*?\*/|\{[\s\S]*?\})").unwrap()
});

pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

pub fn count_lines(text: &str) -> usize {
    if text.is_empty() {
        0
    } else {
        text.split('\n').count()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterCounts {
    pub total: usize,
    pub without_spaces: usize,
    pub letters: usize,
    pub digits: usize,
    pub spaces: usize,
}

pub fn character_counts(text: &str, include_spaces: bool) -> CharacterCounts {
    let without_spaces = text.chars().filter(|c| !c.is_whitespace()).count();
    let total = if include_spaces {
        text.chars().count()
    } else {
        without_spaces
    };
    CharacterCounts {
        total,
        without_spaces,
        letters: text.chars().filter(|c| c.is_ascii_alphabetic()).count(),
        digits: text.chars().filter(|c| c.is_ascii_digit()).count(),
        spaces: text.chars().filter(|c| c.is_whitespace()).count(),
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadabilityReport {
    pub flesch_score: f64,
    pub difficulty: &'static str,
    pub sentences: usize,
    pub words: usize,
    pub average_words_per_sentence: f64,
}

/// Flesch Reading Ease over estimated syllable counts.
pub fn readability(text: &str) -> ReadabilityReport {
    let sentences = text
        .split(['.', '!', '?'])
        .filter(|s| !s.trim().is_empty())
        .count();
    let words = count_words(text);
    let syllables = estimate_syllables(text);

    let words_per_sentence = words as f64 / sentences.max(1) as f64;
    let syllables_per_word = syllables as f64 / words.max(1) as f64;
    let flesch = 206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word;

    let difficulty = if flesch >= 90.0 {
        "Very Easy"
    } else if flesch >= 80.0 {
        "Easy"
    } else if flesch >= 70.0 {
        "Fairly Easy"
    } else if flesch >= 60.0 {
        "Standard"
    } else if flesch >= 50.0 {
        "Fairly Difficult"
    } else if flesch >= 30.0 {
        "Difficult"
    } else {
        "Very Difficult"
    };

    ReadabilityReport {
        flesch_score: round1(flesch),
        difficulty,
        sentences,
        words,
        average_words_per_sentence: round1(words_per_sentence),
    }
}

/// Counts vowel runs as syllables; floor of one for non-empty input.
fn estimate_syllables(text: &str) -> usize {
    let mut count = 0;
    let mut previous_was_vowel = false;
    for c in text.chars() {
        let is_vowel = matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u');
        if is_vowel && !previous_was_vowel {
            count += 1;
        }
        previous_was_vowel = is_vowel;
    }
    count.max(1)
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordDensity {
    pub keyword: String,
    pub occurrences: usize,
    pub total_words: usize,
    /// Percentage of all words, rounded to two decimals.
    pub density: f64,
}

pub fn keyword_density(text: &str, keyword: &str) -> KeywordDensity {
    let needle = keyword.to_lowercase();
    let lowered = text.to_lowercase();
    let words: Vec<&str> = lowered.split_whitespace().collect();
    let occurrences = words.iter().filter(|w| **w == needle).count();
    let density = if words.is_empty() {
        0.0
    } else {
        round2(occurrences as f64 / words.len() as f64 * 100.0)
    };
    KeywordDensity {
        keyword: keyword.to_string(),
        occurrences,
        total_words: words.len(),
        density,
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordEntry {
    pub word: String,
    pub count: usize,
    pub density: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordMetrics {
    pub total_words: usize,
    pub unique_words: usize,
    pub top_keywords: Vec<KeywordEntry>,
}

/// Word-frequency profile with the ten most frequent words.
pub fn keyword_metrics(text: &str) -> KeywordMetrics {
    let lowered = text.to_lowercase();
    let words: Vec<&str> = lowered.split_whitespace().collect();

    let mut frequency: HashMap<&str, usize> = HashMap::new();
    for word in &words {
        *frequency.entry(word).or_insert(0) += 1;
    }
    let unique_words = frequency.len();

    let mut entries: Vec<(&str, usize)> = frequency.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));

    let total_words = words.len();
    let top_keywords = entries
        .into_iter()
        .take(10)
        .map(|(word, count)| KeywordEntry {
            word: word.to_string(),
            count,
            density: round2(count as f64 / total_words as f64 * 100.0),
        })
        .collect();

    KeywordMetrics {
        total_words,
        unique_words,
        top_keywords,
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeTextRatio {
    pub total_length: usize,
    pub code_length: usize,
    pub text_length: usize,
    pub code_ratio: f64,
    pub text_ratio: f64,
}

/// Share of the input occupied by markup, code fences, comments and braces.
pub fn code_to_text_ratio(text: &str) -> CodeTextRatio {
    let total_length = text.chars().count();
    let code_length: usize = CODE_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().chars().count())
        .sum();
    let text_length = total_length - code_length;

    let (code_ratio, text_ratio) = if total_length > 0 {
        (
            round2(code_length as f64 / total_length as f64 * 100.0),
            round2(text_length as f64 / total_length as f64 * 100.0),
        )
    } else {
        (0.0, 0.0)
    };

    CodeTextRatio {
        total_length,
        code_length,
        text_length,
        code_ratio,
        text_ratio,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_and_line_counts() {
        assert_eq!(count_words("  one two   three "), 3);
        assert_eq!(count_words(""), 0);
        assert_eq!(count_lines(""), 0);
        assert_eq!(count_lines("a"), 1);
        assert_eq!(count_lines("a\nb\nc"), 3);
    }

    #[test]
    fn character_counts_split_by_class() {
        let counts = character_counts("ab 12!", true);
        assert_eq!(counts.total, 6);
        assert_eq!(counts.without_spaces, 5);
        assert_eq!(counts.letters, 2);
        assert_eq!(counts.digits, 2);
        assert_eq!(counts.spaces, 1);

        let no_spaces = character_counts("ab 12!", false);
        assert_eq!(no_spaces.total, 5);
    }

    #[test]
    fn readability_short_simple_text_scores_easy() {
        let report = readability("The cat sat. The dog ran.");
        assert_eq!(report.sentences, 2);
        assert_eq!(report.words, 6);
        assert!(report.flesch_score > 90.0, "score was {}", report.flesch_score);
        assert_eq!(report.difficulty, "Very Easy");
        assert_eq!(report.average_words_per_sentence, 3.0);
    }

    #[test]
    fn syllable_estimate_counts_vowel_runs() {
        assert_eq!(estimate_syllables("cat"), 1);
        assert_eq!(estimate_syllables("beautiful"), 3);
        assert_eq!(estimate_syllables("xyz"), 1);
    }

    #[test]
    fn keyword_density_matches_whole_tokens() {
        let density = keyword_density("rust is fast and Rust is fun", "rust");
        assert_eq!(density.occurrences, 2);
        assert_eq!(density.total_words, 7);
        assert_eq!(density.density, 28.57);
    }

    #[test]
    fn keyword_metrics_ranks_by_frequency() {
        let metrics = keyword_metrics("red red red blue blue green");
        assert_eq!(metrics.total_words, 6);
        assert_eq!(metrics.unique_words, 3);
        assert_eq!(metrics.top_keywords[0].word, "red");
        assert_eq!(metrics.top_keywords[0].count, 3);
        assert_eq!(metrics.top_keywords[0].density, 50.0);
        assert_eq!(metrics.top_keywords[1].word, "blue");
    }

    #[test]
    fn code_ratio_detects_markup() {
        let ratio = code_to_text_ratio("hello <b>bold</b> world");
        assert!(ratio.code_length > 0);
        assert_eq!(ratio.total_length, 23);
        assert_eq!(
            ratio.code_length + ratio.text_length,
            ratio.total_length
        );

        let plain = code_to_text_ratio("");
        assert_eq!(plain.code_ratio, 0.0);
    }
}
