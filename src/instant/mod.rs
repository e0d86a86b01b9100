//! Rule-based instant text tools.
//!
//! Pure functions with no shared state and no I/O: results come back
//! immediately, without touching the cache or the upstream provider.
//! Dispatch goes through the closed [`InstantTool`] enum, so the set of
//! tools is checked at compile time.

mod analyze;
mod transform;

pub use analyze::{
    CharacterCounts, CodeTextRatio, KeywordDensity, KeywordEntry, KeywordMetrics,
    ReadabilityReport,
};
pub use transform::CaseKind;

use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::Error;
use crate::Result;

/// A rule-based tool exposed by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstantTool {
    WordCounter,
    LineCounter,
    CharacterCounter,
    TextRepeater,
    ReverseText,
    CaseConverter,
    SmallTextGenerator,
    ReadabilityChecker,
    KeywordDensity,
    KeywordMetrics,
    SeoFriendlyUrl,
    CodeToTextRatio,
    AcronymGenerator,
    WordCombiner,
}

/// Per-request parameters for the tools that take any.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstantOptions {
    /// characterCounter: whether `total` counts whitespace (default true).
    pub include_spaces: Option<bool>,
    /// textRepeater: repetition count, clamped to 1..=100.
    pub count: Option<u32>,
    /// caseConverter: target casing. Required for that tool.
    pub case: Option<CaseKind>,
    /// keywordDensity: the keyword to measure. Required for that tool.
    pub keyword: Option<String>,
    /// wordCombiner: joining separator (default `-`).
    pub separator: Option<String>,
}

impl InstantTool {
    pub const ALL: [InstantTool; 14] = [
        InstantTool::WordCounter,
        InstantTool::LineCounter,
        InstantTool::CharacterCounter,
        InstantTool::TextRepeater,
        InstantTool::ReverseText,
        InstantTool::CaseConverter,
        InstantTool::SmallTextGenerator,
        InstantTool::ReadabilityChecker,
        InstantTool::KeywordDensity,
        InstantTool::KeywordMetrics,
        InstantTool::SeoFriendlyUrl,
        InstantTool::CodeToTextRatio,
        InstantTool::AcronymGenerator,
        InstantTool::WordCombiner,
    ];

    pub fn wire_name(&self) -> &'static str {
        match self {
            InstantTool::WordCounter => "wordCounter",
            InstantTool::LineCounter => "lineCounter",
            InstantTool::CharacterCounter => "characterCounter",
            InstantTool::TextRepeater => "textRepeater",
            InstantTool::ReverseText => "reverseText",
            InstantTool::CaseConverter => "caseConverter",
            InstantTool::SmallTextGenerator => "smallTextGenerator",
            InstantTool::ReadabilityChecker => "readabilityChecker",
            InstantTool::KeywordDensity => "keywordDensity",
            InstantTool::KeywordMetrics => "keywordMetrics",
            InstantTool::SeoFriendlyUrl => "seoFriendlyUrl",
            InstantTool::CodeToTextRatio => "codeToTextRatio",
            InstantTool::AcronymGenerator => "acronymGenerator",
            InstantTool::WordCombiner => "wordCombiner",
        }
    }

    pub fn from_wire(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.wire_name() == name)
    }

    /// Runs the tool over the input text.
    pub fn run(&self, text: &str, options: &InstantOptions) -> Result<Value> {
        let value = match self {
            InstantTool::WordCounter => json!(analyze::count_words(text)),
            InstantTool::LineCounter => json!(analyze::count_lines(text)),
            InstantTool::CharacterCounter => to_json(analyze::character_counts(
                text,
                options.include_spaces.unwrap_or(true),
            )),
            InstantTool::TextRepeater => {
                json!(transform::repeat_text(text, options.count.unwrap_or(1)))
            }
            InstantTool::ReverseText => json!(transform::reverse_text(text)),
            InstantTool::CaseConverter => {
                let case = options
                    .case
                    .ok_or_else(|| Error::invalid_input("case option is required"))?;
                json!(transform::convert_case(text, case))
            }
            InstantTool::SmallTextGenerator => json!(transform::small_text(text)),
            InstantTool::ReadabilityChecker => to_json(analyze::readability(text)),
            InstantTool::KeywordDensity => {
                let keyword = options
                    .keyword
                    .as_deref()
                    .filter(|k| !k.trim().is_empty())
                    .ok_or_else(|| Error::invalid_input("keyword option is required"))?;
                to_json(analyze::keyword_density(text, keyword))
            }
            InstantTool::KeywordMetrics => to_json(analyze::keyword_metrics(text)),
            InstantTool::SeoFriendlyUrl => json!(transform::seo_friendly_url(text)),
            InstantTool::CodeToTextRatio => to_json(analyze::code_to_text_ratio(text)),
            InstantTool::AcronymGenerator => json!(transform::acronym(text)),
            InstantTool::WordCombiner => json!(transform::combine_words(
                text,
                options.separator.as_deref().unwrap_or("-"),
            )),
        };
        Ok(value)
    }
}

impl std::fmt::Display for InstantTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.wire_name())
    }
}

fn to_json<T: serde::Serialize>(value: T) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_round_trip() {
        for tool in InstantTool::ALL {
            assert_eq!(InstantTool::from_wire(tool.wire_name()), Some(tool));
        }
        assert_eq!(InstantTool::from_wire("textToPdf"), None);
    }

    #[test]
    fn word_counter_runs_without_options() {
        let value = InstantTool::WordCounter
            .run("one two three", &InstantOptions::default())
            .unwrap();
        assert_eq!(value, json!(3));
    }

    #[test]
    fn case_converter_requires_case_option() {
        let err = InstantTool::CaseConverter
            .run("text", &InstantOptions::default())
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));

        let value = InstantTool::CaseConverter
            .run(
                "hello world",
                &InstantOptions {
                    case: Some(CaseKind::Uppercase),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(value, json!("HELLO WORLD"));
    }

    #[test]
    fn keyword_density_requires_keyword() {
        let err = InstantTool::KeywordDensity
            .run("some text", &InstantOptions::default())
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));

        let value = InstantTool::KeywordDensity
            .run(
                "rust rust go",
                &InstantOptions {
                    keyword: Some("rust".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(value["occurrences"], json!(2));
    }

    #[test]
    fn readability_returns_structured_report() {
        let value = InstantTool::ReadabilityChecker
            .run("The cat sat.", &InstantOptions::default())
            .unwrap();
        assert!(value.get("fleschScore").is_some());
        assert!(value.get("difficulty").is_some());
        assert_eq!(value["words"], json!(3));
    }
}
