//! # Vision client abstraction
//!
//! Defines the [`FreshnessAnalyzer`] trait and an OpenAI-compatible
//! implementation. Callers hand over raw JPEG bytes and always get a
//! displayable assessment back: service or parse failures are folded into a
//! fixed fallback record instead of bubbling up as errors.

use async_trait::async_trait;
use thiserror::Error;

use freshcheck_core::{AssessmentRecord, FreshnessLevel};

mod openai_vision;

pub use openai_vision::{OpenAiVisionClient, ASSESSMENT_PROMPT, DEFAULT_VISION_MODEL};

/// Why an assessment fell back to the canned record.
#[derive(Error, Debug)]
pub enum VisionError {
    /// The HTTP call itself failed, or the response carried no content.
    #[error("vision service call failed: {0}")]
    Service(String),
    /// The service answered, but the payload was not a usable assessment.
    /// Includes out-of-enum freshness values, which fail closed here.
    #[error("vision response not usable: {0}")]
    MalformedResponse(String),
}

/// Result of one image assessment. Both variants carry a displayable record;
/// the caller decides whether to tell the user the analysis was degraded.
#[derive(Debug)]
pub enum AssessmentOutcome {
    /// The service returned a well-formed assessment.
    Analyzed(AssessmentRecord),
    /// The call or its payload failed; `record` is the fixed fallback.
    Fallback {
        record: AssessmentRecord,
        reason: VisionError,
    },
}

impl AssessmentOutcome {
    pub fn record(&self) -> &AssessmentRecord {
        match self {
            AssessmentOutcome::Analyzed(record) => record,
            AssessmentOutcome::Fallback { record, .. } => record,
        }
    }

    pub fn into_record(self) -> AssessmentRecord {
        match self {
            AssessmentOutcome::Analyzed(record) => record,
            AssessmentOutcome::Fallback { record, .. } => record,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, AssessmentOutcome::Fallback { .. })
    }
}

/// Image-to-assessment interface. Implementations must be shareable behind an
/// `Arc` so the application can swap in stubs for tests.
#[async_trait]
pub trait FreshnessAnalyzer: Send + Sync {
    /// Assesses one JPEG image. Never fails: degraded paths return
    /// [`AssessmentOutcome::Fallback`].
    async fn analyze(&self, image_jpeg: &[u8]) -> AssessmentOutcome;
}

/// The deterministic record substituted when analysis fails. Keeps the app
/// usable offline: average freshness, 3-day estimate, retake suggestion.
pub fn fallback_record(timestamp_ms: i64) -> AssessmentRecord {
    AssessmentRecord {
        ingredient_name: "无法识别".to_string(),
        category: "其他".to_string(),
        freshness: FreshnessLevel::Average,
        remaining_days: "3".to_string(),
        reasoning: "由于光线或角度原因，无法获取清晰的表皮特征。请重新拍摄。".to_string(),
        cooking_tips: "该食材的保鲜受环境湿度影响较大。".to_string(),
        icon: "❓".to_string(),
        timestamp: timestamp_ms,
    }
}

/// Masks an API key/token for safe logging: shows first 7 chars + "***" + last 4 chars.
/// If length <= 11, returns "***" to avoid leaking any part of the key.
/// Length is counted in characters, so a key pasted with multibyte characters
/// never splits a UTF-8 boundary.
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 11 {
        "***".to_string()
    } else {
        let head: String = chars[..7].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}***{}", head, tail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_token_hides_short_keys_entirely() {
        assert_eq!(mask_token(""), "***");
        assert_eq!(mask_token("sk-abc"), "***");
        assert_eq!(mask_token("exactly-11c"), "***");
    }

    #[test]
    fn mask_token_keeps_head_and_tail_of_long_keys() {
        assert_eq!(mask_token("sk-proj-1234567890abcd"), "sk-proj***abcd");
    }

    #[test]
    fn mask_token_counts_characters_not_bytes() {
        // Full-width key: 12 chars but 36 bytes. Byte-offset slicing would
        // split a character boundary here.
        assert_eq!(
            mask_token("ｓｋ－ｐｒｏｊ－ａｂｃｄ"),
            "ｓｋ－ｐｒｏｊ***ａｂｃｄ"
        );
        assert_eq!(mask_token("测试密钥"), "***");
    }

    #[test]
    fn fallback_record_is_average_and_unrecognized() {
        let record = fallback_record(42);
        assert_eq!(record.ingredient_name, "无法识别");
        assert_eq!(record.category, "其他");
        assert_eq!(record.freshness, FreshnessLevel::Average);
        assert_eq!(record.remaining_days, "3");
        assert_eq!(record.icon, "❓");
        assert_eq!(record.timestamp, 42);
    }

    #[test]
    fn outcome_exposes_its_record_either_way() {
        let analyzed = AssessmentOutcome::Analyzed(fallback_record(1));
        assert!(!analyzed.is_fallback());
        assert_eq!(analyzed.record().timestamp, 1);

        let fallback = AssessmentOutcome::Fallback {
            record: fallback_record(2),
            reason: VisionError::Service("boom".to_string()),
        };
        assert!(fallback.is_fallback());
        assert_eq!(fallback.into_record().timestamp, 2);
    }
}
