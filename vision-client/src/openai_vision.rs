//! OpenAI-compatible vision implementation of [`FreshnessAnalyzer`].
//!
//! Sends the fixed assessment prompt plus the JPEG (as a base64 data URL) to
//! the chat completions endpoint, with a strict JSON schema on the response
//! format. Wraps [async-openai]; token masking keeps request logs safe.

use std::sync::Arc;

use async_openai::config::OpenAIConfig;
use async_openai::error::OpenAIError;
use async_openai::types::{
    ChatCompletionRequestMessageContentPartImageArgs, ChatCompletionRequestMessageContentPartTextArgs,
    ChatCompletionRequestUserMessageArgs, ChatCompletionRequestUserMessageContentPart,
    CreateChatCompletionRequest, CreateChatCompletionRequestArgs, ImageDetail, ImageUrlArgs,
    ResponseFormat, ResponseFormatJsonSchema,
};
use async_openai::Client;
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Deserialize;
use serde_json::json;

use freshcheck_core::{now_ms, AssessmentRecord, FreshnessLevel};

use crate::{fallback_record, mask_token, AssessmentOutcome, FreshnessAnalyzer, VisionError};

/// Model used when the caller does not pick one.
pub const DEFAULT_VISION_MODEL: &str = "gpt-4o-mini";

/// The fixed assessment instruction. Pins the category and freshness
/// vocabularies and forbids consumption advice in the response.
pub const ASSESSMENT_PROMPT: &str = r#"你是一个资深的食材鉴别专家。请严格分析图中食材的客观状态：
1. **精确识别**：识别食材名称。
2. **分类定位**：属于：'叶菜类'、'根茎类'、'瓜果类蔬菜'、'菌菇类'、'水果'、'肉类'、'水产'、'蛋奶类'。
3. **新鲜度等级**：'新鲜'、'一般'、'临界' 或 '不建议食用'。
4. **状态特征描述**：描述颜色、质地、斑点及预测手感。
5. **数值评估**：预计该状态在当前环境下能维持的天数。

**注意（极其重要）**：
- 严禁出现“建议尽快食用”、“请在X天内吃完”、“适合清炒”等任何引导用户食用的建议或话术。
- 你的职责仅限于判断和描述新鲜程度，不提供消费决策或烹饪建议。
- 输出内容必须保持客观、中立。

请严格按照JSON格式输出。"#;

/// Vision client for OpenAI-compatible chat completion endpoints.
/// Wraps async-openai; optionally holds the API key for masked logging.
#[derive(Clone)]
pub struct OpenAiVisionClient {
    /// Shared async-openai client used for all API calls.
    client: Arc<Client<OpenAIConfig>>,
    model: String,
    /// API key stored only for logging (masked). None when created via `with_client()`.
    api_key_for_logging: Option<String>,
}

impl OpenAiVisionClient {
    /// Builds a client using the given API key and default API base URL.
    pub fn new(api_key: String) -> Self {
        let api_key_for_logging = Some(api_key.clone());
        let config = OpenAIConfig::new().with_api_key(api_key);
        Self {
            client: Arc::new(Client::with_config(config)),
            model: DEFAULT_VISION_MODEL.to_string(),
            api_key_for_logging,
        }
    }

    /// Builds a client with a custom base URL (e.g. for proxies or compatible endpoints).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        let api_key_for_logging = Some(api_key.clone());
        let config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(base_url);
        Self {
            client: Arc::new(Client::with_config(config)),
            model: DEFAULT_VISION_MODEL.to_string(),
            api_key_for_logging,
        }
    }

    /// Builds a client from an existing async-openai client (no API key stored for logging).
    pub fn with_client(client: Client<OpenAIConfig>) -> Self {
        Self {
            client: Arc::new(client),
            model: DEFAULT_VISION_MODEL.to_string(),
            api_key_for_logging: None,
        }
    }

    /// Overrides the model name.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    fn build_request(&self, image_jpeg: &[u8]) -> Result<CreateChatCompletionRequest, OpenAIError> {
        let encoded = STANDARD.encode(image_jpeg);
        let data_url = format!("data:image/jpeg;base64,{encoded}");

        let text_part: ChatCompletionRequestUserMessageContentPart =
            ChatCompletionRequestMessageContentPartTextArgs::default()
                .text(ASSESSMENT_PROMPT)
                .build()?
                .into();

        let image_part: ChatCompletionRequestUserMessageContentPart =
            ChatCompletionRequestMessageContentPartImageArgs::default()
                .image_url(
                    ImageUrlArgs::default()
                        .url(data_url)
                        .detail(ImageDetail::Auto)
                        .build()?,
                )
                .build()?
                .into();

        let message = ChatCompletionRequestUserMessageArgs::default()
            .content(vec![image_part, text_part])
            .build()?;

        CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(vec![message.into()])
            .response_format(assessment_response_format())
            .build()
    }

    async fn request_assessment(&self, image_jpeg: &[u8]) -> Result<AssessmentRecord, VisionError> {
        let masked = self
            .api_key_for_logging
            .as_deref()
            .map(mask_token)
            .unwrap_or_else(|| "***".to_string());

        tracing::info!(
            model = %self.model,
            image_bytes = image_jpeg.len(),
            api_key = %masked,
            "vision assessment request"
        );

        // The request body embeds the whole image as base64, so unlike the
        // text-only clients we do not log the request JSON.
        let request = self
            .build_request(image_jpeg)
            .map_err(|e| VisionError::Service(e.to_string()))?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| VisionError::Service(e.to_string()))?;

        if let Some(ref u) = response.usage {
            tracing::info!(
                prompt_tokens = u.prompt_tokens,
                completion_tokens = u.completion_tokens,
                total_tokens = u.total_tokens,
                "vision assessment usage"
            );
        }

        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or_else(|| VisionError::Service("no content in response".to_string()))?;

        parse_assessment(&content, now_ms())
    }
}

#[async_trait]
impl FreshnessAnalyzer for OpenAiVisionClient {
    async fn analyze(&self, image_jpeg: &[u8]) -> AssessmentOutcome {
        match self.request_assessment(image_jpeg).await {
            Ok(record) => AssessmentOutcome::Analyzed(record),
            Err(reason) => {
                tracing::warn!(error = %reason, "vision assessment degraded to fallback record");
                AssessmentOutcome::Fallback {
                    record: fallback_record(now_ms()),
                    reason,
                }
            }
        }
    }
}

/// JSON schema the service must answer with; mirrors the wire shape of
/// [`AssessmentRecord`] minus the client-side timestamp.
fn assessment_response_format() -> ResponseFormat {
    ResponseFormat::JsonSchema {
        json_schema: ResponseFormatJsonSchema {
            description: Some("食材新鲜度判断结果".to_string()),
            name: "freshness_assessment".to_string(),
            schema: Some(json!({
                "type": "object",
                "properties": {
                    "ingredientName": { "type": "string" },
                    "category": { "type": "string" },
                    "freshness": { "type": "string", "enum": ["新鲜", "一般", "临界", "不建议食用"] },
                    "remainingDays": { "type": "string" },
                    "reasoning": { "type": "string", "description": "新鲜度诊断的客观理由和特征描述" },
                    "cookingTips": { "type": "string", "description": "请在此处填写食材的典型科普特征，严禁出现食用建议" },
                    "icon": { "type": "string" }
                },
                "required": ["ingredientName", "category", "freshness", "remainingDays", "reasoning", "cookingTips", "icon"],
                "additionalProperties": false
            })),
            strict: Some(true),
        },
    }
}

/// What the service sends back; the timestamp is stamped client-side.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireAssessment {
    ingredient_name: String,
    category: String,
    freshness: FreshnessLevel,
    remaining_days: String,
    reasoning: String,
    cooking_tips: String,
    icon: String,
}

/// Parses the service's JSON content into a record. Any deviation, including
/// a freshness value outside the 4-level enum, is a malformed response.
fn parse_assessment(content: &str, timestamp_ms: i64) -> Result<AssessmentRecord, VisionError> {
    let wire: WireAssessment =
        serde_json::from_str(content).map_err(|e| VisionError::MalformedResponse(e.to_string()))?;
    Ok(AssessmentRecord {
        ingredient_name: wire.ingredient_name,
        category: wire.category,
        freshness: wire.freshness,
        remaining_days: wire.remaining_days,
        reasoning: wire.reasoning,
        cooking_tips: wire.cooking_tips,
        icon: wire.icon,
        timestamp: timestamp_ms,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_a_well_formed_assessment() {
        let content = r#"{
            "ingredientName": "菠菜",
            "category": "叶菜类",
            "freshness": "新鲜",
            "remainingDays": "3-5",
            "reasoning": "叶片挺括，色泽鲜绿。",
            "cookingTips": "叶菜类含水量高。",
            "icon": "🥬"
        }"#;

        let record = parse_assessment(content, 1_700_000_000_000).unwrap();
        assert_eq!(record.ingredient_name, "菠菜");
        assert_eq!(record.freshness, FreshnessLevel::Fresh);
        assert_eq!(record.remaining_days, "3-5");
        assert_eq!(record.timestamp, 1_700_000_000_000);
    }

    #[test]
    fn parse_rejects_non_json_content() {
        let err = parse_assessment("很新鲜，放心吃", 0).unwrap_err();
        assert!(matches!(err, VisionError::MalformedResponse(_)));
    }

    #[test]
    fn parse_rejects_out_of_enum_freshness() {
        let content = r#"{
            "ingredientName": "菠菜",
            "category": "叶菜类",
            "freshness": "极佳",
            "remainingDays": "3",
            "reasoning": "r",
            "cookingTips": "t",
            "icon": "🥬"
        }"#;

        let err = parse_assessment(content, 0).unwrap_err();
        assert!(matches!(err, VisionError::MalformedResponse(_)));
    }

    #[test]
    fn parse_rejects_missing_fields() {
        let content = r#"{"ingredientName": "菠菜"}"#;
        let err = parse_assessment(content, 0).unwrap_err();
        assert!(matches!(err, VisionError::MalformedResponse(_)));
    }

    #[test]
    fn prompt_pins_both_vocabularies() {
        for label in ["叶菜类", "根茎类", "瓜果类蔬菜", "菌菇类", "水果", "肉类", "水产", "蛋奶类"] {
            assert!(ASSESSMENT_PROMPT.contains(label));
        }
        for level in ["新鲜", "一般", "临界", "不建议食用"] {
            assert!(ASSESSMENT_PROMPT.contains(level));
        }
    }
}
