use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Sentiment label the classifier uses for the positive branch.
pub const POSITIVE_SENTIMENT: &str = "positive";

/// Identifies one submission so late completions can be matched or dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubmissionId(pub u64);

impl std::fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Body of `POST /api/predict`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PredictRequest {
    pub text: String,
}

impl PredictRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Raw response body of `POST /api/predict`.
///
/// Every field is optional on the wire and read leniently. `success` follows
/// JSON truthiness (`false`, `null`, `0` and `""` are false; a missing flag is
/// false). A non-string `sentiment` never equals `"positive"`. A falsy
/// `error` means no reason was given. Anything else the server sends lands in
/// `extra` untouched.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct PredictResponse {
    #[serde(default, deserialize_with = "deserialize_truthy")]
    pub success: bool,
    #[serde(default, deserialize_with = "deserialize_sentiment")]
    pub sentiment: String,
    #[serde(default, deserialize_with = "deserialize_reason")]
    pub error: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The verdict of a successful classification.
///
/// `extra` carries auxiliary fields such as a confidence score. They are
/// passed through to the presentation layer without validation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClassificationResult {
    pub sentiment: String,
    pub extra: Map<String, Value>,
}

impl ClassificationResult {
    pub fn new(sentiment: impl Into<String>) -> Self {
        Self {
            sentiment: sentiment.into(),
            extra: Map::new(),
        }
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    pub fn is_positive(&self) -> bool {
        self.sentiment == POSITIVE_SENTIMENT
    }
}

/// User-facing failure text. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorMessage(String);

impl ErrorMessage {
    /// Builds a message, substituting `fallback` when `message` is blank.
    /// A non-blank message is kept exactly as given.
    pub fn or_fallback(message: Option<&str>, fallback: &str) -> Self {
        match message {
            Some(text) if !text.trim().is_empty() => Self(text.to_string()),
            _ => Self(fallback.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lifecycle of the current submission.
///
/// The payload lives inside the variant, so a result and an error can never
/// be held at the same time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmissionPhase {
    /// Nothing submitted since the last edit
    #[default]
    Idle,
    /// A request is in flight; further submissions are rejected
    Pending(SubmissionId),
    /// The server classified the text
    Succeeded(ClassificationResult),
    /// The request failed at the application or transport level
    Failed(ErrorMessage),
}

impl SubmissionPhase {
    pub fn is_pending(&self) -> bool {
        matches!(self, SubmissionPhase::Pending(_))
    }

    pub fn result(&self) -> Option<&ClassificationResult> {
        match self {
            SubmissionPhase::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ErrorMessage> {
        match self {
            SubmissionPhase::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SubmissionPhase::Idle => "idle",
            SubmissionPhase::Pending(_) => "pending",
            SubmissionPhase::Succeeded(_) => "succeeded",
            SubmissionPhase::Failed(_) => "failed",
        }
    }
}

/// JSON truthiness as a browser client would judge it.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn deserialize_truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(|value| is_truthy(&value))
}

fn deserialize_sentiment<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(label) => label,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

fn deserialize_reason<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(reason) => Some(reason),
        other if is_truthy(&other) => Some(other.to_string()),
        _ => None,
    })
}
