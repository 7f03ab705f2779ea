//! HTTP client for the classification endpoint.
//!
//! The `Classifier` trait is the seam between the request controller and the
//! network, so the controller can be driven by fakes in tests.

use crate::domain::{ClassificationResult, ClassifyError, ClassifyResult, PredictRequest, ResponseInterpreter};
use crate::infrastructure::ClientConfig;

/// Something that can turn text into a sentiment verdict.
///
/// Implementations are called from a worker thread, one call per submission.
pub trait Classifier: Send + Sync {
    fn classify(&self, text: &str) -> ClassifyResult<ClassificationResult>;
}

impl From<reqwest::Error> for ClassifyError {
    fn from(err: reqwest::Error) -> Self {
        ClassifyError::Transport(err.to_string())
    }
}

/// Production classifier posting to `{server}/api/predict`.
pub struct HttpClassifier {
    client: reqwest::blocking::Client,
    url: String,
}

impl HttpClassifier {
    pub fn new(config: &ClientConfig) -> ClassifyResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            client,
            url: config.predict_url(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Classifier for HttpClassifier {
    fn classify(&self, text: &str) -> ClassifyResult<ClassificationResult> {
        tracing::debug!(url = %self.url, chars = text.chars().count(), "posting text for classification");

        // The status code is not consulted: error responses still carry a JSON body.
        let response = self
            .client
            .post(&self.url)
            .json(&PredictRequest::new(text))
            .send()?;
        let status = response.status();
        let body = response.text()?;

        tracing::debug!(status = status.as_u16(), bytes = body.len(), "classification response received");
        ResponseInterpreter::parse_body(&body)
    }
}
