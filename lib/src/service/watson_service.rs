use std::time::Duration;

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use reqwest::{header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE}, Client};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::env_keys::EMOTION_ENDPOINT;
use super::common_structs::EmotionScores;
use super::EmotionBackend;

const EMOTION_PREDICT_ENDPOINT: &str = "https://sn-watson-emotion.labs.skills.network/v1/watson.runtime.nlp.v1/NlpService/EmotionPredict";
const MODEL_ID_HEADER: &str = "grpc-metadata-mm-model-id";
const MODEL_ID: &str = "emotion_aggregated-workflow_lang_en_stock";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);


#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct EmotionPredictResponse {
    #[serde(rename = "emotionPredictions", default)]
    pub emotion_predictions: Vec<EmotionPrediction>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct EmotionPrediction {
    #[serde(default)]
    pub emotion: EmotionScores,
}


#[derive(Debug, Clone)]
pub struct WatsonService {
    client: Client,
    endpoint: String,
    headers: HeaderMap,
}

impl WatsonService {
    pub fn new() -> Self {
        let endpoint = std::env::var(EMOTION_ENDPOINT).unwrap_or(EMOTION_PREDICT_ENDPOINT.to_owned());

        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static(MODEL_ID_HEADER), HeaderValue::from_static(MODEL_ID));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json;charset=UTF-8"));

        Self {
            client: Client::builder().timeout(REQUEST_TIMEOUT).build().unwrap_or_default(),
            endpoint,
            headers,
        }
    }

    fn process_emotion_predict_output(&self, body_string: &str) -> Result<EmotionScores> {
        let response = serde_json::from_str::<EmotionPredictResponse>(body_string)?;
        let prediction = response.emotion_predictions
            .into_iter()
            .next()
            .context("no emotion predictions in response")?;
        Ok(prediction.emotion)
    }
}

#[async_trait]
impl EmotionBackend for WatsonService {
    async fn analyze(&self, text: &str) -> Result<EmotionScores> {
        let body = json!({
            "raw_document": {
                "text": text
            }
        });

        let response = self.client
            .post(&self.endpoint)
            .headers(self.headers.clone())
            .body(serde_json::to_string(&body)?)
            .send()
            .await?;

        let status = response.status();
        let body_string = response.text().await?;
        println!("response status: {}, body: {}", status, body_string);

        // Watson answers 400 for text it cannot score
        if !status.is_success() {
            bail!("emotion endpoint returned {}", status);
        }

        self.process_emotion_predict_output(&body_string)
    }
}
