pub mod analyzer;
pub mod common_structs;
pub mod watson_service;

use anyhow::Result;
use async_trait::async_trait;

use common_structs::EmotionScores;


#[async_trait]
pub trait EmotionBackend: Send + Sync {
    async fn analyze(&self, text: &str) -> Result<EmotionScores>;
}


#[derive(Debug, Clone)]
pub struct CommonService {
    pub watson: watson_service::WatsonService,
}

impl CommonService {
    pub fn new() -> Self {
        Self {
            watson: watson_service::WatsonService::new(),
        }
    }
}
