use serde::{Deserialize, Serialize};


#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct EmotionScores {
    #[serde(default)]
    pub anger: f64,
    #[serde(default)]
    pub disgust: f64,
    #[serde(default)]
    pub fear: f64,
    #[serde(default)]
    pub joy: f64,
    #[serde(default)]
    pub sadness: f64,
}

impl EmotionScores {
    // Fixed label order. Ties resolve to the earliest label in this list.
    pub fn labeled(&self) -> [(&'static str, f64); 5] {
        [
            ("anger", self.anger),
            ("disgust", self.disgust),
            ("fear", self.fear),
            ("joy", self.joy),
            ("sadness", self.sadness),
        ]
    }

    pub fn dominant_emotion(&self) -> &'static str {
        let mut dominant = ("anger", self.anger);
        for (label, score) in self.labeled() {
            if score > dominant.1 {
                dominant = (label, score);
            }
        }
        dominant.0
    }
}


#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct EmotionAnalysis {
    pub scores: EmotionScores,
    pub dominant_emotion: String,
}

impl EmotionAnalysis {
    pub fn new(scores: EmotionScores) -> Self {
        let dominant_emotion = scores.dominant_emotion().to_owned();
        Self {
            scores,
            dominant_emotion,
        }
    }
}
