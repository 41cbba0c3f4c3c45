use super::common_structs::EmotionAnalysis;
use super::EmotionBackend;

pub const INVALID_TEXT_MESSAGE: &str = "Invalid text! Please try again!";


// Blank input and upstream failure both collapse to the same message.
pub async fn analyze_text(backend: &impl EmotionBackend, text: &str) -> String {
    if text.trim().is_empty() {
        return INVALID_TEXT_MESSAGE.to_owned();
    }

    let scores = match backend.analyze(text).await {
        Ok(scores) => scores,
        Err(error) => {
            println!("Error analyzing text: {:?}", error);
            return INVALID_TEXT_MESSAGE.to_owned();
        },
    };

    format_analysis(&EmotionAnalysis::new(scores))
}

pub fn format_analysis(analysis: &EmotionAnalysis) -> String {
    let scores = &analysis.scores;
    format!(
        "For the given statement, the system response is 'anger': {}, 'disgust': {}, 'fear': {}, 'joy': {} and 'sadness': {}. The dominant emotion is {}.",
        scores.anger, scores.disgust, scores.fear, scores.joy, scores.sadness, analysis.dominant_emotion
    )
}


#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use anyhow::{bail, Result};
    use async_trait::async_trait;

    use crate::service::common_structs::EmotionScores;
    use super::*;

    struct StubBackend {
        scores: Option<EmotionScores>,
        calls: AtomicUsize,
    }

    impl StubBackend {
        fn returning(scores: EmotionScores) -> Self {
            Self {
                scores: Some(scores),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                scores: None,
                calls: AtomicUsize::new(0),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl EmotionBackend for StubBackend {
        async fn analyze(&self, _text: &str) -> Result<EmotionScores> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.scores {
                Some(scores) => Ok(scores.clone()),
                None => bail!("upstream unavailable"),
            }
        }
    }

    fn joyful_scores() -> EmotionScores {
        EmotionScores {
            anger: 0.029,
            disgust: 0.007,
            fear: 0.028,
            joy: 0.877,
            sadness: 0.062,
        }
    }

    #[tokio::test]
    async fn blank_input_returns_sentinel_without_backend_call() {
        let backend = StubBackend::returning(joyful_scores());
        for text in ["", "   ", "\n\t  "] {
            assert_eq!(analyze_text(&backend, text).await, INVALID_TEXT_MESSAGE);
        }
        assert_eq!(backend.call_count(), 0);
    }

    #[tokio::test]
    async fn backend_failure_returns_sentinel() {
        let backend = StubBackend::failing();
        assert_eq!(analyze_text(&backend, "I think I am having fun").await, INVALID_TEXT_MESSAGE);
        assert_eq!(backend.call_count(), 1);
    }

    #[tokio::test]
    async fn formats_scores_with_dominant_emotion() {
        let backend = StubBackend::returning(joyful_scores());
        let result = analyze_text(&backend, "I think I am having fun").await;
        assert_eq!(
            result,
            "For the given statement, the system response is 'anger': 0.029, 'disgust': 0.007, \
             'fear': 0.028, 'joy': 0.877 and 'sadness': 0.062. The dominant emotion is joy."
        );
    }

    #[tokio::test]
    async fn equal_scores_report_anger_as_dominant() {
        let backend = StubBackend::returning(EmotionScores {
            anger: 0.2,
            disgust: 0.2,
            fear: 0.2,
            joy: 0.2,
            sadness: 0.2,
        });
        let result = analyze_text(&backend, "nothing in particular").await;
        assert!(result.ends_with("The dominant emotion is anger."), "{}", result);
    }

    #[test]
    fn sentence_lists_labels_in_fixed_order() {
        let analysis = EmotionAnalysis::new(EmotionScores {
            anger: 0.1,
            disgust: 0.2,
            fear: 0.3,
            joy: 0.1,
            sadness: 0.9,
        });
        let sentence = format_analysis(&analysis);
        let positions: Vec<usize> = ["'anger'", "'disgust'", "'fear'", "'joy'", "'sadness'"]
            .iter()
            .map(|label| sentence.find(label).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(sentence.ends_with("The dominant emotion is sadness."));
    }
}
