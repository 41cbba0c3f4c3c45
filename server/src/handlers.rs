use axum::extract::{Form, Query, State};
use axum::response::Html;
use lib::service::analyzer;
use lib::service::CommonService;
use serde::Deserialize;


const INDEX_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Emotion Detector</title></head>
<body>
    <h2>Emotion Detection</h2>
    <form action="/emotionDetector" method="post">
        <input type="text" name="textToAnalyze" placeholder="Type your text here" size="60">
        <button type="submit">Analyze</button>
    </form>
</body>
</html>
"#;


#[derive(Debug, Deserialize)]
pub struct AnalyzeParams {
    #[serde(rename = "textToAnalyze")]
    pub text_to_analyze: Option<String>,
}


pub async fn index() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

pub async fn emotion_detector(
    State(service): State<CommonService>,
    Query(params): Query<AnalyzeParams>
) -> String {
    run_analysis(&service, params).await
}

pub async fn emotion_detector_form(
    State(service): State<CommonService>,
    Form(params): Form<AnalyzeParams>
) -> String {
    run_analysis(&service, params).await
}

async fn run_analysis(service: &CommonService, params: AnalyzeParams) -> String {
    let text = params.text_to_analyze.unwrap_or_default();
    println!("textToAnalyze: {}", text);

    analyzer::analyze_text(&service.watson, &text).await
}
