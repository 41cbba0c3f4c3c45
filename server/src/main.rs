pub mod handlers;

use axum::Router;
use axum::routing::get;
use handlers::{emotion_detector, emotion_detector_form, index};
use lib::env_keys::SERVER_ADDRESS;
use lib::service::CommonService;
use tokio::net::TcpListener;


#[tokio::main]async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    let service = CommonService::new();

    let app = Router::new()
        .route("/", get(index))
        .route("/emotionDetector", get(emotion_detector).post(emotion_detector_form))
        .with_state(service);

    let address = std::env::var(SERVER_ADDRESS).unwrap_or("localhost:5000".to_owned());
    println!("listening on {}", address);

    let listener = TcpListener::bind(&address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
