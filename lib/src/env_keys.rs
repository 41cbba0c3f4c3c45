pub static EMOTION_ENDPOINT: &str = "EMOTION_ENDPOINT";
pub static SERVER_ADDRESS: &str = "SERVER_ADDRESS";
