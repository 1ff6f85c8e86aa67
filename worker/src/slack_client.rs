use std::sync::Arc;
use anyhow::Result;
use reqwest::{self, Client};
use serde::Serialize;
use tracing::info;

#[derive(Serialize)]
struct ResponseRequestBody {
    response_type: String,
    text: String,
}

pub struct SlackClient {
    client: Client,
}

// https://api.slack.com/interactivity/handling#message_responses
impl SlackClient {
    pub fn new() -> Result<Arc<Self>> {
        let client = reqwest::Client::new();
        let this = Self {
            client,
        };
        let this = Arc::new(this);
        Ok(this)
    }

    // response_url accepts posts for thirty minutes after the original command
    pub async fn respond(&self, response_url: &str, text: String) -> Result<()> {
        let request_body = ResponseRequestBody {
            response_type: "ephemeral".into(),
            text,
        };
        let response = self.client.post(response_url)
            .header("Content-type", "application/json; charset=utf-8")
            .json(&request_body)
            .send()
            .await?;
        let text = response.text().await?;
        info!("slack response_url response {:?}", text);
        Ok(())
    }
}
