use lambda_http::{Body, Error, Response};
use serde::Serialize;

// https://api.slack.com/interactivity/slash-commands#responding_to_commands
#[derive(Serialize, Debug)]
pub struct CommandResponse {
    response_type: &'static str,
    text: String,
}

impl CommandResponse {
    pub fn ephemeral(text: impl Into<String>) -> Self {
        Self {
            response_type: "ephemeral",
            text: text.into(),
        }
    }

    pub fn into_response(self) -> Result<Response<Body>, Error> {
        let body = serde_json::to_string(&self)?;
        let response = Response::builder()
            .status(200)
            .header("content-type", "application/json")
            .body(body.into())
            .map_err(Box::new)?;
        Ok(response)
    }
}
