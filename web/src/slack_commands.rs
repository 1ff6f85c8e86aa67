use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use lambda_http::{Body, Request};

use cores::ipc::InvokeMessage;

use crate::runtime_context::RuntimeContext;

// https://api.slack.com/interactivity/slash-commands#app_command_handling
#[derive(Debug)]
pub struct SlashCommand {
    pub command: Option<String>,
    pub user_id: Option<String>,
    pub response_url: String,
}

pub struct SlackCommandHandler {
    runtime_context: Arc<RuntimeContext>,
}

impl SlackCommandHandler {
    pub fn new(runtime_context: &Arc<RuntimeContext>) -> Arc<Self> {
        let runtime_context = Arc::clone(runtime_context);
        let handler = Self {
            runtime_context,
        };
        Arc::new(handler)
    }

    pub async fn dispatch_menu_request(self: &Arc<Self>, event: Request) -> Result<()> {
        let command = parse_slash_command(&event)?;
        tracing::info!("lunch command {:?} from {:?}, fetching menu", command.command, command.user_id);
        let channel_client = self.runtime_context.channel_client();
        let message = InvokeMessage {
            response_url: command.response_url,
        };
        // the worker's outcome is never reported back to the caller;
        // the acknowledgement goes out either way
        if let Err(error) = channel_client.invoke(message).await {
            tracing::warn!("menu worker dispatch failed {:?}", error);
        }
        Ok(())
    }
}

// API Gateway flags Slack's form payload as base64; lambda_http hands the
// decoded bytes over as Body::Binary.
pub fn parse_slash_command(event: &Request) -> Result<SlashCommand> {
    let body = match event.body() {
        Body::Text(text) => text.as_bytes(),
        Body::Binary(data) => data.as_slice(),
        Body::Empty => bail!("no body"),
    };
    let mut fields: HashMap<String, String> = form_urlencoded::parse(body)
        .into_owned()
        .collect();
    let response_url = fields.remove("response_url")
        .context("response_url is empty")?;
    let command = SlashCommand {
        command: fields.remove("command"),
        user_id: fields.remove("user_id"),
        response_url,
    };
    Ok(command)
}
