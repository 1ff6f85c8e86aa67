use std::sync::Arc;

use anyhow::Result;
use aws_config::BehaviorVersion;
use aws_sdk_lambda::primitives::Blob;
use aws_sdk_lambda::types::InvocationType;
use cores::ipc;
use cores::ipc::InvokeMessage;
use tracing::info;

use aws_sdk_lambda::Client;

pub struct ChannelClient {}

impl ChannelClient {
    pub fn new() -> Arc<Self> {
        let client = Self {
        };
        Arc::new(client)
    }

    // InvocationType::Event queues the request and returns without waiting
    // for the worker to run.
    pub async fn invoke(self: &Arc<Self>, message: InvokeMessage) -> Result<()> {
        let config = aws_config::load_defaults(BehaviorVersion::v2023_11_09()).await;
        info!("menu worker invoke in progress");
        let payload = serde_json::to_string(&message)?;
        let client = Client::new(&config);
        client.invoke()
            .function_name(ipc::MENU_FUNCTION_NAME)
            .payload(Blob::new(payload))
            .invocation_type(InvocationType::Event)
            .send()
            .await?;
        info!("menu worker invoke complete");
        Ok(())
    }
}
