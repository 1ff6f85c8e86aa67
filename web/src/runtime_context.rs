use std::sync::Arc;

use crate::channel_client::ChannelClient;

pub struct RuntimeContext {
    channel_client: Arc<ChannelClient>,
}

impl RuntimeContext {
    pub fn new() -> Arc<Self> {
        let channel_client = ChannelClient::new();
        let context = Self {
            channel_client,
        };
        Arc::new(context)
    }

    pub fn channel_client(&self) -> &Arc<ChannelClient> {
        &self.channel_client
    }
}
