use std::sync::Arc;

use anyhow::Result;
use cores::ipc::InvokeMessage;
use tracing::info;

use crate::menu_client::{self, MenuClient};
use crate::slack_client::SlackClient;

pub struct MessageHandle {
    menu_client: Arc<MenuClient>,
    slack_client: Arc<SlackClient>,
}

impl MessageHandle {
    pub fn new() -> Result<Arc<Self>> {
        let menu_client = MenuClient::new()?;
        let slack_client = SlackClient::new()?;
        let this = Self {
            menu_client,
            slack_client,
        };
        let this = Arc::new(this);
        Ok(this)
    }

    pub async fn handle_message(&self, message: InvokeMessage) -> Result<()> {
        info!("worker received menu request");
        let menu = self.menu_client.fetch_menu().await?;
        let text = menu_client::format_menu(&menu);
        self.slack_client.respond(&message.response_url, text).await?;
        info!("menu delivery complete");
        Ok(())
    }
}
