use serde::{Serialize, Deserialize};

/// Deployed name of the worker function dispatched on a matched command.
pub const MENU_FUNCTION_NAME: &str = "lunchbot-worker";

/// Root path segment the web router recognizes.
pub const MENU_ROOT_SEGMENT: &str = "lunch";

#[derive(Serialize, Deserialize)]
pub struct InvokeMessage {
    pub response_url: String,
}
