use std::sync::Arc;

use lambda_http::Error;
use lambda_http::{Body, Request, Response};

use crate::runtime_context::RuntimeContext;
use crate::slack_commands::SlackCommandHandler;
use crate::slack_messages::CommandResponse;
use crate::slack_verification::verify_slack_request;

pub struct SlackRequestHandler {
    command_handler: Arc<SlackCommandHandler>,
}

impl SlackRequestHandler {
    pub fn new(runtime_context: &Arc<RuntimeContext>) -> Arc<Self> {
        let command_handler = SlackCommandHandler::new(runtime_context);
        let handler = Self {
            command_handler,
        };
        Arc::new(handler)
    }

    pub async fn handle_command_request(&self, event: Request) -> Result<Response<Body>, Error> {
        let verification_result = verify_slack_request(&event);
        match verification_result {
            Ok(()) => {
                let result = self.command_handler.dispatch_menu_request(event).await;
                match result {
                    Ok(()) => CommandResponse::ephemeral("Loading...").into_response(),
                    Err(error) => {
                        tracing::info!("/lunch error {:?}", error);
                        self.internal_server_error_response()
                    }
                }
            },
            Err(error) => {
                tracing::info!("/lunch verification failed {:?}", error);
                self.forbidden_response()
            }
        }
    }

    fn internal_server_error_response(&self) -> Result<Response<Body>, Error> {
        let response = Response::builder()
            .status(500)
            .header("content-type", "text/plain")
            .body("internal server error".into())
            .map_err(Box::new)?;
        Ok(response)
    }

    fn forbidden_response(&self) -> Result<Response<Body>, Error> {
        let response = Response::builder()
            .status(403)
            .header("content-type", "text/plain")
            .body("forbidden".into())
            .map_err(Box::new)?;
        Ok(response)
    }
}
