use std::sync::Arc;

use lambda_http::{run, service_fn, Body, Error, Request, RequestExt, Response};

mod runtime_context;
mod channel_client;
mod slack_requests;
mod slack_commands;
mod slack_messages;
mod slack_verification;

use cores::ipc;
use runtime_context::RuntimeContext;
use slack_messages::CommandResponse;
use slack_requests::SlackRequestHandler;

// https://github.com/awslabs/aws-lambda-rust-runtime/tree/main/examples
async fn function_handler(event: Request, context: &Arc<RuntimeContext>) -> Result<Response<Body>, Error> {
    let raw_path = event.raw_http_path().to_string();
    match root_segment(&raw_path) {
        Some(segment) if segment == ipc::MENU_ROOT_SEGMENT => {
            let request_handler = SlackRequestHandler::new(context);
            request_handler.handle_command_request(event).await
        },
        _ => {
            handle_unresolved(&raw_path)
        }
    }
}

/// First "/"-separated segment of the request path.
fn root_segment(raw_path: &str) -> Option<&str> {
    raw_path
        .trim_start_matches('/')
        .split('/')
        .next()
        .filter(|segment| !segment.is_empty())
}

// Slack only renders the message body on a 2xx, so unresolved paths
// answer 200 rather than 404.
fn handle_unresolved(raw_path: &str) -> Result<Response<Body>, Error> {
    tracing::info!("unresolved path {:?}", raw_path);
    let message = CommandResponse::ephemeral(format!("Resource not found at {}", raw_path));
    message.into_response()
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        // disabling time is handy because CloudWatch will add the ingestion time.
        .without_time()
        .init();
    let runtime_context = RuntimeContext::new();
    let func = |event| async {
        function_handler(event, &runtime_context).await
    };
    run(service_fn(func)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_segment_of_matched_path() {
        assert_eq!(root_segment("/lunch"), Some("lunch"));
    }

    #[test]
    fn root_segment_ignores_trailing_segments() {
        assert_eq!(root_segment("/lunch/today"), Some("lunch"));
    }

    #[test]
    fn root_segment_of_bare_slash() {
        assert_eq!(root_segment("/"), None);
    }

    #[test]
    fn root_segment_of_empty_path() {
        assert_eq!(root_segment(""), None);
    }

    #[test]
    fn root_segment_of_doubled_slash() {
        assert_eq!(root_segment("//lunch"), None);
    }

    #[test]
    fn unresolved_path_answers_200_with_ephemeral_body() {
        let response = handle_unresolved("/dinner").unwrap();
        assert_eq!(response.status(), 200);
        let Body::Text(body) = response.body() else {
            panic!("expected a text body");
        };
        let body: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(body["response_type"], "ephemeral");
        assert_eq!(body["text"], "Resource not found at /dinner");
    }
}
