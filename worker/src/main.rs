use lambda_runtime::{run, service_fn, Error, LambdaEvent};

use cores::ipc::InvokeMessage;

mod message;
mod menu_client;
mod slack_client;

use message::MessageHandle;

async fn function_handler(event: LambdaEvent<InvokeMessage>) -> Result<(), Error> {
    let handle = MessageHandle::new()?;
    handle.handle_message(event.payload).await?;
    Ok(())
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

    run(service_fn(function_handler)).await
}
