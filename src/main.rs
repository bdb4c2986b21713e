use adoption_notifier::core::ENV_PREFIX;
use adoption_notifier::prelude::*;
use lambda_runtime::{Error, LambdaEvent, run, service_fn, tracing};

#[tokio::main]
async fn main() -> std::result::Result<(), Error> {
    tracing::init_default_subscriber();

    // One SNS client for the lifetime of the execution environment.
    let notifier = Notifier::builder()
        .with_env_overrides(ENV_PREFIX)
        .build()
        .await?;

    run(service_fn(|event| function_handler(&notifier, event))).await
}

async fn function_handler(
    notifier: &Notifier,
    event: LambdaEvent<StreamEvent>,
) -> std::result::Result<(), Error> {
    let (payload, context) = event.into_parts();
    notifier
        .handle(&payload, &context.invoked_function_arn)
        .await?;
    Ok(())
}
