use async_trait::async_trait;
use common::config::ConfigLoader;
use lambda_runtime::{Error, LambdaEvent};
use serde::{de::DeserializeOwned, Serialize};
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::prelude::*;

use crate::config::GlobalConfig;

#[async_trait]
pub trait Lambda {
    type PersistedMemory: Sync + Send;
    type InputBody: DeserializeOwned + Send + Sync + std::fmt::Debug;
    type Output: Serialize + Send + Sync;
    type Error: Into<Error> + std::error::Error + Sync + Send + 'static;

    /// Builds the clients and settings kept warm between invocations.
    async fn bootstrap() -> Result<Self::PersistedMemory, Self::Error>;

    /// Handles a single invocation.
    async fn run(
        payload: Self::InputBody,
        state: &Self::PersistedMemory,
    ) -> Result<Self::Output, Self::Error>;

    /// Sets up logging, bootstraps the lambda and hands it to the runtime. Call this from the binary's main.
    async fn main() -> Result<(), Error> {
        LogTracer::init()?;
        let global_config = ConfigLoader::load_default::<GlobalConfig>()?;

        let app_name = concat!(env!("CARGO_PKG_NAME"), "-", env!("CARGO_PKG_VERSION")).to_string();
        let (non_blocking_writer, _guard) = tracing_appender::non_blocking(std::io::stdout());
        let bunyan_formatting_layer = BunyanFormattingLayer::new(app_name, non_blocking_writer);

        tracing_subscriber::registry()
            .with(global_config.log_level())
            .with(JsonStorageLayer)
            .with(bunyan_formatting_layer)
            .init();

        // Borrowed so the closure below does not move the persisted state.
        let persisted = &Self::bootstrap().await?;

        let service =
            move |event: LambdaEvent<Self::InputBody>| async move { Self::service(event, persisted).await };

        lambda_runtime::run(lambda_runtime::service_fn(service)).await
    }

    /// Called on every invocation. Logs the event before running the handler.
    async fn service(
        event: LambdaEvent<Self::InputBody>,
        state: &Self::PersistedMemory,
    ) -> Result<Self::Output, Self::Error> {
        let LambdaEvent { payload, context } = event;

        tracing::info!(payload = ?payload, request_id = %context.request_id, "Execution started");

        Self::run(payload, state).await
    }
}

#[macro_export]
macro_rules! lambda_main {
    ($lambda: ty) => {
        #[tokio::main]
        async fn main() -> $crate::result::error::LambdaRuntimeResult {
            use $crate::lambda_structure::lambda_trait::Lambda;
            <$lambda>::main().await
        }
    };
}
