mod config;
mod dtos;

use std::sync::Arc;

use anyhow::anyhow;
use async_trait::async_trait;
use common::aws_clients::dynamodb::get_dynamodb_client;
use common::config::aws_client_config::AwsClientConfig;
use common::config::ConfigLoader;
use repositories::sync_records::sync_records_repository_impl::SyncRecordsRepositoryImpl;
use repositories::sync_records::SyncRecordsRepository;
use salesforce_ddb_sync::http::errors::{
    db_update_failed_response, no_data_error_response, record_updated_response,
    unknown_error_response,
};
use salesforce_ddb_sync::http::lambda_proxy::LambdaProxyHttpResponse;
use salesforce_ddb_sync::result::error::LambdaError;
use salesforce_ddb_sync::sync::{SyncError, SyncExecutor, SyncOperation, TargetTables};
use salesforce_ddb_sync::{lambda_main, lambda_structure::lambda_trait::Lambda};

use crate::config::Config;
use crate::dtos::{ChangeNotificationRequest, DecodeError};

pub struct Persisted {
    pub tables: TargetTables,
    pub executor: SyncExecutor,
}

#[derive(Debug, thiserror::Error)]
enum IngressError {
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(r#"unsupported trigger "{0}""#)]
    UnknownTrigger(String),
    #[error(transparent)]
    Sync(#[from] SyncError),
}

impl IngressError {
    fn is_client_error(&self) -> bool {
        match self {
            Self::Decode(_) => true,
            Self::Sync(e) => e.is_client_error(),
            Self::UnknownTrigger(_) => false,
        }
    }
}

impl From<IngressError> for LambdaProxyHttpResponse {
    fn from(error: IngressError) -> Self {
        match error {
            _ if error.is_client_error() => no_data_error_response(error),
            IngressError::Sync(_) => db_update_failed_response(error),
            IngressError::UnknownTrigger(_) | IngressError::Decode(_) => {
                unknown_error_response(error)
            }
        }
    }
}

pub struct SalesforceSync;

impl SalesforceSync {
    async fn sync(
        request: &ChangeNotificationRequest,
        state: &Persisted,
    ) -> Result<(), IngressError> {
        let notification = request.decode()?;
        let table_name = state.tables.select(&notification.data);
        let operation = SyncOperation::from_trigger(&notification.event_triggered)
            .ok_or_else(|| IngressError::UnknownTrigger(notification.event_triggered.clone()))?;

        let summary = state
            .executor
            .execute(operation, table_name, notification.data)
            .await?;

        tracing::info!(
            operation = %summary.operation,
            table_name = %summary.table_name,
            batches = summary.batches,
            succeeded_count = summary.succeeded_count,
            "Synced {} records into {}",
            summary.succeeded_count,
            summary.table_name
        );

        Ok(())
    }
}

#[async_trait]
impl Lambda for SalesforceSync {
    type PersistedMemory = Persisted;
    type InputBody = ChangeNotificationRequest;
    type Output = LambdaProxyHttpResponse;
    type Error = LambdaError;

    async fn bootstrap() -> Result<Self::PersistedMemory, Self::Error> {
        let config = ConfigLoader::load_default::<Config>()?;
        let aws_client_config = ConfigLoader::load_default::<AwsClientConfig>()?;

        let dynamodb_client = get_dynamodb_client(&aws_client_config).map_err(|e| {
            LambdaError::Unknown(anyhow!(
                "invalid region {}: {e}",
                aws_client_config.region_name()
            ))
        })?;

        let repository = Arc::new(SyncRecordsRepositoryImpl::new(
            dynamodb_client,
            config.retry_policy(),
        )) as Arc<dyn SyncRecordsRepository>;

        Ok(Persisted {
            tables: config.target_tables(),
            executor: SyncExecutor::new(repository),
        })
    }

    async fn run(
        request: Self::InputBody,
        state: &Self::PersistedMemory,
    ) -> Result<Self::Output, Self::Error> {
        Ok(match Self::sync(&request, state).await {
            Ok(()) => record_updated_response(),
            Err(e) => e.into(),
        })
    }
}

lambda_main!(SalesforceSync);
