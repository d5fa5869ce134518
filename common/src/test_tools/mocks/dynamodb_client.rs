use async_trait::async_trait;
use mockall::mock;
use rusoto_core::RusotoError;
use rusoto_dynamodb::{BatchWriteItemError, BatchWriteItemInput, BatchWriteItemOutput};

use crate::aws_clients::dynamodb::BatchWriteClient;

mock! {
    pub BatchWriteDbClient {}

    #[async_trait]
    impl BatchWriteClient for BatchWriteDbClient {
        async fn batch_write_item(
            &self,
            input: BatchWriteItemInput,
        ) -> Result<BatchWriteItemOutput, RusotoError<BatchWriteItemError>>;
    }
}
