use std::{collections::HashMap, error::Error};

use rusoto_dynamodb::AttributeValue;
use serde::Serialize;

pub trait UnknownError {
    fn unknown<E: Error + Sync + Send + 'static>(e: E, context: Option<&'static str>) -> Self;
}

#[macro_export]
macro_rules! impl_unknown_error_trait {
    ($struct: ident) => {
        impl $crate::serialize::UnknownError for $struct {
            fn unknown<E: std::error::Error + Sync + Send + 'static>(
                e: E,
                context: Option<&'static str>,
            ) -> Self {
                if let Some(ctx) = context {
                    Self::Unknown(anyhow::anyhow!(e).context(ctx))
                } else {
                    Self::Unknown(anyhow::anyhow!(e))
                }
            }
        }
    };
}

pub fn serialize_to_dynamo<I: Serialize, E: UnknownError>(
    item: I,
    context: &'static str,
) -> Result<HashMap<String, AttributeValue>, E> {
    serde_dynamo::to_item(item).map_err(|e| E::unknown(e, Some(context)))
}
