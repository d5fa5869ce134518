use rusoto_core::region::{ParseRegionError, Region};
use serde::Deserialize;
use std::str::FromStr;

#[derive(Deserialize, Debug, Clone)]
pub struct AwsClientConfig {
    /// Region provided by the lambda runtime.
    aws_region: String,

    /// Explicit region for the DynamoDB connection. Takes precedence over `aws_region`.
    #[serde(default)]
    region: Option<String>,

    /// Only used for development. LocalStack endpoint
    #[serde(default = "default_localstack_test_mode_endpoint")]
    pub localstack_test_mode_endpoint: Option<String>,
}

impl AwsClientConfig {
    pub fn new(aws_region: String, region: Option<String>, endpoint: Option<String>) -> Self {
        Self {
            aws_region,
            region,
            localstack_test_mode_endpoint: endpoint,
        }
    }

    pub fn region_name(&self) -> &str {
        self.region
            .as_deref()
            .filter(|region| !region.is_empty())
            .unwrap_or(&self.aws_region)
    }

    pub fn region(&self) -> Result<Region, ParseRegionError> {
        let name = self.region_name().to_owned();
        match self.localstack_test_mode_endpoint.clone() {
            Some(endpoint) => Ok(Region::Custom { name, endpoint }),
            None => Region::from_str(&name),
        }
    }
}

fn default_localstack_test_mode_endpoint() -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use super::AwsClientConfig;
    use rusoto_core::Region;

    #[test]
    fn explicit_region_overrides_runtime_region() {
        let config = AwsClientConfig::new("us-west-2".to_owned(), Some("us-east-1".to_owned()), None);

        assert_eq!(Region::UsEast1, config.region().unwrap());
    }

    #[test]
    fn empty_region_falls_back_to_runtime_region() {
        let config = AwsClientConfig::new("us-west-2".to_owned(), Some(String::new()), None);

        assert_eq!(Region::UsWest2, config.region().unwrap());
    }

    #[test]
    fn localstack_endpoint_builds_custom_region() {
        let config = AwsClientConfig::new(
            "us-east-1".to_owned(),
            None,
            Some("http://localstack:4566".to_owned()),
        );

        assert_eq!(
            Region::Custom {
                name: "us-east-1".to_owned(),
                endpoint: "http://localstack:4566".to_owned(),
            },
            config.region().unwrap()
        );
    }

    #[test]
    fn invalid_region_is_an_error() {
        let config = AwsClientConfig::new("not-a-region".to_owned(), None, None);

        assert!(config.region().is_err());
    }
}
