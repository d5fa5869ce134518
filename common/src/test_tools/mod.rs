pub mod mocks;
pub mod salesforce;
