pub mod config;
pub mod http;
pub mod lambda_structure;
pub mod result;
pub mod sync;
