pub mod aws_clients;
pub mod config;
pub mod serializers;
pub mod test_tools;
