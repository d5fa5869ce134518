pub mod status_code;
