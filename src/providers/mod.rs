pub mod azure;
mod http_errors;
