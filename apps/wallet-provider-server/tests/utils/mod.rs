pub mod api_clients;
pub mod context;
