pub mod client;
pub mod config;
pub mod errors;
pub mod llm_client;
pub mod models;
pub mod planning;
pub mod recommendation;
pub mod routes;
pub mod state;
