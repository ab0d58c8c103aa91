pub mod config;
pub mod db;
pub mod errors;
pub mod logging;
pub mod middleware;
pub mod models;
pub mod profile;
pub mod routes;
pub mod state;
