pub mod handlers;
#[cfg(test)]
pub mod memory;
pub mod query;
pub mod seed;
pub mod service;
pub mod store;
pub mod validation;
