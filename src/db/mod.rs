pub mod bootstrap;
pub mod connection;
pub mod dao;
pub mod entities;

pub use bootstrap::{SeedOutcome, create_initial_data, init_db, sync_schema};
pub use connection::{connect, redact_url};
