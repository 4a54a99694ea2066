pub mod database;
pub mod query_builder;
pub mod repositories;
pub mod security;

pub use database::*;
pub use repositories::*;
pub use security::*;
