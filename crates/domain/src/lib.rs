pub mod entities;
pub mod errors;
pub mod filters;
pub mod repositories;
pub mod security;
pub mod services;
pub mod validation;

pub use entities::*;
pub use errors::*;
pub use filters::*;
pub use repositories::*;
pub use security::*;
pub use services::*;
