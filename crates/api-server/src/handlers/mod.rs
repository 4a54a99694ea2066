pub mod auth;
pub mod customers;
pub mod health;
pub mod orders;
pub mod products;
pub mod stats;

use crate::error::ApiError;

pub type ApiResult<T> = Result<T, ApiError>;
