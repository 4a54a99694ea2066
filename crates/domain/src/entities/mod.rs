pub mod account;
pub mod customer;
pub mod order;
pub mod product;
pub mod stats;

pub use account::*;
pub use customer::*;
pub use order::*;
pub use product::*;
pub use stats::*;
