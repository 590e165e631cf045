pub mod floats;
pub mod models;
pub mod profiles;

pub use models::*;
