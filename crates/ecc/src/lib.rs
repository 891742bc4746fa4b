pub mod curves;
pub mod error;
pub mod fields;
pub mod groups;

pub use error::{EccError, EndomorphismError};
