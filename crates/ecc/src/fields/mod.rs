pub mod field;
pub mod field_params;

pub use field::{FieldElement, FiniteField};
pub use field_params::FieldParams;
