pub mod affine_element;
pub mod curve;
pub mod curve_params;
pub mod element;
pub mod endomorphism;
pub mod glv;

pub use affine_element::AffinePoint;
pub use curve::Curve;
pub use curve_params::CurveParams;
pub use element::ProjectivePoint;
pub use endomorphism::{compute_endo_constants, EndoConstants, Endomorphism};
pub use glv::{Decomposition, GlvBasis};
