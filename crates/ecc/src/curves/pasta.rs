// The Pasta cycle: Pallas and Vesta.
//
// Each curve's base field is the other's scalar field, so one pair of field
// parameter sets serves both curves with the roles swapped.

use once_cell::sync::Lazy;

use crate::fields::{FieldParams, FiniteField};
use crate::groups::{Curve, CurveParams};

// ---------------------------------------------------------------------------
// Fields
// ---------------------------------------------------------------------------

/// Fp: Pallas base field, Vesta scalar field.
pub struct PastaFpParams;

impl FieldParams for PastaFpParams {
    const MODULUS: &'static str =
        "0x40000000000000000000000000000000224698fc094cf91b992d30ed00000001";
    const TWO_ADICITY: u32 = 32;
    const ODD_FACTOR: &'static str = "0x40000000000000000000000000000000224698fc094cf91b992d30ed";
    /// Smallest quadratic non-residue; 5^t is a primitive 2^32-th root of unity.
    const NON_SQUARE: &'static str = "5";
}

/// Fq: Pallas scalar field, Vesta base field.
pub struct PastaFqParams;

impl FieldParams for PastaFqParams {
    const MODULUS: &'static str =
        "0x40000000000000000000000000000000224698fc0994a8dd8c46eb2100000001";
    const TWO_ADICITY: u32 = 32;
    const ODD_FACTOR: &'static str = "0x40000000000000000000000000000000224698fc0994a8dd8c46eb21";
    /// Smallest quadratic non-residue; 5^t is a primitive 2^32-th root of unity.
    const NON_SQUARE: &'static str = "5";
}

// ---------------------------------------------------------------------------
// Curves
// ---------------------------------------------------------------------------

/// Pallas: y^2 = x^3 + 5 over Fp, order q, generator (1, y).
pub struct PallasParams;

impl CurveParams for PallasParams {
    type BaseFieldParams = PastaFpParams;
    type ScalarFieldParams = PastaFqParams;

    const NAME: &'static str = "Pallas";

    const A: &'static str = "0";
    const B: &'static str = "5";

    const GENERATOR_X: &'static str = "1";
    const GENERATOR_Y: &'static str =
        "12418654782883325593414442427049395787963493412651469444558597405572177144507";

    const USE_ENDOMORPHISM: bool = true;

    const ENDO_BASE: Option<&'static str> =
        Some("20444556541222657078399132219657928148671392403212669005631716460534733845831");
    const ENDO_SCALAR: Option<&'static str> =
        Some("26005156700822196841419187675678338661165322343552424574062261873906994770353");
}

/// Vesta: the field-swapped twin of Pallas, y^2 = x^3 + 5 over Fq, order p.
pub struct VestaParams;

impl CurveParams for VestaParams {
    type BaseFieldParams = PastaFqParams;
    type ScalarFieldParams = PastaFpParams;

    const NAME: &'static str = "Vesta";

    const A: &'static str = "0";
    const B: &'static str = "5";

    const GENERATOR_X: &'static str = "1";
    const GENERATOR_Y: &'static str =
        "11426906929455361843568202299992114520848200991084027513389447476559454104162";

    const USE_ENDOMORPHISM: bool = true;

    const ENDO_BASE: Option<&'static str> =
        Some("2942865608506852014473558576493638302197734138389222805617480874486368177743");
    const ENDO_SCALAR: Option<&'static str> =
        Some("8503465768106391777493614032514048814691664078728891710322960303815233784505");
}

// ---------------------------------------------------------------------------
// Instances
// ---------------------------------------------------------------------------

pub static FP: Lazy<FiniteField> = Lazy::new(|| {
    FiniteField::from_params::<PastaFpParams>().expect("Pasta Fp parameters are consistent")
});

pub static FQ: Lazy<FiniteField> = Lazy::new(|| {
    FiniteField::from_params::<PastaFqParams>().expect("Pasta Fq parameters are consistent")
});

pub static PALLAS: Lazy<Curve> = Lazy::new(|| {
    Curve::from_params::<PallasParams>().expect("Pallas parameters are consistent")
});

pub static VESTA: Lazy<Curve> = Lazy::new(|| {
    Curve::from_params::<VestaParams>().expect("Vesta parameters are consistent")
});
