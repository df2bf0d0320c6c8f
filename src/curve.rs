//! Short-Weierstrass curves `y² = x³ + ax + b` over a prime field.

use core::fmt;

use crate::{Error, Field, FieldElement, Result};

/// An elliptic curve in short-Weierstrass form.
///
/// Construction checks the discriminant condition `4a³ + 27b² ≠ 0 (mod p)`
/// and caches `2⁻¹ (mod p)`, which every point addition needs; computing it
/// once here keeps the point formulas free of per-operation inversions.
///
/// # Example
///
/// ```
/// use eccp::{Curve, Field, FieldElement, ProjectivePoint};
///
/// let field = Field::new("61")?; // F_97
/// let b = FieldElement::from_word(&field, 4)?;
/// let curve = Curve::new(&field, field.one(), b)?;
///
/// let y = FieldElement::from_word(&field, 2)?;
/// let g = ProjectivePoint::from_affine(&curve, field.zero(), y)?;
/// assert!(!g.double().is_identity());
/// # Ok::<(), eccp::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct Curve<'f> {
    field: &'f Field,
    a: FieldElement<'f>,
    b: FieldElement<'f>,
    inverse_of_two: FieldElement<'f>,
}

impl<'f> Curve<'f> {
    /// Constructs a curve from its coefficients.
    ///
    /// Fails with [`Error::InvalidCurve`] when the parameters describe a
    /// singular curve.
    pub fn new(field: &'f Field, a: FieldElement<'f>, b: FieldElement<'f>) -> Result<Self> {
        let inverse_of_two = FieldElement::from_word(field, 2)?.invert()?;
        let curve = Self {
            field,
            a,
            b,
            inverse_of_two,
        };
        if !curve.is_valid() {
            return Err(Error::InvalidCurve);
        }
        Ok(curve)
    }

    /// Whether `4a³ + 27b² ≠ 0 (mod p)`.
    pub fn is_valid(&self) -> bool {
        let a_term = self.a.square().multiply(&self.a).mul_word(4);
        let b_term = self.b.square().mul_word(27);
        !a_term.add(&b_term).is_zero()
    }

    /// Returns the underlying field.
    pub fn field(&self) -> &'f Field {
        self.field
    }

    /// Coefficient `a` of the curve equation.
    pub fn a(&self) -> &FieldElement<'f> {
        &self.a
    }

    /// Coefficient `b` of the curve equation.
    pub fn b(&self) -> &FieldElement<'f> {
        &self.b
    }

    pub(crate) fn inverse_of_two(&self) -> &FieldElement<'f> {
        &self.inverse_of_two
    }
}

impl fmt::Display for Curve<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Y^2 = X^3 + {} * X + {}", self.a, self.b)
    }
}
