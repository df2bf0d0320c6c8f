//! Prime fields with a precomputed Barrett reduction constant.

use alloc::{vec, vec::Vec};
use core::cmp::Ordering;

use crate::{
    arithmetic::{element, limbs},
    Error, FieldElement, Result,
};

/// A finite field of odd prime order.
///
/// Holds the modulus `p` and the Barrett constant `μ = ⌊b^{2k} / p⌋` where
/// `b = 2³²` and `k` is the limb count of `p`. The constant is computed once
/// at construction so every subsequent modular reduction costs two
/// multiplications and a couple of subtractions instead of a division.
///
/// A `Field` is immutable after construction and may be shared freely; all
/// [`FieldElement`]s carry a reference back to the field that produced them.
///
/// # Example
///
/// ```
/// use eccp::{Field, FieldElement};
///
/// let field = Field::new("61")?; // F_97
/// let a = FieldElement::from_word(&field, 60)?;
/// let b = FieldElement::from_word(&field, 50)?;
/// assert_eq!(format!("{}", a.add(&b)), "d"); // 110 mod 97 = 13
/// # Ok::<(), eccp::Error>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Field {
    /// Little-endian limbs of the prime modulus.
    pub(crate) p: Vec<u32>,

    /// Barrett reduction constant, `⌊b^{2k} / p⌋`.
    pub(crate) mu: Vec<u32>,
}

impl Field {
    /// Constructs a field from the hex encoding of its order.
    ///
    /// The order must be an odd value of at least 3; primality is the
    /// caller's responsibility and is not checked. Fails with
    /// [`Error::InvalidHex`] on empty or non-hex input and with
    /// [`Error::InvalidModulus`] when the value is even or below 3.
    pub fn new(prime_hex: &str) -> Result<Self> {
        let p = element::parse_hex(prime_hex)?;
        if p[0] & 1 == 0 || limbs::is_one(&p) {
            return Err(Error::InvalidModulus);
        }
        let mu = Self::barrett_constant(&p);
        Ok(Self { p, mu })
    }

    /// Returns the additive identity.
    pub fn zero(&self) -> FieldElement<'_> {
        FieldElement::from_magnitude(self, vec![0])
    }

    /// Returns the multiplicative identity.
    pub fn one(&self) -> FieldElement<'_> {
        FieldElement::from_magnitude(self, vec![1])
    }

    /// Materializes the modulus as an integer.
    ///
    /// The returned value is the one integer a [`FieldElement`] of this
    /// field can never hold; it exists for bit counting and rendering.
    pub fn modulus(&self) -> FieldElement<'_> {
        FieldElement::from_magnitude(self, self.p.clone())
    }

    /// Number of significant bits in the modulus.
    pub fn bits(&self) -> usize {
        limbs::bits(&self.p)
    }

    /// Barrett reduction of `x < b^{2k}` modulo `p` (HAC 14.42).
    pub(crate) fn reduce_magnitude(&self, x: &[u32]) -> Vec<u32> {
        let k = self.p.len();

        if limbs::cmp(x, &self.p) == Ordering::Less {
            return x.to_vec();
        }
        debug_assert!(x.len() <= 2 * k);

        // q1 = x >> 32(k-1), q2 = q1 * mu, q3 = q2 >> 32(k+1)
        let q1 = limbs::strip(x[k - 1..].to_vec());
        let q2 = limbs::mul(&self.mu, &q1);
        let q3 = if q2.len() > k + 1 {
            limbs::strip(q2[k + 1..].to_vec())
        } else {
            vec![0]
        };

        // r1 = x mod b^{k+1}, r2 = (p * q3) mod b^{k+1}
        let r1 = limbs::strip(x[..core::cmp::min(k + 1, x.len())].to_vec());
        let pq3 = limbs::mul(&self.p, &q3);
        let r2 = limbs::strip(pq3[..core::cmp::min(k + 1, pq3.len())].to_vec());

        // r = r1 - r2, borrowing b^{k+1} when r1 < r2
        let mut r = if limbs::cmp(&r1, &r2) == Ordering::Less {
            let mut base = vec![0u32; k + 2];
            base[k + 1] = 1;
            limbs::sub(&limbs::add(&r1, &base), &r2)
        } else {
            limbs::sub(&r1, &r2)
        };

        while limbs::cmp(&r, &self.p) != Ordering::Less {
            r = limbs::sub(&r, &self.p);
        }
        r
    }

    /// Computes `⌊b^{2k} / p⌋` by binary shift-and-subtract division.
    fn barrett_constant(p: &[u32]) -> Vec<u32> {
        let k = p.len();
        let mut numerator = vec![0u32; 2 * k + 1];
        numerator[2 * k] = 1;

        // Line the divisor up under the numerator's top bit.
        let mut denominator = p.to_vec();
        let mut shift = 0usize;
        while limbs::cmp(&numerator, &denominator) == Ordering::Greater {
            denominator = limbs::shl1(&denominator);
            shift += 1;
        }

        let mut quotient = vec![0u32];
        loop {
            if limbs::cmp(&numerator, &denominator) != Ordering::Less {
                numerator = limbs::sub(&numerator, &denominator);
                quotient = limbs::set_bit(&quotient, shift);
            }
            if shift == 0 {
                break;
            }
            denominator = limbs::shr1(&denominator);
            shift -= 1;
        }

        limbs::strip(quotient)
    }
}
