//! Field elements of arbitrary precision.
//!
//! All arithmetic is variable time by design: the target device class
//! trades side-channel resistance for speed, and callers needing
//! constant-time guarantees should look elsewhere.

use alloc::vec::Vec;
use core::{
    cmp::Ordering,
    fmt,
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

use rand_core::{CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::{arithmetic::limbs, Error, Field, Result};

/// Parses a hex string into a stripped little-endian magnitude.
///
/// Digits are folded in groups of up to seven (28 bits), so each step
/// multiplies the running magnitude by 2²⁸ with a carry-propagating scan
/// and adds the group without overflowing the 64-bit accumulator.
pub(crate) fn parse_hex(hex: &str) -> Result<Vec<u32>> {
    if hex.is_empty() {
        return Err(Error::InvalidHex);
    }

    let mut digits = Vec::with_capacity(hex.len());
    for c in hex.chars() {
        digits.push(c.to_digit(16).ok_or(Error::InvalidHex)?);
    }

    let leading = digits.iter().take_while(|&&d| d == 0).count();
    let digits = &digits[leading..];
    if digits.is_empty() {
        return Ok(alloc::vec![0]);
    }

    let num_words = (digits.len() * 4 + 1).div_ceil(32);
    let mut magnitude = alloc::vec![0u32; num_words];

    let first = match digits.len() % 7 {
        0 => 7,
        n => n,
    };
    let mut group = 0u32;
    for &d in &digits[..first] {
        group = (group << 4) | d;
    }
    magnitude[0] = group;

    let mut pos = first;
    while pos < digits.len() {
        let mut group = 0u32;
        for &d in &digits[pos..pos + 7] {
            group = (group << 4) | d;
        }
        pos += 7;

        // magnitude = magnitude * 2^28 + group
        let mut carry = 0u64;
        for limb in magnitude.iter_mut() {
            let t = (u64::from(*limb) << 28) + carry;
            *limb = t as u32;
            carry = t >> 32;
        }
        debug_assert_eq!(carry, 0);

        let mut sum = u64::from(magnitude[0]) + u64::from(group);
        magnitude[0] = sum as u32;
        for i in 1..magnitude.len() {
            if sum >> 32 == 0 {
                break;
            }
            sum = u64::from(magnitude[i]) + (sum >> 32);
            magnitude[i] = sum as u32;
        }
    }

    Ok(limbs::strip(magnitude))
}

/// An element of a prime-order [`Field`], always reduced to `[0, p)`.
///
/// Elements are immutable: every operation allocates its result. The
/// element keeps a reference to its parent field, which supplies the
/// modulus and the Barrett constant for every reducing operation.
#[derive(Clone)]
pub struct FieldElement<'f> {
    field: &'f Field,

    /// 0 for the zero element, 1 otherwise.
    signum: u8,

    /// Little-endian limbs without trailing zeros; zero is `[0]`.
    magnitude: Vec<u32>,
}

impl<'f> FieldElement<'f> {
    /// Wraps a magnitude known to be at most the modulus (the modulus
    /// itself is only ever materialized by [`Field::modulus`]).
    pub(crate) fn from_magnitude(field: &'f Field, magnitude: Vec<u32>) -> Self {
        let magnitude = limbs::strip(magnitude);
        debug_assert!(limbs::cmp(&magnitude, &field.p) != Ordering::Greater);
        let signum = u8::from(!limbs::is_zero(&magnitude));
        Self {
            field,
            signum,
            magnitude,
        }
    }

    /// Parses a hex-encoded element.
    ///
    /// Uppercase and lowercase digits are accepted, leading zeros are
    /// permitted. Fails with [`Error::InvalidHex`] on empty or non-hex
    /// input and [`Error::ValueOutOfField`] when the value is not below
    /// the field order.
    pub fn from_hex(field: &'f Field, hex: &str) -> Result<Self> {
        let magnitude = parse_hex(hex)?;
        if limbs::cmp(&magnitude, &field.p) != Ordering::Less {
            return Err(Error::ValueOutOfField);
        }
        Ok(Self::from_magnitude(field, magnitude))
    }

    /// Constructs an element from a single machine word.
    pub fn from_word(field: &'f Field, value: u32) -> Result<Self> {
        if limbs::cmp(&[value], &field.p) != Ordering::Less {
            return Err(Error::ValueOutOfField);
        }
        Ok(Self::from_magnitude(field, alloc::vec![value]))
    }

    /// Draws a random element below the field order.
    ///
    /// The lower limbs are filled with raw RNG output and the top limb is
    /// drawn in `[0, p_top]`; draws at or above `p` are resampled. The top
    /// limb retains the modulo bias of a 32-bit draw unless `p_top` is of
    /// the form `2^n - 1`.
    pub fn random(field: &'f Field, mut rng: impl CryptoRng + RngCore) -> Self {
        let k = field.p.len();
        let top = field.p[k - 1];
        loop {
            let mut magnitude = Vec::with_capacity(k);
            for _ in 0..k - 1 {
                magnitude.push(rng.next_u32());
            }
            magnitude.push(if top == u32::MAX {
                rng.next_u32()
            } else {
                rng.next_u32() % (top + 1)
            });
            let magnitude = limbs::strip(magnitude);
            if limbs::cmp(&magnitude, &field.p) == Ordering::Less {
                return Self::from_magnitude(field, magnitude);
            }
        }
    }

    /// Returns the parent field.
    pub fn field(&self) -> &'f Field {
        self.field
    }

    /// Whether this is the additive identity.
    pub fn is_zero(&self) -> bool {
        self.signum == 0
    }

    /// Whether this is the multiplicative identity.
    pub fn is_one(&self) -> bool {
        limbs::is_one(&self.magnitude)
    }

    /// Number of significant bits; zero has none.
    pub fn bits(&self) -> usize {
        limbs::bits(&self.magnitude)
    }

    /// Tests bit `n`, with bit 0 the least significant.
    pub fn test_bit(&self, n: usize) -> bool {
        limbs::test_bit(&self.magnitude, n)
    }

    /// Returns `self + rhs (mod p)`.
    pub fn add(&self, rhs: &FieldElement<'f>) -> FieldElement<'f> {
        debug_assert_eq!(self.field.p, rhs.field.p);
        if self.signum == 0 {
            return rhs.clone();
        }
        if rhs.signum == 0 {
            return self.clone();
        }

        let sum = limbs::add(&self.magnitude, &rhs.magnitude);
        match limbs::cmp(&sum, &self.field.p) {
            Ordering::Less => Self::from_magnitude(self.field, sum),
            Ordering::Equal => self.field.zero(),
            Ordering::Greater => {
                Self::from_magnitude(self.field, limbs::sub(&sum, &self.field.p))
            }
        }
    }

    /// Returns `2 * self (mod p)`.
    pub fn double(&self) -> FieldElement<'f> {
        self.add(self)
    }

    /// Returns `self - rhs (mod p)`.
    pub fn subtract(&self, rhs: &FieldElement<'f>) -> FieldElement<'f> {
        debug_assert_eq!(self.field.p, rhs.field.p);
        match limbs::cmp(&self.magnitude, &rhs.magnitude) {
            Ordering::Equal => self.field.zero(),
            Ordering::Greater => {
                Self::from_magnitude(self.field, limbs::sub(&self.magnitude, &rhs.magnitude))
            }
            Ordering::Less => {
                let diff = limbs::sub(&rhs.magnitude, &self.magnitude);
                Self::from_magnitude(self.field, limbs::sub(&self.field.p, &diff))
            }
        }
    }

    /// Returns `p - self`, the additive inverse; zero negates to zero.
    pub fn negate(&self) -> FieldElement<'f> {
        if self.signum == 0 {
            return self.field.zero();
        }
        Self::from_magnitude(self.field, limbs::sub(&self.field.p, &self.magnitude))
    }

    /// Returns `self * rhs (mod p)` by schoolbook convolution and Barrett
    /// reduction. Multiplications by zero and one short-circuit without a
    /// reduction, as both operands are already reduced.
    pub fn multiply(&self, rhs: &FieldElement<'f>) -> FieldElement<'f> {
        debug_assert_eq!(self.field.p, rhs.field.p);
        if self.signum == 0 || rhs.signum == 0 {
            return self.field.zero();
        }
        if self.is_one() {
            return rhs.clone();
        }
        if rhs.is_one() {
            return self.clone();
        }

        let product = limbs::mul(&self.magnitude, &rhs.magnitude);
        Self::from_magnitude(self.field, self.field.reduce_magnitude(&product))
    }

    /// Returns `self * self (mod p)`.
    pub fn square(&self) -> FieldElement<'f> {
        self.multiply(self)
    }

    /// Returns `self * word (mod p)` in a single carry-propagating pass.
    pub fn mul_word(&self, word: u32) -> FieldElement<'f> {
        let product = limbs::mul_word(&self.magnitude, word);
        Self::from_magnitude(self.field, self.field.reduce_magnitude(&product))
    }

    /// Returns `self / divisor (mod p)` by the binary extended Euclidean
    /// algorithm, which folds the modular inversion and the multiplication
    /// by `self` into one loop (GECC, p. 41).
    pub fn divide(&self, divisor: &FieldElement<'f>) -> Result<FieldElement<'f>> {
        debug_assert_eq!(self.field.p, divisor.field.p);
        if divisor.signum == 0 {
            return Err(Error::DivisionByZero);
        }
        if divisor.is_one() {
            return Ok(self.clone());
        }
        if self.signum == 0 {
            return Ok(self.field.zero());
        }

        let mut u = divisor.magnitude.clone();
        let mut v = self.field.p.clone();
        let mut x1 = self.clone();
        let mut x2 = self.field.zero();

        while !limbs::is_one(&u) && !limbs::is_one(&v) {
            while u[0] & 1 == 0 {
                u = limbs::shr1(&u);
                x1 = x1.halve();
            }
            while v[0] & 1 == 0 {
                v = limbs::shr1(&v);
                x2 = x2.halve();
            }
            if limbs::cmp(&u, &v) != Ordering::Less {
                u = limbs::sub(&u, &v);
                x1 = x1.subtract(&x2);
            } else {
                v = limbs::sub(&v, &u);
                x2 = x2.subtract(&x1);
            }
        }

        Ok(if limbs::is_one(&u) { x1 } else { x2 })
    }

    /// Returns the multiplicative inverse `1 / self (mod p)`.
    pub fn invert(&self) -> Result<FieldElement<'f>> {
        self.field.one().divide(self)
    }

    /// Halves the element, lazily adding `p` first when it is odd.
    fn halve(&self) -> FieldElement<'f> {
        let magnitude = if self.magnitude[0] & 1 == 0 {
            limbs::shr1(&self.magnitude)
        } else {
            limbs::shr1(&limbs::add(&self.magnitude, &self.field.p))
        };
        Self::from_magnitude(self.field, magnitude)
    }

    /// Width-`w` non-adjacent form of the element, little-endian digits.
    ///
    /// Every non-zero digit is odd with magnitude below `2^w`, no two
    /// consecutive digits are non-zero, and the sequence is zero-padded to
    /// the bit length plus one. Widths outside `[2, 6]` fail with
    /// [`Error::InvalidNafWidth`]; wider digits would no longer fit the
    /// signed-byte representation.
    ///
    /// ```
    /// use eccp::{Field, FieldElement};
    ///
    /// let field = Field::new("61")?;
    /// let seven = FieldElement::from_word(&field, 7)?;
    /// assert_eq!(seven.to_naf(2)?, vec![-1, 0, 0, 1]); // 7 = -1 + 8
    /// # Ok::<(), eccp::Error>(())
    /// ```
    pub fn to_naf(&self, width: u8) -> Result<Vec<i8>> {
        if !(2..=6).contains(&width) {
            return Err(Error::InvalidNafWidth);
        }
        Ok(self.to_naf_unchecked(width))
    }

    pub(crate) fn to_naf_unchecked(&self, width: u8) -> Vec<i8> {
        let window = 1i32 << width;
        let mask = ((window << 1) - 1) as u32;
        let bit_len = self.bits();

        let mut naf = Vec::with_capacity(bit_len + 1);
        let mut k = self.magnitude.clone();

        while !limbs::is_zero(&k) {
            if k[0] & 1 == 1 {
                let mut digit = (k[0] & mask) as i32;
                if digit & window != 0 {
                    digit -= window << 1;
                }
                k = if digit < 0 {
                    limbs::add(&k, &[(-digit) as u32])
                } else {
                    limbs::sub(&k, &[digit as u32])
                };
                naf.push(digit as i8);
            } else {
                naf.push(0);
            }
            k = limbs::shr1(&k);
        }

        while naf.len() < bit_len + 1 {
            naf.push(0);
        }
        naf
    }
}

impl PartialEq for FieldElement<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.magnitude == other.magnitude
    }
}

impl Eq for FieldElement<'_> {}

impl PartialOrd for FieldElement<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FieldElement<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        limbs::cmp(&self.magnitude, &other.magnitude)
    }
}

impl fmt::LowerHex for FieldElement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.signum == 0 {
            return f.write_str("0");
        }
        let top = self.magnitude.len() - 1;
        write!(f, "{:x}", self.magnitude[top])?;
        for limb in self.magnitude[..top].iter().rev() {
            write!(f, "{limb:08x}")?;
        }
        Ok(())
    }
}

impl fmt::UpperHex for FieldElement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.signum == 0 {
            return f.write_str("0");
        }
        let top = self.magnitude.len() - 1;
        write!(f, "{:X}", self.magnitude[top])?;
        for limb in self.magnitude[..top].iter().rev() {
            write!(f, "{limb:08X}")?;
        }
        Ok(())
    }
}

impl fmt::Display for FieldElement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl fmt::Debug for FieldElement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement({self:x})")
    }
}

impl Zeroize for FieldElement<'_> {
    fn zeroize(&mut self) {
        self.magnitude.zeroize();
        self.signum.zeroize();
    }
}

//
// Arithmetic trait impls
//

impl<'f> Add<&FieldElement<'f>> for &FieldElement<'f> {
    type Output = FieldElement<'f>;

    fn add(self, rhs: &FieldElement<'f>) -> FieldElement<'f> {
        FieldElement::add(self, rhs)
    }
}

impl<'f> Add<FieldElement<'f>> for FieldElement<'f> {
    type Output = FieldElement<'f>;

    fn add(self, rhs: FieldElement<'f>) -> FieldElement<'f> {
        FieldElement::add(&self, &rhs)
    }
}

impl<'f> Add<&FieldElement<'f>> for FieldElement<'f> {
    type Output = FieldElement<'f>;

    fn add(self, rhs: &FieldElement<'f>) -> FieldElement<'f> {
        FieldElement::add(&self, rhs)
    }
}

impl<'f> AddAssign<&FieldElement<'f>> for FieldElement<'f> {
    fn add_assign(&mut self, rhs: &FieldElement<'f>) {
        *self = FieldElement::add(self, rhs);
    }
}

impl<'f> Sub<&FieldElement<'f>> for &FieldElement<'f> {
    type Output = FieldElement<'f>;

    fn sub(self, rhs: &FieldElement<'f>) -> FieldElement<'f> {
        self.subtract(rhs)
    }
}

impl<'f> Sub<FieldElement<'f>> for FieldElement<'f> {
    type Output = FieldElement<'f>;

    fn sub(self, rhs: FieldElement<'f>) -> FieldElement<'f> {
        self.subtract(&rhs)
    }
}

impl<'f> Sub<&FieldElement<'f>> for FieldElement<'f> {
    type Output = FieldElement<'f>;

    fn sub(self, rhs: &FieldElement<'f>) -> FieldElement<'f> {
        self.subtract(rhs)
    }
}

impl<'f> SubAssign<&FieldElement<'f>> for FieldElement<'f> {
    fn sub_assign(&mut self, rhs: &FieldElement<'f>) {
        *self = self.subtract(rhs);
    }
}

impl<'f> Mul<&FieldElement<'f>> for &FieldElement<'f> {
    type Output = FieldElement<'f>;

    fn mul(self, rhs: &FieldElement<'f>) -> FieldElement<'f> {
        self.multiply(rhs)
    }
}

impl<'f> Mul<FieldElement<'f>> for FieldElement<'f> {
    type Output = FieldElement<'f>;

    fn mul(self, rhs: FieldElement<'f>) -> FieldElement<'f> {
        self.multiply(&rhs)
    }
}

impl<'f> Mul<&FieldElement<'f>> for FieldElement<'f> {
    type Output = FieldElement<'f>;

    fn mul(self, rhs: &FieldElement<'f>) -> FieldElement<'f> {
        self.multiply(rhs)
    }
}

impl<'f> MulAssign<&FieldElement<'f>> for FieldElement<'f> {
    fn mul_assign(&mut self, rhs: &FieldElement<'f>) {
        *self = self.multiply(rhs);
    }
}

impl<'f> Neg for FieldElement<'f> {
    type Output = FieldElement<'f>;

    fn neg(self) -> FieldElement<'f> {
        self.negate()
    }
}

impl<'f> Neg for &FieldElement<'f> {
    type Output = FieldElement<'f>;

    fn neg(self) -> FieldElement<'f> {
        self.negate()
    }
}
