//! ECDSA signing and verification.
//!
//! The message is assumed to be hashed already and is supplied as a field
//! element; signatures are pairs of field elements. All scalar arithmetic
//! runs in the same prime field the curve is defined over.
//!
//! ## Algorithm
//!
//! ```text
//! Sign(m, d):
//!   1. k ← rand(1, …, p-1)
//!   2. R ← k·P; r ← R.x; if r = 0 goto 1
//!   3. s ← k⁻¹ (m + d·r) mod p; if s = 0 goto 1
//!   4. return (r, s)
//!
//! Verify(Q, m, (r, s)):
//!   1. w ← s⁻¹; u1 ← m·w; u2 ← r·w
//!   2. X ← u1·P + u2·Q
//!   3. accept iff X ≠ ∞ and X.x = r
//! ```
//!
//! The engine precomputes a width-6 wNAF table of the base point once, so
//! every signing and verification reuses it, and draws each nonce from the
//! RNG injected at construction.
//!
//! ## Caveat: scalars are reduced modulo p, not the group order
//!
//! Every scalar above (k, r, s, u1, u2) lives in the curve's base field;
//! the order of the base point is never consulted. The verification
//! identity `u1·P + u2·Q = k·P` therefore only holds when that order
//! equals p, i.e. on trace-one curves such as
//! [`ANOMALOUS_79`](crate::test_vectors::ANOMALOUS_79); on a generic curve
//! the two sides differ by a multiple of `(p mod ord P)·P` and freshly
//! produced signatures are rejected. Standard ECDSA over generic curves
//! needs the scalars reduced modulo the group order instead.

use rand_core::{CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::{Curve, Field, FieldElement, NafTable, ProjectivePoint};

/// Window width of the cached base-point table.
const BASE_TABLE_WIDTH: u8 = 6;

/// An ECDSA signature: the pair `(r, s)` of field elements.
///
/// The nonce used during signing is never part of the signature; it is
/// wiped before [`Ecdsa::sign`] returns. Known-answer tests that need a
/// predictable nonce inject a deterministic RNG instead.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Signature<'f> {
    r: FieldElement<'f>,
    s: FieldElement<'f>,
}

impl<'f> Signature<'f> {
    /// Assembles a signature from its components, e.g. after decoding a
    /// transported signature. Callers compose their own encoding.
    pub fn new(r: FieldElement<'f>, s: FieldElement<'f>) -> Self {
        Self { r, s }
    }

    /// Component `r`, the affine x-coordinate of `k·P`.
    pub fn r(&self) -> &FieldElement<'f> {
        &self.r
    }

    /// Component `s`.
    pub fn s(&self) -> &FieldElement<'f> {
        &self.s
    }
}

/// ECDSA engine over a fixed base point.
///
/// Immutable after construction apart from the injected RNG, which only
/// [`sign`](Self::sign) touches; verification is `&self`.
pub struct Ecdsa<'f, R> {
    field: &'f Field,
    curve: &'f Curve<'f>,
    generator: ProjectivePoint<'f>,
    table: NafTable<'f>,
    rng: R,
}

impl<'f, R: CryptoRng + RngCore> Ecdsa<'f, R> {
    /// Builds an engine from the field, the curve, the base point
    /// `generator`, and a long-lived cryptographically secure RNG used for
    /// every nonce draw.
    pub fn new(
        field: &'f Field,
        curve: &'f Curve<'f>,
        generator: ProjectivePoint<'f>,
        rng: R,
    ) -> Self {
        let table = generator.table_unchecked(BASE_TABLE_WIDTH);
        Self {
            field,
            curve,
            generator,
            table,
            rng,
        }
    }

    /// Returns the field the scalars live in.
    pub fn field(&self) -> &'f Field {
        self.field
    }

    /// Returns the curve.
    pub fn curve(&self) -> &'f Curve<'f> {
        self.curve
    }

    /// Returns the base point.
    pub fn generator(&self) -> &ProjectivePoint<'f> {
        &self.generator
    }

    /// Signs a prehashed message with the given private key.
    ///
    /// Draws fresh nonces until both `r` and `s` are non-zero; with a
    /// healthy RNG the first draw succeeds in all but astronomically rare
    /// cases.
    pub fn sign(
        &mut self,
        message: &FieldElement<'f>,
        private_key: &FieldElement<'f>,
    ) -> Signature<'f> {
        loop {
            let mut k = self.draw_nonce();

            let r = match self.table.multiply(&k).affine_x() {
                Some(r) => r,
                None => {
                    k.zeroize();
                    continue;
                }
            };
            if r.is_zero() {
                k.zeroize();
                continue;
            }

            let s = match k.invert() {
                Ok(mut k_inv) => {
                    let s = k_inv.multiply(&message.add(&private_key.multiply(&r)));
                    k_inv.zeroize();
                    s
                }
                Err(_) => {
                    k.zeroize();
                    continue;
                }
            };
            k.zeroize();
            if s.is_zero() {
                continue;
            }

            return Signature { r, s };
        }
    }

    /// Verifies a signature over a prehashed message against the public
    /// key `Q`.
    ///
    /// Any arithmetic failure along the way (e.g. `s = 0`) is a rejection.
    pub fn verify(
        &self,
        public_key: &ProjectivePoint<'f>,
        message: &FieldElement<'f>,
        signature: &Signature<'f>,
    ) -> bool {
        let w = match signature.s.invert() {
            Ok(w) => w,
            Err(_) => return false,
        };
        let u1 = message.multiply(&w);
        let u2 = signature.r.multiply(&w);

        let x = self
            .table
            .multiply(&u1)
            .add(&public_key.multiply(&u2));
        if x.is_identity() {
            return false;
        }

        match x.affine_x() {
            Some(affine) => affine == signature.r,
            None => false,
        }
    }

    fn draw_nonce(&mut self) -> FieldElement<'f> {
        loop {
            let k = FieldElement::random(self.field, &mut self.rng);
            if !k.is_zero() {
                return k;
            }
        }
    }
}
