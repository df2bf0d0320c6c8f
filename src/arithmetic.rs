//! Multi-precision modular arithmetic over prime fields.
//!
//! The [`limbs`] module works on raw magnitudes, [`Field`] adds the modulus
//! and Barrett machinery, and [`FieldElement`] layers the reduced, immutable
//! public value type on top.

pub(crate) mod element;
pub(crate) mod field;
pub(crate) mod limbs;

pub use self::{element::FieldElement, field::Field};
