#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

extern crate alloc;

mod arithmetic;
mod curve;
mod ecdsa;
mod error;
mod projective;

pub mod test_vectors;

pub use crate::{
    arithmetic::{Field, FieldElement},
    curve::Curve,
    ecdsa::{Ecdsa, Signature},
    error::{Error, Result},
    projective::{NafTable, ProjectivePoint},
};

pub use rand_core;
