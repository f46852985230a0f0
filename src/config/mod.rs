//! Measurement scope types.

pub(crate) mod attr;
mod target;

pub use target::{All, Cpu, Proc, Target};
