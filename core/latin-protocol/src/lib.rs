#![no_std] // Shared with the wasm platform

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod morphology;
pub use morphology::*;

pub mod model;
pub use model::*;
