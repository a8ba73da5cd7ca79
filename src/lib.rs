//! This is a simple example how to turn the cube.
//!
//! ```
//! use cubestate::prelude::*;
//!
//! let mut cube = CubieCube::new();
//!
//! cube.apply_sequence("U2 D2 B2 F2 L2 R2").unwrap();
//! cube.apply_turns(parse_moves("R2 L2 F2 B2 D2 U2").unwrap());
//!
//! assert!(cube.is_solved());
//! assert!(cube.apply_move("U3").is_err());
//! ```
//!
//! The cube only tracks which piece sits in which slot and how it is twisted,
//! it knows nothing about sticker colors.

pub mod cube;

pub mod prelude {
	pub use crate::cube::{cubiecube::*, movetable::*, turn::*, *};
}
