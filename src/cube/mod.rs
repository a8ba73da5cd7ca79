pub mod cubiecube;
pub mod movetable;
pub mod turn;

use strum::EnumCount;
use turn::*;

/// The number of orientations a corner can have
pub const CORNER_TWISTS: u8 = 3;

/// The number of orientations an edge can have
pub const EDGE_FLIPS: u8 = 2;

/// The orientation of a piece, taken modulo [`CORNER_TWISTS`] or [`EDGE_FLIPS`]
pub type Ori = u8;

// ===== Edge Piece =====

/// All the different slot names for an edge.
/// The same names identify the edge pieces, the piece `UR` belongs into the slot `UR`.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug)]
#[derive(strum::EnumIter, strum::EnumCount, strum::Display)]
#[allow(clippy::upper_case_acronyms)]
#[repr(u8)]
#[rustfmt::skip]
pub enum Edge {
	#[default]
	UR, UF, UL, UB, // up edges
	DR, DF, DL, DB, // down edges
	FR, FL, BL, BR, // ud-slice (middle edges)
}

pub const NUM_EDGES: usize = Edge::COUNT;

// ===== Corner Piece =====

/// All the different slot names for a corner.
/// The letters are read clockwise around the corner, starting at the U or D facelet.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug)]
#[derive(strum::EnumIter, strum::EnumCount, strum::Display)]
#[allow(clippy::upper_case_acronyms)]
#[repr(u8)]
#[rustfmt::skip]
pub enum Corner {
	#[default]
	URF, UFL, ULB, UBR, // up corners
	DFR, DLF, DBL, DRB, // down corners
}

pub const NUM_CORNERS: usize = Corner::COUNT;

/// Everything that can go wrong when talking to the cube.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CubeError {
	#[error("unrecognized move token {0:?}")]
	UnknownMove(String),
}

/// Anything which can be turned like a Rubik's Cube.
pub trait RubiksCube {
	fn apply_turn(&mut self, turn: Move);

	/// Apply the given turns in order.
	fn apply_turns<I>(&mut self, turns: I)
	where
		I: IntoIterator<Item = Move>,
	{
		for turn in turns {
			self.apply_turn(turn);
		}
	}
}
