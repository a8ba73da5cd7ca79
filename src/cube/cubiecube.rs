use rand::Rng;

use crate::cube::{movetable::*, turn::*, *};

pub type CornerList = [(Corner, Ori); NUM_CORNERS];
pub type EdgeList = [(Edge, Ori); NUM_EDGES];

/// The number of moves [`CubieCube::scramble`] is usually called with
pub const DEFAULT_SCRAMBLE_LENGTH: usize = 25;

#[rustfmt::skip]
const SOLVED_CORNERS: CornerList = [
	(Corner::URF, 0), (Corner::UFL, 0), (Corner::ULB, 0), (Corner::UBR, 0),
	(Corner::DFR, 0), (Corner::DLF, 0), (Corner::DBL, 0), (Corner::DRB, 0),
];
#[rustfmt::skip]
const SOLVED_EDGES: EdgeList = [
	(Edge::UR, 0), (Edge::UF, 0), (Edge::UL, 0), (Edge::UB, 0),
	(Edge::DR, 0), (Edge::DF, 0), (Edge::DL, 0), (Edge::DB, 0),
	(Edge::FR, 0), (Edge::FL, 0), (Edge::BL, 0), (Edge::BR, 0),
];

/// The cube on the cubie level, as Kociemba describes it in
/// https://kociemba.org/math/cubielevel.htm
///
/// Every corner and edge slot stores the piece which currently sits there
/// together with its orientation.
#[derive(PartialEq, Eq, Hash, Clone, Debug)]
pub struct CubieCube {
	corners: CornerList,
	edges: EdgeList,
}

impl Default for CubieCube {
	fn default() -> Self {
		Self::new()
	}
}

impl CubieCube {
	/// A solved cube
	pub const fn new() -> Self {
		CubieCube {
			corners: SOLVED_CORNERS,
			edges: SOLVED_EDGES,
		}
	}

	pub(crate) const fn from_lists(corners: CornerList, edges: EdgeList) -> Self {
		CubieCube { corners, edges }
	}

	pub fn reset(&mut self) {
		*self = Self::new();
	}

	pub fn is_solved(&self) -> bool {
		self.corners == SOLVED_CORNERS && self.edges == SOLVED_EDGES
	}

	pub fn corners(&self) -> &CornerList {
		&self.corners
	}

	pub fn edges(&self) -> &EdgeList {
		&self.edges
	}

	/// Get the corner and orientation at slot `c`
	pub const fn corner(&self, c: Corner) -> (Corner, Ori) {
		self.corners[c as usize]
	}

	/// Get the edge and orientation at slot `e`
	pub const fn edge(&self, e: Edge) -> (Edge, Ori) {
		self.edges[e as usize]
	}

	// ===== Turning =====

	/// Apply a single move given by its token, e.g. `"U'"`.
	/// The cube is left untouched if the token is unknown.
	pub fn apply_move(&mut self, name: &str) -> Result<(), CubeError> {
		let def = match move_table().lookup(name) {
			Some(def) => def,
			None => {
				log::debug!("rejecting move token {:?}", name);
				return Err(CubeError::UnknownMove(name.to_owned()));
			}
		};

		log::trace!("applying {}", name);
		*self = compose(self, def);
		Ok(())
	}

	/// Apply a whitespace separated sequence of moves from left to right.
	///
	/// On an unknown token the error is returned immediately. The moves in
	/// front of it stay applied, the ones after it are never applied.
	pub fn apply_sequence(&mut self, moves: &str) -> Result<(), CubeError> {
		for token in moves.split_whitespace() {
			self.apply_move(token)?;
		}
		Ok(())
	}

	/// Scramble the cube with `length` random moves.
	/// Returns the applied moves, separated by spaces.
	pub fn scramble(&mut self, length: usize) -> String {
		self.scramble_with(&mut rand::thread_rng(), length)
	}

	/// Like [`CubieCube::scramble`], but draws the moves from the given
	/// random number generator. A seeded generator gives reproducible scrambles.
	pub fn scramble_with<R: Rng + ?Sized>(&mut self, rng: &mut R, length: usize) -> String {
		let mut applied = Vec::with_capacity(length);
		for _ in 0..length {
			let mv = Move::random(rng);
			self.apply_turn(mv);
			applied.push(mv);
		}

		let out = format_moves(&applied);
		log::debug!("scrambled with {}", out);
		out
	}

	// ===== Inspection =====

	/// Render the state as `(piece,orientation)` for the 8 corner slots,
	/// followed by `|` and the 12 edge slots.
	///
	/// ```
	/// use cubestate::prelude::*;
	///
	/// let cube = CubieCube::new();
	/// assert!(cube.to_debug_string().starts_with("(0,0) (1,0) (2,0)"));
	/// ```
	pub fn to_debug_string(&self) -> String {
		let corners = self
			.corners
			.iter()
			.map(|(c, o)| format!("({},{})", *c as usize, o));
		let edges = self
			.edges
			.iter()
			.map(|(e, o)| format!("({},{})", *e as usize, o));

		let corners: Vec<String> = corners.collect();
		let edges: Vec<String> = edges.collect();
		format!("{} | {}", corners.join(" "), edges.join(" "))
	}

	/// Check whether the state could be reached by turning a solved cube.
	pub fn is_solvable(&self) -> bool {
		// All orientations have to be in range
		if self.corners.iter().any(|(_, o)| *o >= CORNER_TWISTS)
			|| self.edges.iter().any(|(_, o)| *o >= EDGE_FLIPS)
		{
			return false;
		}

		// Check that all corners are there once
		let mut contains = [false; NUM_CORNERS];
		for (c, _) in self.corners.iter() {
			contains[*c as usize] = true;
		}
		if contains.into_iter().any(|b| !b) {
			return false;
		}

		// Check that all edges are there once
		let mut contains = [false; NUM_EDGES];
		for (e, _) in self.edges.iter() {
			contains[*e as usize] = true;
		}
		if contains.into_iter().any(|b| !b) {
			return false;
		}

		// The sum of the corner orientations have to be divisible by 3
		let cori: u32 = self.corners.iter().map(|(_, o)| *o as u32).sum();
		if cori % CORNER_TWISTS as u32 != 0 {
			return false;
		}

		// The sum of the edge orientations have to be divisible by 2
		let eori: u32 = self.edges.iter().map(|(_, o)| *o as u32).sum();
		if eori % EDGE_FLIPS as u32 != 0 {
			return false;
		}

		let c_perm: Vec<usize> = self.corners.iter().map(|(c, _)| *c as usize).collect();
		let e_perm: Vec<usize> = self.edges.iter().map(|(e, _)| *e as usize).collect();

		// There must be an even number of swaps throughout the permutations
		(count_inversions(&c_perm) + count_inversions(&e_perm)) % 2 == 0
	}
}

fn count_inversions(perm: &[usize]) -> usize {
	let mut n = 0;
	for i in 0..perm.len() {
		for j in i + 1..perm.len() {
			if perm[i] > perm[j] {
				n += 1;
			}
		}
	}
	n
}

impl RubiksCube for CubieCube {
	fn apply_turn(&mut self, turn: Move) {
		log::trace!("applying {}", turn);
		*self = compose(self, move_table().get(turn));
	}
}

impl std::fmt::Display for CubieCube {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "{}", self.to_debug_string())
	}
}
