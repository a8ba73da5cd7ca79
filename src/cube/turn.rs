use std::str::FromStr;

use rand::Rng;
use strum::EnumCount;

use super::CubeError;

/// Total number of turnable faces
pub const NUM_FACES: usize = Face::COUNT;
/// Total number of ways to adjust your turn
pub const NUM_TURN_WISES: usize = TurnWise::COUNT;
/// Total number of distinct moves
pub const NUM_MOVES: usize = Move::COUNT;

/// The faces you can turn on the cube
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[derive(strum::EnumIter, strum::EnumCount)]
#[repr(u8)]
pub enum Face {
	Up,
	Down,
	Right,
	Left,
	Front,
	Back,
}

impl std::fmt::Display for Face {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Face::Up => write!(f, "U"),
			Face::Down => write!(f, "D"),
			Face::Right => write!(f, "R"),
			Face::Left => write!(f, "L"),
			Face::Front => write!(f, "F"),
			Face::Back => write!(f, "B"),
		}
	}
}

/// You can either turn a face (counter-)clockwise or by a half turn.
/// Clockwise is meant as seen from outside the cube, looking at the face.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[derive(strum::EnumIter, strum::EnumCount)]
#[repr(u8)]
pub enum TurnWise {
	Clockwise,
	Double,
	CounterClockwise,
}

impl std::fmt::Display for TurnWise {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			TurnWise::Clockwise => write!(f, ""),
			TurnWise::Double => write!(f, "2"),
			TurnWise::CounterClockwise => write!(f, "'"),
		}
	}
}

/// One of the 18 face turns.
///
/// The variants are sorted face by face, each face in the order of [`TurnWise`],
/// so `face * NUM_TURN_WISES + wise` is the index of a move.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[derive(strum::EnumIter, strum::EnumCount)]
#[rustfmt::skip]
#[repr(u8)]
pub enum Move {
	U, U2, UPrime,
	D, D2, DPrime,
	R, R2, RPrime,
	L, L2, LPrime,
	F, F2, FPrime,
	B, B2, BPrime,
}

const FACES: [Face; NUM_FACES] = [
	Face::Up,
	Face::Down,
	Face::Right,
	Face::Left,
	Face::Front,
	Face::Back,
];

const WISES: [TurnWise; NUM_TURN_WISES] = [
	TurnWise::Clockwise,
	TurnWise::Double,
	TurnWise::CounterClockwise,
];

#[rustfmt::skip]
const MOVES: [Move; NUM_MOVES] = [
	Move::U, Move::U2, Move::UPrime,
	Move::D, Move::D2, Move::DPrime,
	Move::R, Move::R2, Move::RPrime,
	Move::L, Move::L2, Move::LPrime,
	Move::F, Move::F2, Move::FPrime,
	Move::B, Move::B2, Move::BPrime,
];

impl Move {
	pub const fn new(face: Face, wise: TurnWise) -> Self {
		MOVES[face as usize * NUM_TURN_WISES + wise as usize]
	}

	/// The move at the given index, see [`Move::index`].
	pub fn from_index(idx: usize) -> Option<Self> {
		MOVES.get(idx).copied()
	}

	pub const fn index(self) -> usize {
		self as usize
	}

	pub const fn face(self) -> Face {
		FACES[self as usize / NUM_TURN_WISES]
	}

	pub const fn wise(self) -> TurnWise {
		WISES[self as usize % NUM_TURN_WISES]
	}

	/// Return the move which undoes this one.
	/// Half turns are their own inverse.
	pub const fn inverse(self) -> Self {
		let wise = match self.wise() {
			TurnWise::Clockwise => TurnWise::CounterClockwise,
			TurnWise::CounterClockwise => TurnWise::Clockwise,
			TurnWise::Double => TurnWise::Double,
		};
		Self::new(self.face(), wise)
	}

	/// Draw one of the 18 moves uniformly at random.
	pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
		MOVES[rng.gen_range(0..NUM_MOVES)]
	}
}

impl std::fmt::Display for Move {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "{}{}", self.face(), self.wise())
	}
}

impl FromStr for Move {
	type Err = CubeError;

	/// Parse a single token like `U`, `R'` or `F2`. Matching is case-sensitive.
	fn from_str(item: &str) -> Result<Self, Self::Err> {
		let unknown = || CubeError::UnknownMove(item.to_owned());
		let mut chars = item.chars();

		let face = match chars.next() {
			Some('U') => Face::Up,
			Some('D') => Face::Down,
			Some('R') => Face::Right,
			Some('L') => Face::Left,
			Some('F') => Face::Front,
			Some('B') => Face::Back,
			_ => return Err(unknown()),
		};

		let wise = match chars.next() {
			None => TurnWise::Clockwise,
			Some('2') => TurnWise::Double,
			Some('\'') => TurnWise::CounterClockwise,
			Some(_) => return Err(unknown()),
		};

		if chars.next().is_some() {
			return Err(unknown());
		}

		Ok(Self::new(face, wise))
	}
}

/// Parse a whitespace separated sequence of moves.
/// Fails on the first unrecognized token, nothing is returned in that case.
pub fn parse_moves(string: &str) -> Result<Vec<Move>, CubeError> {
	string.split_whitespace().map(Move::from_str).collect()
}

/// Join the moves into a single space separated string.
pub fn format_moves(moves: &[Move]) -> String {
	moves
		.iter()
		.map(Move::to_string)
		.collect::<Vec<_>>()
		.join(" ")
}

#[cfg(test)]
mod tests {
	use rand::{rngs::StdRng, SeedableRng};
	use strum::IntoEnumIterator;

	use super::*;

	#[test]
	/// Every move prints a token which parses back to the same move
	fn display_parses_back() {
		for mv in Move::iter() {
			let token = mv.to_string();
			assert_eq!(Move::from_str(&token).unwrap(), mv, "token {}", token);
		}
	}

	#[test]
	fn canonical_tokens() {
		assert_eq!(Move::U.to_string(), "U");
		assert_eq!(Move::RPrime.to_string(), "R'");
		assert_eq!(Move::F2.to_string(), "F2");
		assert_eq!(Move::new(Face::Back, TurnWise::CounterClockwise), Move::BPrime);
		assert_eq!(Move::DPrime.face(), Face::Down);
		assert_eq!(Move::L2.wise(), TurnWise::Double);
	}

	#[test]
	/// Tokens outside the notation are rejected
	fn rejects_unknown_tokens() {
		for token in ["Q", "", "U3", "u", "r'", "U2'", "UU", "R ", "X", "M2"] {
			match Move::from_str(token) {
				Err(CubeError::UnknownMove(t)) => assert_eq!(t, token),
				Ok(mv) => panic!("Token {:?} parsed as {}", token, mv),
			}
		}
	}

	#[test]
	fn inverse_pairs() {
		assert_eq!(Move::U.inverse(), Move::UPrime);
		assert_eq!(Move::UPrime.inverse(), Move::U);
		assert_eq!(Move::R2.inverse(), Move::R2);

		for mv in Move::iter() {
			assert_eq!(mv.inverse().inverse(), mv);
			assert_eq!(mv.inverse().face(), mv.face());
		}
	}

	#[test]
	fn index_matches_order() {
		for (i, mv) in Move::iter().enumerate() {
			assert_eq!(mv.index(), i);
			assert_eq!(Move::from_index(i), Some(mv));
		}
		assert_eq!(Move::from_index(NUM_MOVES), None);
	}

	#[test]
	fn parse_sequences() {
		let moves = parse_moves("  R U\tR'\nU'  ").unwrap();
		assert_eq!(moves, vec![Move::R, Move::U, Move::RPrime, Move::UPrime]);
		assert_eq!(format_moves(&moves), "R U R' U'");

		assert!(parse_moves("").unwrap().is_empty());

		match parse_moves("U X R") {
			Err(CubeError::UnknownMove(t)) => assert_eq!(t, "X"),
			Ok(_) => panic!("Sequence with X must not parse"),
		}
	}

	#[test]
	/// With enough draws, every move shows up
	fn random_covers_all_moves() {
		let mut rng = StdRng::seed_from_u64(7);
		let mut seen = [false; NUM_MOVES];
		for _ in 0..2000 {
			seen[Move::random(&mut rng).index()] = true;
		}
		assert!(seen.iter().all(|s| *s));
	}
}
