use std::str::FromStr;

use lazy_static::lazy_static;
use strum::IntoEnumIterator;

use crate::cube::{cubiecube::CubieCube, turn::*, *};

/// A transformation of the cube.
///
/// The slot `i` receives the piece of the slot `perm[i]`, and its orientation
/// is increased by `ori[i]`. Corners and edges are handled independently.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MoveDef {
	pub corner_perm: [Corner; NUM_CORNERS],
	pub corner_ori: [Ori; NUM_CORNERS],
	pub edge_perm: [Edge; NUM_EDGES],
	pub edge_ori: [Ori; NUM_EDGES],
}

use Corner::*;
use Edge::*;

impl MoveDef {
	/// The transformation which does nothing
	#[rustfmt::skip]
	pub const IDENTITY: MoveDef = MoveDef {
		corner_perm: [URF, UFL, ULB, UBR, DFR, DLF, DBL, DRB],
		corner_ori:  [0, 0, 0, 0, 0, 0, 0, 0],
		edge_perm:   [UR, UF, UL, UB, DR, DF, DL, DB, FR, FL, BL, BR],
		edge_ori:    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
	};

	/// Read the transformation off a cube which started out solved.
	/// Which piece ended up in a slot is exactly where that slot pulls from.
	pub fn from_cube(cube: &CubieCube) -> Self {
		let mut out = Self::IDENTITY;

		for (i, (c, o)) in cube.corners().iter().enumerate() {
			out.corner_perm[i] = *c;
			out.corner_ori[i] = *o;
		}
		for (i, (e, o)) in cube.edges().iter().enumerate() {
			out.edge_perm[i] = *e;
			out.edge_ori[i] = *o;
		}

		out
	}
}

// ===== Base moves =====
// Clockwise quarter turns, seen from outside the cube.

#[rustfmt::skip]
const M_UP: MoveDef = MoveDef {
	corner_perm: [UBR, URF, UFL, ULB, DFR, DLF, DBL, DRB],
	corner_ori:  [0, 0, 0, 0, 0, 0, 0, 0],
	edge_perm:   [UB, UR, UF, UL, DR, DF, DL, DB, FR, FL, BL, BR],
	edge_ori:    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
};

#[rustfmt::skip]
const M_DOWN: MoveDef = MoveDef {
	corner_perm: [URF, UFL, ULB, UBR, DLF, DBL, DRB, DFR],
	corner_ori:  [0, 0, 0, 0, 0, 0, 0, 0],
	edge_perm:   [UR, UF, UL, UB, DF, DL, DB, DR, FR, FL, BL, BR],
	edge_ori:    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
};

#[rustfmt::skip]
const M_RIGHT: MoveDef = MoveDef {
	corner_perm: [DFR, UFL, ULB, URF, DRB, DLF, DBL, UBR],
	corner_ori:  [2, 0, 0, 1, 1, 0, 0, 2],
	edge_perm:   [FR, UF, UL, UB, BR, DF, DL, DB, DR, FL, BL, UR],
	edge_ori:    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
};

#[rustfmt::skip]
const M_LEFT: MoveDef = MoveDef {
	corner_perm: [URF, ULB, DBL, UBR, DFR, UFL, DLF, DRB],
	corner_ori:  [0, 1, 2, 0, 0, 2, 1, 0],
	edge_perm:   [UR, UF, BL, UB, DR, DF, FL, DB, FR, UL, DL, BR],
	edge_ori:    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
};

#[rustfmt::skip]
const M_FRONT: MoveDef = MoveDef {
	corner_perm: [UFL, DLF, ULB, UBR, URF, DFR, DBL, DRB],
	corner_ori:  [1, 2, 0, 0, 2, 1, 0, 0],
	edge_perm:   [UR, FL, UL, UB, DR, FR, DL, DB, UF, DF, BL, BR],
	edge_ori:    [0, 1, 0, 0, 0, 1, 0, 0, 1, 1, 0, 0],
};

#[rustfmt::skip]
const M_BACK: MoveDef = MoveDef {
	corner_perm: [URF, UFL, UBR, DRB, DFR, DLF, ULB, DBL],
	corner_ori:  [0, 0, 1, 2, 0, 0, 2, 1],
	edge_perm:   [UR, UF, UL, BR, DR, DF, DL, BL, FR, FL, UB, DB],
	edge_ori:    [0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 1, 1],
};

/// The hand written moves, sorted like [`Face`]
const BASE_MOVES: [MoveDef; NUM_FACES] = [M_UP, M_DOWN, M_RIGHT, M_LEFT, M_FRONT, M_BACK];

/// Apply the transformation `def` to `state` and return the result.
pub fn compose(state: &CubieCube, def: &MoveDef) -> CubieCube {
	let old_c = state.corners();
	let old_e = state.edges();

	let mut corners = *old_c;
	for (i, slot) in corners.iter_mut().enumerate() {
		let (c, o) = old_c[def.corner_perm[i] as usize];
		*slot = (c, (o + def.corner_ori[i]) % CORNER_TWISTS);
	}

	let mut edges = *old_e;
	for (i, slot) in edges.iter_mut().enumerate() {
		let (e, o) = old_e[def.edge_perm[i] as usize];
		*slot = (e, (o + def.edge_ori[i]) % EDGE_FLIPS);
	}

	CubieCube::from_lists(corners, edges)
}

/// Turn a solved cube `n` times by `base` and read off the resulting transformation.
fn repeat_move(base: &MoveDef, n: usize) -> MoveDef {
	let mut scratch = CubieCube::new();
	for _ in 0..n {
		scratch = compose(&scratch, base);
	}
	MoveDef::from_cube(&scratch)
}

/// All 18 moves, indexed by [`Move::index`].
#[derive(Debug)]
pub struct MoveTable {
	defs: [MoveDef; NUM_MOVES],
}

impl MoveTable {
	/// Build the table from the base moves.
	/// Half turns are two quarter turns, counterclockwise turns are three.
	pub fn build() -> Self {
		log::debug!("building move table from {} base moves", NUM_FACES);

		let mut defs = [MoveDef::IDENTITY; NUM_MOVES];
		for face in Face::iter() {
			let base = &BASE_MOVES[face as usize];
			for wise in TurnWise::iter() {
				defs[Move::new(face, wise).index()] = match wise {
					TurnWise::Clockwise => *base,
					TurnWise::Double => repeat_move(base, 2),
					TurnWise::CounterClockwise => repeat_move(base, 3),
				};
			}
		}

		Self { defs }
	}

	pub fn get(&self, mv: Move) -> &MoveDef {
		&self.defs[mv.index()]
	}

	/// Look up a move by its token, e.g. `"R'"`.
	pub fn lookup(&self, name: &str) -> Option<&MoveDef> {
		Move::from_str(name).ok().map(|mv| self.get(mv))
	}
}

lazy_static! {
	static ref MOVE_TABLE: MoveTable = MoveTable::build();
}

/// The process wide move table. It is built on first use.
pub fn move_table() -> &'static MoveTable {
	&MOVE_TABLE
}

#[cfg(test)]
mod tests {
	use super::*;

	/// Check whether the slots of a transformation form a permutation
	fn is_permutation(perm: &[usize]) -> bool {
		let mut has_num = vec![false; perm.len()];
		for &p in perm {
			if p >= perm.len() || has_num[p] {
				return false;
			}
			has_num[p] = true;
		}
		true
	}

	#[test]
	/// Every move in the table is a legal transformation
	fn table_entries_are_permutations() {
		let table = MoveTable::build();
		for mv in Move::iter() {
			let def = table.get(mv);
			let cp: Vec<usize> = def.corner_perm.iter().map(|c| *c as usize).collect();
			let ep: Vec<usize> = def.edge_perm.iter().map(|e| *e as usize).collect();
			assert!(is_permutation(&cp), "Corners of {} are no permutation", mv);
			assert!(is_permutation(&ep), "Edges of {} are no permutation", mv);

			assert!(def.corner_ori.iter().all(|o| *o < CORNER_TWISTS));
			assert!(def.edge_ori.iter().all(|o| *o < EDGE_FLIPS));
			let twist: u32 = def.corner_ori.iter().map(|o| *o as u32).sum();
			let flip: u32 = def.edge_ori.iter().map(|o| *o as u32).sum();
			assert_eq!(twist % 3, 0, "Twist of {} is off", mv);
			assert_eq!(flip % 2, 0, "Flip of {} is off", mv);
		}
	}

	#[test]
	fn clockwise_entries_are_the_base_moves() {
		let table = MoveTable::build();
		for face in Face::iter() {
			let mv = Move::new(face, TurnWise::Clockwise);
			assert_eq!(*table.get(mv), BASE_MOVES[face as usize]);
		}
	}

	#[test]
	/// A move followed by its inverse is the identity on the definitions
	fn derived_moves_undo_base_moves() {
		let table = MoveTable::build();
		for mv in Move::iter() {
			let once = compose(&CubieCube::new(), table.get(mv));
			let back = compose(&once, table.get(mv.inverse()));
			assert!(back.is_solved(), "{} {} is not the identity", mv, mv.inverse());
		}
	}

	#[test]
	fn double_is_two_quarters() {
		let table = MoveTable::build();
		for face in Face::iter() {
			let quarter = table.get(Move::new(face, TurnWise::Clockwise));
			let two = compose(&compose(&CubieCube::new(), quarter), quarter);
			assert_eq!(MoveDef::from_cube(&two), *table.get(Move::new(face, TurnWise::Double)));
		}
	}

	#[test]
	fn lookup_by_token() {
		let table = move_table();
		assert_eq!(table.lookup("R'"), Some(table.get(Move::RPrime)));
		assert_eq!(table.lookup("F2"), Some(table.get(Move::F2)));
		assert_eq!(table.lookup("Q"), None);
		assert_eq!(table.lookup("U3"), None);
		assert_eq!(table.lookup(""), None);
	}

	#[test]
	/// The shared table is only built once
	fn shared_table_is_reused() {
		let handles: Vec<_> = (0..4)
			.map(|_| std::thread::spawn(|| move_table() as *const MoveTable as usize))
			.collect();
		let first = move_table() as *const MoveTable as usize;
		for h in handles {
			assert_eq!(h.join().unwrap(), first);
		}
	}

	#[test]
	fn identity_reads_back_from_solved_cube() {
		assert_eq!(MoveDef::from_cube(&CubieCube::new()), MoveDef::IDENTITY);
	}
}
