use cubestate::prelude::*;

fn main() {
	let mut cube = CubieCube::new();

	let scramble = cube.scramble(DEFAULT_SCRAMBLE_LENGTH);
	println!("Scramble: {}", scramble);
	println!("{}", cube);

	// Undo the scramble move by move, starting with the last one
	let undo: Vec<Move> = parse_moves(&scramble)
		.unwrap()
		.into_iter()
		.rev()
		.map(Move::inverse)
		.collect();
	println!("Undo: {}", format_moves(&undo));
	cube.apply_turns(undo);

	assert!(cube.is_solved());
}
