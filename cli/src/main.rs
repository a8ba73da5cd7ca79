use std::{error::Error, io::Write};

use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};

use cubestate::prelude::*;

/// Turn a Rubik's Cube on the cubie level and print its state
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
	/// Use a sequence to apply on the solved cube
	#[arg(short, long, default_value_t = String::new())]
	sequence: String,

	/// Scramble the cube (after the sequence was applied)
	#[arg(short, long, default_value_t = false)]
	random: bool,

	/// Number of moves used for scrambling
	#[arg(short = 'n', long, default_value_t = DEFAULT_SCRAMBLE_LENGTH)]
	length: usize,

	/// Seed for the scramble, which makes it reproducible
	#[arg(long)]
	seed: Option<u64>,

	/// Print whether the resulting cube is solved
	#[arg(long, default_value_t = false)]
	check: bool,

	/// Print the output to a file rather to the stdout
	#[arg(short, long, default_value_t = String::new())]
	output: String,
}

fn main() -> Result<(), Box<dyn Error>> {
	env_logger::init();

	let args = Args::parse();
	// Whether to redirect it to the stdout or a file
	let mut out: Box<dyn Write> = if args.output.is_empty() {
		Box::new(std::io::stdout())
	} else {
		Box::new(std::fs::File::create(&args.output)?)
	};

	let mut cube = CubieCube::new();

	// Validate the whole sequence first, so a typo doesn't leave a half turned cube
	let turns = parse_moves(&args.sequence)?;
	log::info!("applying {} moves", turns.len());
	cube.apply_turns(turns);

	if args.random {
		let scramble = match args.seed {
			Some(seed) => cube.scramble_with(&mut StdRng::seed_from_u64(seed), args.length),
			None => cube.scramble(args.length),
		};
		writeln!(out, "{}", scramble)?;
	}

	writeln!(out, "{}", cube)?;
	if args.check {
		writeln!(out, "solved: {}", cube.is_solved())?;
	}

	Ok(())
}
