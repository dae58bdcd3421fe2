use std::collections::HashSet;

use anyhow::{ensure, Result};
use clap::Parser;
use log::LevelFilter;

use bresenham::{plot_line, Line, Point};

/// the widest/tallest `--grid` that'll get drawn
const MAX_GRID: i64 = 200;

#[derive(Parser)]
#[command(name = "plot_line")]
#[command(about = "Prints the integer coordinates on a line between two points")]
struct Cli {
	/// Where the line starts, as `x,y`
	#[arg(default_value = "0,0", allow_hyphen_values = true)]
	from: Point,

	/// Where the line ends, as `x,y`
	#[arg(default_value = "10,5", allow_hyphen_values = true)]
	to: Point,

	/// Draw the line as a grid of characters instead of listing coordinates
	#[arg(long)]
	grid: bool,

	/// Also print which octant the line was plotted in
	#[arg(long)]
	octant: bool,

	/// Log every line that gets built
	#[arg(short, long)]
	verbose: bool,
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	let level = if cli.verbose { LevelFilter::Trace } else { LevelFilter::Info };
	simple_logger::SimpleLogger::new()
		.with_level(level)
		.env()
		.init()
		.map_err(|e| anyhow::anyhow!("couldn't start logging: {e}"))?;

	log::info!("plotting {} -> {}", cli.from, cli.to);

	if cli.octant {
		println!("{}", Line::new(cli.from, cli.to).octant());
	}

	if cli.grid {
		print!("{}", draw_grid(cli.from, cli.to)?);
	} else {
		plot_line(cli.from, cli.to, |p| print!("{p} "));
		println!();
	}

	Ok(())
}

/// `S` and `E` mark the ends, `#` the rest of the line. y goes up.
fn draw_grid(from: Point, to: Point) -> Result<String> {
	let (min_x, max_x) = (from.x.min(to.x), from.x.max(to.x));
	let (min_y, max_y) = (from.y.min(to.y), from.y.max(to.y));

	let width = max_x as i64 - min_x as i64 + 1;
	let height = max_y as i64 - min_y as i64 + 1;
	ensure!(
		width <= MAX_GRID && height <= MAX_GRID,
		"a {width}×{height} grid is too big to draw (max {MAX_GRID}×{MAX_GRID})"
	);

	let mut lit = HashSet::new();
	plot_line(from, to, |p| { lit.insert(p); });

	let mut out = String::new();
	for y in (min_y..=max_y).rev() {
		for x in min_x..=max_x {
			let p = Point::new(x, y);
			out.push(match p {
				_ if p == from => 'S',
				_ if p == to => 'E',
				_ if lit.contains(&p) => '#',
				_ => '.',
			});
		}
		out.push('\n');
	}
	Ok(out)
}
