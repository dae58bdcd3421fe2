//! Integer-only line rasterization.
//!
//! Any segment between two lattice points is mapped into the first octant
//! (`x` rising, `y` rising, slope in `[0, 1]`), stepped there with an integer
//! error accumulator, and every produced point is mapped back before it
//! reaches the caller.
//!
//! ```
//! use bresenham::{Point, plot_line};
//!
//! let mut points = Vec::new();
//! plot_line(Point::new(0, 0), Point::new(4, 2), |p| points.push(p));
//! assert_eq!(points, [(0, 0), (1, 1), (2, 1), (3, 2), (4, 2)].map(Point::from));
//! ```

use std::ops::ControlFlow;

/// Coordinates are plain `i32`s. Endpoints must not be `i32::MIN`, since the
/// octant transforms negate them.
pub type Coord = i32;

pub mod point;
pub mod octant;
pub mod line;

pub use point::{Point, ParsePointError};
pub use octant::Octant;
pub use line::{Line, Stepper};

/// Makes a [`Line`] from anything point-like, e.g. `line((0, 0), (3, 7))`.
pub fn line(start: impl Into<Point>, end: impl Into<Point>) -> Line {
	Line::new(start.into(), end.into())
}

/// Plots every point from `start` to `end` inclusive, in order, into `emit`.
pub fn plot_line(start: Point, end: Point, emit: impl FnMut(Point)) {
	Line::new(start, end).for_each(emit);
}

/// Like [`plot_line`], but `emit` can stop the line early by returning
/// `ControlFlow::Break`. That value is handed back; a line that ran to the
/// end gives `ControlFlow::Continue(())`.
pub fn plot_line_until<B>(
	start: Point, end: Point,
	emit: impl FnMut(Point) -> ControlFlow<B>,
) -> ControlFlow<B> {
	Line::new(start, end).try_for_each(emit)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn plot_line_streams_in_order() {
		let mut seen = Vec::new();
		plot_line(Point::new(3, 3), Point::new(15, 10), |p| seen.push(p));

		assert_eq!(seen.len(), 13);
		assert_eq!(seen.first(), Some(&Point::new(3, 3)));
		assert_eq!(seen.last(), Some(&Point::new(15, 10)));
		assert_eq!(seen, line((3, 3), (15, 10)).collect::<Vec<_>>());
	}

	#[test]
	fn plot_line_until_stops_at_break() {
		let mut seen = Vec::new();
		let flow = plot_line_until(Point::new(0, 0), Point::new(10, 0), |p| {
			seen.push(p);
			if p.x == 3 { ControlFlow::Break(p) } else { ControlFlow::Continue(()) }
		});

		assert_eq!(flow, ControlFlow::Break(Point::new(3, 0)));
		assert_eq!(seen, (0..=3).map(|x| Point::new(x, 0)).collect::<Vec<_>>());
	}

	#[test]
	fn plot_line_until_runs_to_completion() {
		let mut count = 0;
		let flow: ControlFlow<()> = plot_line_until(Point::new(0, 0), Point::new(-4, 9), |_| {
			count += 1;
			ControlFlow::Continue(())
		});

		assert_eq!(flow, ControlFlow::Continue(()));
		assert_eq!(count, 10);
	}

	#[test]
	fn degenerate_line_is_one_point() {
		let mut seen = Vec::new();
		plot_line(Point::new(-7, 12), Point::new(-7, 12), |p| seen.push(p));
		assert_eq!(seen, [Point::new(-7, 12)]);
	}
}
