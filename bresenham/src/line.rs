use std::iter::FusedIterator;

use super::{Point, Octant};

/// Steps a line that's already in octant 1: `start.x <= end.x`,
/// `start.y <= end.y` and a slope no steeper than 1.
///
/// Every step moves one to the right, and one up whenever the doubled
/// error term says the ideal line has passed the midpoint between the two
/// candidate rows. Exact midpoints round up.
#[derive(Clone, Debug)]
pub struct Stepper {
	position: Point,
	/// points left to yield, `position` included
	remaining: u64,
	error: i64,
	/// `2 * dy`
	rise: i64,
	/// `2 * dx`
	run: i64,
}
impl Stepper {
	pub fn new(start: Point, end: Point) -> Self {
		debug_assert!(
			Octant::Octant1.contains(start.delta(end)),
			"{start} -> {end} isn't in the first octant"
		);

		let dx = end.x as i64 - start.x as i64;
		let dy = end.y as i64 - start.y as i64;

		Stepper {
			position: start,
			remaining: dx as u64 + 1,
			error: 2 * dy - dx,
			rise: 2 * dy,
			run: 2 * dx,
		}
	}
}

impl Iterator for Stepper {
	type Item = Point;

	fn next(&mut self) -> Option<Self::Item> {
		if self.remaining == 0 {
			return None;
		}

		let p = self.position;
		self.remaining -= 1;

		// don't walk past the end, it might be at `Coord::MAX`
		if self.remaining > 0 {
			if self.error >= 0 {
				self.position.y += 1;
				self.error -= self.run;
			}
			self.error += self.rise;
			self.position.x += 1;
		}

		Some(p)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		match usize::try_from(self.remaining) {
			Ok(n) => (n, Some(n)),
			Err(_) => (usize::MAX, None),
		}
	}
}
impl ExactSizeIterator for Stepper {}
impl FusedIterator for Stepper {}

/// Every lattice point on the line from `start` to `end`, both included,
/// in that order.
#[derive(Clone, Debug)]
pub struct Line {
	start: Point,
	end: Point,
	octant: Octant,
	stepper: Stepper,
}
impl Line {
	pub fn new(start: Point, end: Point) -> Self {
		let octant = Octant::classify(start, end);
		log::trace!("line {start} -> {end} in {octant}");
		Line::through(start, end, octant)
	}

	/// Plots the line using `octant`'s transforms, even if [`Octant::classify`]
	/// would have picked its neighbor. Returns `None` when the line doesn't
	/// lie in `octant` at all.
	pub fn in_octant(start: Point, end: Point, octant: Octant) -> Option<Self> {
		octant.contains(start.delta(end))
			.then(|| Line::through(start, end, octant))
	}

	fn through(start: Point, end: Point, octant: Octant) -> Self {
		let stepper = Stepper::new(
			octant.to_canonical(start),
			octant.to_canonical(end),
		);
		Line { start, end, octant, stepper }
	}

	pub fn start(&self) -> Point { self.start }
	pub fn end(&self) -> Point { self.end }
	pub fn octant(&self) -> Octant { self.octant }
}

impl Iterator for Line {
	type Item = Point;

	fn next(&mut self) -> Option<Self::Item> {
		self.stepper.next().map(|p| self.octant.from_canonical(p))
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		self.stepper.size_hint()
	}
}
impl ExactSizeIterator for Line {}
impl FusedIterator for Line {}
