//! The eight symmetric regions around a line's start point.
//!
//! ```text
//!               y
//!               ^
//!           \ 3 | 2 /
//!            \  |  /
//!       4     \ | /     1
//!   -----------\|/-----------> x
//!       5     / | \     8
//!            /  |  \
//!           / 6 | 7 \
//! ```
//!
//! Each octant owns a transform that maps its segments onto octant 1 and an
//! inverse that maps octant 1 points back. A segment on the boundary between
//! two octants belongs to both, and both give the same points.

use std::fmt;

use super::{Coord, Point};

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Octant {
	Octant1 = 1, Octant2, Octant3, Octant4,
	Octant5, Octant6, Octant7, Octant8,
}
impl TryFrom<u8> for Octant {
	type Error = u8;

	fn try_from(n: u8) -> Result<Self, Self::Error> {
		use Octant::*;
		match n {
			1 => Ok(Octant1), 2 => Ok(Octant2),
			3 => Ok(Octant3), 4 => Ok(Octant4),
			5 => Ok(Octant5), 6 => Ok(Octant6),
			7 => Ok(Octant7), 8 => Ok(Octant8),
			_ => Err(n),
		}
	}
}
impl fmt::Display for Octant {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "octant {}", self.index())
	}
}

impl Octant {
	/// Every octant, in the order [`Octant::classify`] tries them.
	pub const ALL: [Octant; 8] = {
		use Octant::*;
		[Octant1, Octant2, Octant3, Octant4, Octant5, Octant6, Octant7, Octant8]
	};

	/// 1 through 8, counterclockwise from the positive x axis.
	pub const fn index(self) -> u8 {
		self as u8
	}

	/// Whether a segment going by `delta` (`end - start`) lies in this
	/// octant. Boundaries count as inside.
	pub const fn contains(self, delta: Point) -> bool {
		use Octant::*;
		let Point { x: dx, y: dy } = delta;
		match self {
			Octant1 => dx >= 0 && dy >= 0 &&  dy <=  dx,
			Octant2 => dx >= 0 && dy >= 0 &&  dx <=  dy,
			Octant3 => dx <= 0 && dy >= 0 && -dx <=  dy,
			Octant4 => dx <= 0 && dy >= 0 &&  dy <= -dx,
			Octant5 => dx <= 0 && dy <= 0 && -dy <= -dx,
			Octant6 => dx <= 0 && dy <= 0 && -dx <= -dy,
			Octant7 => dx >= 0 && dy <= 0 &&  dx <= -dy,
			Octant8 => dx >= 0 && dy <= 0 && -dy <=  dx,
		}
	}

	/// Picks the octant for a segment. On a boundary the lower numbered
	/// octant wins, except that the positive x axis goes to octant 1
	/// rather than 8.
	pub fn classify(start: Point, end: Point) -> Self {
		let delta = start.delta(end);
		match Octant::ALL.into_iter().find(|o| o.contains(delta)) {
			Some(octant) => octant,
			// the predicates cover the whole plane between them
			None => unreachable!("no octant contains {start} -> {end}"),
		}
	}

	/// The octants sharing a boundary with this one, clockwise then
	/// counterclockwise.
	pub fn neighbors(self) -> (Octant, Octant) {
		let i = self.index() as usize - 1;
		(Octant::ALL[(i + 7) % 8], Octant::ALL[(i + 1) % 8])
	}

	/// Maps a point into octant 1's frame.
	pub const fn to_canonical(self, p: Point) -> Point {
		use Octant::*;
		let (x, y): (Coord, Coord) = (p.x, p.y);
		let (x, y) = match self {
			Octant1 => ( x,  y), Octant2 => ( y,  x),
			Octant3 => ( y, -x), Octant4 => (-x,  y),
			Octant5 => (-x, -y), Octant6 => (-y, -x),
			Octant7 => (-y,  x), Octant8 => ( x, -y),
		};
		Point { x, y }
	}

	/// Maps a point from octant 1's frame back into this octant.
	pub const fn from_canonical(self, p: Point) -> Point {
		use Octant::*;
		let (x, y): (Coord, Coord) = (p.x, p.y);
		let (x, y) = match self {
			Octant1 => ( x,  y), Octant2 => ( y,  x),
			Octant3 => (-y,  x), Octant4 => (-x,  y),
			Octant5 => (-x, -y), Octant6 => (-y, -x),
			Octant7 => ( y, -x), Octant8 => ( x, -y),
		};
		Point { x, y }
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use Octant::*;
	use proptest::prelude::*;

	fn pt(x: Coord, y: Coord) -> Point { Point::new(x, y) }

	#[test]
	fn classify_interiors() {
		let o = pt(0, 0);
		assert_eq!(Octant::classify(o, pt( 10,   5)), Octant1);
		assert_eq!(Octant::classify(o, pt(  5,  10)), Octant2);
		assert_eq!(Octant::classify(o, pt( -5,  10)), Octant3);
		assert_eq!(Octant::classify(o, pt(-10,   5)), Octant4);
		assert_eq!(Octant::classify(o, pt(-10,  -5)), Octant5);
		assert_eq!(Octant::classify(o, pt( -5, -10)), Octant6);
		assert_eq!(Octant::classify(o, pt(  5, -10)), Octant7);
		assert_eq!(Octant::classify(o, pt( 10,  -5)), Octant8);
	}

	#[test]
	fn classify_boundaries_picks_first_match() {
		let o = pt(0, 0);
		assert_eq!(Octant::classify(o, o), Octant1);
		assert_eq!(Octant::classify(o, pt( 10,   0)), Octant1);
		assert_eq!(Octant::classify(o, pt( 10,  10)), Octant1);
		assert_eq!(Octant::classify(o, pt(  0,  10)), Octant2);
		assert_eq!(Octant::classify(o, pt(-10,  10)), Octant3);
		assert_eq!(Octant::classify(o, pt(-10,   0)), Octant4);
		assert_eq!(Octant::classify(o, pt(-10, -10)), Octant5);
		assert_eq!(Octant::classify(o, pt(  0, -10)), Octant6);
		assert_eq!(Octant::classify(o, pt( 10, -10)), Octant7);
	}

	#[test]
	fn classify_is_relative_to_start() {
		assert_eq!(Octant::classify(pt(100, -40), pt(95, -50)), Octant6);
		assert_eq!(Octant::classify(pt(-3, 7), pt(9, 2)), Octant8);
	}

	#[test]
	fn degenerate_is_in_every_octant() {
		assert!(Octant::ALL.iter().all(|o| o.contains(pt(0, 0))));
	}

	#[test]
	fn neighbors_wrap() {
		assert_eq!(Octant1.neighbors(), (Octant8, Octant2));
		assert_eq!(Octant5.neighbors(), (Octant4, Octant6));
		assert_eq!(Octant8.neighbors(), (Octant7, Octant1));
	}

	#[test]
	fn index_roundtrip() {
		for o in Octant::ALL {
			assert_eq!(Octant::try_from(o.index()), Ok(o));
		}
		assert_eq!(Octant::try_from(0), Err(0));
		assert_eq!(Octant::try_from(9), Err(9));
		assert_eq!(Octant3.to_string(), "octant 3");
	}

	proptest! {
		#[test]
		fn every_delta_has_an_octant(x in -1000..=1000, y in -1000..=1000) {
			prop_assert!(Octant::ALL.iter().any(|o| o.contains(pt(x, y))));
		}

		#[test]
		fn transforms_invert(x in -1000..=1000, y in -1000..=1000) {
			let p = pt(x, y);
			for o in Octant::ALL {
				prop_assert_eq!(o.from_canonical(o.to_canonical(p)), p);
				prop_assert_eq!(o.to_canonical(o.from_canonical(p)), p);
			}
		}

		#[test]
		fn members_become_canonical(x in -1000..=1000, y in -1000..=1000) {
			let delta = pt(x, y);
			for o in Octant::ALL.into_iter().filter(|o| o.contains(delta)) {
				let d = pt(0, 0).delta(o.to_canonical(delta));
				prop_assert!(d.x >= 0 && d.y >= 0 && d.y <= d.x, "{o} maps {delta} to {d}");
			}
		}
	}
}
