use std::{fmt, str::FromStr};

use super::Coord;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
	pub x: Coord,
	pub y: Coord,
}
impl Point {
	pub const fn new(x: Coord, y: Coord) -> Self {
		Point { x, y }
	}

	/// Offset from `self` to `to`, i.e. `to - self`.
	pub const fn delta(self, to: Point) -> Point {
		Point { x: to.x - self.x, y: to.y - self.y }
	}
}

impl From<(Coord, Coord)> for Point {
	fn from((x, y): (Coord, Coord)) -> Self {
		Point { x, y }
	}
}
impl From<Point> for (Coord, Coord) {
	fn from(p: Point) -> Self {
		(p.x, p.y)
	}
}

impl fmt::Display for Point {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({},{})", self.x, self.y)
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParsePointError {
	MissingComma,
	InvalidCoord(String),
}
impl fmt::Display for ParsePointError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ParsePointError::MissingComma => write!(f, "expected a point like `x,y`"),
			ParsePointError::InvalidCoord(s) => write!(f, "`{s}` isn't an integer coordinate"),
		}
	}
}
impl std::error::Error for ParsePointError {}

/// Reads `x,y`, optionally wrapped in parentheses: `3,3`, `(10, -5)`.
impl FromStr for Point {
	type Err = ParsePointError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let s = s.trim();
		let s = s.strip_prefix('(')
			.and_then(|s| s.strip_suffix(')'))
			.unwrap_or(s);

		let (x, y) = s.split_once(',').ok_or(ParsePointError::MissingComma)?;

		let coord = |c: &str| {
			let c = c.trim();
			c.parse::<Coord>().map_err(|_| ParsePointError::InvalidCoord(c.to_owned()))
		};

		Ok(Point { x: coord(x)?, y: coord(y)? })
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parse_points() {
		assert_eq!("3,3".parse(), Ok(Point::new(3, 3)));
		assert_eq!(" (10, -5) ".parse(), Ok(Point::new(10, -5)));
		assert_eq!("-1 ,0".parse(), Ok(Point::new(-1, 0)));
	}

	#[test]
	fn parse_errors() {
		assert_eq!("10".parse::<Point>(), Err(ParsePointError::MissingComma));
		assert_eq!(
			"1,two".parse::<Point>(),
			Err(ParsePointError::InvalidCoord("two".to_owned()))
		);
		assert_eq!(
			"1,2,3".parse::<Point>(),
			Err(ParsePointError::InvalidCoord("2,3".to_owned()))
		);
	}

	#[test]
	fn display_and_tuples() {
		let p = Point::from((4, -2));
		assert_eq!(p.to_string(), "(4,-2)");
		assert_eq!(<(Coord, Coord)>::from(p), (4, -2));
		assert_eq!(Point::new(1, 1).delta(Point::new(-2, 5)), Point::new(-3, 4));
	}
}
