use eframe::egui::{Ui, Vec2, Response, Sense, Rect, Pos2, Color32, Stroke};

use bresenham::{Coord, Point};

/// What to fill a grid with. `line` is the whole line, `shown` the part of
/// it that's been revealed so far.
pub struct GridContents<'a> {
	pub start: Point,
	pub end: Point,
	pub line: &'a [Point],
	pub shown: &'a [Point],
}

/// Draws a `cells.0 × cells.1` grid with cell (0, 0) at the bottom left,
/// y going up.
pub fn line_display(ui: &mut Ui, contents: &GridContents, cells: (usize, usize), cell_size: Vec2) -> Response {
	let cells_v = Vec2::new(cells.0 as f32, cells.1 as f32);

	let (rect, response) =
		ui.allocate_exact_size(cells_v * cell_size, Sense::click());

	if !ui.is_rect_visible(rect) {
		return response;
	}

	let visuals = ui.visuals();
	let painter = ui.painter();

	painter.rect_filled(rect, 0.0, visuals.extreme_bg_color);

	let fill = |p: Point, color: Color32| {
		if let Some(c_rect) = cell_rect(rect, cell_size, cells, p) {
			painter.rect_filled(c_rect.shrink(1.0), 0.0, color);
		}
	};

	for &p in contents.line { fill(p, visuals.faint_bg_color); }
	for &p in contents.shown { fill(p, visuals.selection.bg_fill); }

	let outline = Stroke::new(2.0, visuals.strong_text_color());
	for p in [contents.start, contents.end] {
		if let Some(c_rect) = cell_rect(rect, cell_size, cells, p) {
			painter.rect_stroke(c_rect.shrink(1.0), 0.0, outline);
		}
	}

	response
}

/// Screen rect of a cell, or `None` if it's off the grid.
fn cell_rect(grid: Rect, cell_size: Vec2, cells: (usize, usize), p: Point) -> Option<Rect> {
	let (x, y) = (usize::try_from(p.x).ok()?, usize::try_from(p.y).ok()?);
	if x >= cells.0 || y >= cells.1 { return None; }

	let tl = Pos2::new(
		grid.left() + cell_size.x * x as f32,
		grid.bottom() - cell_size.y * (y + 1) as f32,
	);
	Some(Rect::from_min_size(tl, cell_size))
}

/// The cell under `pos`, clamped onto the grid.
pub fn cell_at(grid: Rect, cell_size: Vec2, cells: (usize, usize), pos: Pos2) -> Point {
	let x = ((pos.x - grid.left()) / cell_size.x).floor();
	let y = ((grid.bottom() - pos.y) / cell_size.y).floor();

	let clamp = |v: f32, n: usize| v.clamp(0.0, n.saturating_sub(1) as f32) as Coord;
	Point::new(clamp(x, cells.0), clamp(y, cells.1))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn grid() -> Rect {
		Rect::from_min_size(Pos2::new(10.0, 20.0), Vec2::new(160.0, 80.0))
	}

	#[test]
	fn cells_count_up_from_the_bottom_left() {
		let size = Vec2::splat(16.0);
		assert_eq!(cell_at(grid(), size, (10, 5), Pos2::new(11.0, 99.0)), Point::new(0, 0));
		assert_eq!(cell_at(grid(), size, (10, 5), Pos2::new(169.0, 21.0)), Point::new(9, 4));
		assert_eq!(cell_at(grid(), size, (10, 5), Pos2::new(50.0, 70.0)), Point::new(2, 1));
	}

	#[test]
	fn clicks_off_the_grid_clamp() {
		let size = Vec2::splat(16.0);
		assert_eq!(cell_at(grid(), size, (10, 5), Pos2::new(-40.0, 400.0)), Point::new(0, 0));
		assert_eq!(cell_at(grid(), size, (10, 5), Pos2::new(900.0, -3.0)), Point::new(9, 4));
	}

	#[test]
	fn cell_rects_round_trip() {
		let size = Vec2::splat(16.0);
		let p = Point::new(3, 2);
		let r = cell_rect(grid(), size, (10, 5), p).unwrap();
		assert_eq!(cell_at(grid(), size, (10, 5), r.center()), p);
		assert!(cell_rect(grid(), size, (10, 5), Point::new(10, 0)).is_none());
		assert!(cell_rect(grid(), size, (10, 5), Point::new(0, -1)).is_none());
	}
}
