use eframe::egui;

use bresenham::{Coord, Line, Octant, Point};

use crate::util;

use crate::display::{line_display, cell_at, GridContents};
use crate::timer::RevealTimer;

pub struct LineGui {
	dark_theme: bool,
	start: Point,
	end: Point,
	grid: GridSettings,
	reveal: Reveal,
}

struct GridSettings {
	cells: (usize, usize),
	size: egui::Vec2,
}

/// Plays a line back a point at a time.
struct Reveal {
	/// the points not shown yet
	pending: Line,
	line: Vec<Point>,
	shown: Vec<Point>,
	play: bool,
	timer: RevealTimer,
}
impl Reveal {
	fn new(start: Point, end: Point) -> Self {
		let pending = Line::new(start, end);
		Reveal {
			line: pending.clone().collect(),
			shown: Vec::with_capacity(pending.len()),
			pending,
			play: false,
			timer: RevealTimer::default(),
		}
	}

	/// Reveals up to `n` more points. Returns false once the line's done.
	fn advance(&mut self, n: usize) -> bool {
		self.shown.extend(self.pending.by_ref().take(n));
		self.pending.len() > 0
	}

	fn finish(&mut self) {
		self.shown.extend(self.pending.by_ref());
		self.play = false;
	}
}

impl Default for LineGui {
	fn default() -> Self {
		let (start, end) = (Point::new(3, 3), Point::new(15, 10));
		let mut reveal = Reveal::new(start, end);
		reveal.finish();

		LineGui {
			dark_theme: true,
			start,
			end,
			grid: GridSettings {
				cells: (24, 16),
				size: egui::vec2(20.0, 20.0),
			},
			reveal,
		}
	}
}

impl LineGui {
	pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
		let gui = LineGui::default();
		util::set_ui_theme(&cc.egui_ctx, gui.dark_theme);
		gui
	}

	/// Rebuilds the line after an endpoint moved.
	fn endpoints_changed(&mut self) {
		log::info!("line is now {} -> {}", self.start, self.end);
		self.reveal = Reveal::new(self.start, self.end);
		self.reveal.finish();
	}

	fn octant_text(&self) -> String {
		if self.start == self.end {
			return "a single point".to_owned();
		}

		let octant = Octant::classify(self.start, self.end);
		let delta = self.start.delta(self.end);
		let (cw, ccw) = octant.neighbors();
		match [cw, ccw].into_iter().find(|o| o.contains(delta)) {
			Some(other) => format!("{octant} (on the boundary with {other})"),
			None => octant.to_string(),
		}
	}
}

impl eframe::App for LineGui {
	fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
		if self.reveal.play {
			let due = self.reveal.timer.tick();
			if !self.reveal.advance(due) { self.reveal.play = false; }
			ctx.request_repaint();
		} else {
			self.reveal.timer.reset();
		}

		egui::TopBottomPanel::top("Title").show(ctx, |ui| {
			if frame.is_web() {
				ui.heading("Bresenham Line Plotter");
				ui.separator();
			}

			ui.horizontal(|ui| {
				let theme_str = if self.dark_theme { "Lite" } else { "Dark" };
				if ui.small_button(theme_str).clicked() {
					self.dark_theme = !self.dark_theme;
					util::set_ui_theme(ctx, self.dark_theme);
				}

				ui.separator();

				let max = (
					self.grid.cells.0.saturating_sub(1) as Coord,
					self.grid.cells.1.saturating_sub(1) as Coord,
				);
				let mut moved = false;
				for (label, p) in [("Start:", &mut self.start), ("End:", &mut self.end)] {
					ui.label(label);
					moved |= ui.add(egui::DragValue::new(&mut p.x).clamp_range(0..=max.0).speed(0.125)).changed();
					moved |= ui.add(egui::DragValue::new(&mut p.y).clamp_range(0..=max.1).speed(0.125)).changed();
				}
				if moved { self.endpoints_changed(); }

				ui.separator();

				ui.label(self.octant_text());
				ui.separator();
				ui.monospace(format!("{} points", self.reveal.line.len()));
			});

			ui.separator();

			ui.horizontal(|ui| {
				let reveal = &mut self.reveal;
				let done = reveal.pending.len() == 0;

				if ui.button("Reset")
				.on_hover_text("Hides every point so the line can be played back.")
				.clicked() {
					*reveal = Reveal::new(self.start, self.end);
				}

				ui.add_enabled_ui(!done, |ui| {
					if ui.add_enabled(!reveal.play, egui::Button::new("Step"))
					.on_hover_text("Reveals the next point.")
					.on_disabled_hover_text("The whole line is already showing.")
					.clicked() {
						reveal.advance(1);
					}

					let play_text = if reveal.play { "⏸" } else { "▶" };
					if ui.button(play_text)
					.on_hover_text("Play or pause the line.")
					.clicked() {
						reveal.play = !reveal.play;
					}

					if ui.button("Finish").clicked() {
						reveal.finish();
					}
				});

				match &mut reveal.timer {
					#[cfg(not(target_arch = "wasm32"))]
					RevealTimer::Micro { interval, .. } => {
						ui.add(
							egui::Slider::new(interval, 1_000..=2_000_000u64)
								.suffix(" μs")
								.logarithmic(true)
						).on_hover_text("Time between points while playing, in microseconds.");
					},
					RevealTimer::Frames { interval, .. } => {
						ui.add(
							egui::Slider::new(interval, 0.01f32..=60.0f32)
								.suffix(" fr")
								.logarithmic(true)
						).on_hover_text("Frames between points while playing.\nUnder 1 means several points a frame.");
					},
				}
			});
		});

		self.show_points(ctx);

		egui::CentralPanel::default().show(ctx, |ui| {
			ui.collapsing("Grid", |ui| {
				ui.horizontal(|ui| {
					let grid = &mut self.grid;
					ui.label("Cells:");
					ui.add(egui::DragValue::new(&mut grid.cells.0).clamp_range(2..=128).speed(0.125));
					ui.label("×");
					ui.add(egui::DragValue::new(&mut grid.cells.1).clamp_range(2..=128).speed(0.125));

					ui.separator();

					ui.label("Size:");
					ui.add(
						egui::DragValue::new(&mut grid.size.x)
							.max_decimals(0)
							.clamp_range(4..=64)
							.speed(0.125)
							.suffix("px")
					);
					grid.size.y = grid.size.x;
				});
				ui.label("Left click sets the start, right click sets the end.");
			});

			// keep both ends on the grid when it shrinks
			let corner = (self.grid.cells.0 as Coord - 1, self.grid.cells.1 as Coord - 1);
			let clamp = |p: Point| Point::new(p.x.min(corner.0), p.y.min(corner.1));
			if clamp(self.start) != self.start || clamp(self.end) != self.end {
				self.start = clamp(self.start);
				self.end = clamp(self.end);
				self.endpoints_changed();
			}

			ui.separator();

			let contents = GridContents {
				start: self.start,
				end: self.end,
				line: &self.reveal.line,
				shown: &self.reveal.shown,
			};
			let (cells, size) = (self.grid.cells, self.grid.size);

			let response = egui::ScrollArea::both()
				.show(ui, |ui| line_display(ui, &contents, cells, size))
				.inner;

			let clicked = match response.interact_pointer_pos() {
				Some(pos) if response.clicked() => Some((pos, true)),
				Some(pos) if response.secondary_clicked() => Some((pos, false)),
				_ => None,
			};
			if let Some((pos, is_start)) = clicked {
				let cell = cell_at(response.rect, size, cells, pos);
				if is_start { self.start = cell; } else { self.end = cell; }
				self.endpoints_changed();
			}
		});
	}
}

impl LineGui {
	fn show_points(&mut self, ctx: &egui::Context) {
		let Self { reveal, .. } = self;

		egui::Window::new("Points")
			.default_pos(egui::pos2(600.0, 120.0))
			.show(ctx,
		|ui| {
			ui.monospace(format!("{} of {}", reveal.shown.len(), reveal.line.len()));
			ui.separator();

			egui::ScrollArea::vertical()
				.max_height(320.0)
				.stick_to_bottom(true)
				.show(ui, |ui| {
					egui::Grid::new("PointList")
						.striped(true)
						.show(ui, |ui| {
							for (i, p) in reveal.shown.iter().enumerate() {
								ui.monospace(format!("{i:3}."));
								ui.monospace(p.to_string());
								ui.end_row();
							}
						});
				});
		});
	}
}
