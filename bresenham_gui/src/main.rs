// #![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use bresenham_gui::LineGui;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
	if let Err(e) = simple_logger::SimpleLogger::new()
		.with_level(log::LevelFilter::Info)
		.env()
		.init() {
		eprintln!("couldn't start logging: {e}");
	}

	let name = "Bresenham Line Plotter";
	let options = eframe::NativeOptions {
		initial_window_size: Some(eframe::egui::vec2(720.0, 540.0)),
		..Default::default()
	};
	eframe::run_native(name, options, Box::new(|cc| Box::new(LineGui::new(cc))))
}

// the web build starts through `bresenham_gui::start` instead
#[cfg(target_arch = "wasm32")]
fn main() {}
