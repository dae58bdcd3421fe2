use eframe::egui::{self, Color32, Rounding, Stroke, Visuals};
use eframe::egui::style::Selection;

const GRUVBOX_BG: [Color32; 4] = [
	Color32::from_rgb(0x28, 0x28, 0x28),
	Color32::from_rgb(0x32, 0x30, 0x2F),
	Color32::from_rgb(0x3C, 0x38, 0x36),
	Color32::from_rgb(0x50, 0x49, 0x45),
];
const GRUVBOX_FG: Color32 = Color32::from_rgb(0xFB, 0xF1, 0xC7);
const GRUVBOX_GREEN: Color32 = Color32::from_rgb(0x50, 0x6F, 0x51);

/// Dark is gruvbox-ish, light is a beige take on egui's own light theme.
/// The grid reads its colors from here too: `extreme_bg_color` for empty
/// cells, `faint_bg_color` for the unrevealed line, `selection` for the
/// revealed part.
pub fn set_ui_theme(ctx: &egui::Context, dark_theme: bool) {
	let visuals = if dark_theme {
		Visuals {
			window_rounding: Rounding::none(),
			panel_fill: GRUVBOX_BG[0],
			window_fill: GRUVBOX_BG[1],
			faint_bg_color: GRUVBOX_BG[3],
			extreme_bg_color: GRUVBOX_BG[2],
			selection: Selection {
				bg_fill: GRUVBOX_GREEN,
				stroke: Stroke::new(1.0, GRUVBOX_FG),
			},
			..Visuals::dark()
		}
	} else {
		Visuals {
			window_rounding: Rounding::none(),
			panel_fill: Color32::from_rgb(0xD8, 0xD0, 0xC8),
			window_fill: Color32::from_rgb(0xD8, 0xD0, 0xC8),
			faint_bg_color: Color32::from_rgb(0xC2, 0xAF, 0xA6),
			extreme_bg_color: Color32::from_rgb(0xFF, 0xFF, 0xE1),
			selection: Selection {
				bg_fill: Color32::from_rgb(0x78, 0x60, 0x58),
				stroke: Stroke::new(1.0, Color32::BLACK),
			},
			..Visuals::light()
		}
	};

	ctx.set_visuals(visuals);
}
