mod gui;
mod display;
mod timer;
mod util;
pub use gui::LineGui;

#[cfg(target_arch = "wasm32")]
use eframe::wasm_bindgen::{self, prelude::*};

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub async fn start(canvas_id: String) -> Result<(), wasm_bindgen::JsValue> {
	eframe::WebRunner::new()
		.start(
			&canvas_id,
			eframe::WebOptions::default(),
			Box::new(|cc| Box::new(LineGui::new(cc))),
		)
		.await
}
