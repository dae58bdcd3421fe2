#[cfg(not(target_arch = "wasm32"))]
use std::time::Instant;

/// Paces the line playback: how many points to reveal this frame.
///
/// `std::time::Instant` panics in WASM builds, so there it counts frames
/// instead of microseconds.
pub enum RevealTimer {
	/// Reveals a point every `interval` microseconds.
	#[cfg(not(target_arch = "wasm32"))]
	Micro { interval: u64, last: Option<Instant>, },

	/// Reveals a point every `interval` frames. Intervals under 1 reveal
	/// several points a frame.
	Frames { interval: f32, left: usize, },
}
impl Default for RevealTimer {
	#[cfg(not(target_arch = "wasm32"))]
	fn default() -> Self {
		RevealTimer::Micro { interval: 100_000, last: None, }
	}

	#[cfg(target_arch = "wasm32")]
	fn default() -> Self {
		RevealTimer::Frames { interval: 6.0, left: 0, }
	}
}
impl RevealTimer {
	/// Points due since the last call. The first call after a
	/// [`reset`](Self::reset) only starts the clock.
	pub fn tick(&mut self) -> usize {
		match self {
			#[cfg(not(target_arch = "wasm32"))]
			RevealTimer::Micro { interval, last } => {
				let now = Instant::now();
				let Some(since) = last.map(|l| now.duration_since(l)) else {
					*last = Some(now);
					return 0;
				};
				let due = (since.as_micros() / u128::from((*interval).max(1))) as usize;
				if due > 0 { *last = Some(now); }
				due
			},
			RevealTimer::Frames { interval, left } => {
				if *left > 0 {
					*left -= 1;
					0
				} else if *interval > 1.0 {
					*left = interval.round() as usize - 1;
					1
				} else {
					interval.recip().round() as usize
				}
			},
		}
	}

	pub fn reset(&mut self) {
		match self {
			#[cfg(not(target_arch = "wasm32"))]
			RevealTimer::Micro { last, .. } => *last = None,
			RevealTimer::Frames { left, .. } => *left = 0,
		}
	}
}
