/// Indicator math and cross classification

pub mod ema;
pub mod crossover;

pub use ema::{exponential_moving_average, smoothing_factor, DEFAULT_LONG_SPAN, DEFAULT_SHORT_SPAN};
pub use crossover::{classify_cross, detect_crossover};
