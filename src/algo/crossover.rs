/// Short/long EMA crossover classification over the last two points

use crate::core::{CrossSignal, ScanError, ScanResult};

/// Equality at the previous point counts as "at or below" (bullish side)
/// and "at or above" (bearish side). Equality at the current point is never a cross.
pub fn classify_cross(short_prev: f64, long_prev: f64, short_now: f64, long_now: f64) -> CrossSignal {
    if short_now > long_now && short_prev <= long_prev {
        CrossSignal::Bullish
    } else if short_now < long_now && short_prev >= long_prev {
        CrossSignal::Bearish
    } else {
        CrossSignal::NoCross
    }
}

pub fn detect_crossover(short: &[f64], long: &[f64]) -> ScanResult<CrossSignal> {
    let got = short.len().min(long.len());
    if got < 2 {
        return Err(ScanError::InsufficientData { needed: 2, got });
    }
    if short.len() != long.len() {
        return Err(ScanError::MalformedCandle(format!(
            "EMA series length mismatch: short {} vs long {}",
            short.len(),
            long.len()
        )));
    }

    let n = short.len();
    Ok(classify_cross(short[n - 2], long[n - 2], short[n - 1], long[n - 1]))
}
