/// Exponential moving average over a closing-price series
/// Formula: EMA(0) = P(0), EMA(t) = EMA(t-1) + α·(P(t) - EMA(t-1)), α = 2 / (span + 1)

pub const DEFAULT_SHORT_SPAN: usize = 9;
pub const DEFAULT_LONG_SPAN: usize = 26;

pub fn smoothing_factor(span: usize) -> f64 {
    2.0 / (span as f64 + 1.0)
}

/// Seeded with the first price; one output value per input price.
pub fn exponential_moving_average(prices: &[f64], span: usize) -> Vec<f64> {
    let alpha = smoothing_factor(span);
    let mut ema = Vec::with_capacity(prices.len());

    let mut iter = prices.iter();
    let Some(&seed) = iter.next() else {
        return ema;
    };
    ema.push(seed);

    let mut prev = seed;
    for &price in iter {
        prev += alpha * (price - prev);
        ema.push(prev);
    }
    ema
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_smoothing_factor() {
        assert!((smoothing_factor(9) - 0.2).abs() < EPS);
        assert!((smoothing_factor(26) - 2.0 / 27.0).abs() < EPS);
        assert!((smoothing_factor(1) - 1.0).abs() < EPS);
    }

    #[test]
    fn test_length_and_seed() {
        let prices = [101.5, 99.0, 104.25, 103.0, 98.75];
        for span in [1, 9, 26] {
            let ema = exponential_moving_average(&prices, span);
            assert_eq!(ema.len(), prices.len());
            assert_eq!(ema[0], prices[0]);
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(exponential_moving_average(&[], 9).is_empty());
    }

    #[test]
    fn test_constant_series_stays_constant() {
        let prices = vec![42.0; 50];
        let ema = exponential_moving_average(&prices, 26);
        assert!(ema.iter().all(|v| (v - 42.0).abs() < EPS));
    }

    #[test]
    fn test_recurrence_values() {
        // α = 0.2 for span 9
        let ema = exponential_moving_average(&[10.0, 20.0, 20.0], 9);
        assert!((ema[1] - 12.0).abs() < EPS);
        assert!((ema[2] - 13.6).abs() < EPS);
    }

    #[test]
    fn test_span_one_tracks_price() {
        let prices = [3.0, 7.0, 1.0, 9.0];
        let ema = exponential_moving_average(&prices, 1);
        assert_eq!(ema, prices.to_vec());
    }

    #[test]
    fn test_causal() {
        // Appending a price never changes earlier values
        let base = [5.0, 6.0, 7.0, 6.5];
        let extended = [5.0, 6.0, 7.0, 6.5, 100.0];
        let a = exponential_moving_average(&base, 9);
        let b = exponential_moving_average(&extended, 9);
        assert_eq!(&b[..a.len()], a.as_slice());
    }
}
