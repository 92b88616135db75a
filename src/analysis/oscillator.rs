use crate::config::ANALYSIS;
use crate::models::OscillatorSeries;

/// Relative-strength oscillator over `closes`, one value per close.
///
/// Gains and losses of the first differences are smoothed with a recursive
/// exponential average, `alpha = 1 / window` (centre of mass `window - 1`),
/// seeded with the first observation and never renormalised. The first close
/// has no predecessor and counts as an unchanged day.
///
/// `RSI = 100 - 100 / (1 + avg_gain / avg_loss)`; a zero average loss is replaced
/// by a tiny epsilon, so an all-gain run approaches 100 instead of dividing by zero.
pub fn relative_strength(closes: &[f64], window: usize) -> OscillatorSeries {
    let alpha = 1.0 / window.max(1) as f64;
    let epsilon = ANALYSIS.oscillator.epsilon;

    let mut avg_gain = 0.0;
    let mut avg_loss = 0.0;
    let mut values = Vec::with_capacity(closes.len());

    for (i, &close) in closes.iter().enumerate() {
        let change = if i == 0 { 0.0 } else { close - closes[i - 1] };
        let gain = if change > 0.0 { change } else { 0.0 };
        let loss = if change < 0.0 { -change } else { 0.0 };

        if i == 0 {
            avg_gain = gain;
            avg_loss = loss;
        } else {
            avg_gain = (1.0 - alpha) * avg_gain + alpha * gain;
            avg_loss = (1.0 - alpha) * avg_loss + alpha * loss;
        }

        let denominator = if avg_loss == 0.0 { epsilon } else { avg_loss };
        let ratio = avg_gain / denominator;
        let rsi = 100.0 - 100.0 / (1.0 + ratio);
        values.push(rsi.clamp(0.0, 100.0));
    }

    OscillatorSeries { window, values }
}
