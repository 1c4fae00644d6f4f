//! Currency conversion over a fixed rate table.
//!
//! Rates are compile-time constants relative to INR, not live quotes. The
//! staleness is a deliberate simplification; there is no fetching layer.

use anyhow::{Result, anyhow};

/// Conversion multipliers from INR to each supported currency.
const RATES: [(&str, f64); 4] = [
    ("INR", 1.0),
    ("USD", 0.012),
    ("EUR", 0.011),
    ("GBP", 0.0095),
];

/// Static INR-based rate table.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrencyRates;

impl CurrencyRates {
    /// Multiplier from INR to `code`. Unknown codes are an error; the CLI
    /// exposes a closed set, so hitting this from the binary is a bug.
    pub fn rate(&self, code: &str) -> Result<f64> {
        RATES
            .iter()
            .find(|(known, _)| *known == code)
            .map(|(_, rate)| *rate)
            .ok_or_else(|| anyhow!("Unknown currency: {code}"))
    }

    pub fn convert(&self, amount_inr: f64, code: &str) -> Result<f64> {
        Ok(amount_inr * self.rate(code)?)
    }

    pub fn supported(&self) -> impl Iterator<Item = &'static str> {
        RATES.iter().map(|(code, _)| *code)
    }
}
