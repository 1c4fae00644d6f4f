//! Filtering and summary statistics over the historical price series.

use std::fmt::Display;

/// Lower band ceiling and upper band floor, in INR per kg.
const LOW_BAND_MAX: f64 = 20_000.0;
const HIGH_BAND_MIN: f64 = 30_000.0;

/// One of three non-overlapping price bands. Every price falls in exactly
/// one band; the same partition backs both the range filter and the
/// distribution histogram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceBand {
    Low,
    Mid,
    High,
}

impl PriceBand {
    pub fn contains(self, price: f64) -> bool {
        match self {
            PriceBand::Low => price <= LOW_BAND_MAX,
            PriceBand::Mid => price > LOW_BAND_MAX && price < HIGH_BAND_MIN,
            PriceBand::High => price >= HIGH_BAND_MIN,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PriceBand::Low => "<= 20k",
            PriceBand::Mid => "20k-30k",
            PriceBand::High => ">= 30k",
        }
    }
}

/// Range selector for the calculator's historical section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceFilter {
    #[default]
    All,
    Band(PriceBand),
}

impl PriceFilter {
    fn matches(self, price: f64) -> bool {
        match self {
            PriceFilter::All => true,
            PriceFilter::Band(band) => band.contains(price),
        }
    }
}

impl Display for PriceFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PriceFilter::All => write!(f, "All"),
            PriceFilter::Band(band) => write!(f, "{}", band.label()),
        }
    }
}

/// Summary statistics over a non-empty price series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesSummary {
    pub mean: f64,
    pub max: f64,
    pub min: f64,
    pub count: usize,
}

/// Record counts per price band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandCounts {
    pub low: usize,
    pub mid: usize,
    pub high: usize,
}

/// An ordered, immutable series of silver prices in INR per kg. The row
/// index is the time axis; transformations produce new series.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries {
    prices: Vec<f64>,
}

impl PriceSeries {
    pub fn new(prices: Vec<f64>) -> Self {
        Self { prices }
    }

    pub fn prices(&self) -> &[f64] {
        &self.prices
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    pub fn head(&self, n: usize) -> &[f64] {
        &self.prices[..self.prices.len().min(n)]
    }

    /// Rows whose price matches `filter`, in original order.
    pub fn filter(&self, filter: PriceFilter) -> PriceSeries {
        PriceSeries::new(
            self.prices
                .iter()
                .copied()
                .filter(|price| filter.matches(*price))
                .collect(),
        )
    }

    /// `None` when the series is empty; there is no meaningful mean or
    /// extremum to report.
    pub fn summary(&self) -> Option<SeriesSummary> {
        if self.prices.is_empty() {
            return None;
        }
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        for price in &self.prices {
            min = min.min(*price);
            max = max.max(*price);
            sum += price;
        }
        Some(SeriesSummary {
            mean: sum / self.prices.len() as f64,
            max,
            min,
            count: self.prices.len(),
        })
    }

    pub fn band_counts(&self) -> BandCounts {
        let count = |band: PriceBand| {
            self.prices
                .iter()
                .filter(|price| band.contains(**price))
                .count()
        };
        BandCounts {
            low: count(PriceBand::Low),
            mid: count(PriceBand::Mid),
            high: count(PriceBand::High),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PriceSeries {
        PriceSeries::new(vec![15_000.0, 25_000.0, 35_000.0])
    }

    #[test]
    fn test_filter_all_retains_everything() {
        let filtered = sample().filter(PriceFilter::All);
        assert_eq!(filtered.len(), 3);
        assert_eq!(filtered, sample());
    }

    #[test]
    fn test_filter_high_band() {
        let filtered = sample().filter(PriceFilter::Band(PriceBand::High));
        assert_eq!(filtered.prices(), &[35_000.0]);
    }

    #[test]
    fn test_filter_preserves_order() {
        let series = PriceSeries::new(vec![25_000.0, 21_000.0, 40_000.0, 29_000.0]);
        let filtered = series.filter(PriceFilter::Band(PriceBand::Mid));
        assert_eq!(filtered.prices(), &[25_000.0, 21_000.0, 29_000.0]);
    }

    #[test]
    fn test_bands_partition_the_number_line() {
        // Boundary values land in exactly one band.
        for price in [0.0, 19_999.9, 20_000.0, 20_000.1, 29_999.9, 30_000.0, 45_000.0] {
            let hits = [PriceBand::Low, PriceBand::Mid, PriceBand::High]
                .iter()
                .filter(|band| band.contains(price))
                .count();
            assert_eq!(hits, 1, "price {price} must fall in exactly one band");
        }
    }

    #[test]
    fn test_summary_statistics() {
        let series = PriceSeries::new(vec![10_000.0, 20_000.0, 30_000.0]);
        let summary = series.summary().unwrap();
        assert_eq!(summary.mean, 20_000.0);
        assert_eq!(summary.max, 30_000.0);
        assert_eq!(summary.min, 10_000.0);
        assert_eq!(summary.count, 3);
    }

    #[test]
    fn test_summary_of_empty_series_is_none() {
        assert!(PriceSeries::new(Vec::new()).summary().is_none());
    }

    #[test]
    fn test_band_counts() {
        let series = PriceSeries::new(vec![15_000.0, 20_000.0, 25_000.0, 30_000.0, 35_000.0]);
        let counts = series.band_counts();
        assert_eq!(counts.low, 2); // 15k and the inclusive 20k boundary
        assert_eq!(counts.mid, 1);
        assert_eq!(counts.high, 2); // 30k boundary belongs to the high band
    }

    #[test]
    fn test_head_is_clamped_to_length() {
        assert_eq!(sample().head(2).len(), 2);
        assert_eq!(sample().head(10).len(), 3);
    }
}
