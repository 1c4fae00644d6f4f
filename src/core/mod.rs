//! Core calculation and aggregation logic, free of any presentation concerns.

pub mod cache;
pub mod calculator;
pub mod currency;
pub mod dataset;
pub mod history;
pub mod log;
pub mod states;

// Re-export main types for cleaner imports
pub use calculator::{CostQuote, WeightUnit};
pub use currency::CurrencyRates;
pub use dataset::{DataStore, DatasetIssue};
pub use history::{BandCounts, PriceBand, PriceFilter, PriceSeries, SeriesSummary};
pub use states::{PurchaseTable, StatePurchase};
