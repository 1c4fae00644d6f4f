pub mod analysis;
pub mod calculator;
pub mod dashboard;
pub mod setup;
pub mod ui;
