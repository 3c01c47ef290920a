//! Business logic services

pub mod calculator;

pub use calculator::CalculatorService;
