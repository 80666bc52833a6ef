//! Field normalization and categorical regrouping for job-listing tables.
//!
//! [`clean::preprocess`] turns the raw Glassdoor-style columns (salary
//! ranges, founding year, size and revenue buckets, ownership, sector) into
//! numeric and one-hot columns, then drops the raw columns.

pub mod clean;
pub mod config;
pub mod data;
pub mod error;

pub use clean::{preprocess, Pipeline};
pub use config::CleaningConfig;
pub use data::model::{CellValue, Column, Table};
pub use error::{CleanError, Result};
