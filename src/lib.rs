//! # DBD Tracker
//!
//! Statistics and insights over a survivor's Dead by Daylight match history.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (match records, killers, stages, ratings, stats)
//! - **calculate**: Aggregation, trend, consistency and memo analysis
//! - **report**: Ordered, deterministic insight lines built from the analysis
//! - **storage**: Read-only JSONL loading of exported match records
//! - **config**: Configuration loading and validation
//!
//! Every analysis is a pure function of the record list and the options:
//! nothing is cached between calls and the input is never modified.

pub mod calculate;
pub mod config;
pub mod models;
pub mod report;
pub mod storage;

pub use models::*;
pub use report::{analyze, analyze_raw, AnalysisError, Report};
