//! Core computations for livingcost.
//!
//! This crate contains pure logic with ZERO file, network or UI dependencies.
//! Every operation is a synchronous transform over in-memory data.
//!
//! # Modules
//!
//! - `data` - Location records, categories, and the lookup index
//! - `currency` - Exchange rates, conversion, and proportional allocation
//! - `color` - Choropleth color scales and heatmap legends
//! - `budget` - Budget session editing under a total-budget constraint
//! - `compare` - Purchasing power scores and comparison tables

pub mod budget;
pub mod color;
pub mod compare;
pub mod currency;
pub mod data;
