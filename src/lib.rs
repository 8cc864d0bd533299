//! Descriptive statistics over city bikeshare trip tables.
//!
//! The pipeline is load ([`loader`]) → filter ([`filter`]) → aggregate
//! ([`analyzers`]) → render ([`output`]), with [`session`] driving it
//! interactively.

pub mod analyzers;
pub mod config;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod loader;
pub mod output;
pub mod services;
pub mod session;
pub mod time_utils;
pub mod viewer;
