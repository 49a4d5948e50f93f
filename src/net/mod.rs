//! HTTP access to the statistics API.

pub mod stats;
