//! Comment-quality (CQS) marketing dashboard.
//!
//! Loads a dashboard document from a mock, file or HTTP source, projects it
//! into a ranking, two donut charts and per-video trends, and serves the
//! result over a small REST API together with an embedded web frontend.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod projection;
pub mod source;
pub mod upload;
pub mod view;
