//! Domain layer for dish cost and emissions estimation
//!
//! - `model`: dish records, reference tables, and derived results
//! - `service`: price resolution, estimation, flagging, summaries, reports
//! - `repository`: traits implemented by the infrastructure layer

pub mod model;
pub mod repository;
pub mod service;
