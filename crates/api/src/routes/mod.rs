//! Route handlers

pub mod insights;
pub mod predict;
