//! Remote Prediction Client
//!
//! Posts transactions to the prediction service and substitutes a locally
//! computed result in the same wire shape whenever the remote call fails.

mod client;
mod wire;

pub use client::{ClientConfig, ClientError, PredictionClient};
pub use wire::{PredictRequest, PredictResponse, PredictionPayload};
