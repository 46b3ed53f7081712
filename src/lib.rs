//! Zenkipay Gateway - signed payment notification intake
//!
//! Verifies Svix-style signed webhook deliveries from Zenkipay and reconciles
//! completed payments against store orders.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
