//! Client for the [Chapa](https://chapa.co) payment gateway REST API.
//!
//! - [gateway] (typed requests, responses and the [`ChapaGateway`] client)
//! - [config] (api key, base url and timeout, optionally from the environment)
//!
//! Every request is validated locally first, an invalid request never reaches the network.
//!
//! ```no_run
//! use chapa::{ChapaGateway, Currency, gateway::payment::PaymentRequest};
//! use rust_decimal::Decimal;
//!
//! # async fn run() -> chapa::Result<()> {
//! let gate = ChapaGateway::new("CHASECK_TEST-xxxx", std::time::Duration::from_secs(30))?;
//! let request = PaymentRequest::new("order-1001", Decimal::new(10000, 2), Currency::Etb);
//! let response = gate.payment_request(&request).await?;
//! if let Some(data) = response.data {
//!     println!("{}", data.checkout_url);
//! }
//! # Ok(())
//! # }
//! ```

/// Client configuration
pub mod config;
/// Gateway integration implementation
///
/// This module defines the types and methods to communicate with the Chapa API.
pub mod gateway;
mod serde_utils;

pub use config::{ChapaConfig, ConfigError};
pub use gateway::{ChapaError, ChapaGateway, ChapaResponse, Currency, Result};
