//! SOS trigger controller for TRACE.
//!
//! This crate owns the press-and-hold emergency dispatch flow: a sustained
//! press arms a three-second cancellable countdown, and a completed
//! countdown issues exactly one dispatch to the SOS relay. It defines:
//!
//! - [`SosController`] - The state machine driving `Idle → Arming →
//!   Dispatching → Sent | Failed`
//! - [`SosDispatcher`] - The trait the relay client implements
//! - [`SosRequest`] / [`SosReceipt`] - The dispatch payload and its result
//! - [`SosSnapshot`] - Observable state for a UI layer
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use sos_controller::{
//!     async_trait, DispatchError, SosConfig, SosController, SosDispatcher, SosReceipt,
//!     SosRequest,
//! };
//! use location::FixedLocationProvider;
//!
//! struct NoopDispatcher;
//!
//! #[async_trait]
//! impl SosDispatcher for NoopDispatcher {
//!     async fn dispatch(&self, _request: SosRequest) -> Result<SosReceipt, DispatchError> {
//!         Ok(SosReceipt::default())
//!     }
//! }
//!
//! # async fn example() {
//! let controller = SosController::new(SosConfig::default(), Arc::new(NoopDispatcher));
//! let provider = FixedLocationProvider::new(19.0760, 72.8777, "Mumbai, India");
//! controller.activate(&provider).await;
//!
//! controller.press_start();
//! // ...three seconds later the dispatch fires, unless press_release()
//! // cancels the countdown first.
//! # }
//! ```

mod config;
mod controller;
mod dispatch;
mod state;

pub use config::{SosConfig, DEFAULT_EMERGENCY_CONTACT};
pub use controller::SosController;
pub use dispatch::{DispatchError, SosDispatcher, SosReceipt, SosRequest};
pub use state::{FailureReason, SosPhase, SosSnapshot};

// Re-export async_trait for convenience
pub use async_trait::async_trait;
