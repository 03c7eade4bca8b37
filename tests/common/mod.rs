//! Shared test utilities for the retina integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file. Nothing here touches the network except
//! [`fake_retina_api`], which binds a loopback port.

pub mod assertions;
pub mod builders;
pub mod fake_retina_api;
pub mod fixtures;
pub mod generators;
pub mod recording_transport;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
pub use generators::*;
pub use recording_transport::RecordingTransport;
