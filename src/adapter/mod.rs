//! Implementations of ports (hexagonal adapters).
//!
//! - [`inbound`] - Driving side: the command-line interface
//! - [`outbound`] - Driven side: HTTP data sources and key-value storage

pub mod inbound;
pub mod outbound;
