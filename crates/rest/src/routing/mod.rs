//! Route configuration for the Campus REST API.
//!
//! This module contains the routing configuration that maps HTTP paths
//! to handlers.

pub mod campus_routes;

pub use campus_routes::create_routes;
