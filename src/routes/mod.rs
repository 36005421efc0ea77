//! Routes Module
//!
//! Router assembly: endpoint wiring, per-route method guards, and the
//! permissive CORS layer.

/// Router creation
pub mod router;

pub use router::create_router;
