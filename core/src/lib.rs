//! MARQ Core Types
//!
//! This crate provides the foundational types used throughout the MARQ system:
//! - Identity types (ItemId, FolderId)
//! - Microsummary reference and selection types
//! - Service traits for the host collaborators (bookmark reading, history
//!   titles, livemark membership, microsummary status, URI side-channel)

mod id;
mod microsummary;
mod services;

pub use id::*;
pub use microsummary::*;
pub use services::*;
