//! Subject normalization and log masking utilities

pub mod email;
pub mod phone;
