//! Field validation
//!
//! Every bounded-width setter routes its value through [`check_length`];
//! it is the only input-validation boundary of the entity model.

pub mod length;

pub use length::{check_length, check_required};
