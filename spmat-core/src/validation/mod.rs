//! Validation utilities
//!
//! This module contains pure validation and field parsing functions with
//! no I/O dependencies.

pub mod bounds;
pub mod parsing;

pub use bounds::{validate_index, validate_product_shape, validate_same_shape};
pub use parsing::{parse_index, parse_value, split_key_value};
