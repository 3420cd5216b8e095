//! Array helpers - sorted-index searches and iteratee shorthands

/// Iteratee shorthands normalized into key functions
pub mod iteratee;

/// Binary searches for insertion points
pub mod sorted_index;

pub use iteratee::{Iteratee, PropertyPath};
pub use sorted_index::{
    sorted_index, sorted_index_by, sorted_index_by_iteratee, sorted_index_of, sorted_last_index,
    sorted_last_index_by, sorted_last_index_by_iteratee, sorted_last_index_of,
};
