//! Text output for triplet lists.
//!
//! This module provides:
//! - **Debug rendering**: `[{row,col,value},...]` for logs and assertions
//! - **Tolerant comparison**: entry equality that treats NaN as equal to NaN
//!   and compares finite values with a relative epsilon

mod triplets;

pub use triplets::{
    TRIPLET_EPSILON, TripletDisplay, TripletList, format_triplets, triplet_eq, triplets_eq,
};
