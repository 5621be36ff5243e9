//! Four takes on the classic two-sum exercise, one module per approach.
//!
//! Every variant shares the same signature: given a vector of integers and a
//! target, return the two indices whose values add up to the target, or an
//! empty vector when no such pair exists.

pub mod brute_force;
pub mod complement;
pub mod hashmap;
pub mod two_pointer;
