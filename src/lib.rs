//! Local search for the Maximum Stable Set (and Maximum Clique) problem

// #![warn(clippy::all, clippy::pedantic)]
// useful additional warnings if docs are missing, or crates imported but unused, etc.
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]
#![warn(variant_size_differences)]

// not sure if already by default in clippy
#![warn(clippy::similar_names)]
#![warn(clippy::shadow_unrelated)]
#![warn(clippy::shadow_same)]
#![warn(clippy::shadow_reuse)]


/// graph instance, solution checker
pub mod graph;

/// read DIMACS formats
pub mod dimacs;

/// error type of the instance readers & exports
pub mod error;

/// search parameters
pub mod config;

/// improvement notifications and search outcomes
pub mod report;

/// helper and utility methods for executables
pub mod util;

/// search procedures for the maximum stable set problem
pub mod search;
