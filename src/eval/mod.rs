//! Evaluation module for Othello positions
//!
//! Scoring is purely material: the share of discs held by Black.
//! Higher is better for Black, lower is better for White; both search
//! directions use this one scale.

pub mod material;

pub use material::{counts, evaluate, utility, DiscCount};
