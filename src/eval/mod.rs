//! Evaluation module for Rabbit and Wolves positions
//!
//! The only thing that matters to the evaluation is how far the rabbit
//! still has to travel.

pub mod heuristic;

pub use heuristic::evaluate;
