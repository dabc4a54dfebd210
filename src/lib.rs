pub mod config;
pub mod error;
pub mod evaluator;
pub mod generator;
pub mod history;
pub mod player;
pub mod rng;
pub mod session;
pub mod types;
// cmd and reports belong to the binary crate (main.rs).
