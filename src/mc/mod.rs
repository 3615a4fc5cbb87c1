pub mod asian;
pub mod mc_engine;
pub mod payoffs;
