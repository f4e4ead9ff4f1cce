//! Инфраструктурный слой вокруг движка:
//! - RNG-реализации для раздачи карт.

pub mod rng;

pub use rng::{DeterministicRng, SystemRng};
