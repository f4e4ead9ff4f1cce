//! Внешний API движка.
//!
//! Снапшоты состояния (dto.rs) — то, что уходит клиенту: скрывают
//! чужие карманные карты и добавляют подсказки для текущего хода.

pub mod dto;

pub use dto::{GameView, PlayerView, PotView};
