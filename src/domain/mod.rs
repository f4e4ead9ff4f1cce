//! Доменная модель: карты, колода, фишки, игроки, стадии раздачи.

pub mod card;
pub mod chips;
pub mod deck;
pub mod hand;
pub mod player;

/// Число мест за столом. Движок рассчитан ровно на шесть игроков.
pub const SEAT_COUNT: usize = 6;

/// Индекс места за столом (0..SEAT_COUNT-1).
pub type SeatIndex = u8;

/// Идентификатор игры в реестре.
pub type GameId = u64;

pub use card::*;
pub use chips::*;
pub use deck::*;
pub use hand::*;
pub use player::*;
