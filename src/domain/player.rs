use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::SeatIndex;

/// Статус игрока в контексте текущей раздачи.
///
/// Намеренно три состояния, а не булев флаг: fold — "пропускать всегда",
/// all-in — "пропускать ход, но игрок претендует на банки".
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlayerStatus {
    /// Игрок активен и может действовать.
    Active,
    /// Игрок сфолдил и больше не участвует в банках.
    Folded,
    /// Игрок в оллыне — фишек не осталось, ставки делать не может.
    AllIn,
}

/// Состояние одного места за столом.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub seat: SeatIndex,
    /// Текущий стек. Переживает раздачи.
    pub stack: Chips,
    /// Карманные карты (2 во время раздачи, пусто между раздачами).
    pub hole_cards: Vec<Card>,
    pub status: PlayerStatus,
}

impl Player {
    pub fn new(name: String, seat: SeatIndex, stack: Chips) -> Self {
        Self {
            name,
            seat,
            stack,
            hole_cards: Vec::new(),
            status: PlayerStatus::Active,
        }
    }

    /// Участвует ли игрок в раздаче (не сфолдил).
    pub fn is_in_hand(&self) -> bool {
        matches!(self.status, PlayerStatus::Active | PlayerStatus::AllIn)
    }

    /// Сброс перед новой раздачей: карты убрать, статус обновить.
    pub fn reset_for_hand(&mut self) {
        self.hole_cards.clear();
        self.status = PlayerStatus::Active;
    }
}
