use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::SeatIndex;

/// Стадия раздачи.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Stage {
    Preflop,
    Flop,
    Turn,
    River,
    Showdown,
}

impl Stage {
    /// Следующая стадия по порядку (Showdown — терминальная).
    pub fn next(self) -> Stage {
        match self {
            Stage::Preflop => Stage::Flop,
            Stage::Flop => Stage::Turn,
            Stage::Turn => Stage::River,
            Stage::River | Stage::Showdown => Stage::Showdown,
        }
    }
}

/// Ранг руки в упакованном виде. Заполняется модулем eval;
/// сравнение по u32 эквивалентно лексикографическому сравнению
/// (категория, старшие значения, кикеры).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct HandRank(pub u32);

/// Итог одного места в завершённой раздаче.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeatResult {
    pub seat: SeatIndex,
    /// Ранг руки, если место дошло до шоудауна.
    pub rank: Option<HandRank>,
    /// Сколько фишек выплачено этому месту из банков.
    pub winnings: Chips,
    /// Выиграло ли место хотя бы один банк (включая сплит).
    pub is_winner: bool,
}

/// Краткое описание завершённой раздачи.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandSummary {
    pub stage_reached: Stage,
    pub board: Vec<Card>,
    pub total_pot: Chips,
    pub results: Vec<SeatResult>,
}
