use thiserror::Error;

use crate::domain::{Chips, SeatIndex, Stage};
use crate::engine::actions::Action;

/// Ошибки движка.
///
/// Все ошибки fail-fast: движок не исправляет нелегальное действие за
/// игрока, а отклоняет его, не меняя состояние раздачи.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Нужно ровно 6 игроков, передано {0}")]
    WrongPlayerCount(usize),

    #[error("Операция невозможна на стадии {actual:?}, ожидалась {expected:?}")]
    WrongStage { expected: Stage, actual: Stage },

    #[error("Раздача не активна")]
    NoActiveHand,

    #[error("Сейчас не ход места {0}")]
    NotPlayersTurn(SeatIndex),

    #[error("Действие {0} сейчас недоступно")]
    IllegalAction(Action),

    #[error("Для действия {0} требуется сумма")]
    MissingAmount(Action),

    #[error("Минимальный размер для {action} — {minimum}")]
    AmountTooSmall { action: Action, minimum: Chips },

    #[error("Недостаточно фишек для этой ставки")]
    NotEnoughChips,

    #[error("Колода исчерпана")]
    DeckExhausted,

    #[error("Внутренняя ошибка: {0}")]
    Internal(&'static str),
}
