use serde::{Deserialize, Serialize};

use crate::domain::{Card, Chips, SeatIndex, Stage};
use crate::engine::actions::Action;

/// Тип события в раздаче.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum HandEventKind {
    /// Новая раздача началась.
    HandStarted { button: SeatIndex },

    /// Блайнды выставлены (фактически уплаченные суммы).
    BlindsPosted {
        small_blind: (SeatIndex, Chips),
        big_blind: (SeatIndex, Chips),
    },

    /// Место получило карманные карты.
    HoleCardsDealt { seat: SeatIndex, cards: Vec<Card> },

    /// Открыты общие карты.
    BoardDealt { stage: Stage, cards: Vec<Card> },

    /// Действие игрока.
    PlayerActed {
        seat: SeatIndex,
        action: Action,
        /// Фишки, реально внесённые этим действием.
        paid: Chips,
        new_stack: Chips,
        pot_after: Chips,
    },

    /// Переход на новую стадию.
    StageChanged { stage: Stage },

    /// Шоудаун — вскрытие карт.
    ShowdownReveal {
        seat: SeatIndex,
        hole_cards: Vec<Card>,
        rank_value: u32,
    },

    /// Выплата из банка.
    PotAwarded {
        seat: SeatIndex,
        pot_index: usize,
        amount: Chips,
    },

    /// Раздача завершена.
    HandFinished,
}

/// Событие в раздаче с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct HandEvent {
    pub index: u32,
    pub kind: HandEventKind,
}

/// Полная история раздачи — структурированная запись всего, что
/// сделал движок. Заполняется заново в каждой раздаче.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct HandHistory {
    pub events: Vec<HandEvent>,
}

impl HandHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: HandEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(HandEvent { index: idx, kind });
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}
