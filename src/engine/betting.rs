use serde::{Deserialize, Serialize};

use crate::domain::{Chips, SeatIndex, SEAT_COUNT};

/// Состояние раунда ставок на одной улице.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BettingState {
    /// Текущая целевая ставка, до которой должны дотянуться игроки (BB, bet, raise).
    pub current_bet: Chips,
    /// Минимальный размер повышающей части следующего рейза.
    pub min_raise: Chips,
    /// Место последнего агрессора (bet/raise) на этой улице.
    pub last_bettor: Option<SeatIndex>,
    /// Сколько каждое место внесло в банк на этой улице.
    pub contributions: [Chips; SEAT_COUNT],
}

impl BettingState {
    pub fn new(big_blind: Chips) -> Self {
        Self {
            current_bet: Chips::ZERO,
            min_raise: big_blind,
            last_bettor: None,
            contributions: [Chips::ZERO; SEAT_COUNT],
        }
    }

    pub fn contribution(&self, seat: SeatIndex) -> Chips {
        self.contributions[seat as usize]
    }

    /// Сколько фишек месту не хватает до текущей ставки.
    pub fn to_call(&self, seat: SeatIndex) -> Chips {
        self.current_bet.saturating_sub(self.contribution(seat))
    }

    /// Сброс леджера перед новой улицей. min_raise возвращается к BB.
    pub fn reset_for_street(&mut self, big_blind: Chips) {
        self.current_bet = Chips::ZERO;
        self.min_raise = big_blind;
        self.last_bettor = None;
        self.contributions = [Chips::ZERO; SEAT_COUNT];
    }

    /// Обновить состояние после состоявшегося bet/raise:
    /// новая целевая ставка, min_raise = размер повышения, агрессор.
    pub fn on_raise(&mut self, seat: SeatIndex, new_bet: Chips) {
        let raise_size = new_bet.saturating_sub(self.current_bet);
        self.current_bet = new_bet;
        self.min_raise = raise_size;
        self.last_bettor = Some(seat);
    }
}
