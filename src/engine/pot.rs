use serde::{Deserialize, Serialize};

use crate::domain::{Chips, Player, PlayerStatus, SeatIndex, SEAT_COUNT};

/// Один банк: сумма, претенденты и порог вклада, на котором банк "закрыт".
///
/// required_amount = 0 — банк открыт (главный банк до первого сплита
/// или верхний слой над самым большим оллыном).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pot {
    pub amount: Chips,
    /// Места, претендующие на долю этого банка.
    pub eligible_seats: Vec<SeatIndex>,
    /// Порог суммарного вклада, закрывающий банк.
    pub required_amount: Chips,
}

impl Pot {
    pub fn new() -> Self {
        Self {
            amount: Chips::ZERO,
            eligible_seats: Vec::new(),
            required_amount: Chips::ZERO,
        }
    }

    fn add(&mut self, amount: Chips, seat: SeatIndex) {
        self.amount += amount;
        if !self.eligible_seats.contains(&seat) {
            self.eligible_seats.push(seat);
        }
    }
}

impl Default for Pot {
    fn default() -> Self {
        Self::new()
    }
}

/// Леджер банков раздачи. Главный банк всегда первый.
///
/// Инвариант: сумма amount всех банков равна сумме всех вкладов раздачи;
/// каждая внесённая фишка учтена ровно в одном банке.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PotLedger {
    pub pots: Vec<Pot>,
}

impl PotLedger {
    pub fn new() -> Self {
        Self {
            pots: vec![Pot::new()],
        }
    }

    pub fn total(&self) -> Chips {
        self.pots
            .iter()
            .fold(Chips::ZERO, |acc, p| acc + p.amount)
    }

    /// Зачислить фишки в банк. Только побочный эффект, без валидации —
    /// легальность суммы гарантирует вызывающий код.
    pub fn add_chips(&mut self, pot_idx: usize, amount: Chips, seat: SeatIndex) {
        if let Some(pot) = self.pots.get_mut(pot_idx) {
            pot.add(amount, seat);
        }
    }

    /// Разложить оллын-вклад по существующим слоям банков:
    /// сначала добираем закрытые банки до их порогов, остаток — в главный.
    ///
    /// `prior_total` — суммарный вклад места до этого действия.
    pub fn route_all_in(&mut self, seat: SeatIndex, amount: Chips, prior_total: Chips) {
        let mut remaining = amount;
        let mut total = prior_total;

        let main_required = self.pots[0].required_amount;
        if main_required > Chips::ZERO {
            let take = remaining.min(main_required.saturating_sub(total));
            if take > Chips::ZERO {
                self.pots[0].add(take, seat);
                remaining -= take;
                total += take;
            }
        }

        for pot in self.pots.iter_mut().skip(1) {
            if remaining.is_zero() {
                break;
            }
            if pot.required_amount > total {
                let take = remaining.min(pot.required_amount - total);
                if take > Chips::ZERO {
                    pot.add(take, seat);
                    remaining -= take;
                    total += take;
                }
            }
        }

        if remaining > Chips::ZERO {
            // Остаток сверх всех порогов уходит в открытый слой.
            let open_idx = self
                .pots
                .iter()
                .rposition(|p| p.required_amount.is_zero())
                .unwrap_or(0);
            self.pots[open_idx].add(remaining, seat);
        }
    }

    /// Идемпотентная пересборка слоёв по суммарным вкладам раздачи.
    ///
    /// Уровни — различные вклады оллын-игроков по возрастанию, плюс
    /// открытый верхний слой, если живые стеки внесли больше самого
    /// крупного оллына. Слой k собирает с КАЖДОГО места (включая
    /// сфолдивших — их фишки остаются мёртвыми деньгами) часть вклада
    /// между порогом предыдущего слоя и своим. Претендует на слой
    /// только не сфолдившее место, добравшее до его порога.
    pub fn rebuild_layers(&mut self, contributions: &[Chips; SEAT_COUNT], players: &[Player]) {
        let mut levels: Vec<Chips> = players
            .iter()
            .filter(|p| p.status == PlayerStatus::AllIn)
            .map(|p| contributions[p.seat as usize])
            .filter(|c| !c.is_zero())
            .collect();
        levels.sort_unstable();
        levels.dedup();

        if levels.is_empty() {
            return;
        }

        // Открытый верхний слой для вкладов выше самого крупного оллына.
        let max_contribution = contributions
            .iter()
            .copied()
            .max()
            .unwrap_or(Chips::ZERO);
        let top_level = levels.last().copied().unwrap_or(Chips::ZERO);
        let top_is_open = max_contribution > top_level;
        if top_is_open {
            levels.push(max_contribution);
        }

        let mut pots = Vec::with_capacity(levels.len());
        let mut prev_level = Chips::ZERO;

        for (i, &level) in levels.iter().enumerate() {
            let mut pot = Pot::new();
            let open = top_is_open && i == levels.len() - 1;
            pot.required_amount = if open { Chips::ZERO } else { level };

            for seat in 0..SEAT_COUNT {
                let contribution = contributions[seat].min(level);
                if contribution > prev_level {
                    pot.amount += contribution - prev_level;
                }
                if players[seat].is_in_hand() && contributions[seat] >= level {
                    pot.eligible_seats.push(seat as SeatIndex);
                }
            }

            if !pot.amount.is_zero() {
                pots.push(pot);
            }
            prev_level = level;
        }

        if pots.is_empty() {
            pots.push(Pot::new());
        }
        self.pots = pots;
    }

    /// Есть ли хотя бы один сайд-пот.
    pub fn has_side_pots(&self) -> bool {
        self.pots.len() > 1
    }
}

impl Default for PotLedger {
    fn default() -> Self {
        Self::new()
    }
}
