use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{
    Card, Chips, Deck, HandSummary, Player, PlayerStatus, SeatIndex, SeatResult, Stage,
    SEAT_COUNT,
};
use crate::engine::actions::Action;
use crate::engine::betting::BettingState;
use crate::engine::errors::EngineError;
use crate::engine::hand_history::{HandEventKind, HandHistory};
use crate::engine::positions::{
    big_blind_seat, first_to_act, next_active_seat, seat_after, small_blind_seat,
};
use crate::engine::pot::PotLedger;
use crate::engine::validation::{available_actions, validate_action};
use crate::engine::RandomSource;
use crate::eval::determine_winners;

/// Конфигурация игры: стартовый стек и блайнды.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameConfig {
    pub starting_stack: Chips,
    pub small_blind: Chips,
    pub big_blind: Chips,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_stack: Chips(1000),
            small_blind: Chips(10),
            big_blind: Chips(20),
        }
    }
}

/// Статус раздачи для внешнего кода.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HandStatus {
    Ongoing,
    Finished(HandSummary),
}

/// Состояние одной игры на шесть мест.
///
/// Все операции синхронны: один вызов — один переход состояния.
/// Параллельный доступ к одной игре — забота внешнего слоя
/// (см. `GameRegistry`).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Game {
    pub config: GameConfig,
    pub players: Vec<Player>,
    pub deck: Deck,
    pub board: Vec<Card>,
    pub stage: Stage,
    /// Кнопка дилера. None до первой раздачи.
    pub button: Option<SeatIndex>,
    /// Чей сейчас ход.
    pub current_actor: SeatIndex,
    pub betting: BettingState,
    pub pots: PotLedger,
    /// Суммарные вклады мест за раздачу — источник истины для слоёв банков.
    pub hand_contributions: [Chips; SEAT_COUNT],
    pub hand_in_progress: bool,
    pub history: HandHistory,
}

impl Game {
    /// Создать игру. Требуется ровно шесть имён.
    pub fn new(names: Vec<String>, config: GameConfig) -> Result<Self, EngineError> {
        if names.len() != SEAT_COUNT {
            return Err(EngineError::WrongPlayerCount(names.len()));
        }

        let players = names
            .into_iter()
            .enumerate()
            .map(|(seat, name)| Player::new(name, seat as SeatIndex, config.starting_stack))
            .collect();

        Ok(Self {
            config,
            players,
            deck: Deck::standard_52(),
            board: Vec::new(),
            stage: Stage::Preflop,
            button: None,
            current_actor: 0,
            betting: BettingState::new(Chips::ZERO),
            pots: PotLedger::new(),
            hand_contributions: [Chips::ZERO; SEAT_COUNT],
            hand_in_progress: false,
            history: HandHistory::new(),
        })
    }

    /// Суммарный банк раздачи.
    pub fn total_pot(&self) -> Chips {
        self.pots.total()
    }

    /// Места, не сбросившие карты.
    pub fn non_folded_count(&self) -> usize {
        self.players.iter().filter(|p| p.is_in_hand()).count()
    }

    /// Легальные действия текущего игрока.
    pub fn available_actions(&self) -> Vec<Action> {
        available_actions(&self.players[self.current_actor as usize], &self.betting)
    }

    /// Сколько фишек текущему игроку стоит call (срезано по стеку).
    pub fn call_amount(&self) -> Chips {
        let player = &self.players[self.current_actor as usize];
        self.betting.to_call(player.seat).min(player.stack)
    }

    /// Начать новую раздачу: пересоздать колоду, сдвинуть кнопку,
    /// раздать карманные карты, выставить блайнды, назначить первого
    /// ходящего. Стеки переносятся из прошлой раздачи.
    pub fn start_new_hand<R: RandomSource>(&mut self, rng: &mut R) -> Result<(), EngineError> {
        let mut deck = Deck::standard_52();
        rng.shuffle(&mut deck.cards);
        self.deck = deck;

        self.board.clear();
        self.pots = PotLedger::new();
        self.betting = BettingState::new(self.config.big_blind);
        self.hand_contributions = [Chips::ZERO; SEAT_COUNT];
        self.stage = Stage::Preflop;
        self.history.clear();

        for player in self.players.iter_mut() {
            player.reset_for_hand();
        }

        let button = match self.button {
            Some(b) => seat_after(b, 1),
            None => 0,
        };
        self.button = Some(button);
        self.history.push(HandEventKind::HandStarted { button });

        self.deal_hole_cards(button)?;
        self.post_blinds(button);

        self.current_actor = seat_after(button, 3);
        self.hand_in_progress = true;

        Ok(())
    }

    /// Раздать по две карманные карты, по кругу начиная слева от кнопки.
    fn deal_hole_cards(&mut self, button: SeatIndex) -> Result<(), EngineError> {
        for _round in 0..2 {
            for i in 0..SEAT_COUNT {
                let seat = seat_after(button, i as u8 + 1);
                let card = self.deck.draw_one().ok_or(EngineError::DeckExhausted)?;
                self.players[seat as usize].hole_cards.push(card);
            }
        }

        for i in 0..SEAT_COUNT {
            let seat = seat_after(button, i as u8 + 1);
            self.history.push(HandEventKind::HoleCardsDealt {
                seat,
                cards: self.players[seat as usize].hole_cards.clone(),
            });
        }

        Ok(())
    }

    /// Выставить блайнды. Короткий стек постит сколько может и уходит
    /// в all-in; если BB короче SB — немедленный сплит банка.
    fn post_blinds(&mut self, button: SeatIndex) {
        let sb_seat = small_blind_seat(button);
        let bb_seat = big_blind_seat(button);

        let sb_paid = self.post_blind(sb_seat, self.config.small_blind);
        let bb_paid = self.post_blind(bb_seat, self.config.big_blind);

        if bb_paid < sb_paid {
            self.pots
                .rebuild_layers(&self.hand_contributions, &self.players);
        }

        self.betting.current_bet = sb_paid.max(bb_paid);
        self.betting.min_raise = self.config.big_blind;
        self.betting.last_bettor = None;

        self.history.push(HandEventKind::BlindsPosted {
            small_blind: (sb_seat, sb_paid),
            big_blind: (bb_seat, bb_paid),
        });
    }

    fn post_blind(&mut self, seat: SeatIndex, blind: Chips) -> Chips {
        let player = &mut self.players[seat as usize];
        let paid = blind.min(player.stack);
        player.stack -= paid;
        if player.stack.is_zero() {
            player.status = PlayerStatus::AllIn;
        }

        self.pots.add_chips(0, paid, seat);
        self.betting.contributions[seat as usize] += paid;
        self.hand_contributions[seat as usize] += paid;
        paid
    }

    /// Применить действие текущего игрока.
    ///
    /// Возвращает true, если раунд ставок после действия завершён.
    /// Любая ошибка — до мутаций: состояние не меняется.
    pub fn apply_action(
        &mut self,
        action: Action,
        amount: Option<Chips>,
    ) -> Result<bool, EngineError> {
        if !self.hand_in_progress {
            return Err(EngineError::NoActiveHand);
        }

        let seat = self.current_actor;
        validate_action(
            &self.players[seat as usize],
            action,
            amount,
            &self.betting,
            self.config.big_blind,
        )?;

        let paid = match action {
            Action::Fold => {
                self.players[seat as usize].status = PlayerStatus::Folded;
                Chips::ZERO
            }
            Action::Check => Chips::ZERO,
            Action::Call => self.apply_call(seat),
            Action::Bet | Action::Raise => {
                // Валидация уже гарантировала наличие суммы.
                let amount = amount.ok_or(EngineError::MissingAmount(action))?;
                self.apply_bet_or_raise(seat, amount)
            }
        };

        self.history.push(HandEventKind::PlayerActed {
            seat,
            action,
            paid,
            new_stack: self.players[seat as usize].stack,
            pot_after: self.pots.total(),
        });

        self.current_actor = next_active_seat(&self.players, seat);
        Ok(self.is_round_complete())
    }

    /// Применить действие от имени конкретного места.
    ///
    /// То же, что `apply_action`, но с проверкой очереди хода —
    /// вход для внешнего слоя, где действия приходят по местам.
    pub fn apply_action_for(
        &mut self,
        seat: SeatIndex,
        action: Action,
        amount: Option<Chips>,
    ) -> Result<bool, EngineError> {
        if !self.hand_in_progress {
            return Err(EngineError::NoActiveHand);
        }
        if seat != self.current_actor {
            return Err(EngineError::NotPlayersTurn(seat));
        }
        self.apply_action(action, amount)
    }

    /// Call: добрать до текущей ставки, не больше стека.
    fn apply_call(&mut self, seat: SeatIndex) -> Chips {
        let to_call = self.betting.to_call(seat);
        let stack = self.players[seat as usize].stack;

        if to_call >= stack {
            // All-in call: раскладываем по слоям, при недоборе — пересплит.
            let paid = stack;
            let prior_total = self.hand_contributions[seat as usize];
            self.players[seat as usize].stack = Chips::ZERO;
            self.players[seat as usize].status = PlayerStatus::AllIn;

            self.pots.route_all_in(seat, paid, prior_total);
            self.betting.contributions[seat as usize] += paid;
            self.hand_contributions[seat as usize] += paid;

            if self.betting.contribution(seat) < self.betting.current_bet {
                self.pots
                    .rebuild_layers(&self.hand_contributions, &self.players);
            }
            paid
        } else {
            self.players[seat as usize].stack -= to_call;
            self.pots.add_chips(0, to_call, seat);
            self.betting.contributions[seat as usize] += to_call;
            self.hand_contributions[seat as usize] += to_call;
            to_call
        }
    }

    /// Bet/Raise до суммарной ставки `amount` на этой улице.
    /// Запрошенная сумма выше стека срезается — вынужденный all-in.
    fn apply_bet_or_raise(&mut self, seat: SeatIndex, amount: Chips) -> Chips {
        let street_contribution = self.betting.contribution(seat);
        let stack = self.players[seat as usize].stack;
        let to_add = amount.saturating_sub(street_contribution);

        if to_add >= stack {
            // Срезанный all-in: ставка фиксируется на реально внесённом.
            let paid = stack;
            self.players[seat as usize].stack = Chips::ZERO;
            self.players[seat as usize].status = PlayerStatus::AllIn;

            self.pots.add_chips(0, paid, seat);
            self.betting.contributions[seat as usize] += paid;
            self.hand_contributions[seat as usize] += paid;

            let total = self.betting.contribution(seat);
            self.betting.current_bet = total;
            self.betting.last_bettor = Some(seat);
            // min_raise намеренно не трогаем: неполный рейз его не двигает.

            let someone_above = self
                .players
                .iter()
                .any(|p| p.seat != seat && p.is_in_hand() && self.betting.contribution(p.seat) > total);
            if someone_above {
                self.pots
                    .rebuild_layers(&self.hand_contributions, &self.players);
            }
            paid
        } else {
            self.players[seat as usize].stack -= to_add;
            self.pots.add_chips(0, to_add, seat);
            self.betting.contributions[seat as usize] += to_add;
            self.hand_contributions[seat as usize] += to_add;

            self.betting.on_raise(seat, amount);
            to_add
        }
    }

    /// Завершён ли раунд ставок.
    ///
    /// Правила (в порядке проверки):
    /// 1. Осталось не больше одного не сфолдившего — завершён.
    /// 2. Решения больше некому принимать (≤1 активного) и ставки нет.
    /// 3. Без ставки: указатель хода вернулся к открывающему улицу.
    /// 4. Со ставкой: все активные сравнялись; префлоп BB сохраняет
    ///    "опцию" рейза, пока ход не прошёл мимо него без рейзов.
    pub fn is_round_complete(&self) -> bool {
        if self.non_folded_count() <= 1 {
            return true;
        }

        let active_count = self
            .players
            .iter()
            .filter(|p| p.status == PlayerStatus::Active)
            .count();
        if active_count <= 1 && self.betting.current_bet.is_zero() {
            return true;
        }

        let button = match self.button {
            Some(b) => b,
            None => return true,
        };

        if self.betting.current_bet.is_zero() {
            return match first_to_act(&self.players, self.stage, button) {
                Some(first) => self.current_actor == first,
                None => true,
            };
        }

        let all_matched = self
            .players
            .iter()
            .filter(|p| p.status == PlayerStatus::Active)
            .all(|p| self.betting.contribution(p.seat) == self.betting.current_bet);

        let bb_seat = big_blind_seat(button);
        let bb_has_option = self.stage == Stage::Preflop
            && self.betting.current_bet == self.config.big_blind
            && self.players[bb_seat as usize].status == PlayerStatus::Active
            && self.betting.last_bettor.is_none();

        if bb_has_option && all_matched {
            return self.current_actor != bb_seat;
        }

        all_matched
    }

    /// Перейти к следующей стадии (вызывается внешним кодом после
    /// завершения раунда ставок).
    ///
    /// Если претендент на банк остался один — оставшиеся улицы
    /// пропускаются и он забирает всё без вскрытия.
    pub fn advance_stage(&mut self) -> Result<HandStatus, EngineError> {
        if !self.hand_in_progress {
            return Err(EngineError::NoActiveHand);
        }

        if self.non_folded_count() < 2 {
            return Ok(HandStatus::Finished(self.finish_without_showdown()?));
        }

        match self.stage {
            Stage::Preflop => {
                self.deal_flop()?;
                self.begin_street_betting();
                Ok(HandStatus::Ongoing)
            }
            Stage::Flop => {
                self.deal_turn()?;
                self.begin_street_betting();
                Ok(HandStatus::Ongoing)
            }
            Stage::Turn => {
                self.deal_river()?;
                self.begin_street_betting();
                Ok(HandStatus::Ongoing)
            }
            Stage::River => Ok(HandStatus::Finished(self.resolve_showdown()?)),
            Stage::Showdown => Err(EngineError::WrongStage {
                expected: Stage::River,
                actual: Stage::Showdown,
            }),
        }
    }

    /// Открыть флоп: сжечь карту, сдать три.
    pub fn deal_flop(&mut self) -> Result<(), EngineError> {
        self.deal_street(Stage::Preflop, Stage::Flop, 3)
    }

    /// Открыть тёрн: сжечь карту, сдать одну.
    pub fn deal_turn(&mut self) -> Result<(), EngineError> {
        self.deal_street(Stage::Flop, Stage::Turn, 1)
    }

    /// Открыть ривер: сжечь карту, сдать одну.
    pub fn deal_river(&mut self) -> Result<(), EngineError> {
        self.deal_street(Stage::Turn, Stage::River, 1)
    }

    fn deal_street(
        &mut self,
        expected: Stage,
        next: Stage,
        count: usize,
    ) -> Result<(), EngineError> {
        if self.stage != expected {
            return Err(EngineError::WrongStage {
                expected,
                actual: self.stage,
            });
        }

        // Сжигаем одну карту перед выкладкой.
        self.deck.draw_one().ok_or(EngineError::DeckExhausted)?;

        let mut dealt = Vec::with_capacity(count);
        for _ in 0..count {
            let card = self.deck.draw_one().ok_or(EngineError::DeckExhausted)?;
            self.board.push(card);
            dealt.push(card);
        }

        self.stage = next;
        self.history.push(HandEventKind::BoardDealt {
            stage: next,
            cards: dealt,
        });
        self.history.push(HandEventKind::StageChanged { stage: next });
        Ok(())
    }

    /// Сброс ставок улицы и указателя хода на открывающего.
    fn begin_street_betting(&mut self) {
        self.betting.reset_for_street(self.config.big_blind);

        let button = self.button.unwrap_or(0);
        self.current_actor =
            first_to_act(&self.players, self.stage, button).unwrap_or(seat_after(button, 1));
    }

    /// Единственный оставшийся игрок забирает все банки без вскрытия.
    fn finish_without_showdown(&mut self) -> Result<HandSummary, EngineError> {
        let winner = self
            .players
            .iter()
            .find(|p| p.is_in_hand())
            .map(|p| p.seat)
            .ok_or(EngineError::Internal("нет претендентов на банк"))?;

        self.stage = Stage::Showdown;
        let total = self.pots.total();

        for (pot_index, pot) in self.pots.pots.iter().enumerate() {
            if pot.amount.is_zero() {
                continue;
            }
            self.history.push(HandEventKind::PotAwarded {
                seat: winner,
                pot_index,
                amount: pot.amount,
            });
        }
        self.players[winner as usize].stack += total;

        self.hand_in_progress = false;
        self.history.push(HandEventKind::HandFinished);

        let results = self
            .players
            .iter()
            .map(|p| SeatResult {
                seat: p.seat,
                rank: None,
                winnings: if p.seat == winner { total } else { Chips::ZERO },
                is_winner: p.seat == winner,
            })
            .collect();

        Ok(HandSummary {
            stage_reached: Stage::Showdown,
            board: self.board.clone(),
            total_pot: total,
            results,
        })
    }

    /// Шоудаун: каждый банк разыгрывается отдельно среди своих
    /// претендентов; сплит — поровну, лишние фишки по одной местам
    /// ближе слева от кнопки.
    fn resolve_showdown(&mut self) -> Result<HandSummary, EngineError> {
        self.stage = Stage::Showdown;
        let button = self.button.ok_or(EngineError::Internal("кнопка не задана"))?;

        // Контрольная пересборка слоёв: идемпотентна, чинит банки
        // после добавлений мимо порогов.
        self.pots
            .rebuild_layers(&self.hand_contributions, &self.players);

        let total = self.pots.total();
        let mut results: BTreeMap<SeatIndex, SeatResult> = BTreeMap::new();
        let mut revealed: Vec<SeatIndex> = Vec::new();

        let pots = self.pots.pots.clone();
        for (pot_index, pot) in pots.iter().enumerate() {
            if pot.amount.is_zero() {
                continue;
            }

            let mut hands: [Option<&[Card]>; SEAT_COUNT] = [None; SEAT_COUNT];
            for seat in 0..SEAT_COUNT {
                let player = &self.players[seat];
                if player.is_in_hand() && pot.eligible_seats.contains(&(seat as SeatIndex)) {
                    hands[seat] = Some(player.hole_cards.as_slice());
                }
            }

            let (mut winners, ranks) = determine_winners(&hands, &self.board);
            for seat in 0..SEAT_COUNT {
                if let Some(rank) = ranks[seat] {
                    let seat = seat as SeatIndex;
                    if !revealed.contains(&seat) {
                        revealed.push(seat);
                        self.history.push(HandEventKind::ShowdownReveal {
                            seat,
                            hole_cards: self.players[seat as usize].hole_cards.clone(),
                            rank_value: rank.0,
                        });
                    }
                    results
                        .entry(seat)
                        .or_insert_with(|| SeatResult {
                            seat,
                            rank: Some(rank),
                            winnings: Chips::ZERO,
                            is_winner: false,
                        })
                        .rank = Some(rank);
                }
            }

            if winners.is_empty() {
                continue;
            }

            // Делёж: поровну, остаток — по фишке ближайшим слева от кнопки.
            winners.sort_by_key(|&s| (s as usize + SEAT_COUNT - seat_after(button, 1) as usize) % SEAT_COUNT);
            let share = Chips(pot.amount.0 / winners.len() as u64);
            let remainder = pot.amount.0 % winners.len() as u64;

            for (i, &seat) in winners.iter().enumerate() {
                let mut prize = share;
                if (i as u64) < remainder {
                    prize += Chips(1);
                }
                if prize.is_zero() {
                    continue;
                }

                self.players[seat as usize].stack += prize;
                self.history.push(HandEventKind::PotAwarded {
                    seat,
                    pot_index,
                    amount: prize,
                });

                let entry = results.entry(seat).or_insert_with(|| SeatResult {
                    seat,
                    rank: None,
                    winnings: Chips::ZERO,
                    is_winner: false,
                });
                entry.winnings += prize;
                entry.is_winner = true;
            }
        }

        self.hand_in_progress = false;
        self.history.push(HandEventKind::HandFinished);

        Ok(HandSummary {
            stage_reached: Stage::Showdown,
            board: self.board.clone(),
            total_pot: total,
            results: results.into_values().collect(),
        })
    }

    /// Проверка инварианта сохранения фишек: стеки + банки постоянны.
    pub fn chips_in_play(&self) -> Chips {
        self.players
            .iter()
            .fold(self.pots.total(), |acc, p| acc + p.stack)
    }
}
