use serde::{Deserialize, Serialize};

use crate::domain::{Card, Chips, PlayerStatus, SeatIndex, Stage};
use crate::engine::actions::Action;
use crate::engine::game::Game;
use crate::engine::positions::position_label;

/// Снапшот одного банка.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PotView {
    pub amount: Chips,
    pub eligible_seats: Vec<SeatIndex>,
    pub required_amount: Chips,
}

/// Снапшот игрока за столом.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlayerView {
    pub name: String,
    pub seat: SeatIndex,
    pub stack: Chips,
    pub street_bet: Chips,
    pub status: PlayerStatus,
    /// Позиция относительно кнопки ("Button", "Small Blind", ...).
    pub position: Option<String>,
    /// Карманные карты – только свои; чужие открываются на шоудауне.
    pub hole_cards: Option<Vec<Card>>,
}

/// Снапшот всей игры для клиента.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameView {
    pub stage: Stage,
    pub board: Vec<Card>,
    pub button: Option<SeatIndex>,
    pub total_pot: Chips,
    pub current_bet: Chips,
    pub min_raise: Chips,
    pub pots: Vec<PotView>,
    pub players: Vec<PlayerView>,
    pub hand_in_progress: bool,
    pub current_actor: Option<SeatIndex>,
    /// Подсказки для ходящего места (заполняются, если раздача идёт).
    pub available_actions: Vec<Action>,
    pub call_amount: Chips,
}

impl GameView {
    /// Снять снапшот игры глазами места `viewer`.
    ///
    /// `viewer = None` — наблюдатель: карманные карты видны только на
    /// шоудауне, и только у не сфолдивших.
    pub fn snapshot(game: &Game, viewer: Option<SeatIndex>) -> Self {
        let showdown = game.stage == Stage::Showdown;

        let players = game
            .players
            .iter()
            .map(|p| {
                let own = viewer == Some(p.seat);
                let visible = own || (showdown && p.is_in_hand());

                PlayerView {
                    name: p.name.clone(),
                    seat: p.seat,
                    stack: p.stack,
                    street_bet: game.betting.contribution(p.seat),
                    status: p.status,
                    position: game.button.map(|b| position_label(p.seat, b).to_string()),
                    hole_cards: if visible && !p.hole_cards.is_empty() {
                        Some(p.hole_cards.clone())
                    } else {
                        None
                    },
                }
            })
            .collect();

        let pots = game
            .pots
            .pots
            .iter()
            .map(|pot| PotView {
                amount: pot.amount,
                eligible_seats: pot.eligible_seats.clone(),
                required_amount: pot.required_amount,
            })
            .collect();

        let (available_actions, call_amount) = if game.hand_in_progress {
            (game.available_actions(), game.call_amount())
        } else {
            (Vec::new(), Chips::ZERO)
        };

        GameView {
            stage: game.stage,
            board: game.board.clone(),
            button: game.button,
            total_pot: game.total_pot(),
            current_bet: game.betting.current_bet,
            min_raise: game.betting.min_raise,
            pots,
            players,
            hand_in_progress: game.hand_in_progress,
            current_actor: if game.hand_in_progress {
                Some(game.current_actor)
            } else {
                None
            },
            available_actions,
            call_amount,
        }
    }

    /// Сериализовать снапшот в JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
