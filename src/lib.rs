//! Движок шестиместного безлимитного техасского холдема.
//!
//! Ядро: карты/колода, фишки, игроки, машина ставок с сайд-потами,
//! оценка рук и оркестрация раздачи по улицам.
//!
//! Сетевой слой, сессии и боты — внешние потребители: они работают
//! только через `Game` / `GameRegistry` и снапшоты из `api`.

pub mod api;
pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;

pub use api::GameView;
pub use domain::{Card, Chips, Deck, Player, PlayerStatus, Rank, SeatIndex, Stage, Suit};
pub use engine::{Action, EngineError, Game, GameConfig, GameRegistry, HandStatus};
pub use eval::{determine_winners, evaluate_best_hand};
