//! Покерный движок: ставки, переход улиц, сайд-поты, шоудаун.
//!
//! Высокоуровневый объект: `Game`
//! Основные операции:
//!   - `start_new_hand` – запустить новую раздачу
//!   - `apply_action` – применить действие игрока
//!   - `advance_stage` – переход улицы / завершение раздачи

pub mod actions;
pub mod betting;
pub mod errors;
pub mod game;
pub mod hand_history;
pub mod positions;
pub mod pot;
pub mod registry;
pub mod validation;

pub use actions::Action;
pub use betting::BettingState;
pub use errors::EngineError;
pub use game::{Game, GameConfig, HandStatus};
pub use hand_history::{HandEvent, HandEventKind, HandHistory};
pub use pot::{Pot, PotLedger};
pub use registry::GameRegistry;

/// RNG интерфейс для engine.
/// Реализации живут в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
