//! Модуль оценки силы покерных рук (Texas Hold'em).
//!
//! Основные функции:
//!   `evaluate_best_hand(hole, board) -> HandRank`
//!   `determine_winners(hands, board) -> (победители, ранги)`

pub mod evaluator;
pub mod hand_rank;
pub mod lookup_tables;

pub use evaluator::{determine_winners, evaluate_best_hand};
pub use hand_rank::{describe_hand, HandCategory};
