use core::fmt;

use serde::{Deserialize, Serialize};

/// Тип действия игрока.
///
/// Сумма для Bet/Raise передаётся отдельным аргументом в `apply_action`:
/// так отсутствие суммы — это отдельная ошибка (`MissingAmount`),
/// а не невозможное состояние.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Action {
    Fold,
    Check,
    Call,
    /// Открыть торговлю на улице (когда текущей ставки нет).
    Bet,
    /// Повысить существующую ставку.
    Raise,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Action::Fold => "fold",
            Action::Check => "check",
            Action::Call => "call",
            Action::Bet => "bet",
            Action::Raise => "raise",
        };
        write!(f, "{s}")
    }
}
