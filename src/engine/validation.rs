use crate::domain::{Chips, Player, PlayerStatus};
use crate::engine::actions::Action;
use crate::engine::betting::BettingState;
use crate::engine::errors::EngineError;

/// Легальные действия места при текущем состоянии ставок.
///
/// Fold доступен всегда. Без ставки: check и (при фишках) bet.
/// Со ставкой: call при фишках; raise — только если стек больше,
/// чем нужно для call. Ставка уже уравнена (опция BB на префлопе) —
/// check и raise.
pub fn available_actions(player: &Player, betting: &BettingState) -> Vec<Action> {
    let mut actions = vec![Action::Fold];

    if betting.current_bet.is_zero() {
        actions.push(Action::Check);
        if player.stack > Chips::ZERO {
            actions.push(Action::Bet);
        }
    } else if betting.to_call(player.seat).is_zero() {
        actions.push(Action::Check);
        if player.stack > Chips::ZERO {
            actions.push(Action::Raise);
        }
    } else if player.stack > Chips::ZERO {
        actions.push(Action::Call);
        if player.stack > betting.to_call(player.seat) {
            actions.push(Action::Raise);
        }
    }

    actions
}

/// Полная проверка действия ДО каких-либо мутаций.
/// Либо Ok(()), либо ошибка — состояние раздачи не меняется.
pub fn validate_action(
    player: &Player,
    action: Action,
    amount: Option<Chips>,
    betting: &BettingState,
    big_blind: Chips,
) -> Result<(), EngineError> {
    if player.status != PlayerStatus::Active {
        return Err(EngineError::IllegalAction(action));
    }

    if !available_actions(player, betting).contains(&action) {
        // Различаем "нет фишек" и остальные причины недоступности.
        let blocked_by_stack = match action {
            Action::Bet => betting.current_bet.is_zero() && player.stack.is_zero(),
            Action::Call => player.stack.is_zero(),
            Action::Raise => {
                !betting.current_bet.is_zero() && player.stack <= betting.to_call(player.seat)
            }
            _ => false,
        };
        return Err(if blocked_by_stack {
            EngineError::NotEnoughChips
        } else {
            EngineError::IllegalAction(action)
        });
    }

    if matches!(action, Action::Bet | Action::Raise) {
        let amount = amount.ok_or(EngineError::MissingAmount(action))?;

        // Минимум проверяется по ЗАПРОШЕННОЙ сумме; реальный вклад
        // дальше может быть срезан по стеку (вынужденный all-in).
        let minimum = match action {
            Action::Bet => big_blind,
            _ => betting.current_bet + betting.min_raise,
        };
        if amount < minimum {
            return Err(EngineError::AmountTooSmall { action, minimum });
        }
    }

    Ok(())
}
