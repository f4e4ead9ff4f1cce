//! Тесты API-снапшотов: видимость карманных карт, подсказки ходящему,
//! сериализация в JSON, реестр игр.

use holdem_engine::api::GameView;
use holdem_engine::domain::{Chips, Stage};
use holdem_engine::engine::{Action, Game, GameConfig, GameRegistry, HandStatus};
use holdem_engine::infra::DeterministicRng;

fn started_game(seed: u64) -> Game {
    let names = ["alice", "bob", "carol", "dave", "eve", "frank"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let mut game = Game::new(names, GameConfig::default()).expect("6 players");
    let mut rng = DeterministicRng::from_seed(seed);
    game.start_new_hand(&mut rng).expect("start hand");
    game
}

/// Наблюдатель не видит ничьих карманных карт до шоудауна.
#[test]
fn observer_sees_no_hole_cards() {
    let game = started_game(1);
    let view = GameView::snapshot(&game, None);

    for player in &view.players {
        assert!(player.hole_cards.is_none());
    }
    assert_eq!(view.stage, Stage::Preflop);
    assert_eq!(view.total_pot, Chips(30));
    assert_eq!(view.current_actor, Some(3));
}

/// Игрок видит только свои карты.
#[test]
fn viewer_sees_only_own_cards() {
    let game = started_game(1);
    let view = GameView::snapshot(&game, Some(4));

    for player in &view.players {
        if player.seat == 4 {
            let cards = player.hole_cards.as_ref().expect("свои карты видны");
            assert_eq!(cards.len(), 2);
        } else {
            assert!(player.hole_cards.is_none());
        }
    }
}

/// На шоудауне карты не сфолдивших открыты всем.
#[test]
fn showdown_reveals_surviving_hands() {
    let mut game = started_game(1);

    // Все фолдят, кроме кнопки и BB; дальше чек-чек до вскрытия.
    game.apply_action(Action::Fold, None).unwrap(); // 3
    game.apply_action(Action::Fold, None).unwrap(); // 4
    game.apply_action(Action::Fold, None).unwrap(); // 5
    game.apply_action(Action::Call, None).unwrap(); // 0
    game.apply_action(Action::Fold, None).unwrap(); // 1
    game.apply_action(Action::Check, None).unwrap(); // 2
    for _ in 0..3 {
        game.advance_stage().unwrap();
        game.apply_action(Action::Check, None).unwrap();
        game.apply_action(Action::Check, None).unwrap();
    }
    let status = game.advance_stage().unwrap();
    assert!(matches!(status, HandStatus::Finished(_)));

    let view = GameView::snapshot(&game, None);
    assert_eq!(view.stage, Stage::Showdown);

    for player in &view.players {
        if player.seat == 0 || player.seat == 2 {
            assert!(player.hole_cards.is_some(), "Дошедшие до вскрытия открыты");
        } else {
            assert!(player.hole_cards.is_none(), "Сфолдившие не открываются");
        }
    }
}

/// Снапшот несёт подсказки для ходящего: действия и цену колла.
#[test]
fn snapshot_carries_action_hints() {
    let game = started_game(1);
    let view = GameView::snapshot(&game, Some(3));

    assert!(view.available_actions.contains(&Action::Fold));
    assert!(view.available_actions.contains(&Action::Call));
    assert!(view.available_actions.contains(&Action::Raise));
    assert_eq!(view.call_amount, Chips(20));

    // Позиции подписаны относительно кнопки.
    let labels: Vec<_> = view
        .players
        .iter()
        .map(|p| p.position.clone().unwrap_or_default())
        .collect();
    assert_eq!(
        labels,
        vec!["Button", "Small Blind", "Big Blind", "UTG", "UTG+1", "Cutoff"]
    );
}

/// Вне раздачи подсказок нет.
#[test]
fn no_hints_between_hands() {
    let names = ["alice", "bob", "carol", "dave", "eve", "frank"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let game = Game::new(names, GameConfig::default()).unwrap();

    let view = GameView::snapshot(&game, None);
    assert!(!view.hand_in_progress);
    assert_eq!(view.current_actor, None);
    assert!(view.available_actions.is_empty());
    assert_eq!(view.call_amount, Chips::ZERO);
}

/// Снапшот сериализуется в JSON.
#[test]
fn snapshot_serializes_to_json() {
    let game = started_game(1);
    let view = GameView::snapshot(&game, Some(0));

    let json = view.to_json().expect("json");
    assert!(json.contains("\"stage\":\"Preflop\""));
    assert!(json.contains("\"total_pot\":30"));
}

//
// ====================== РЕЕСТР ИГР ======================
//

/// Реестр выдаёт монотонные id и находит игры по ним.
#[test]
fn registry_register_and_lookup() {
    let mut registry = GameRegistry::new();
    assert!(registry.is_empty());

    let id_a = registry.register(started_game(1));
    let id_b = registry.register(started_game(2));
    assert_ne!(id_a, id_b);
    assert!(id_b > id_a);
    assert_eq!(registry.len(), 2);

    assert!(registry.contains(id_a));
    assert!(registry.game(id_a).is_some());
    assert!(registry.game(999).is_none());
}

/// Мутация игры через реестр.
#[test]
fn registry_mutates_game_in_place() {
    let mut registry = GameRegistry::new();
    let id = registry.register(started_game(1));

    {
        let game = registry.game_mut(id).expect("game");
        game.apply_action(Action::Fold, None).unwrap();
    }

    let game = registry.game(id).expect("game");
    assert_eq!(game.current_actor, 4);
}

/// Удаление игры освобождает id в реестре, но не переиспользует его.
#[test]
fn registry_remove_does_not_reuse_ids() {
    let mut registry = GameRegistry::new();
    let id_a = registry.register(started_game(1));
    registry.remove(id_a);
    assert!(!registry.contains(id_a));

    let id_b = registry.register(started_game(2));
    assert_ne!(id_a, id_b);
}
