//! Сквозные тесты: полные раздачи от блайндов до шоудауна,
//! сохранение фишек, история раздачи, несколько раздач подряд.

use holdem_engine::domain::{Chips, Stage};
use holdem_engine::engine::{Action, Game, GameConfig, HandEventKind, HandStatus};
use holdem_engine::infra::DeterministicRng;

fn new_game() -> Game {
    let names = ["alice", "bob", "carol", "dave", "eve", "frank"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    Game::new(names, GameConfig::default()).expect("6 players")
}

fn total_stacks(game: &Game) -> Chips {
    game.players
        .iter()
        .fold(Chips::ZERO, |acc, p| acc + p.stack)
}

/// Полная лимп-раздача: все коллируют, все чекают, шоудаун.
/// Фишки сохраняются на каждом шаге.
#[test]
fn limped_hand_to_showdown_conserves_chips() {
    let mut game = new_game();
    let mut rng = DeterministicRng::from_seed(100);
    game.start_new_hand(&mut rng).unwrap();

    assert_eq!(game.chips_in_play(), Chips(6000));

    // Префлоп: пять коллов и check от BB.
    for _ in 0..5 {
        game.apply_action(Action::Call, None).unwrap();
        assert_eq!(game.chips_in_play(), Chips(6000));
    }
    let done = game.apply_action(Action::Check, None).unwrap();
    assert!(done);
    assert_eq!(game.total_pot(), Chips(120));

    // Флоп, тёрн, ривер: все чекают.
    for expected_stage in [Stage::Flop, Stage::Turn, Stage::River] {
        assert_eq!(game.advance_stage().unwrap(), HandStatus::Ongoing);
        assert_eq!(game.stage, expected_stage);

        for _ in 0..5 {
            let done = game.apply_action(Action::Check, None).unwrap();
            assert!(!done);
        }
        let done = game.apply_action(Action::Check, None).unwrap();
        assert!(done);
        assert_eq!(game.chips_in_play(), Chips(6000));
    }

    assert_eq!(game.board.len(), 5);

    let status = game.advance_stage().unwrap();
    let summary = match status {
        HandStatus::Finished(s) => s,
        other => panic!("Ожидали завершение, получили {other:?}"),
    };

    assert_eq!(summary.stage_reached, Stage::Showdown);
    assert_eq!(summary.total_pot, Chips(120));
    assert_eq!(summary.board.len(), 5);
    assert_eq!(total_stacks(&game), Chips(6000));

    let paid_out: Chips = summary
        .results
        .iter()
        .fold(Chips::ZERO, |acc, r| acc + r.winnings);
    assert_eq!(paid_out, Chips(120));
    assert!(summary.results.iter().any(|r| r.is_winner));
}

/// История раздачи фиксирует ключевые события в порядке их появления.
#[test]
fn hand_history_records_key_events() {
    let mut game = new_game();
    let mut rng = DeterministicRng::from_seed(100);
    game.start_new_hand(&mut rng).unwrap();

    for _ in 0..5 {
        game.apply_action(Action::Call, None).unwrap();
    }
    game.apply_action(Action::Check, None).unwrap();
    game.advance_stage().unwrap();

    let events = &game.history.events;

    assert!(matches!(
        events[0].kind,
        HandEventKind::HandStarted { button: 0 }
    ));

    let hole_deals = events
        .iter()
        .filter(|e| matches!(e.kind, HandEventKind::HoleCardsDealt { .. }))
        .count();
    assert_eq!(hole_deals, 6);

    assert!(events
        .iter()
        .any(|e| matches!(e.kind, HandEventKind::BlindsPosted { .. })));

    let actions = events
        .iter()
        .filter(|e| matches!(e.kind, HandEventKind::PlayerActed { .. }))
        .count();
    assert_eq!(actions, 6, "5 коллов и check BB");

    assert!(events.iter().any(|e| matches!(
        e.kind,
        HandEventKind::BoardDealt {
            stage: Stage::Flop,
            ..
        }
    )));

    // Индексы событий монотонны.
    for (i, event) in events.iter().enumerate() {
        assert_eq!(event.index as usize, i);
    }
}

/// Несколько раздач подряд: кнопка идёт по кругу, стеки переносятся,
/// сумма фишек неизменна.
#[test]
fn consecutive_hands_carry_stacks() {
    let mut game = new_game();

    for hand_no in 0..6u64 {
        let mut rng = DeterministicRng::from_seed(hand_no);
        game.start_new_hand(&mut rng).unwrap();
        assert_eq!(game.button, Some((hand_no % 6) as u8));

        // Все фолдят до BB.
        for _ in 0..5 {
            game.apply_action(Action::Fold, None).unwrap();
        }
        let status = game.advance_stage().unwrap();
        assert!(matches!(status, HandStatus::Finished(_)));
        assert_eq!(total_stacks(&game), Chips(6000));
    }

    // За 6 раздач каждый побывал на блайндах; никто не разорён
    // фолдами по кругу.
    for player in &game.players {
        assert!(player.stack > Chips::ZERO);
    }
}

/// Префлоп-сценарий: UTG фолдит, два места лимпят, кнопка рейзит
/// до 60, блайнды фолдят, лимперы доплачивают. Круг закрыт,
/// агрессор — кнопка, у оставшихся по 60 в леджере улицы.
#[test]
fn button_raise_closes_round_with_button_as_last_bettor() {
    let mut game = new_game();
    let mut rng = DeterministicRng::from_seed(55);
    game.start_new_hand(&mut rng).unwrap();

    game.apply_action(Action::Fold, None).unwrap(); // 3 (UTG)
    game.apply_action(Action::Call, None).unwrap(); // 4
    game.apply_action(Action::Call, None).unwrap(); // 5
    game.apply_action(Action::Raise, Some(Chips(60))).unwrap(); // 0 (кнопка)
    game.apply_action(Action::Fold, None).unwrap(); // 1 (SB)
    game.apply_action(Action::Fold, None).unwrap(); // 2 (BB)
    game.apply_action(Action::Call, None).unwrap(); // 4
    let done = game.apply_action(Action::Call, None).unwrap(); // 5
    assert!(done, "После последнего колла круг закрыт");

    assert_eq!(game.betting.last_bettor, Some(0));
    for seat in [0u8, 4, 5] {
        assert_eq!(game.betting.contribution(seat), Chips(60));
    }
    // 60 × 3 + 10 + 20 мёртвых блайндов.
    assert_eq!(game.total_pot(), Chips(210));
}

/// Раздача с реальной торговлей: рейз, коллы, ставка на флопе,
/// фолды — пот уходит агрессору без вскрытия.
#[test]
fn raise_and_flop_bet_takes_pot_without_showdown() {
    let mut game = new_game();
    let mut rng = DeterministicRng::from_seed(77);
    game.start_new_hand(&mut rng).unwrap();

    // UTG рейзит до 60, коллируют кнопка и BB.
    game.apply_action(Action::Raise, Some(Chips(60))).unwrap(); // 3
    game.apply_action(Action::Fold, None).unwrap(); // 4
    game.apply_action(Action::Fold, None).unwrap(); // 5
    game.apply_action(Action::Call, None).unwrap(); // 0 (кнопка)
    game.apply_action(Action::Fold, None).unwrap(); // 1 (SB)
    let done = game.apply_action(Action::Call, None).unwrap(); // 2 (BB)
    assert!(done);
    assert_eq!(game.betting.last_bettor, Some(3));
    assert_eq!(game.total_pot(), Chips(190));

    // Флоп: BB чекает, UTG ставит 100, оба оппонента фолдят.
    game.advance_stage().unwrap();
    assert_eq!(game.current_actor, 2, "Первым постфлоп ходит BB");

    game.apply_action(Action::Check, None).unwrap(); // 2
    game.apply_action(Action::Bet, Some(Chips(100))).unwrap(); // 3
    game.apply_action(Action::Fold, None).unwrap(); // 0
    let done = game.apply_action(Action::Fold, None).unwrap(); // 2
    assert!(done);

    let status = game.advance_stage().unwrap();
    let summary = match status {
        HandStatus::Finished(s) => s,
        other => panic!("Ожидали завершение, получили {other:?}"),
    };

    // UTG забирает 290 (190 + своя сотня), чистый выигрыш 130.
    assert_eq!(summary.total_pot, Chips(290));
    assert_eq!(game.players[3].stack, Chips(1130));
    assert_eq!(total_stacks(&game), Chips(6000));
}
