//! Доменные тесты: карты, колода, фишки, стадии, игрок.

use std::collections::HashSet;

use holdem_engine::domain::{Card, Chips, Deck, Player, PlayerStatus, Rank, Stage, Suit};

/// Стандартная колода: 52 уникальные карты.
#[test]
fn standard_deck_has_52_unique_cards() {
    let deck = Deck::standard_52();
    assert_eq!(deck.len(), 52);

    let unique: HashSet<Card> = deck.cards.iter().copied().collect();
    assert_eq!(unique.len(), 52, "Все карты должны быть уникальны");
}

/// draw_one уменьшает колоду, на пустой колоде возвращает None.
#[test]
fn deck_draw_one_until_empty() {
    let mut deck = Deck::standard_52();
    for _ in 0..52 {
        assert!(deck.draw_one().is_some());
    }
    assert!(deck.is_empty());
    assert_eq!(deck.draw_one(), None);
}

/// draw_n берёт сколько есть, не паникует на нехватке.
#[test]
fn deck_draw_n_truncates_on_exhaustion() {
    let mut deck = Deck::standard_52();
    let first = deck.draw_n(50);
    assert_eq!(first.len(), 50);

    let rest = deck.draw_n(5);
    assert_eq!(rest.len(), 2, "Осталось только 2 карты");
}

/// Отображение и парсинг карт: "Ah", "Td", "7c".
#[test]
fn card_display_and_parse_roundtrip() {
    let cases = [
        (Card::new(Rank::Ace, Suit::Hearts), "Ah"),
        (Card::new(Rank::Ten, Suit::Diamonds), "Td"),
        (Card::new(Rank::Seven, Suit::Clubs), "7c"),
        (Card::new(Rank::Queen, Suit::Spades), "Qs"),
    ];

    for (card, text) in cases {
        assert_eq!(card.to_string(), text);
        let parsed: Card = text.parse().unwrap();
        assert_eq!(parsed, card);
    }

    assert!("Xx".parse::<Card>().is_err());
    assert!("Ahh".parse::<Card>().is_err());
}

/// Числовые значения рангов и обратное преобразование.
#[test]
fn rank_from_value_roundtrip() {
    for rank in Rank::ALL {
        assert_eq!(Rank::from_value(rank as u8), Some(rank));
    }
    assert_eq!(Rank::from_value(1), None);
    assert_eq!(Rank::from_value(15), None);
}

/// Chips: вычитание не уходит в минус.
#[test]
fn chips_subtraction_saturates() {
    let a = Chips(10);
    let b = Chips(25);
    assert_eq!(a - b, Chips::ZERO);
    assert_eq!(b - a, Chips(15));

    let mut c = Chips(5);
    c -= Chips(100);
    assert_eq!(c, Chips::ZERO);
}

/// Порядок стадий раздачи.
#[test]
fn stage_progression() {
    assert_eq!(Stage::Preflop.next(), Stage::Flop);
    assert_eq!(Stage::Flop.next(), Stage::Turn);
    assert_eq!(Stage::Turn.next(), Stage::River);
    assert_eq!(Stage::River.next(), Stage::Showdown);
    assert_eq!(Stage::Showdown.next(), Stage::Showdown);
}

/// Сброс игрока перед новой раздачей: карты убраны, статус активен,
/// стек не трогаем.
#[test]
fn player_reset_for_hand() {
    let mut player = Player::new("alice".to_string(), 0, Chips(500));
    player.hole_cards.push(Card::new(Rank::Ace, Suit::Spades));
    player.status = PlayerStatus::Folded;

    player.reset_for_hand();

    assert!(player.hole_cards.is_empty());
    assert_eq!(player.status, PlayerStatus::Active);
    assert_eq!(player.stack, Chips(500));
}

/// is_in_hand: fold выбывает, all-in остаётся претендентом.
#[test]
fn player_in_hand_statuses() {
    let mut player = Player::new("bob".to_string(), 1, Chips(100));
    assert!(player.is_in_hand());

    player.status = PlayerStatus::AllIn;
    assert!(player.is_in_hand());

    player.status = PlayerStatus::Folded;
    assert!(!player.is_in_hand());
}
