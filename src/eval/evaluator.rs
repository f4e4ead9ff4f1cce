use crate::domain::{Card, HandRank, Rank, SeatIndex, Suit};

use super::hand_rank::HandCategory;
use super::lookup_tables::{detect_straight, rank_to_bit, RankMask};

/// Лучшая 5-карточная рука из hole + board.
///
/// Чистая функция: перебирает все C(n,5) комбинаций (для 7 карт — 21)
/// и возвращает максимальный ранг. Результат не зависит от порядка
/// входных карт.
///
/// Ожидается 5–7 карт суммарно (инвариант раздачи).
pub fn evaluate_best_hand(hole: &[Card], board: &[Card]) -> HandRank {
    let mut all_cards = Vec::with_capacity(hole.len() + board.len());
    all_cards.extend_from_slice(hole);
    all_cards.extend_from_slice(board);

    assert!(
        (5..=7).contains(&all_cards.len()),
        "evaluate_best_hand ожидает от 5 до 7 карт"
    );

    best_of_all_5card_combinations(&all_cards)
}

/// Перебор всех комбинаций 5 карт из N (N=5–7).
fn best_of_all_5card_combinations(cards: &[Card]) -> HandRank {
    let n = cards.len();
    let mut best: Option<HandRank> = None;

    for a in 0..(n - 4) {
        for b in (a + 1)..(n - 3) {
            for c in (b + 1)..(n - 2) {
                for d in (c + 1)..(n - 1) {
                    for e in (d + 1)..n {
                        let five = [cards[a], cards[b], cards[c], cards[d], cards[e]];
                        let r = evaluate_5card_hand(&five);
                        if best.map_or(true, |best_r| r > best_r) {
                            best = Some(r);
                        }
                    }
                }
            }
        }
    }

    best.expect("должна быть хотя бы одна 5-карточная комбинация")
}

/// Оценка строго 5-карточной комбинации.
fn evaluate_5card_hand(cards: &[Card; 5]) -> HandRank {
    let mut suit_counts = [0u8; 4];
    let mut rank_counts = [0u8; 15]; // индексы 2..14
    let mut rank_mask: RankMask = 0;

    for card in cards.iter() {
        let suit_idx = match card.suit {
            Suit::Clubs => 0,
            Suit::Diamonds => 1,
            Suit::Hearts => 2,
            Suit::Spades => 3,
        };
        suit_counts[suit_idx] += 1;
        rank_counts[card.rank as usize] += 1;
        rank_mask |= rank_to_bit(card.rank);
    }

    let is_flush = suit_counts.iter().any(|&c| c == 5);
    let straight_high = detect_straight(rank_mask);

    // (ранг, сколько раз) — сначала по количеству, потом по рангу, убыв.
    let mut rc_list: Vec<(Rank, u8)> = Vec::with_capacity(5);
    for v in (2usize..=14).rev() {
        if rank_counts[v] > 0 {
            if let Some(rank) = Rank::from_value(v as u8) {
                rc_list.push((rank, rank_counts[v]));
            }
        }
    }
    rc_list.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| b.0.cmp(&a.0)));

    let pattern: Vec<u8> = rc_list.iter().map(|rc| rc.1).collect();

    if is_flush {
        if let Some(high) = straight_high {
            // Royal flush — стрит-флеш с тузом сверху.
            let category = if high == Rank::Ace {
                HandCategory::RoyalFlush
            } else {
                HandCategory::StraightFlush
            };
            return HandRank::from_category_and_ranks(category, straight_rank_array(high));
        }
    }

    if pattern == [4, 1] {
        let (four, kicker) = (rc_list[0].0, rc_list[1].0);
        // Хвостовые ранги не сравниваются — забиваем минимальным.
        let ranks = [four, kicker, Rank::Two, Rank::Two, Rank::Two];
        return HandRank::from_category_and_ranks(HandCategory::FourOfAKind, ranks);
    }

    if pattern == [3, 2] {
        let (trips, pair) = (rc_list[0].0, rc_list[1].0);
        let ranks = [trips, pair, Rank::Two, Rank::Two, Rank::Two];
        return HandRank::from_category_and_ranks(HandCategory::FullHouse, ranks);
    }

    if is_flush {
        let mut flush_ranks: Vec<Rank> = cards.iter().map(|c| c.rank).collect();
        flush_ranks.sort_by(|a, b| b.cmp(a));
        let ranks = [
            flush_ranks[0],
            flush_ranks[1],
            flush_ranks[2],
            flush_ranks[3],
            flush_ranks[4],
        ];
        return HandRank::from_category_and_ranks(HandCategory::Flush, ranks);
    }

    if let Some(high) = straight_high {
        return HandRank::from_category_and_ranks(HandCategory::Straight, straight_rank_array(high));
    }

    if pattern == [3, 1, 1] {
        let ranks = [rc_list[0].0, rc_list[1].0, rc_list[2].0, Rank::Two, Rank::Two];
        return HandRank::from_category_and_ranks(HandCategory::ThreeOfAKind, ranks);
    }

    if pattern == [2, 2, 1] {
        let ranks = [rc_list[0].0, rc_list[1].0, rc_list[2].0, Rank::Two, Rank::Two];
        return HandRank::from_category_and_ranks(HandCategory::TwoPair, ranks);
    }

    if pattern == [2, 1, 1, 1] {
        let ranks = [rc_list[0].0, rc_list[1].0, rc_list[2].0, rc_list[3].0, Rank::Two];
        return HandRank::from_category_and_ranks(HandCategory::OnePair, ranks);
    }

    // High card: топ-5 рангов по убыванию.
    let ranks = [
        rc_list[0].0,
        rc_list[1].0,
        rc_list[2].0,
        rc_list[3].0,
        rc_list[4].0,
    ];
    HandRank::from_category_and_ranks(HandCategory::HighCard, ranks)
}

/// Массив рангов стрита по его старшей карте.
/// Колесо: A2345 → старшая пятёрка, туз в хвосте как единица.
fn straight_rank_array(high: Rank) -> [Rank; 5] {
    if high == Rank::Five {
        return [Rank::Five, Rank::Four, Rank::Three, Rank::Two, Rank::Ace];
    }
    let h = high as u8;
    let r = |offset: u8| {
        let v = h - offset;
        // Стриты выше колеса лежат в 6..14, смещения валидны.
        Rank::from_value(v).unwrap_or(Rank::Two)
    };
    [r(0), r(1), r(2), r(3), r(4)]
}

/// Победители одного банка.
///
/// `hands[seat] = None` — место не претендует на этот банк (сфолдило
/// или не добрало до порога) и не оценивается. Возвращает места с
/// максимальной рукой (все при дележе) и ранги всех оценённых мест.
pub fn determine_winners(
    hands: &[Option<&[Card]>],
    board: &[Card],
) -> (Vec<SeatIndex>, Vec<Option<HandRank>>) {
    let mut ranks: Vec<Option<HandRank>> = vec![None; hands.len()];
    let mut best: Option<HandRank> = None;
    let mut winners: Vec<SeatIndex> = Vec::new();

    for (seat, hand) in hands.iter().enumerate() {
        let hole = match hand {
            Some(h) => h,
            None => continue,
        };
        let rank = evaluate_best_hand(hole, board);
        ranks[seat] = Some(rank);

        match best {
            None => {
                best = Some(rank);
                winners.push(seat as SeatIndex);
            }
            Some(b) if rank > b => {
                best = Some(rank);
                winners.clear();
                winners.push(seat as SeatIndex);
            }
            Some(b) if rank == b => winners.push(seat as SeatIndex),
            Some(_) => {}
        }
    }

    (winners, ranks)
}
