use crate::domain::Rank;

/// Битовая маска рангов.
///
/// Используем 13 бит (от 2 до A): бит 0 = двойка, бит 12 = туз.
pub type RankMask = u16;

/// Маски всех возможных стритов (5 подряд), от колеса к бродвею.
pub const STRAIGHT_MASKS: [RankMask; 10] = [
    // A2345 (wheel)
    mask_from_ranks(&[Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five]),
    mask_from_ranks(&[Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Six]),
    mask_from_ranks(&[Rank::Three, Rank::Four, Rank::Five, Rank::Six, Rank::Seven]),
    mask_from_ranks(&[Rank::Four, Rank::Five, Rank::Six, Rank::Seven, Rank::Eight]),
    mask_from_ranks(&[Rank::Five, Rank::Six, Rank::Seven, Rank::Eight, Rank::Nine]),
    mask_from_ranks(&[Rank::Six, Rank::Seven, Rank::Eight, Rank::Nine, Rank::Ten]),
    mask_from_ranks(&[Rank::Seven, Rank::Eight, Rank::Nine, Rank::Ten, Rank::Jack]),
    mask_from_ranks(&[Rank::Eight, Rank::Nine, Rank::Ten, Rank::Jack, Rank::Queen]),
    mask_from_ranks(&[Rank::Nine, Rank::Ten, Rank::Jack, Rank::Queen, Rank::King]),
    // TJQKA (broadway)
    mask_from_ranks(&[Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace]),
];

/// Старшая карта стрита по индексу маски.
/// Колесо (индекс 0) — пятёрка: туз считается младшим.
const STRAIGHT_HIGHS: [Rank; 10] = [
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
    Rank::Ace,
];

/// Битовая маска одного ранга.
pub fn rank_to_bit(rank: Rank) -> RankMask {
    let idx = (rank as u8).saturating_sub(2); // Rank::Two = 2
    1u16 << idx
}

/// Построить маску из списка рангов.
pub const fn mask_from_ranks(ranks: &[Rank]) -> RankMask {
    let mut mask: RankMask = 0;
    let mut i = 0;
    while i < ranks.len() {
        let r = ranks[i] as u8;
        let idx = r.saturating_sub(2);
        mask |= 1 << idx;
        i += 1;
    }
    mask
}

/// Найти стрит в маске рангов. Возвращает старшую карту стрита.
/// Проверка от сильнейшего (бродвей) к слабейшему (колесо).
pub fn detect_straight(rank_mask: RankMask) -> Option<Rank> {
    for (i, sm) in STRAIGHT_MASKS.iter().enumerate().rev() {
        if rank_mask & sm == *sm {
            return Some(STRAIGHT_HIGHS[i]);
        }
    }
    None
}
