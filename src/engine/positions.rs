use crate::domain::{Player, PlayerStatus, SeatIndex, Stage, SEAT_COUNT};

/// Место малого блайнда — сразу за кнопкой.
pub fn small_blind_seat(button: SeatIndex) -> SeatIndex {
    seat_after(button, 1)
}

/// Место большого блайнда — через одно от кнопки.
pub fn big_blind_seat(button: SeatIndex) -> SeatIndex {
    seat_after(button, 2)
}

/// Место через `offset` позиций за кнопкой (по кругу).
pub fn seat_after(seat: SeatIndex, offset: u8) -> SeatIndex {
    ((seat as usize + offset as usize) % SEAT_COUNT) as SeatIndex
}

/// Название позиции места относительно кнопки.
pub fn position_label(seat: SeatIndex, button: SeatIndex) -> &'static str {
    let relative = (seat as usize + SEAT_COUNT - button as usize) % SEAT_COUNT;
    match relative {
        0 => "Button",
        1 => "Small Blind",
        2 => "Big Blind",
        3 => "UTG",
        4 => "UTG+1",
        _ => "Cutoff",
    }
}

/// Кто открывает торговлю на улице.
///
/// Префлоп: третье место за кнопкой (сразу после BB), независимо от статуса —
/// к нему возвращается указатель хода при проверке завершения круга.
/// Постфлоп: первое активное (не all-in) место слева от кнопки.
pub fn first_to_act(players: &[Player], stage: Stage, button: SeatIndex) -> Option<SeatIndex> {
    if stage == Stage::Preflop {
        return Some(seat_after(button, 3));
    }
    for i in 1..=SEAT_COUNT {
        let seat = seat_after(button, i as u8);
        if players[seat as usize].status == PlayerStatus::Active {
            return Some(seat);
        }
    }
    None
}

/// Следующее активное место после `from` (fold и all-in пропускаются).
/// Если полный круг не нашёл активных — возвращаемся к `from`.
pub fn next_active_seat(players: &[Player], from: SeatIndex) -> SeatIndex {
    let mut seat = from;
    for _ in 0..SEAT_COUNT {
        seat = seat_after(seat, 1);
        if players[seat as usize].status == PlayerStatus::Active {
            return seat;
        }
        if seat == from {
            break;
        }
    }
    from
}
