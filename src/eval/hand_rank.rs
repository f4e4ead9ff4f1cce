use crate::domain::{HandRank, Rank};

/// Категория покерной руки по силе.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum HandCategory {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl HandRank {
    /// Собрать HandRank из категории и 5 значений (старшие значения
    /// комбинации, затем кикеры, по убыванию значимости).
    ///
    /// Схема кодирования (u32):
    ///   [категория:4 бита][r0:4][r1:4][r2:4][r3:4][r4:4]
    /// Ранги 2..14 помещаются в 4 бита, поэтому сравнение u32 —
    /// это ровно лексикографика (категория, значения, кикеры).
    pub fn from_category_and_ranks(category: HandCategory, ranks: [Rank; 5]) -> Self {
        let cat_bits = (category as u32) & 0x0F;
        let value = (cat_bits << 20)
            | ((ranks[0] as u32) << 16)
            | ((ranks[1] as u32) << 12)
            | ((ranks[2] as u32) << 8)
            | ((ranks[3] as u32) << 4)
            | (ranks[4] as u32);

        HandRank(value)
    }

    /// Категория руки.
    pub fn category(&self) -> HandCategory {
        match (self.0 >> 20) & 0x0F {
            1 => HandCategory::OnePair,
            2 => HandCategory::TwoPair,
            3 => HandCategory::ThreeOfAKind,
            4 => HandCategory::Straight,
            5 => HandCategory::Flush,
            6 => HandCategory::FullHouse,
            7 => HandCategory::FourOfAKind,
            8 => HandCategory::StraightFlush,
            9 => HandCategory::RoyalFlush,
            _ => HandCategory::HighCard,
        }
    }

    /// Пять закодированных значений (от старшего к младшему).
    pub fn ranks(&self) -> [Rank; 5] {
        let nib = |shift: u32| {
            let v = ((self.0 >> shift) & 0x0F) as u8;
            Rank::from_value(v).unwrap_or(Rank::Two)
        };
        [nib(16), nib(12), nib(8), nib(4), nib(0)]
    }
}

/// Человеческое описание руки.
pub fn describe_hand(rank: HandRank) -> String {
    let high = rank.ranks()[0];
    match rank.category() {
        HandCategory::HighCard => format!("High card, {high} high"),
        HandCategory::OnePair => "One pair".to_string(),
        HandCategory::TwoPair => "Two pair".to_string(),
        HandCategory::ThreeOfAKind => "Three of a kind".to_string(),
        HandCategory::Straight => format!("Straight, {high} high"),
        HandCategory::Flush => format!("Flush, {high} high"),
        HandCategory::FullHouse => "Full house".to_string(),
        HandCategory::FourOfAKind => "Four of a kind".to_string(),
        HandCategory::StraightFlush => format!("Straight flush, {high} high"),
        HandCategory::RoyalFlush => "Royal flush".to_string(),
    }
}
