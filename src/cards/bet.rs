use super::rank::Rank;
use super::suit::Suit;
use crate::error::Error;
use crate::error::Result;

/// One of the 68 categorical bets, plus the synthetic `Check` sentinel.
///
/// `Check` is representable (some callers need a "no bet" placeholder) but
/// never appears in the probability or cluster tables and is rejected by
/// [`super::satisfy::satisfies_bet`] with [`Error::InvalidBet`].
///
/// The wire ordering (used by [`Bet::to_index`]/[`Bet::from_index`] and by
/// every on-disk table) is fixed: high cards, pairs, the two straights,
/// trips, the 30 full houses, flushes, quads, poker (either straight flush),
/// royal poker (the top straight flush only), then `Check` last at index 68.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bet {
    High(Rank),
    Pair(Rank),
    LowStraight,
    HighStraight,
    Three(Rank),
    /// `(triple_rank, pair_rank)`, always distinct.
    Full(Rank, Rank),
    Flush(Suit),
    Quads(Rank),
    Poker(Suit),
    RoyalPoker(Suit),
    /// Sentinel: never satisfied, never tabulated.
    Check,
}

/// Number of real (non-`Check`) bets.
pub const BET_NB: usize = 68;
/// Wire index reserved for [`Bet::Check`].
pub const CHECK_INDEX: u8 = 68;

/// Coarse family a bet belongs to, used to dispatch the satisfaction
/// predicate without re-deriving it from the wire index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    High,
    Pair,
    Straight,
    Three,
    Full,
    Flush,
    Quads,
    Poker,
    RoyalPoker,
}

impl Bet {
    pub fn category(&self) -> Option<Category> {
        match self {
            Bet::High(_) => Some(Category::High),
            Bet::Pair(_) => Some(Category::Pair),
            Bet::LowStraight | Bet::HighStraight => Some(Category::Straight),
            Bet::Three(_) => Some(Category::Three),
            Bet::Full(_, _) => Some(Category::Full),
            Bet::Flush(_) => Some(Category::Flush),
            Bet::Quads(_) => Some(Category::Quads),
            Bet::Poker(_) => Some(Category::Poker),
            Bet::RoyalPoker(_) => Some(Category::RoyalPoker),
            Bet::Check => None,
        }
    }

    /// The 68 real bets in their fixed wire order (`Check` excluded).
    pub fn all() -> [Bet; BET_NB] {
        std::array::from_fn(|i| Bet::from_index(i as u8).expect("0..68 is always valid"))
    }

    /// Maps this bet to its wire index in `[0, 68]` (68 reserved for `Check`).
    pub fn to_index(&self) -> u8 {
        match self {
            Bet::High(r) => 0 + u8::from(*r),
            Bet::Pair(r) => 6 + u8::from(*r),
            Bet::LowStraight => 12,
            Bet::HighStraight => 13,
            Bet::Three(r) => 14 + u8::from(*r),
            Bet::Full(three, two) => {
                let three = u8::from(*three);
                let two = u8::from(*two);
                debug_assert_ne!(three, two);
                let raw_two = if two > three { two - 1 } else { two };
                20 + three * 5 + raw_two
            }
            Bet::Flush(s) => 50 + u8::from(*s),
            Bet::Quads(r) => 54 + u8::from(*r),
            Bet::Poker(s) => 60 + u8::from(*s),
            Bet::RoyalPoker(s) => 64 + u8::from(*s),
            Bet::Check => CHECK_INDEX,
        }
    }

    /// Inverse of [`Bet::to_index`]. Fails with [`Error::InvalidBet`] for any
    /// index greater than 68.
    pub fn from_index(i: u8) -> Result<Bet> {
        let bet = match i {
            0..=5 => Bet::High(Rank::from(i)),
            6..=11 => Bet::Pair(Rank::from(i - 6)),
            12 => Bet::LowStraight,
            13 => Bet::HighStraight,
            14..=19 => Bet::Three(Rank::from(i - 14)),
            20..=49 => {
                let idx = i - 20;
                let three = idx / 5;
                let raw_two = idx % 5;
                let two = if raw_two >= three { raw_two + 1 } else { raw_two };
                Bet::Full(Rank::from(three), Rank::from(two))
            }
            50..=53 => Bet::Flush(Suit::from(i - 50)),
            54..=59 => Bet::Quads(Rank::from(i - 54)),
            60..=63 => Bet::Poker(Suit::from(i - 60)),
            64..=67 => Bet::RoyalPoker(Suit::from(i - 64)),
            68 => Bet::Check,
            _ => return Err(Error::InvalidBet),
        };
        Ok(bet)
    }
}

impl std::fmt::Display for Bet {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Bet::High(r) => write!(f, "HIGH_{}", r),
            Bet::Pair(r) => write!(f, "PAIR_{}", r),
            Bet::LowStraight => write!(f, "LOW_STRAIGHT"),
            Bet::HighStraight => write!(f, "HIGH_STRAIGHT"),
            Bet::Three(r) => write!(f, "THREE_{}", r),
            Bet::Full(three, two) => write!(f, "FULL_{}{}", three, two),
            Bet::Flush(s) => write!(f, "FLUSH_{}", s),
            Bet::Quads(r) => write!(f, "QUADS_{}", r),
            Bet::Poker(s) => write!(f, "POKER_{}", s),
            Bet::RoyalPoker(s) => write!(f, "ROYAL_POKER_{}", s),
            Bet::Check => write!(f, "CHECK"),
        }
    }
}
