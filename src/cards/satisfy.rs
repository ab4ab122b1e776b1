use super::bet::Bet;
use super::hand::Hand;
use super::masks;
use crate::error::Error;
use crate::error::Result;

fn popcount_of(mask: u32, bits: u32) -> u32 {
    (mask & bits).count_ones()
}

/// Evaluates whether `hand` satisfies `bet`.
///
/// Fails with [`Error::InvalidBet`] when `bet` is [`Bet::Check`] — `Check`
/// has no mathematical satisfaction condition and never appears in the
/// probability or cluster tables.
pub fn satisfies_bet(hand: Hand, bet: Bet) -> Result<bool> {
    let h = u32::from(hand);
    let satisfied = match bet {
        Bet::High(r) => popcount_of(h, masks::ALL_RANK[r as usize]) >= 1,
        Bet::Pair(r) => popcount_of(h, masks::ALL_RANK[r as usize]) >= 2,
        Bet::LowStraight => {
            (0..5).all(|r| popcount_of(h, masks::ALL_RANK[r]) >= 1)
        }
        Bet::HighStraight => {
            (1..6).all(|r| popcount_of(h, masks::ALL_RANK[r]) >= 1)
        }
        Bet::Three(r) => popcount_of(h, masks::ALL_RANK[r as usize]) >= 3,
        Bet::Full(three, two) => {
            debug_assert_ne!(three, two);
            popcount_of(h, masks::ALL_RANK[three as usize]) >= 3
                && popcount_of(h, masks::ALL_RANK[two as usize]) >= 2
        }
        Bet::Flush(s) => popcount_of(h, masks::ALL_SUIT[s as usize]) >= 5,
        Bet::Quads(r) => popcount_of(h, masks::ALL_RANK[r as usize]) >= 4,
        Bet::Poker(s) => {
            let small = masks::SMALL_POKER[s as usize];
            let royal = masks::ROYAL_POKER[s as usize];
            (h & small) == small || (h & royal) == royal
        }
        Bet::RoyalPoker(s) => {
            let royal = masks::ROYAL_POKER[s as usize];
            (h & royal) == royal
        }
        Bet::Check => return Err(Error::InvalidBet),
    };
    Ok(satisfied)
}
