//! Bijection between every hand of size <= 6 and a dense integer index.
//!
//! This is the primary key every other table (`C4`, `C5`) is built around:
//! all 24-bit masks are swept in ascending numeric order and every mask with
//! popcount <= 6 is assigned the next index. `hand_to_index` is a flat 16 MiB
//! array (`2^24` entries) so lookups are O(1); `index_to_hand` is its inverse.

use crate::cards::hand::Hand;
use crate::cards::{CARD_NB, HAND_NB, HAND_SZ};
use crate::error::Error;
use crate::error::Result;
use std::sync::OnceLock;

/// Sentinel stored in `hand_to_index` for masks with popcount > HAND_SZ.
const SENTINEL: i32 = -1;

pub struct HandIndex {
    hand_to_index: Box<[i32]>,
    index_to_hand: Box<[u32]>,
}

impl HandIndex {
    fn build() -> Result<Self> {
        let universe = 1usize << CARD_NB;
        let mut hand_to_index = vec![SENTINEL; universe].into_boxed_slice();
        let mut index_to_hand = vec![0u32; HAND_NB].into_boxed_slice();
        let mut idx = 0usize;
        for mask in 0u32..(universe as u32) {
            if (mask.count_ones() as usize) <= HAND_SZ {
                hand_to_index[mask as usize] = idx as i32;
                index_to_hand[idx] = mask;
                idx += 1;
            }
        }
        if idx != HAND_NB {
            return Err(Error::BuildFailure(format!(
                "HAND_NB mismatch: generated {} hands, expected {}",
                idx, HAND_NB
            )));
        }
        log::info!("hand index built: {} hands indexed", idx);
        Ok(Self {
            hand_to_index,
            index_to_hand,
        })
    }

    /// `to_index(h) = -1` (returned as [`Error::InvalidHand`]) when
    /// `popcount(h) > HAND_SZ`.
    pub fn to_index(&self, hand: Hand) -> Result<usize> {
        let i = self.hand_to_index[u32::from(hand) as usize];
        if i < 0 {
            Err(Error::InvalidHand)
        } else {
            Ok(i as usize)
        }
    }

    pub fn from_index(&self, index: usize) -> Result<Hand> {
        self.index_to_hand
            .get(index)
            .copied()
            .map(Hand::from)
            .ok_or(Error::InvalidHand)
    }
}

static HAND_INDEX: OnceLock<HandIndex> = OnceLock::new();

/// Process-wide singleton accessor. The table is built at most once; all
/// callers after the first see the same fully-constructed, immutable table.
pub fn hand_index() -> &'static HandIndex {
    HAND_INDEX.get_or_init(|| HandIndex::build().expect("hand index invariant holds"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::card::Card;
    use crate::cards::rank::Rank;
    use crate::cards::suit::Suit;

    #[test]
    fn empty_hand_round_trips() {
        let table = hand_index();
        let idx = table.to_index(Hand::EMPTY).unwrap();
        assert_eq!(table.from_index(idx).unwrap(), Hand::EMPTY);
    }

    #[test]
    fn popcount_seven_is_invalid() {
        let table = hand_index();
        let h: Hand = [
            Card::new(Suit::C, Rank::Nine),
            Card::new(Suit::D, Rank::Nine),
            Card::new(Suit::H, Rank::Nine),
            Card::new(Suit::S, Rank::Nine),
            Card::new(Suit::C, Rank::Ten),
            Card::new(Suit::D, Rank::Ten),
            Card::new(Suit::H, Rank::Ten),
        ]
        .into_iter()
        .collect();
        assert!(table.to_index(h).is_err());
    }

    #[test]
    fn sampled_indices_round_trip() {
        let table = hand_index();
        for idx in [0usize, 1, 100, 5000, HAND_NB - 1] {
            let hand = table.from_index(idx).unwrap();
            assert_eq!(table.to_index(hand).unwrap(), idx);
        }
    }

    #[test]
    fn singleton_is_stable_across_calls() {
        let a = hand_index() as *const HandIndex;
        let b = hand_index() as *const HandIndex;
        assert_eq!(a, b);
    }
}
