//! Zeta-transform build and O(1) query for completion counts / probabilities.

use crate::cards::satisfies_bet;
use crate::cards::Bet;
use crate::cards::Hand;
use crate::cards::{CARD_NB, HAND_NB};
use crate::combinatorics;
use crate::error::Error;
use crate::error::Result;
use crate::index;
use indicatif::ParallelProgressIterator;
use indicatif::ProgressStyle;
use rayon::prelude::*;

const BET_NB: usize = crate::cards::bet::BET_NB;
const SIZES: usize = CARD_NB + 1;
const STRIDE: usize = SIZES * HAND_NB;

/// `P[bet][n][hand_index]`, flattened row-major into one allocation so the
/// persisted artifact can be memory-mapped directly.
pub struct ProbabilityTable {
    payload: Box<[i32]>,
}

impl ProbabilityTable {
    pub(crate) fn from_payload(payload: Box<[i32]>) -> Self {
        Self { payload }
    }

    pub(crate) fn payload(&self) -> &[i32] {
        &self.payload
    }

    /// Runs the full zeta-transform build: 68 bets (parallelized across
    /// workers), 25 target sizes, 24 zeta passes each over `2^24` masks.
    pub fn build() -> Self {
        log::info!(
            "building probability table: {} bets x {} sizes x {} hands",
            BET_NB,
            SIZES,
            HAND_NB
        );
        let style = ProgressStyle::with_template(
            "{msg} [{bar:40}] {pos}/{len} bets ({elapsed_precise})",
        )
        .unwrap();
        let per_bet: Vec<Vec<i32>> = (0..BET_NB)
            .into_par_iter()
            .progress_with_style(style)
            .map(Self::build_bet)
            .collect();

        let mut payload = vec![0i32; BET_NB * STRIDE].into_boxed_slice();
        for (bet, slice) in per_bet.into_iter().enumerate() {
            payload[bet * STRIDE..(bet + 1) * STRIDE].copy_from_slice(&slice);
        }
        log::info!("probability table built");
        Self { payload }
    }

    /// Fills the `(CARD_NB+1) x HAND_NB` slab for a single bet.
    fn build_bet(bet_idx: usize) -> Vec<i32> {
        let bet = Bet::from_index(bet_idx as u8).expect("0..BET_NB is always valid");
        let index = index::hand_index();
        let universe = 1usize << CARD_NB;
        let mut h = vec![0u32; universe];
        let mut slab = vec![0i32; STRIDE];

        for n in 0..SIZES {
            for mask in 0..universe {
                h[mask] = if mask.count_ones() as usize == n
                    && satisfies_bet(Hand::from(mask as u32), bet).unwrap_or(false)
                {
                    1
                } else {
                    0
                };
            }
            // Subset-sum-over-subsets (zeta) transform: bit loop outermost,
            // mask loop innermost, for sequential memory access.
            for bit in 0..CARD_NB {
                for mask in 0..universe {
                    if (mask >> bit) & 1 == 0 {
                        h[mask] += h[mask ^ (1 << bit)];
                    }
                }
            }
            for hand_ix in 0..HAND_NB {
                let hand = index.from_index(hand_ix).expect("dense index");
                if hand.size() as usize <= n {
                    slab[n * HAND_NB + hand_ix] = h[u32::from(hand) as usize] as i32;
                }
            }
        }
        log::debug!("bet {} ({}) done", bet_idx, bet);
        slab
    }

    /// `P[bet, n, to_index(hand)]`. Fails with [`Error::OutOfRange`] if
    /// `n > CARD_NB`, [`Error::InvalidBet`] for `Bet::Check`, or
    /// [`Error::InvalidHand`] if `hand`'s popcount exceeds 6.
    pub fn completion_count(&self, bet: Bet, n: usize, hand: Hand) -> Result<i32> {
        if n > CARD_NB {
            return Err(Error::OutOfRange {
                what: "n",
                value: n as i64,
            });
        }
        let bet_idx = bet.to_index() as usize;
        if bet_idx >= BET_NB {
            return Err(Error::InvalidBet);
        }
        let hand_ix = index::hand_index().to_index(hand)?;
        Ok(self.payload[bet_idx * STRIDE + n * HAND_NB + hand_ix])
    }

    /// `completion_count(bet, n, hand) * I[24 - popcount(hand), n - popcount(hand)]`.
    /// Always `0.0` for `Bet::Check`, and whenever `popcount(hand) > n` (the
    /// completion count is necessarily zero, so the ratio is defined as zero
    /// rather than dividing by a binomial coefficient with a negative lower
    /// index).
    pub fn probability(&self, bet: Bet, n: usize, hand: Hand) -> Result<f64> {
        if matches!(bet, Bet::Check) {
            return Ok(0.0);
        }
        let in_hand = hand.size() as usize;
        if in_hand > n {
            self.completion_count(bet, n, hand)?;
            return Ok(0.0);
        }
        let comp = self.completion_count(bet, n, hand)?;
        let inv = combinatorics::comb().get_inv(CARD_NB - in_hand, n - in_hand)?;
        Ok(comp as f64 * inv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::rank::Rank;
    use std::sync::OnceLock;

    // Building the full table is expensive; share one instance across the
    // scenarios below rather than rebuilding it per test.
    fn table() -> &'static ProbabilityTable {
        static TABLE: OnceLock<ProbabilityTable> = OnceLock::new();
        TABLE.get_or_init(ProbabilityTable::build)
    }

    #[test]
    fn s5_high_nine_single_card_completions() {
        assert_eq!(
            table().completion_count(Bet::High(Rank::Nine), 1, Hand::EMPTY).unwrap(),
            4
        );
    }

    #[test]
    fn s6_quads_king_needs_all_four() {
        assert_eq!(
            table().completion_count(Bet::Quads(Rank::King), 4, Hand::EMPTY).unwrap(),
            1
        );
    }

    #[test]
    fn s7_flush_needs_five_cards() {
        use crate::cards::suit::Suit;
        assert_eq!(
            table().completion_count(Bet::Flush(Suit::C), 3, Hand::EMPTY).unwrap(),
            0
        );
    }

    #[test]
    fn s8_high_straight_saturates_full_deck() {
        assert_eq!(
            table().probability(Bet::HighStraight, 24, Hand::EMPTY).unwrap(),
            1.0
        );
    }

    #[test]
    fn check_probability_is_always_zero() {
        assert_eq!(table().probability(Bet::Check, 10, Hand::EMPTY).unwrap(), 0.0);
    }

    #[test]
    fn out_of_range_n_errors() {
        assert!(table().completion_count(Bet::High(Rank::Nine), 25, Hand::EMPTY).is_err());
    }

    #[test]
    fn probability_is_bounded() {
        for n in 0..=24 {
            let p = table().probability(Bet::Pair(Rank::Ace), n, Hand::EMPTY).unwrap();
            assert!((0.0..=1.0).contains(&p));
        }
    }
}
