//! Hand-cluster abstraction (`C5`): k-means over completion-count feature
//! vectors, independently per `(own_size, opp_size)`, plus a uniform sampler
//! over disjoint `(own_hand, opp_hand)` pairs for the CFR trainer.

pub mod kmeans;
pub mod persistence;
pub mod point;
pub mod sample;

use crate::cards::bet::BET_NB;
use crate::cards::{CARD_NB, HAND_NB, HAND_SZ};
use crate::error::Error;
use crate::error::Result;
use crate::index;
use crate::probability;
use kmeans::Cluster;
use point::ClusterPoint;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use rayon::prelude::*;
use sample::GameSample;
use std::sync::OnceLock;

/// Deterministic RNG seed shared across every `(own_size, opp_size)` build.
const SEED: u64 = 2137;
/// Target centroid count, typical 4000-7000.
pub const K: usize = 4000;
/// Maximum k-means iterations per parameterization, typical 2-100.
pub const T: usize = 20;

const OPP_SIZES: usize = CARD_NB + 1;
const OWN_SIZES: usize = HAND_SZ + 1;

pub struct HandCluster {
    grid: Vec<Vec<Cluster>>,
}

impl HandCluster {
    /// Builds every `(own_size, opp_size)` cluster from a fully-built
    /// probability table. Pairs are independent (disjoint RNG streams keyed
    /// off `(own_size, opp_size)`), so the grid is built in parallel; the
    /// ordering otherwise has no bearing on the result.
    pub fn build() -> Self {
        log::info!(
            "building hand clusters: {} own-sizes x {} opp-sizes, k={}, t={}",
            OWN_SIZES,
            OPP_SIZES,
            K,
            T
        );
        let table = probability::table();
        let index = index::hand_index();

        let points_by_own_size: Vec<Vec<(usize, crate::cards::Hand)>> = (0..OWN_SIZES)
            .map(|own_size| {
                (0..HAND_NB)
                    .filter_map(|hand_ix| {
                        let hand = index.from_index(hand_ix).expect("dense index");
                        (hand.size() as usize == own_size).then_some((hand_ix, hand))
                    })
                    .collect()
            })
            .collect();

        let pairs: Vec<(usize, usize)> = (0..OWN_SIZES)
            .flat_map(|own_size| (0..OPP_SIZES).map(move |opp_size| (own_size, opp_size)))
            .collect();

        let built: Vec<((usize, usize), Cluster)> = pairs
            .into_par_iter()
            .map(|(own_size, opp_size)| {
                let cluster = if own_size + opp_size > CARD_NB {
                    Cluster::default()
                } else {
                    let data: Vec<ClusterPoint> = points_by_own_size[own_size]
                        .iter()
                        .map(|&(hand_ix, hand)| {
                            let mut features = [0.0; BET_NB];
                            for (bet_ix, feature) in features.iter_mut().enumerate() {
                                let bet = crate::cards::Bet::from_index(bet_ix as u8)
                                    .expect("0..BET_NB is always valid");
                                *feature = table
                                    .completion_count(bet, own_size + opp_size, hand)
                                    .expect("hand is always valid here") as f64;
                            }
                            ClusterPoint {
                                features,
                                hand_index: hand_ix as i32,
                                opp_size: opp_size as i32,
                            }
                        })
                        .collect();
                    log::debug!(
                        "own_size={} opp_size={}: {} points",
                        own_size,
                        opp_size,
                        data.len()
                    );
                    let mut rng = SmallRng::seed_from_u64(
                        SEED ^ (own_size as u64) << 8 ^ (opp_size as u64),
                    );
                    kmeans::build(data, K, T, &mut rng)
                };
                ((own_size, opp_size), cluster)
            })
            .collect();

        let mut flat: Vec<Option<Cluster>> = (0..OWN_SIZES * OPP_SIZES).map(|_| None).collect();
        for ((own_size, opp_size), cluster) in built {
            flat[own_size * OPP_SIZES + opp_size] = Some(cluster);
        }
        let grid: Vec<Vec<Cluster>> = (0..OWN_SIZES)
            .map(|own_size| {
                (0..OPP_SIZES)
                    .map(|opp_size| flat[own_size * OPP_SIZES + opp_size].take().unwrap())
                    .collect()
            })
            .collect();

        log::info!("hand clusters built");
        Self { grid }
    }

    fn cluster(&self, own_size: usize, opp_size: usize) -> Result<&Cluster> {
        self.grid
            .get(own_size)
            .and_then(|row| row.get(opp_size))
            .filter(|c| !c.is_empty())
            .ok_or_else(|| {
                Error::BuildFailure(format!(
                    "no cluster for own_size={} opp_size={}",
                    own_size, opp_size
                ))
            })
    }

    /// Draws a uniformly-weighted (by cluster mass) pair of disjoint hands,
    /// one of size `h1_size` and one of size `h2_size`.
    pub fn sample(&self, h1_size: usize, h2_size: usize) -> Result<GameSample> {
        let c1 = self.cluster(h1_size, h2_size)?;
        let c2 = self.cluster(h2_size, h1_size)?;
        let mut rng = rand::rng();
        loop {
            let (h1_block, h1_hand) = sample::sample_hand(c1, &mut rng)?;
            let (h2_block, h2_hand) = sample::sample_hand(c2, &mut rng)?;
            if !h1_hand.intersects(h2_hand) {
                return Ok(GameSample {
                    h1_hand,
                    h1_block,
                    h2_hand,
                    h2_block,
                });
            }
        }
    }
}

static CLUSTERS: OnceLock<HandCluster> = OnceLock::new();

pub fn clusters() -> &'static HandCluster {
    CLUSTERS.get_or_init(HandCluster::build)
}
