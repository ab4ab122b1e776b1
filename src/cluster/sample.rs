use super::kmeans::Cluster;
use crate::cards::Hand;
use crate::error::Error;
use crate::error::Result;
use crate::index;
use rand::Rng;

/// A pair of hands to train the CFR learner on: `h1` and `h2` are drawn
/// independently (proportional to cluster block mass), rejected and
/// redrawn while they share a card.
#[derive(Debug, Clone, Copy)]
pub struct GameSample {
    pub h1_hand: Hand,
    pub h1_block: usize,
    pub h2_hand: Hand,
    pub h2_block: usize,
}

/// Draws one `(block, hand)` pair from `cluster`, weighted by block mass.
pub(super) fn sample_hand(cluster: &Cluster, rng: &mut impl Rng) -> Result<(usize, Hand)> {
    let total = cluster.total_points();
    if total == 0 {
        return Err(Error::BuildFailure(
            "sampled from a cluster with no points".into(),
        ));
    }
    let draw = rng.random_range(0..total);
    let block = cluster
        .prefix_sums
        .partition_point(|&cumulative| cumulative <= draw);
    let base = if block == 0 {
        0
    } else {
        cluster.prefix_sums[block - 1]
    };
    let offset = (draw - base) as usize;
    let point = &cluster.blocks[block][offset];
    let hand = index::hand_index().from_index(point.hand_index as usize)?;
    Ok((block, hand))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::point::ClusterPoint;

    fn cluster_of_single_hand(hand_index: usize) -> Cluster {
        let point = ClusterPoint {
            features: [0.0; crate::cards::bet::BET_NB],
            hand_index: hand_index as i32,
            opp_size: 0,
        };
        let mut cluster = Cluster {
            centers: vec![point.clone()],
            blocks: vec![vec![point]],
            prefix_sums: vec![1],
        };
        cluster.prefix_sums = vec![1];
        cluster
    }

    #[test]
    fn sample_hand_from_singleton_cluster_is_deterministic() {
        use rand::rngs::SmallRng;
        use rand::SeedableRng;
        let cluster = cluster_of_single_hand(0);
        let mut rng = SmallRng::seed_from_u64(2137);
        let (block, hand) = sample_hand(&cluster, &mut rng).unwrap();
        assert_eq!(block, 0);
        assert_eq!(hand, Hand::EMPTY);
    }
}
