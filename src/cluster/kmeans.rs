//! Lloyd's k-means over [`ClusterPoint`]s with L1 distance, matching the
//! seeding/termination rules fixed by the build contract.

use super::point::ClusterPoint;
use rand::Rng;

/// All points assigned to one centroid, the centroid itself, and the cumulative
/// block-size prefix used by the sampler's binary search.
#[derive(Debug, Default)]
pub struct Cluster {
    pub centers: Vec<ClusterPoint>,
    pub blocks: Vec<Vec<ClusterPoint>>,
    pub prefix_sums: Vec<u64>,
}

impl Cluster {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty() || self.prefix_sums.last().copied().unwrap_or(0) == 0
    }

    pub fn total_points(&self) -> u64 {
        self.prefix_sums.last().copied().unwrap_or(0)
    }

    fn rebuild_prefix_sums(&mut self) {
        let mut running = 0u64;
        self.prefix_sums = self
            .blocks
            .iter()
            .map(|block| {
                running += block.len() as u64;
                running
            })
            .collect();
    }
}

fn nearest(centers: &[ClusterPoint], point: &ClusterPoint) -> usize {
    centers
        .iter()
        .enumerate()
        .map(|(i, c)| (i, point.distance(c)))
        .min_by(|(_, d1), (_, d2)| d1.partial_cmp(d2).unwrap())
        .map(|(i, _)| i)
        .expect("at least one centroid")
}

/// Builds a [`Cluster`] for one `(own_size, opp_size)` parameterization.
///
/// `data` is the full point set for this parameterization; `k` is the
/// target centroid count; `t` is the maximum iteration count. When the
/// number of distinct feature vectors in `data` is `<= k`, the unique
/// vectors themselves seed the centroids (`k_eff = unique count`);
/// otherwise `k` random centroids are seeded with coordinates drawn
/// uniformly from `[0, 1]`.
pub fn build(data: Vec<ClusterPoint>, k: usize, t: usize, rng: &mut impl Rng) -> Cluster {
    use std::collections::BTreeSet;

    if data.is_empty() {
        return Cluster::default();
    }

    let unique: BTreeSet<[u64; crate::cards::bet::BET_NB]> = data
        .iter()
        .map(|p| p.features.map(f64::to_bits))
        .collect();
    log::debug!(
        "kmeans seed: {} points, {} unique feature vectors, k={}",
        data.len(),
        unique.len(),
        k
    );

    let mut centers: Vec<ClusterPoint> = if unique.len() <= k {
        unique
            .into_iter()
            .map(|bits| ClusterPoint::synthetic(bits.map(f64::from_bits)))
            .collect()
    } else {
        (0..k)
            .map(|_| {
                let mut features = [0.0; crate::cards::bet::BET_NB];
                for f in features.iter_mut() {
                    *f = rng.random_range(0.0..1.0);
                }
                ClusterPoint::synthetic(features)
            })
            .collect()
    };
    let k_eff = centers.len();

    for iter in 0..t {
        let mut sums = vec![[0.0f64; crate::cards::bet::BET_NB]; k_eff];
        let mut counts = vec![0u64; k_eff];
        let mut cum_error = 0.0;

        for point in &data {
            let nearest_idx = nearest(&centers, point);
            cum_error += point.distance(&centers[nearest_idx]);
            counts[nearest_idx] += 1;
            for (sum, feature) in sums[nearest_idx].iter_mut().zip(point.features.iter()) {
                *sum += feature;
            }
        }

        for (idx, center) in centers.iter_mut().enumerate() {
            if counts[idx] == 0 {
                // Determinism mandate: an empty centroid is left unchanged
                // rather than reseeded.
                continue;
            }
            for (feature, sum) in center.features.iter_mut().zip(sums[idx].iter()) {
                *feature = sum / counts[idx] as f64;
            }
        }

        log::debug!("kmeans iter {}: cumulative error {:.6}", iter, cum_error);
        if cum_error < 1e-7 {
            break;
        }
    }

    let mut blocks = vec![Vec::new(); k_eff];
    for point in data {
        let nearest_idx = nearest(&centers, &point);
        blocks[nearest_idx].push(point);
    }

    let mut cluster = Cluster {
        centers,
        blocks,
        prefix_sums: Vec::new(),
    };
    cluster.rebuild_prefix_sums();
    cluster
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn point(tag: f64) -> ClusterPoint {
        let mut features = [0.0; crate::cards::bet::BET_NB];
        features[0] = tag;
        ClusterPoint {
            features,
            hand_index: tag as i32,
            opp_size: 0,
        }
    }

    #[test]
    fn empty_input_yields_empty_cluster() {
        let mut rng = SmallRng::seed_from_u64(2137);
        let cluster = build(vec![], 10, 5, &mut rng);
        assert!(cluster.is_empty());
        assert_eq!(cluster.total_points(), 0);
    }

    #[test]
    fn fewer_unique_points_than_k_seeds_exactly_from_data() {
        let mut rng = SmallRng::seed_from_u64(2137);
        let data: Vec<ClusterPoint> = (0..5).map(|i| point(i as f64)).collect();
        let cluster = build(data, 100, 5, &mut rng);
        assert_eq!(cluster.centers.len(), 5);
        assert_eq!(cluster.total_points(), 5);
    }

    #[test]
    fn prefix_sums_match_total_point_count() {
        let mut rng = SmallRng::seed_from_u64(2137);
        let data: Vec<ClusterPoint> = (0..40).map(|i| point((i % 7) as f64)).collect();
        let cluster = build(data, 7, 10, &mut rng);
        let total: usize = cluster.blocks.iter().map(|b| b.len()).sum();
        assert_eq!(cluster.prefix_sums.last().copied().unwrap(), total as u64);
    }
}
