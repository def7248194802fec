use itertools::Itertools;

use crate::config::{ClusterStrategy, DetectorConfig, PRINT_CLUSTERING};
use crate::error::{SrError, SrResult};
use crate::utils::maths_utils::{mean, relative_distance};

/// Members of one cluster, in the order they joined (ascending).
#[derive(Debug, Clone)]
struct PriceCluster {
    members: Vec<f64>,
    sum: f64,
}

impl PriceCluster {
    fn new(price: f64) -> Self {
        Self {
            members: vec![price],
            sum: price,
        }
    }

    fn push(&mut self, price: f64) {
        self.members.push(price);
        self.sum += price;
    }

    fn first_member(&self) -> f64 {
        self.members[0]
    }

    fn centroid(&self) -> f64 {
        self.sum / self.members.len() as f64
    }

    fn reference(&self, strategy: ClusterStrategy) -> f64 {
        match strategy {
            ClusterStrategy::FirstMember => self.first_member(),
            ClusterStrategy::Centroid => self.centroid(),
        }
    }
}

/// Greedy proximity clustering of zone prices into representative levels.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelClusterer {
    cluster_pct: f64,
    strategy: ClusterStrategy,
}

impl LevelClusterer {
    pub fn new(cluster_pct: f64, strategy: ClusterStrategy) -> Self {
        Self {
            cluster_pct,
            strategy,
        }
    }

    pub fn from_config(config: &DetectorConfig) -> Self {
        Self::new(config.cluster_pct, config.cluster_strategy)
    }

    /// Merges prices lying within `cluster_pct` of an existing cluster's reference
    /// and returns each cluster's mean, ascending.
    ///
    /// Prices are visited in ascending order and each joins the FIRST cluster whose
    /// reference passes the test. With `FirstMember` the reference never moves, so
    /// cluster boundaries depend on where each cluster happened to start.
    ///
    /// Every price must be finite and strictly positive, since the relative
    /// distance divides by the reference.
    pub fn cluster(&self, prices: &[f64]) -> SrResult<Vec<f64>> {
        if prices.is_empty() {
            return Ok(Vec::new());
        }

        if let Some(&bad) = prices.iter().find(|p| !p.is_finite() || **p <= 0.0) {
            return Err(SrError::NonPositivePrice(bad));
        }

        let mut clusters: Vec<PriceCluster> = Vec::new();

        for price in prices.iter().copied().sorted_by(f64::total_cmp) {
            let home = clusters.iter_mut().find(|c| {
                relative_distance(c.reference(self.strategy), price) < self.cluster_pct
            });
            match home {
                Some(cluster) => cluster.push(price),
                None => clusters.push(PriceCluster::new(price)),
            }
        }

        if PRINT_CLUSTERING {
            for c in &clusters {
                log::info!(
                    "   cluster from {:.2}: {} members, mean {:.2}",
                    c.first_member(),
                    c.members.len(),
                    mean(&c.members)
                );
            }
        }

        Ok(clusters
            .iter()
            .map(|c| mean(&c.members))
            .sorted_by(f64::total_cmp)
            .collect())
    }
}

impl Default for LevelClusterer {
    fn default() -> Self {
        Self::from_config(&DetectorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert!(LevelClusterer::default().cluster(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_close_prices_merge() {
        let levels = LevelClusterer::default()
            .cluster(&[100.0, 100.1, 100.05])
            .unwrap();
        assert_eq!(levels.len(), 1);
        assert!((levels[0] - 100.05).abs() < 1e-9);
    }

    #[test]
    fn test_distant_prices_split() {
        let levels = LevelClusterer::default().cluster(&[105.0, 100.0]).unwrap();
        assert_eq!(levels, vec![100.0, 105.0]);
    }

    #[test]
    fn test_output_is_ascending_regardless_of_input_order() {
        let levels = LevelClusterer::default()
            .cluster(&[300.0, 100.0, 200.0, 100.1, 300.2])
            .unwrap();
        assert_eq!(levels.len(), 3);
        assert!(levels.windows(2).all(|w| w[0] < w[1]));
        assert!((levels[0] - 100.05).abs() < 1e-9);
        assert!((levels[2] - 300.1).abs() < 1e-9);
    }

    #[test]
    fn test_first_member_reference_does_not_drift() {
        // 100.21 is 0.21% from the first member, so it starts a new cluster
        // even though it is within 0.2% of the running mean.
        let prices = [100.0, 100.1, 100.21, 100.25];

        let first_member = LevelClusterer::new(0.002, ClusterStrategy::FirstMember)
            .cluster(&prices)
            .unwrap();
        assert_eq!(first_member.len(), 2);
        assert!((first_member[0] - 100.05).abs() < 1e-9);
        assert!((first_member[1] - 100.23).abs() < 1e-9);

        let centroid = LevelClusterer::new(0.002, ClusterStrategy::Centroid)
            .cluster(&prices)
            .unwrap();
        assert_eq!(centroid.len(), 1);
        assert!((centroid[0] - 100.14).abs() < 1e-9);
    }

    #[test]
    fn test_non_positive_price_is_rejected() {
        let err = LevelClusterer::default().cluster(&[0.0, 100.0]).unwrap_err();
        assert_eq!(err, SrError::NonPositivePrice(0.0));

        assert!(LevelClusterer::default().cluster(&[-5.0]).is_err());
        assert!(LevelClusterer::default().cluster(&[f64::NAN]).is_err());
    }
}
