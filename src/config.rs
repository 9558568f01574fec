//! Analysis configuration.
//!
//! Two of the analyses ship with more than one algorithm. The reference algorithms are simple
//! and directly mirror the definitions they compute; the alternatives trade that simplicity for
//! asymptotic speed. All strategies of one analysis produce identical results, so the choice
//! only affects running time.
//!
//! # Presets
//!
//! - [`AnalysisConfig::reference`] - Linear-scan Dijkstra and brute-force articulation probing
//! - [`AnalysisConfig::fast`] - Binary-heap Dijkstra and low-link articulation detection
//!
//! # Examples
//!
//! ```rust
//! use std::str::FromStr;
//!
//! use graphscope::config::{AnalysisConfig, ArticulationStrategy, ShortestPathStrategy};
//!
//! let config = AnalysisConfig {
//!     shortest_path: ShortestPathStrategy::from_str("binary-heap").unwrap(),
//!     ..AnalysisConfig::default()
//! };
//!
//! assert_eq!(config.articulation, ArticulationStrategy::BruteForce);
//! assert_eq!(config.shortest_path.to_string(), "binary-heap");
//! ```

use strum::{Display, EnumIter, EnumString};

/// Algorithm used to compute single-source shortest paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum ShortestPathStrategy {
    /// Dijkstra with a linear scan for the closest unsettled vertex. O(V²).
    ///
    /// Among several vertices at the same minimal distance the one enumerated last is settled
    /// first.
    #[default]
    LinearScan,

    /// Dijkstra with a lazy-deletion binary heap. O((V + E) log V).
    BinaryHeap,
}

/// Algorithm used to find articulation points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum ArticulationStrategy {
    /// Remove each vertex from a copy of the graph and recount components. O(V·(V + E)).
    #[default]
    BruteForce,

    /// Single depth-first pass tracking discovery times and low points. O(V + E).
    LowLink,
}

/// Strategy selection for [`GraphAnalyzer`](crate::analyzer::GraphAnalyzer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AnalysisConfig {
    /// Algorithm for [`dijkstra_with`](crate::algorithms::dijkstra_with)
    pub shortest_path: ShortestPathStrategy,
    /// Algorithm for [`articulation_points_with`](crate::algorithms::articulation_points_with)
    pub articulation: ArticulationStrategy,
}

impl AnalysisConfig {
    /// Creates the reference configuration, identical to [`AnalysisConfig::default`].
    #[must_use]
    pub fn reference() -> Self {
        Self::default()
    }

    /// Creates a configuration selecting the asymptotically fastest strategies.
    #[must_use]
    pub fn fast() -> Self {
        Self {
            shortest_path: ShortestPathStrategy::BinaryHeap,
            articulation: ArticulationStrategy::LowLink,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_default_is_reference() {
        let config = AnalysisConfig::default();
        assert_eq!(config, AnalysisConfig::reference());
        assert_eq!(config.shortest_path, ShortestPathStrategy::LinearScan);
        assert_eq!(config.articulation, ArticulationStrategy::BruteForce);
    }

    #[test]
    fn test_fast_preset() {
        let config = AnalysisConfig::fast();
        assert_eq!(config.shortest_path, ShortestPathStrategy::BinaryHeap);
        assert_eq!(config.articulation, ArticulationStrategy::LowLink);
    }

    #[test]
    fn test_strategy_names() {
        assert_eq!(ShortestPathStrategy::LinearScan.to_string(), "linear-scan");
        assert_eq!(ShortestPathStrategy::BinaryHeap.to_string(), "binary-heap");
        assert_eq!(ArticulationStrategy::BruteForce.to_string(), "brute-force");
        assert_eq!(ArticulationStrategy::LowLink.to_string(), "low-link");
    }

    #[test]
    fn test_strategy_parse_roundtrip() {
        for strategy in ShortestPathStrategy::iter() {
            let parsed = ShortestPathStrategy::from_str(&strategy.to_string()).unwrap();
            assert_eq!(parsed, strategy);
        }
        for strategy in ArticulationStrategy::iter() {
            let parsed = ArticulationStrategy::from_str(&strategy.to_string()).unwrap();
            assert_eq!(parsed, strategy);
        }
    }

    #[test]
    fn test_strategy_parse_unknown() {
        assert!(ShortestPathStrategy::from_str("bellman-ford").is_err());
        assert!(ArticulationStrategy::from_str("").is_err());
    }

    #[test]
    fn test_strategy_counts() {
        assert_eq!(ShortestPathStrategy::iter().count(), 2);
        assert_eq!(ArticulationStrategy::iter().count(), 2);
    }
}
