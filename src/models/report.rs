//! Stats report
//!
//! JSON body printed by the `STATS` command.

use serde::Serialize;

use crate::cache::CacheStats;

/// Point-in-time view of the cache counters.
#[derive(Debug, Clone, Serialize)]
pub struct StatsReport {
    /// Raw counters
    #[serde(flatten)]
    pub stats: CacheStats,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
    /// Report time in RFC 3339
    pub timestamp: String,
}

impl StatsReport {
    /// Builds a report stamped with the current time.
    pub fn new(stats: CacheStats) -> Self {
        let hit_rate = stats.hit_rate();
        Self {
            stats,
            hit_rate,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_report_hit_rate() {
        let stats = CacheStats {
            hits: 80,
            misses: 20,
            evictions: 5,
            expirations: 0,
            total_entries: 100,
        };
        let report = StatsReport::new(stats);
        assert!((report.hit_rate - 0.8).abs() < 0.001);
    }

    #[test]
    fn test_stats_report_serialize_flat() {
        let report = StatsReport::new(CacheStats::new());
        let json: serde_json::Value = serde_json::to_value(&report).unwrap();

        assert_eq!(json["hits"], 0);
        assert_eq!(json["total_entries"], 0);
        assert_eq!(json["hit_rate"], 0.0);
        assert!(json["timestamp"].as_str().is_some());
    }
}
