//! Random obstacle grids for gridpath.

pub mod error;
pub mod mapgen;

pub use error::GenError;
pub use mapgen::{GenConfig, MapGen, Placement, obstacle_count};

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_round_trip() {
        let config = GenConfig {
            rows: 12,
            cols: 34,
            min_separation: 5,
            max_attempts: 77,
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: GenConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn config_fields_default() {
        let back: GenConfig = serde_json::from_str(r#"{"rows": 10}"#).unwrap();
        assert_eq!(back.rows, 10);
        assert_eq!(back.cols, GenConfig::default().cols);
    }
}
