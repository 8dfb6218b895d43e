//! Unit tests for sp-core primitives.

#[cfg(test)]
mod ids {
    use crate::{EdgeId, NodeId};

    #[test]
    fn index_roundtrip() {
        let id = NodeId(42);
        assert_eq!(id.index(), 42);
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(NodeId::INVALID.0, u32::MAX);
        assert_eq!(EdgeId::INVALID.0, u32::MAX);
        assert_eq!(NodeId::default(), NodeId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(EdgeId(7).to_string(), "EdgeId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::GeoPoint;

    #[test]
    fn parse_pair() {
        assert_eq!(
            GeoPoint::parse_pair(" 12.9352 , 77.6245 "),
            Some(GeoPoint::new(12.9352, 77.6245))
        );
        assert_eq!(GeoPoint::parse_pair("MG Road"), None);
        assert_eq!(GeoPoint::parse_pair("12.0"), None);
        assert_eq!(GeoPoint::parse_pair("95.0, 10.0"), None);
    }
}

#[cfg(test)]
mod config {
    use crate::{AdvisorConfig, CoreError, CostWeights};

    #[test]
    fn defaults_match_documented_weights() {
        let w = CostWeights::default();
        assert_eq!(w.time, 1.0);
        assert_eq!(w.traffic, 300.0);
        assert_eq!(w.weather, 250.0);
        assert_eq!(w.road_quality, 200.0);
        assert_eq!(w.safety, 180.0);
    }

    #[test]
    fn empty_toml_gives_defaults() {
        let c = AdvisorConfig::from_toml_str("").unwrap();
        assert_eq!(c, AdvisorConfig::default());
    }

    #[test]
    fn partial_weights_override() {
        let c = AdvisorConfig::from_toml_str("k = 5\n[weights]\ntraffic = 10.0\n").unwrap();
        assert_eq!(c.k, 5);
        assert_eq!(c.weights.traffic, 10.0);
        assert_eq!(c.weights.safety, 180.0);
    }

    #[test]
    fn rejects_zero_k() {
        let err = AdvisorConfig::from_toml_str("k = 0").unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
    }

    #[test]
    fn rejects_negative_weight() {
        let err = AdvisorConfig::from_toml_str("[weights]\nweather = -1.0").unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(matches!(
            AdvisorConfig::from_toml_str("k = ="),
            Err(CoreError::Parse(_))
        ));
    }

    #[test]
    fn duration_estimate_at_default_speed() {
        let c = AdvisorConfig::default();
        // 50 km/h ≈ 833 m/min
        assert_eq!(c.estimate_minutes(5_000.0), 6);
        assert_eq!(c.estimate_minutes(0.0), 0);
    }
}
