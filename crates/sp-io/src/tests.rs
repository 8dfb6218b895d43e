//! Unit tests for sp-io.

#[cfg(test)]
mod helpers {
    use std::io::Cursor;

    use sp_network::RoadNetwork;

    use crate::{LoadOptions, load_network_reader};

    pub const NODES: &str = "\
id,name,lat,lon
10,Majestic,12.9767,77.5713
20,\"Shivajinagar, Bus Stand\",12.9857,77.6057
30,MG Road,12.9756,77.6066
40,Indiranagar,12.9784,77.6408
";

    /// Majestic → MG Road → Indiranagar is the fast way; the Shivajinagar
    /// leg is a longer alternative.
    pub const EDGES: &str = "\
u,v,distance_m,freeflow_time_s,road_quality,safety_index,edge_id
10,30,3500,420,10,10,1
30,40,3800,480,10,10,2
10,20,3700,450,10,10,3
20,40,4200,510,10,10,4
";

    pub fn load(bidirectional: bool) -> RoadNetwork {
        load_network_reader(
            Cursor::new(NODES),
            Cursor::new(EDGES),
            LoadOptions { bidirectional },
        )
        .unwrap()
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use crate::{IoError, LoadOptions, load_network_csv, load_network_reader};

    use super::helpers::{EDGES, NODES, load};

    #[test]
    fn loads_nodes_and_edges() {
        let net = load(false);
        assert_eq!(net.node_count(), 4);
        assert_eq!(net.edge_count(), 4);
        let mg = net.node_by_external_id(30).unwrap();
        assert_eq!(net.node_name(mg), "MG Road");
        assert_eq!(net.node_external[mg.index()], 30);
    }

    #[test]
    fn quoted_name_with_comma() {
        let net = load(false);
        let s = net.node_by_external_id(20).unwrap();
        assert_eq!(net.node_name(s), "Shivajinagar, Bus Stand");
    }

    #[test]
    fn bidirectional_adds_reverse_under_same_id() {
        let net = load(true);
        assert_eq!(net.edge_count(), 8);
        let both = net.edges_by_external_id(1);
        assert_eq!(both.len(), 2);
        let a = net.node_by_external_id(10).unwrap();
        let b = net.node_by_external_id(30).unwrap();
        assert_eq!(net.edges_between(b, a).len(), 1);
    }

    #[test]
    fn unknown_endpoint_rejected() {
        let edges = "u,v,distance_m,freeflow_time_s,road_quality,safety_index,edge_id\n10,99,100,10,5,5,7\n";
        let err = load_network_reader(Cursor::new(NODES), Cursor::new(edges), LoadOptions::default())
            .unwrap_err();
        assert!(matches!(err, IoError::UnknownNode { edge_id: 7, node: 99 }));
    }

    #[test]
    fn duplicate_node_rejected() {
        let nodes = "id,name,lat,lon\n1,A,0,0\n1,B,0,0\n";
        let err = load_network_reader(Cursor::new(nodes), Cursor::new(EDGES), LoadOptions::default())
            .unwrap_err();
        assert!(matches!(err, IoError::DuplicateNode(1)));
    }

    #[test]
    fn out_of_range_quality_rejected() {
        let edges = "u,v,distance_m,freeflow_time_s,road_quality,safety_index,edge_id\n10,30,100,10,11,5,5\n";
        let err = load_network_reader(Cursor::new(NODES), Cursor::new(edges), LoadOptions::default())
            .unwrap_err();
        assert!(matches!(err, IoError::InvalidEdge { edge_id: 5, .. }));
    }

    #[test]
    fn malformed_row_is_csv_error() {
        let edges = "u,v,distance_m,freeflow_time_s,road_quality,safety_index,edge_id\n10,30,far,10,5,5,5\n";
        let err = load_network_reader(Cursor::new(NODES), Cursor::new(edges), LoadOptions::default())
            .unwrap_err();
        assert!(matches!(err, IoError::Csv(_)));
    }

    #[test]
    fn from_files() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let nodes = dir.path().join("nodes.csv");
        let edges = dir.path().join("edges.csv");
        std::fs::write(&nodes, NODES).unwrap();
        std::fs::write(&edges, EDGES).unwrap();
        let net = load_network_csv(&nodes, &edges, LoadOptions::default()).unwrap();
        assert_eq!(net.node_count(), 4);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let missing = dir.path().join("nope.csv");
        let err = load_network_csv(&missing, &missing, LoadOptions::default()).unwrap_err();
        assert!(matches!(err, IoError::Io(_)));
    }
}

// ── Updates ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod updates {
    use std::io::Cursor;

    use sp_network::LiveCondition;

    use crate::{EdgeUpdate, apply_updates, load_updates_json, load_updates_reader, save_updates_json};

    #[test]
    fn missing_fields_default() {
        let json = r#"{ "1": { "blocked": true }, "2": {} }"#;
        let u = load_updates_reader(Cursor::new(json)).unwrap();
        assert!(u["1"].blocked);
        assert_eq!(u["1"].traffic_multiplier, 1.0);
        assert_eq!(u["2"], EdgeUpdate::default());
        assert_eq!(LiveCondition::from(u["2"]), LiveCondition::DEFAULT);
    }

    #[test]
    fn apply_covers_both_directions() {
        let mut net = super::helpers::load(true);
        let json = r#"{ "2": { "traffic_multiplier": 2.5, "rain_mm_hr": 4.0 } }"#;
        let u = load_updates_reader(Cursor::new(json)).unwrap();
        assert_eq!(apply_updates(&mut net, &u).unwrap(), 2);
        for &e in net.edges_by_external_id(2) {
            assert_eq!(net.condition(e).traffic_multiplier, 2.5);
            assert_eq!(net.condition(e).rainfall_mm_per_hour, 4.0);
        }
    }

    #[test]
    fn unknown_and_bad_keys_skipped() {
        let mut net = super::helpers::load(false);
        let json = r#"{ "999": { "blocked": true }, "abc": { "blocked": true }, "1": { "blocked": true } }"#;
        let u = load_updates_reader(Cursor::new(json)).unwrap();
        assert_eq!(apply_updates(&mut net, &u).unwrap(), 1);
        assert_eq!(net.conditions().len(), 1);
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("updates.json");
        let json = r#"{ "3": { "traffic_multiplier": 1.75, "road_quality_adjust": -1.5 } }"#;
        let u = load_updates_reader(Cursor::new(json)).unwrap();
        save_updates_json(&path, &u).unwrap();
        assert_eq!(load_updates_json(&path).unwrap(), u);
    }
}

// ── Resolver ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod resolver {
    use crate::{IoError, resolve_place};

    #[test]
    fn exact_name() {
        let net = super::helpers::load(false);
        let id = resolve_place(&net, "MG Road").unwrap();
        assert_eq!(net.node_name(id), "MG Road");
    }

    #[test]
    fn partial_case_insensitive() {
        let net = super::helpers::load(false);
        let id = resolve_place(&net, "  shivaji ").unwrap();
        assert_eq!(net.node_external[id.index()], 20);
    }

    #[test]
    fn coordinates_snap() {
        let net = super::helpers::load(false);
        let id = resolve_place(&net, "12.979, 77.640").unwrap();
        assert_eq!(net.node_name(id), "Indiranagar");
    }

    #[test]
    fn unresolved() {
        let net = super::helpers::load(false);
        assert!(matches!(resolve_place(&net, "Atlantis"), Err(IoError::UnresolvedPlace(_))));
        assert!(matches!(resolve_place(&net, "   "), Err(IoError::UnresolvedPlace(_))));
    }
}

// ── Writer ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod writer {
    use sp_core::AdvisorConfig;
    use sp_route::RouteAdvisor;

    use crate::{PathDocument, render_report, resolve_place, write_path_json};

    fn advise() -> (sp_network::RoadNetwork, sp_route::Advisory) {
        let mut net = super::helpers::load(false);
        let from = resolve_place(&net, "Majestic").unwrap();
        let to = resolve_place(&net, "Indiranagar").unwrap();
        let advisory = RouteAdvisor::new(Default::default()).advise(&mut net, from, to, 3).unwrap();
        (net, advisory)
    }

    #[test]
    fn document_fields() {
        let (net, advisory) = advise();
        let doc = PathDocument::from_advisory(&net, &advisory, &AdvisorConfig::default());
        assert_eq!(doc.routes.len(), 2);

        let best = &doc.routes[0];
        assert_eq!(best.id, 0);
        assert_eq!(best.rank, 1);
        assert_eq!(best.hops, 2);
        assert_eq!(best.distance_m, 7_300.0);
        // 420 s + 480 s
        assert_eq!(best.duration_min, 15);
        assert!(best.explanation.is_none());
        let names: Vec<_> = best.points.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Majestic", "MG Road", "Indiranagar"]);
        assert_eq!(best.points[0].lat, 12.9767);

        let alt = &doc.routes[1];
        assert_eq!(alt.rank, 2);
        assert!(alt.explanation.as_deref().unwrap().starts_with("Longer than best by 0.60 km"));
    }

    #[test]
    fn duration_falls_back_to_assumed_speed() {
        use sp_core::GeoPoint;
        use sp_network::{EdgeAttrs, RoadNetworkBuilder};

        let mut b = RoadNetworkBuilder::new();
        let a = b.add_node("A", GeoPoint::new(0.0, 0.0));
        let c = b.add_node("B", GeoPoint::new(0.0, 0.05));
        b.add_directed_edge(a, c, EdgeAttrs::neutral(5_000.0));
        let mut net = b.build();
        let advisory = RouteAdvisor::new(Default::default()).advise(&mut net, a, c, 1).unwrap();
        let doc = PathDocument::from_advisory(&net, &advisory, &AdvisorConfig::default());
        assert_eq!(doc.routes[0].duration_min, 6);
    }

    #[test]
    fn json_written_and_readable() {
        let (net, advisory) = advise();
        let doc = PathDocument::from_advisory(&net, &advisory, &AdvisorConfig::default());
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("path.json");
        write_path_json(&path, &doc).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let routes = value["routes"].as_array().unwrap();
        assert_eq!(routes.len(), 2);
        assert!(routes[0].get("explanation").is_none());
        assert!(routes[1]["explanation"].is_string());
        assert_eq!(routes[0]["points"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn report_lists_routes() {
        let (net, advisory) = advise();
        let report = render_report(&net, &advisory);
        assert!(report.starts_with("Top 2 routes from Majestic -> Indiranagar:"));
        assert!(report.contains("1) Distance: 7.30 km | Hops: 2 | Path: Majestic -> MG Road -> Indiranagar"));
        assert!(report.contains("Chosen as BEST route."));
        assert!(report.contains("Why not preferred: Longer than best by 0.60 km"));
    }

    #[test]
    fn report_for_no_path() {
        let mut net = super::helpers::load(false);
        let from = resolve_place(&net, "Indiranagar").unwrap();
        let to = resolve_place(&net, "Majestic").unwrap();
        let advisory = RouteAdvisor::new(Default::default()).advise(&mut net, from, to, 3).unwrap();
        assert_eq!(render_report(&net, &advisory), "No path found from Indiranagar to Majestic\n");
    }
}

// ── Perturber ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod perturb {
    use std::io::Cursor;

    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use crate::{Updates, load_updates_reader, perturb_updates};

    fn sample() -> Updates {
        load_updates_reader(Cursor::new(r#"{ "1": {}, "2": {}, "3": {}, "4": {} }"#)).unwrap()
    }

    #[test]
    fn values_in_range_and_rounded() {
        let mut u = sample();
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..50 {
            perturb_updates(&mut u, 3, &mut rng);
        }
        for e in u.values() {
            assert!((1.0..=3.0).contains(&e.traffic_multiplier));
            assert!((-2.0..=1.0).contains(&e.road_quality_adjust));
            assert!((0.0..=12.0).contains(&e.rain_mm_hr));
            for x in [e.traffic_multiplier, e.road_quality_adjust, e.rain_mm_hr] {
                assert!(((x * 100.0).round() - x * 100.0).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn keys_unchanged() {
        let mut u = sample();
        let touched = perturb_updates(&mut u, 5, &mut SmallRng::seed_from_u64(1));
        assert_eq!(touched.len(), 5);
        assert_eq!(u.len(), 4);
        assert!(touched.iter().all(|k| u.contains_key(k)));
    }

    #[test]
    fn seeded_is_deterministic() {
        let mut a = sample();
        let mut b = sample();
        perturb_updates(&mut a, 3, &mut SmallRng::seed_from_u64(42));
        perturb_updates(&mut b, 3, &mut SmallRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn empty_feed_is_noop() {
        let mut u = Updates::new();
        assert!(perturb_updates(&mut u, 3, &mut SmallRng::seed_from_u64(0)).is_empty());
    }
}
