//! Built-in Bangalore demo network.
//!
//! 20 well-known localities with approximate coordinates, joined by two-way
//! roads whose lengths are rough driving distances.  Edges carry no travel
//! time or quality data, so every road's cost is its length until live
//! conditions are applied.

use sp_core::GeoPoint;
use sp_network::{EdgeAttrs, RoadNetwork, RoadNetworkBuilder};

const LOCALITIES: [(&str, f64, f64); 20] = [
    ("Koramangala",     12.9352, 77.6245),
    ("Indiranagar",     12.9719, 77.6412),
    ("MG Road",         12.9740, 77.6066),
    ("Whitefield",      12.9699, 77.7490),
    ("Silk Board",      12.9250, 77.6175),
    ("Electronic City", 12.8431, 77.6651),
    ("Jayanagar",       12.9250, 77.5938),
    ("JP Nagar",        12.9257, 77.5810),
    ("Hebbal",          13.0389, 77.5895),
    ("Yelahanka",       13.1076, 77.5936),
    ("KR Puram",        12.9844, 77.6845),
    ("Marathahalli",    12.9601, 77.7035),
    ("Banashankari",    12.9252, 77.5486),
    ("Rajajinagar",     13.0020, 77.5600),
    ("Majestic",        12.9763, 77.5713),
    ("Ulsoor",          12.9780, 77.6190),
    ("Bellandur",       12.9358, 77.6795),
    ("HSR Layout",      12.9131, 77.6400),
    ("Basavanagudi",    12.9353, 77.5685),
    ("BTM Layout",      12.9236, 77.6101),
];

/// `(a, b, km)` by index into [`LOCALITIES`].  Some pairs appear twice with
/// different lengths; both roads are kept.
const ROADS: [(usize, usize, f64); 36] = [
    (0, 1, 5.0),
    (0, 6, 3.1),
    (0, 19, 2.7),
    (1, 2, 3.2),
    (2, 14, 1.8),
    (2, 15, 1.1),
    (3, 11, 12.0),
    (11, 10, 6.2),
    (10, 8, 5.3),
    (8, 9, 12.0),
    (4, 0, 7.2),
    (4, 5, 10.0),
    (5, 16, 6.4),
    (16, 11, 6.1),
    (6, 12, 6.8),
    (6, 19, 3.0),
    (7, 6, 3.5),
    (7, 4, 8.5),
    (12, 13, 10.0),
    (13, 14, 6.5),
    (14, 15, 2.3),
    (15, 2, 2.0),
    (11, 16, 4.5),
    (16, 17, 7.5),
    (17, 0, 6.2),
    (19, 0, 2.7),
    (18, 13, 5.9),
    (12, 19, 7.0),
    (9, 8, 11.7),
    (10, 2, 9.8),
    (11, 3, 12.0),
    (1, 17, 6.0),
    (5, 4, 10.5),
    (16, 0, 4.8),
    (2, 11, 8.0),
    (14, 13, 3.2),
];

pub fn build_network() -> RoadNetwork {
    let mut b = RoadNetworkBuilder::with_capacity(LOCALITIES.len(), ROADS.len() * 2);

    let ids: Vec<_> = LOCALITIES
        .iter()
        .map(|&(name, lat, lon)| b.add_node(name, GeoPoint::new(lat, lon)))
        .collect();

    for &(a, c, km) in &ROADS {
        b.add_road(ids[a], ids[c], EdgeAttrs::neutral(km * 1000.0));
    }

    b.build()
}
