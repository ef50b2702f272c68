// District centroid fallback for coordinate resolution

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

// Known district centroids for the served region, including common alternate
// spellings. Used when the geocoding provider returns nothing.
const DISTRICT_CENTROIDS: &[(&str, f64, f64)] = &[
    ("bangalore", 12.9716, 77.5946),
    ("bengaluru", 12.9716, 77.5946),
    ("mysore", 12.2958, 76.6394),
    ("mysuru", 12.2958, 76.6394),
    ("mangalore", 12.9141, 74.8560),
    ("mangaluru", 12.9141, 74.8560),
    ("hubli", 15.3647, 75.1240),
    ("dharwad", 15.4589, 75.0078),
    ("belgaum", 15.8497, 74.4977),
    ("belagavi", 15.8497, 74.4977),
    ("shimoga", 13.9299, 75.5681),
    ("shivamogga", 13.9299, 75.5681),
    ("tumkur", 13.3379, 77.1173),
    ("tumakuru", 13.3379, 77.1173),
    ("davangere", 14.4644, 75.9218),
    ("hassan", 13.0072, 76.0962),
    ("mandya", 12.5218, 76.8951),
    ("kodagu", 12.3375, 75.8069),
    ("coorg", 12.3375, 75.8069),
    ("chitradurga", 14.2251, 76.3980),
    ("kolar", 13.1362, 78.1292),
    ("chikmagalur", 13.3161, 75.7720),
    ("chikkamagaluru", 13.3161, 75.7720),
    ("udupi", 13.3409, 74.7421),
    ("raichur", 16.2120, 77.3439),
    ("bellary", 15.1394, 76.9214),
    ("ballari", 15.1394, 76.9214),
    ("bijapur", 16.8302, 75.7100),
    ("vijayapura", 16.8302, 75.7100),
    ("gulbarga", 17.3297, 76.8343),
    ("kalaburagi", 17.3297, 76.8343),
    ("bidar", 17.9104, 77.5199),
    ("gadag", 15.4166, 75.6303),
    ("haveri", 14.7951, 75.3991),
    ("dakshina kannada", 12.9141, 74.8560),
    ("uttara kannada", 14.5000, 74.5000),
    ("koppal", 15.3500, 76.1500),
    ("ramanagara", 12.7226, 77.2810),
    ("yadgir", 16.7704, 77.1380),
    ("chamarajanagar", 11.9261, 76.9437),
];

/// Look up a district centroid, tolerant of casing and padding.
pub fn district_centroid(name: &str) -> Option<Coordinates> {
    let key = name.trim().to_lowercase();
    DISTRICT_CENTROIDS
        .iter()
        .find(|(district, _, _)| *district == key)
        .map(|(_, latitude, longitude)| Coordinates {
            latitude: *latitude,
            longitude: *longitude,
        })
}
