//! Built-in Delhi Metro reference network.
//!
//! A reduced network of major stops on the Blue, Yellow, Red, Pink and
//! Magenta lines. Each interchange is modelled as one node per line, joined
//! by short transfer connections.

use crate::domain::{Lines, StationId};

use super::{Network, NetworkBuilder, NetworkError};

/// Time between adjacent stops on a line (minutes).
const HOP_MINUTES: u32 = 5;
/// Average distance between adjacent stops on a line (km).
const HOP_KM: f64 = 2.5;
/// Time to walk between the nodes of an interchange (minutes).
const TRANSFER_MINUTES: u32 = 2;
/// Distance between the nodes of an interchange (km).
const TRANSFER_KM: f64 = 0.1;

/// Stations in id order: (name, line label).
const STATIONS: &[(&str, &str)] = &[
    // Blue
    ("Dwarka Sec-21", "Blue"),
    ("Janakpuri West", "Blue/Magenta"),
    ("Rajouri Garden", "Blue/Pink"),
    ("Rajiv Chowk", "Blue/Yellow"),
    ("Mandi House", "Blue/Violet"),
    ("Yamuna Bank", "Blue"),
    ("Mayur Vihar Phase-1", "Blue/Pink"),
    ("Noida City Centre", "Blue"),
    ("Vaishali", "Blue"),
    // Yellow
    ("Samaypur Badli", "Yellow"),
    ("Azadpur", "Yellow/Pink"),
    ("Kashmere Gate", "Yellow/Red/Violet"),
    ("Chandni Chowk", "Yellow"),
    ("Rajiv Chowk", "Yellow/Blue"),
    ("Central Secretariat", "Yellow/Violet"),
    ("INA", "Yellow/Pink"),
    ("AIIMS", "Yellow"),
    ("Hauz Khas", "Yellow/Magenta"),
    ("HUDA City Centre", "Yellow"),
    // Red
    ("Rithala", "Red"),
    ("Netaji Subhash Place", "Red/Pink"),
    ("Kashmere Gate", "Red/Yellow/Violet"),
    ("Welcome", "Red/Pink"),
    // Pink
    ("Majlis Park", "Pink"),
    ("Azadpur", "Pink/Yellow"),
    ("Netaji Subhash Place", "Pink/Red"),
    ("Rajouri Garden", "Pink/Blue"),
    ("INA", "Pink/Yellow"),
    ("Mayur Vihar Phase-1", "Pink/Blue"),
    // Magenta
    ("Janakpuri West", "Magenta/Blue"),
    ("Terminal 1 IGI Airport", "Magenta"),
    ("Hauz Khas", "Magenta/Yellow"),
    ("Botanical Garden", "Magenta/Blue"),
];

/// Inclusive id ranges of consecutive stops along each line.
const LINE_RUNS: &[(usize, usize)] = &[(0, 8), (9, 18), (19, 22), (23, 28), (29, 32)];

/// Transfer connections between interchange nodes.
const TRANSFERS: &[(usize, usize)] = &[
    (3, 13),  // Rajiv Chowk
    (1, 29),  // Janakpuri West
    (2, 26),  // Rajouri Garden
    (6, 28),  // Mayur Vihar Phase-1
    (11, 21), // Kashmere Gate
    (10, 24), // Azadpur
    (17, 31), // Hauz Khas
    (20, 25), // Netaji Subhash Place
    (29, 1),  // Janakpuri West, listed again from the Magenta side
    (32, 7),  // Botanical Garden - Noida City Centre
    (15, 27), // INA
];

/// Build the reference network.
///
/// # Examples
///
/// ```
/// use metro_planner::network::delhi_metro;
///
/// let net = delhi_metro().unwrap();
/// assert_eq!(net.len(), 33);
/// assert_eq!(net.find_by_name("Rajiv Chowk").len(), 2);
/// ```
pub fn delhi_metro() -> Result<Network, NetworkError> {
    let mut builder = NetworkBuilder::new();

    for &(name, label) in STATIONS {
        let lines = Lines::parse(label).map_err(|source| NetworkError::Lines {
            id: builder.len(),
            name: name.to_string(),
            source,
        })?;
        builder.add_station(name, lines);
    }

    for &(first, last) in LINE_RUNS {
        for i in first..last {
            builder.add_edge(StationId(i), StationId(i + 1), HOP_MINUTES, HOP_KM)?;
        }
    }

    for &(a, b) in TRANSFERS {
        builder.add_edge(StationId(a), StationId(b), TRANSFER_MINUTES, TRANSFER_KM)?;
    }

    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Line;

    #[test]
    fn builds() {
        let net = delhi_metro().unwrap();
        assert_eq!(net.len(), 33);
        // 8 + 9 + 3 + 5 + 3 line hops, 11 transfers
        assert_eq!(net.connection_count(), 39);
    }

    #[test]
    fn interchanges_share_names() {
        let net = delhi_metro().unwrap();
        assert_eq!(
            net.find_by_name("Kashmere Gate"),
            vec![StationId(11), StationId(21)]
        );
        assert_eq!(net.find_by_name("AIIMS"), vec![StationId(16)]);
        assert_eq!(net.station_names().len(), 24);
    }

    #[test]
    fn transfer_nodes_share_a_line() {
        let net = delhi_metro().unwrap();
        for &(a, b) in TRANSFERS {
            let a = net.station(StationId(a)).unwrap();
            let b = net.station(StationId(b)).unwrap();
            assert!(a.lines.first_shared_with(&b.lines).is_some());
        }
    }

    #[test]
    fn violet_only_appears_on_interchange_labels() {
        let net = delhi_metro().unwrap();
        let violet: Vec<_> = net
            .stations()
            .iter()
            .filter(|s| s.serves(Line::Violet))
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(
            violet,
            vec![
                "Mandi House",
                "Kashmere Gate",
                "Central Secretariat",
                "Kashmere Gate"
            ]
        );
    }

    #[test]
    fn hop_weights() {
        let net = delhi_metro().unwrap();
        let hop = net.edge_between(StationId(0), StationId(1)).unwrap();
        assert_eq!((hop.minutes, hop.km), (HOP_MINUTES, HOP_KM));

        let transfer = net.edge_between(StationId(13), StationId(3)).unwrap();
        assert_eq!((transfer.minutes, transfer.km), (TRANSFER_MINUTES, TRANSFER_KM));
    }
}
