//! Built-in destination catalog for the planning and home screens.
//!
//! # Invariants
//! - Catalog order is fixed; search results keep it.
//! - Recommendations are a subset of the catalog.

/// One bookable destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Destination {
    pub name: &'static str,
    pub summary: &'static str,
}

const fn destination(name: &'static str, summary: &'static str) -> Destination {
    Destination { name, summary }
}

pub const DESTINATIONS: &[Destination] = &[
    destination("Japan", "Explore Tokyo, Kyoto, and cherry blossoms."),
    destination("South Korea", "Visit Seoul, Busan, and historical palaces."),
    destination("Australia", "Enjoy Sydney, Great Barrier Reef, and wildlife."),
    destination("New Zealand", "Adventure in Queenstown, Rotorua, and mountains."),
    destination("Singapore", "Discover Marina Bay Sands and vibrant city life."),
    destination("USA", "Explore New York, LA, and national parks."),
    destination("Italy", "Visit Rome, Venice, and enjoy pasta and art."),
    destination("Canada", "Experience Toronto, Vancouver, and nature wonders."),
    destination("United Kingdom", "London, history, and countryside beauty."),
    destination("Mexico", "Beaches, tacos, and ancient ruins await."),
];

const RECOMMENDED: &[&str] = &["Japan", "Australia", "Italy", "Canada"];

/// Destinations featured on the home screen.
pub fn recommended() -> Vec<Destination> {
    DESTINATIONS
        .iter()
        .filter(|item| RECOMMENDED.contains(&item.name))
        .copied()
        .collect()
}

/// Case-insensitive name search. A blank query returns the whole catalog.
pub fn search(query: &str) -> Vec<Destination> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return DESTINATIONS.to_vec();
    }

    DESTINATIONS
        .iter()
        .filter(|item| item.name.to_lowercase().contains(&needle))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{recommended, search, DESTINATIONS};

    #[test]
    fn blank_query_returns_everything() {
        assert_eq!(search("").len(), DESTINATIONS.len());
        assert_eq!(search("   ").len(), DESTINATIONS.len());
    }

    #[test]
    fn search_is_case_insensitive_and_trimmed() {
        let names: Vec<_> = search("  an ").iter().map(|item| item.name).collect();
        assert_eq!(names, vec!["Japan", "New Zealand", "Canada"]);

        let names: Vec<_> = search("UNITED").iter().map(|item| item.name).collect();
        assert_eq!(names, vec!["United Kingdom"]);

        assert!(search("atlantis").is_empty());
    }

    #[test]
    fn recommendations_come_from_the_catalog() {
        let names: Vec<_> = recommended().iter().map(|item| item.name).collect();
        assert_eq!(names, vec!["Japan", "Australia", "Italy", "Canada"]);
        assert!(names
            .iter()
            .all(|name| DESTINATIONS.iter().any(|item| item.name == *name)));
    }
}
