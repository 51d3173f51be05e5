/// A named place on the map.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub id: u64,
    pub lon: f64,
    pub lat: f64,
    pub name: String,
}

/// Normalize a place name for matching: keep ASCII letters and spaces, lowercased.
pub fn clean_string(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphabetic() || *c == ' ')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
