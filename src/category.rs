//! Weather condition to Pokemon type lookup

/// Every condition OpenWeatherMap reports in `weather[].main`, mapped to a type
pub const CATEGORY_MAP: [(&str, &str); 15] = [
    ("Thunderstorm", "Electric"),
    ("Drizzle", "Water"),
    ("Rain", "Water"),
    ("Snow", "Ice"),
    ("Mist", "Ghost"),
    ("Smoke", "Poison"),
    ("Haze", "Flying"),
    ("Dust", "Ground"),
    ("Fog", "Ghost"),
    ("Sand", "Ground"),
    ("Ash", "Rock"),
    ("Squall", "Flying"),
    ("Tornado", "Flying"),
    ("Clear", "Fire"),
    ("Clouds", "Normal"),
];

/// Category for a weather condition. Matching is exact and case-sensitive.
pub fn category_for(condition: &str) -> Option<&'static str> {
    CATEGORY_MAP
        .iter()
        .find(|(key, _)| *key == condition)
        .map(|(_, category)| *category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;

    #[rstest]
    #[case("Rain", "Water")]
    #[case("Clear", "Fire")]
    #[case("Thunderstorm", "Electric")]
    #[case("Ash", "Rock")]
    #[case("Clouds", "Normal")]
    fn test_known_conditions(#[case] condition: &str, #[case] category: &str) {
        assert_eq!(category_for(condition), Some(category));
    }

    #[rstest]
    #[case("Volcanic")]
    #[case("rain")]
    #[case("")]
    fn test_unknown_conditions(#[case] condition: &str) {
        assert_eq!(category_for(condition), None);
    }

    #[test]
    fn test_keys_are_unique() {
        let keys: HashSet<_> = CATEGORY_MAP.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys.len(), CATEGORY_MAP.len());
    }
}
