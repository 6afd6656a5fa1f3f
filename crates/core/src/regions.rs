//! Fixed city-to-region lookup for Taiwan.
//!
//! Groups the 22 counties and cities into seven broad geographic regions so
//! users can filter schools by area instead of individual city. Lives in
//! `core` (zero internal deps) so it can be used by both the repository
//! layer and the metadata aggregation.

/// Region name paired with the cities it contains.
pub const REGION_CITIES: &[(&str, &[&str])] = &[
    ("北北基", &["臺北市", "新北市", "基隆市"]),
    ("桃竹苗", &["桃園市", "新竹縣", "新竹市", "苗栗縣"]),
    ("中彰投", &["臺中市", "彰化縣", "南投縣"]),
    ("雲嘉南", &["雲林縣", "嘉義縣", "嘉義市", "臺南市"]),
    ("高屏", &["高雄市", "屏東縣"]),
    ("宜花東", &["宜蘭縣", "花蓮縣", "臺東縣"]),
    ("離島", &["澎湖縣", "金門縣", "連江縣"]),
];

/// Region reported for cities absent from [`REGION_CITIES`].
pub const FALLBACK_REGION: &str = "其他";

/// Map a city name to its region, falling back to [`FALLBACK_REGION`].
///
/// # Examples
///
/// ```
/// use unipath_core::regions::region_for_city;
/// assert_eq!(region_for_city("臺北市"), "北北基");
/// assert_eq!(region_for_city("月球"), "其他");
/// ```
pub fn region_for_city(city: &str) -> &'static str {
    REGION_CITIES
        .iter()
        .find(|(_, cities)| cities.contains(&city))
        .map(|(region, _)| *region)
        .unwrap_or(FALLBACK_REGION)
}

/// The cities belonging to a named region, or `None` for an unknown region.
///
/// Callers treat `None` as "the value is itself a city name" so that both
/// region-level and city-level filtering work through one parameter.
pub fn cities_in_region(region: &str) -> Option<&'static [&'static str]> {
    REGION_CITIES
        .iter()
        .find(|(name, _)| *name == region)
        .map(|(_, cities)| *cities)
}
