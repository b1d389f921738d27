//! Mapping from OpenWeather condition codes to emoji glyphs.
//!
//! Condition codes are grouped by their hundreds digit on the provider side
//! (2xx thunderstorm, 3xx drizzle, ...). Only the documented sub-ranges are
//! mapped; anything else renders as an empty string.

/// Weather phenomenon category derived from a condition code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Thunderstorm,
    Drizzle,
    Rain,
    Snow,
    Atmosphere,
    VolcanicAsh,
    Squall,
    Tornado,
    Clear,
    Clouds,
}

impl Condition {
    /// Classify a provider condition code. Total over `i64`.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            200..=232 => Some(Condition::Thunderstorm),
            300..=321 => Some(Condition::Drizzle),
            500..=531 => Some(Condition::Rain),
            600..=622 => Some(Condition::Snow),
            701..=741 => Some(Condition::Atmosphere),
            762 => Some(Condition::VolcanicAsh),
            771 => Some(Condition::Squall),
            781 => Some(Condition::Tornado),
            800 => Some(Condition::Clear),
            801..=804 => Some(Condition::Clouds),
            _ => None,
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Condition::Thunderstorm => "⛈️",
            Condition::Drizzle => "🌦️",
            Condition::Rain => "🌧️",
            Condition::Snow => "❄️",
            Condition::Atmosphere => "🌫️",
            Condition::VolcanicAsh => "🌋",
            Condition::Squall => "💨",
            Condition::Tornado => "🌪️",
            Condition::Clear => "☀️",
            Condition::Clouds => "☁️",
        }
    }
}

/// Emoji for a condition code, or `""` when the code is not in the table.
pub fn condition_emoji(code: i64) -> &'static str {
    Condition::from_code(code).map(|c| c.emoji()).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &[(std::ops::RangeInclusive<i64>, &str)] = &[
        (200..=232, "⛈️"),
        (300..=321, "🌦️"),
        (500..=531, "🌧️"),
        (600..=622, "❄️"),
        (701..=741, "🌫️"),
        (762..=762, "🌋"),
        (771..=771, "💨"),
        (781..=781, "🌪️"),
        (800..=800, "☀️"),
        (801..=804, "☁️"),
    ];

    #[test]
    fn every_documented_code_maps_to_its_glyph() {
        for (range, glyph) in TABLE {
            for code in range.clone() {
                assert_eq!(condition_emoji(code), *glyph, "code {code}");
            }
        }
    }

    #[test]
    fn codes_outside_the_table_are_empty() {
        for code in -1000..2000 {
            if TABLE.iter().any(|(range, _)| range.contains(&code)) {
                continue;
            }
            assert_eq!(condition_emoji(code), "", "code {code}");
        }
    }

    #[test]
    fn gaps_between_groups_are_empty() {
        for code in [199, 233, 250, 299, 322, 499, 532, 623, 700, 742, 761, 763, 770, 780, 799, 805] {
            assert_eq!(condition_emoji(code), "", "code {code}");
        }
    }

    #[test]
    fn extremes_do_not_panic() {
        assert_eq!(condition_emoji(i64::MIN), "");
        assert_eq!(condition_emoji(i64::MAX), "");
        assert_eq!(condition_emoji(0), "");
    }

    #[test]
    fn from_code_classifies_boundaries() {
        assert_eq!(Condition::from_code(200), Some(Condition::Thunderstorm));
        assert_eq!(Condition::from_code(232), Some(Condition::Thunderstorm));
        assert_eq!(Condition::from_code(741), Some(Condition::Atmosphere));
        assert_eq!(Condition::from_code(804), Some(Condition::Clouds));
        assert_eq!(Condition::from_code(900), None);
    }
}
