//! Health bands of the AQI scale
//!
//! Category label, severity color, advisory text and preventive measures are all
//! looked up through [`AqiCategory::from_index`], so the four can never disagree
//! on a band boundary.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{AqiError, Result};

/// The six ordered AQI bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AqiCategory {
    /// 0..=50
    Good,
    /// 51..=100
    Moderate,
    /// 101..=150
    UnhealthyForSensitiveGroups,
    /// 151..=200
    Unhealthy,
    /// 201..=300
    VeryUnhealthy,
    /// 301 and above
    Hazardous,
}

impl AqiCategory {
    /// All bands in ascending order of severity
    pub const ALL: [Self; 6] = [
        Self::Good,
        Self::Moderate,
        Self::UnhealthyForSensitiveGroups,
        Self::Unhealthy,
        Self::VeryUnhealthy,
        Self::Hazardous,
    ];

    /// Classify an index. Upper bounds are inclusive.
    #[must_use]
    pub fn from_index(index: u16) -> Self {
        match index {
            0..=50 => Self::Good,
            51..=100 => Self::Moderate,
            101..=150 => Self::UnhealthyForSensitiveGroups,
            151..=200 => Self::Unhealthy,
            201..=300 => Self::VeryUnhealthy,
            _ => Self::Hazardous,
        }
    }

    /// Classify a signed index, as handed over by loosely typed callers
    ///
    /// # Errors
    ///
    /// * `AqiError::InvalidIndex` - the index is negative
    pub fn try_from_signed(index: i64) -> Result<Self> {
        if index < 0 {
            return Err(AqiError::InvalidIndex(index));
        }
        Ok(Self::from_index(u16::try_from(index).unwrap_or(u16::MAX)))
    }

    /// Human readable label
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            Self::Unhealthy => "Unhealthy",
            Self::VeryUnhealthy => "Very Unhealthy",
            Self::Hazardous => "Hazardous",
        }
    }

    #[must_use]
    pub fn color(&self) -> AqiColor {
        match self {
            Self::Good => AqiColor::Green,
            Self::Moderate => AqiColor::Yellow,
            Self::UnhealthyForSensitiveGroups => AqiColor::Orange,
            Self::Unhealthy => AqiColor::Red,
            Self::VeryUnhealthy => AqiColor::Purple,
            Self::Hazardous => AqiColor::Maroon,
        }
    }

    /// Advisory text shown next to the index
    #[must_use]
    pub fn health_alert(&self) -> &'static str {
        match self {
            Self::Good => "Air quality is good. It's a great day to be active outside! 🌟",
            Self::Moderate => {
                "Air quality is acceptable. Unusually sensitive people should consider limiting prolonged outdoor exertion."
            }
            Self::UnhealthyForSensitiveGroups => {
                "Members of sensitive groups may experience health effects. The general public is less likely to be affected."
            }
            Self::Unhealthy => {
                "Everyone may begin to experience health effects. Members of sensitive groups may experience more serious health effects."
            }
            Self::VeryUnhealthy => {
                "Health alert: everyone may experience more serious health effects. Avoid outdoor activities! ⚠️"
            }
            Self::Hazardous => {
                "Health warnings of emergency conditions. The entire population is more likely to be affected. Stay indoors! 🚨"
            }
        }
    }

    /// Ordered list of recommendations for this band
    #[must_use]
    pub fn preventive_measures(&self) -> &'static [&'static str] {
        match self {
            Self::Good => &[
                "✓ Perfect conditions for outdoor activities",
                "✓ Good time for exercise and sports",
                "✓ Open windows for fresh air",
            ],
            Self::Moderate => &[
                "⚠ Unusually sensitive people should limit prolonged outdoor exertion",
                "✓ It's okay to be active outside",
                "✓ Monitor air quality if you have respiratory conditions",
            ],
            Self::UnhealthyForSensitiveGroups => &[
                "⚠ Sensitive groups should reduce prolonged outdoor exertion",
                "⚠ Children, elderly, and people with respiratory issues should take precautions",
                "✓ Consider wearing a mask outdoors",
            ],
            Self::Unhealthy => &[
                "🚫 Everyone should limit prolonged outdoor exertion",
                "⚠ Sensitive groups should avoid outdoor activities",
                "✓ Wear N95/N99 masks if you must go outside",
                "✓ Keep windows closed and use air purifiers",
            ],
            Self::VeryUnhealthy => &[
                "🚫 Everyone should avoid outdoor activities",
                "🚫 Stay indoors with windows closed",
                "✓ Use air purifiers if available",
                "✓ Wear N95/N99 masks if outdoor exposure is unavoidable",
                "⚠ Seek medical attention if experiencing symptoms",
            ],
            Self::Hazardous => &[
                "🚨 EMERGENCY: Stay indoors!",
                "🚫 Avoid all outdoor activities",
                "✓ Use HEPA air purifiers",
                "✓ Seal windows and doors",
                "⚠ Seek immediate medical attention if experiencing difficulty breathing",
                "📞 Contact local health authorities",
            ],
        }
    }
}

impl fmt::Display for AqiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Severity colors of the AQI scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AqiColor {
    Green,
    Yellow,
    Orange,
    Red,
    Purple,
    Maroon,
}

impl AqiColor {
    /// `#RRGGBB` token
    #[must_use]
    pub fn hex(&self) -> &'static str {
        match self {
            Self::Green => "#00E400",
            Self::Yellow => "#FFFF00",
            Self::Orange => "#FF7E00",
            Self::Red => "#FF0000",
            Self::Purple => "#8F3F97",
            Self::Maroon => "#7E0023",
        }
    }

    #[must_use]
    pub fn rgb(&self) -> [u8; 3] {
        match self {
            Self::Green => [0x00, 0xE4, 0x00],
            Self::Yellow => [0xFF, 0xFF, 0x00],
            Self::Orange => [0xFF, 0x7E, 0x00],
            Self::Red => [0xFF, 0x00, 0x00],
            Self::Purple => [0x8F, 0x3F, 0x97],
            Self::Maroon => [0x7E, 0x00, 0x23],
        }
    }

    /// Packed `0xAARRGGBB`, fully opaque
    #[must_use]
    pub fn argb(&self) -> u32 {
        let [r, g, b] = self.rgb();
        0xFF00_0000 | (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
    }

    /// Parse a `#RRGGBB` (or bare `RRGGBB`) token back into a severity color
    ///
    /// # Errors
    ///
    /// * `AqiError::InvalidColor` - not valid hex, or not one of the six colors
    pub fn parse(token: &str) -> Result<Self> {
        let clean = token.trim().trim_start_matches('#');
        let mut rgb = [0u8; 3];
        hex::decode_to_slice(clean, &mut rgb)
            .map_err(|_| AqiError::InvalidColor(token.to_string()))?;

        AqiCategory::ALL
            .into_iter()
            .map(|category| category.color())
            .find(|color| color.rgb() == rgb)
        .ok_or_else(|| AqiError::InvalidColor(token.to_string()))
    }
}

impl fmt::Display for AqiColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hex())
    }
}

/// Category label for an index
#[must_use]
pub fn aqi_category(index: u16) -> &'static str {
    AqiCategory::from_index(index).label()
}

/// Severity color for an index
#[must_use]
pub fn aqi_color(index: u16) -> AqiColor {
    AqiCategory::from_index(index).color()
}

/// Advisory text for an index
#[must_use]
pub fn health_alert(index: u16) -> &'static str {
    AqiCategory::from_index(index).health_alert()
}

/// Preventive measures for an index
#[must_use]
pub fn preventive_measures(index: u16) -> &'static [&'static str] {
    AqiCategory::from_index(index).preventive_measures()
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_debug_snapshot;
    use rstest::rstest;

    #[rstest]
    #[case(0, AqiCategory::Good)]
    #[case(50, AqiCategory::Good)]
    #[case(51, AqiCategory::Moderate)]
    #[case(100, AqiCategory::Moderate)]
    #[case(101, AqiCategory::UnhealthyForSensitiveGroups)]
    #[case(150, AqiCategory::UnhealthyForSensitiveGroups)]
    #[case(151, AqiCategory::Unhealthy)]
    #[case(200, AqiCategory::Unhealthy)]
    #[case(201, AqiCategory::VeryUnhealthy)]
    #[case(300, AqiCategory::VeryUnhealthy)]
    #[case(301, AqiCategory::Hazardous)]
    #[case(500, AqiCategory::Hazardous)]
    #[case(u16::MAX, AqiCategory::Hazardous)]
    fn band_boundaries_agree(#[case] index: u16, #[case] expected: AqiCategory) {
        assert_eq!(AqiCategory::from_index(index), expected);
        assert_eq!(aqi_category(index), expected.label());
        assert_eq!(aqi_color(index), expected.color());
        assert_eq!(health_alert(index), expected.health_alert());
        assert_eq!(preventive_measures(index), expected.preventive_measures());
    }

    #[test]
    fn bands_are_distinct() {
        for (i, a) in AqiCategory::ALL.iter().enumerate() {
            for b in &AqiCategory::ALL[i + 1..] {
                assert!(a < b);
                assert_ne!(a.label(), b.label());
                assert_ne!(a.color(), b.color());
                assert_ne!(a.health_alert(), b.health_alert());
            }
        }
    }

    #[test]
    fn unhealthy_measures() {
        assert_debug_snapshot!(preventive_measures(175), @r#"
        [
            "🚫 Everyone should limit prolonged outdoor exertion",
            "⚠ Sensitive groups should avoid outdoor activities",
            "✓ Wear N95/N99 masks if you must go outside",
            "✓ Keep windows closed and use air purifiers",
        ]
        "#);
    }

    #[test]
    fn measure_counts_grow_with_severity() {
        let counts: Vec<usize> = AqiCategory::ALL
            .iter()
            .map(|c| c.preventive_measures().len())
            .collect();
        assert_eq!(counts, vec![3, 3, 3, 4, 5, 6]);
    }

    #[rstest]
    #[case(-1)]
    #[case(-500)]
    #[case(i64::MIN)]
    fn negative_signed_index_is_rejected(#[case] index: i64) {
        assert_eq!(
            AqiCategory::try_from_signed(index),
            Err(AqiError::InvalidIndex(index))
        );
    }

    #[test]
    fn signed_index_conversion() {
        assert_eq!(AqiCategory::try_from_signed(0), Ok(AqiCategory::Good));
        assert_eq!(
            AqiCategory::try_from_signed(150),
            Ok(AqiCategory::UnhealthyForSensitiveGroups)
        );
        assert_eq!(
            AqiCategory::try_from_signed(1_000_000),
            Ok(AqiCategory::Hazardous)
        );
    }

    #[rstest]
    #[case("#00E400", AqiColor::Green)]
    #[case("ffff00", AqiColor::Yellow)]
    #[case(" #FF7E00 ", AqiColor::Orange)]
    #[case("#7e0023", AqiColor::Maroon)]
    fn parse_color_tokens(#[case] token: &str, #[case] expected: AqiColor) {
        assert_eq!(AqiColor::parse(token), Ok(expected));
    }

    #[rstest]
    #[case("#123456")]
    #[case("#GGGGGG")]
    #[case("#FFF")]
    fn parse_color_rejects_unknown(#[case] token: &str) {
        assert!(matches!(
            AqiColor::parse(token),
            Err(AqiError::InvalidColor(_))
        ));
    }

    #[test]
    fn color_tokens_round_trip_through_parse() {
        for category in AqiCategory::ALL {
            let color = category.color();
            assert_eq!(AqiColor::parse(color.hex()), Ok(color));
        }
        assert_eq!(AqiColor::Purple.argb(), 0xFF8F_3F97);
        assert_eq!(AqiColor::Red.to_string(), "#FF0000");
    }
}
