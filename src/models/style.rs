use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Named weighting profile selecting one row of the style table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClothingStyle {
    /// Fallback profile when a request names no style
    #[default]
    Default,
    /// Weather comfort over looks
    Comfort,
    /// Rotate in rarely-worn pieces
    New,
    /// Color harmony first
    Style,
    /// Formal wear (legacy tag: "class")
    #[serde(alias = "class")]
    Formal,
}

impl ClothingStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClothingStyle::Default => "default",
            ClothingStyle::Comfort => "comfort",
            ClothingStyle::New => "new",
            ClothingStyle::Style => "style",
            ClothingStyle::Formal => "formal",
        }
    }

    /// Per-factor weights for this profile
    ///
    /// Only `last_worn`, `uv`, `temp` and `rain` are multiplied into the
    /// accumulated item score; color-harmony terms are summed unweighted.
    /// The `color` column is carried for every row but not consulted by the
    /// combiner.
    pub fn weights(&self) -> StyleWeights {
        match self {
            ClothingStyle::Default => StyleWeights {
                temp: 0.7,
                rain: 0.6,
                uv: 0.5,
                last_worn: 0.6,
                color: 0.6,
            },
            ClothingStyle::Comfort => StyleWeights {
                temp: 0.9,
                rain: 0.9,
                uv: 0.6,
                last_worn: 0.4,
                color: 0.3,
            },
            ClothingStyle::New => StyleWeights {
                temp: 0.5,
                rain: 0.5,
                uv: 0.4,
                last_worn: 1.0,
                color: 0.5,
            },
            ClothingStyle::Style => StyleWeights {
                temp: 0.4,
                rain: 0.4,
                uv: 0.5,
                last_worn: 0.3,
                color: 1.0,
            },
            ClothingStyle::Formal => StyleWeights {
                temp: 0.6,
                rain: 0.5,
                uv: 0.3,
                last_worn: 0.5,
                color: 0.8,
            },
        }
    }
}

impl Display for ClothingStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One row of the style table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StyleWeights {
    pub temp: f64,
    pub rain: f64,
    pub uv: f64,
    pub last_worn: f64,
    pub color: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_STYLES: [ClothingStyle; 5] = [
        ClothingStyle::Default,
        ClothingStyle::Comfort,
        ClothingStyle::New,
        ClothingStyle::Style,
        ClothingStyle::Formal,
    ];

    #[test]
    fn test_every_style_has_bounded_weights() {
        for style in ALL_STYLES {
            let weights = style.weights();
            for component in [
                weights.temp,
                weights.rain,
                weights.uv,
                weights.last_worn,
                weights.color,
            ] {
                assert!(
                    (0.0..=1.0).contains(&component),
                    "weight out of range for {}",
                    style
                );
            }
        }
    }

    #[test]
    fn test_class_alias_parses_as_formal() {
        let style: ClothingStyle = serde_json::from_str(r#""class""#).unwrap();
        assert_eq!(style, ClothingStyle::Formal);

        let style: ClothingStyle = serde_json::from_str(r#""formal""#).unwrap();
        assert_eq!(style, ClothingStyle::Formal);
    }

    #[test]
    fn test_default_style() {
        assert_eq!(ClothingStyle::default(), ClothingStyle::Default);
    }

    #[test]
    fn test_comfort_prioritizes_weather_over_recency() {
        let weights = ClothingStyle::Comfort.weights();
        assert!(weights.temp > weights.last_worn);
        assert!(weights.rain > weights.last_worn);
    }

    #[test]
    fn test_new_prioritizes_recency() {
        let weights = ClothingStyle::New.weights();
        assert_eq!(weights.last_worn, 1.0);
        assert!(weights.last_worn > weights.temp);
    }
}
