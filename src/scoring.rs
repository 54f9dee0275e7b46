//! Compatibility scorers
//!
//! Nine independent scoring functions combining items, weather and the
//! color harmony model into bounded numeric scores. Every function is total
//! over its input domain: missing colors, patterns or wear history degrade
//! to a documented default rather than failing.
//!
//! All scores are in `[0, 1]` except [`pattern_score`], which ranges over
//! `[-1, 1]` (clashing busy patterns are penalized below zero).

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::color::{analogous_colors, complementary_color, complementary_colors, triadic_colors};
use crate::models::{ClothingItem, ClothingType, Color, Pattern, WeatherReading};

/// Recency decay saturates once a garment has rested this many days.
const RECENCY_SATURATION_DAYS: f64 = 30.0;

fn clamp01(score: f64) -> f64 {
    score.clamp(0.0, 1.0)
}

/// Whether `b` sits within one wheel step of `a`
fn is_analogous(a: Color, b: Color) -> bool {
    analogous_colors(a, 1).contains(&b)
}

/// Whether `b` belongs to `a`'s complementary family (excluding `a` itself)
fn is_complementary(a: Color, b: Color) -> bool {
    complementary_colors(a)
        .into_iter()
        .filter(|&c| c != a)
        .any(|c| c == b)
}

/// Same-color match, with partial credit for neutrals
pub fn monochrome_score(base: &ClothingItem, compare: &ClothingItem) -> f64 {
    match (base.color, compare.color) {
        (Some(a), Some(b)) if a == b => 1.0,
        (Some(_), Some(b)) if b.is_neutral() => 0.5,
        _ => 0.0,
    }
}

/// Wheel adjacency, strongest within one step, weaker within two
pub fn analogous_score(base: &ClothingItem, compare: &ClothingItem) -> f64 {
    let (Some(a), Some(b)) = (base.color, compare.color) else {
        return 0.0;
    };
    if a == b {
        1.0
    } else if analogous_colors(a, 1).contains(&b) {
        0.8
    } else if analogous_colors(a, 2).contains(&b) {
        0.5
    } else {
        0.0
    }
}

/// Opposite-hue match against the computed complement
///
/// Full credit for the complement itself, half credit for the wheel-adjacent
/// extras of the complementary family. Needs `rng` because a neutral base
/// has no fixed complement.
pub fn complementary_score<R: Rng + ?Sized>(
    base: &ClothingItem,
    compare: &ClothingItem,
    rng: &mut R,
) -> f64 {
    let (Some(a), Some(b)) = (base.color, compare.color) else {
        return 0.0;
    };
    let complement = complementary_color(a, rng);
    if b == complement {
        1.0
    } else if complementary_colors(a)
        .into_iter()
        .skip(2)
        .any(|c| c == b)
    {
        0.5
    } else {
        0.0
    }
}

/// Membership in the hand-authored triadic table
pub fn triadic_score(base: &ClothingItem, compare: &ClothingItem) -> f64 {
    let (Some(a), Some(b)) = (base.color, compare.color) else {
        return 0.0;
    };
    if a != b && triadic_colors(a).contains(&b) {
        1.0
    } else {
        0.0
    }
}

/// Visual busyness of a pattern, used to penalize pattern-on-pattern mixes
fn pattern_complexity(pattern: Pattern) -> f64 {
    match pattern {
        Pattern::Solid => 0.0,
        Pattern::Striped => 0.6,
        Pattern::Plaid => 0.7,
        Pattern::PolkaDot => 0.6,
        Pattern::Floral => 0.8,
        Pattern::Graphic => 0.9,
        Pattern::Checked => 0.7,
    }
}

/// Pattern compatibility, in `[-1, 1]`
///
/// Matching patterns reinforce each other, a solid side is an easy
/// neutralizer, and two distinct busy patterns start from a complexity
/// penalty that related colors can buy back.
pub fn pattern_score(base: &ClothingItem, compare: &ClothingItem) -> f64 {
    let (Some(a), Some(b)) = (base.pattern, compare.pattern) else {
        return 0.0;
    };
    let colors = (base.color, compare.color);

    if a == b {
        let bonus: f64 = match colors {
            (Some(ca), Some(cb)) if ca == cb => 0.25,
            (Some(ca), Some(cb)) if is_analogous(ca, cb) => 0.12,
            _ => 0.0,
        };
        return 0.6 + bonus;
    }

    if a == Pattern::Solid || b == Pattern::Solid {
        let color_bonus: f64 = match colors {
            (Some(ca), Some(cb)) if ca == cb => 0.2,
            (Some(ca), Some(cb)) if is_analogous(ca, cb) || is_complementary(ca, cb) => 0.12,
            _ => 0.0,
        };
        let neutral_bonus: f64 = match colors {
            (Some(ca), _) if ca.is_neutral() => 0.08,
            (_, Some(cb)) if cb.is_neutral() => 0.08,
            _ => 0.0,
        };
        return (0.35 + color_bonus + neutral_bonus).min(1.0);
    }

    // Two distinct non-solid patterns: start from the complexity penalty.
    let complexity = (pattern_complexity(a) + pattern_complexity(b)) / 2.0;
    let mut score = -0.3 * complexity;
    score += match colors {
        (Some(ca), Some(cb)) if ca == cb => 0.6,
        (Some(ca), Some(cb)) if is_analogous(ca, cb) => 0.28,
        (Some(ca), Some(cb)) if is_complementary(ca, cb) => 0.18,
        (Some(ca), _) if ca.is_neutral() => 0.12,
        (_, Some(cb)) if cb.is_neutral() => 0.12,
        _ => 0.0,
    };
    if a == Pattern::Floral || b == Pattern::Floral {
        score += 0.12;
    }
    score.clamp(-1.0, 1.0)
}

/// Logarithmic recency decay
///
/// A never-worn garment scores 1; a garment worn today scores 0; the score
/// saturates back to 1 after thirty days of rest. Future wear timestamps
/// clamp to zero days.
pub fn last_worn_score(item: &ClothingItem, now: DateTime<Utc>) -> f64 {
    let Some(last_worn) = item.last_worn_at else {
        return 1.0;
    };
    let days = (now - last_worn).num_days().max(0) as f64;
    clamp01((days + 1.0).ln() / (RECENCY_SATURATION_DAYS + 1.0).ln())
}

/// How well a color family suits the UV index
///
/// Light colors are favored under strong sun, saturated colors under weak
/// sun. A colorless item scores the chromatic base with no adjustment.
pub fn color_for_uv_score(item: &ClothingItem, weather: &WeatherReading) -> f64 {
    let Some(color) = item.color else {
        return 0.5;
    };

    let light = matches!(color, Color::White | Color::Yellow | Color::Pink);
    let neutral = !light && color.is_neutral();
    let chromatic = !light && !neutral;

    let mut score = if light {
        0.8
    } else if neutral {
        0.6
    } else {
        0.5
    };

    if weather.uv >= 3.0 {
        if light {
            score += 0.15;
        } else if chromatic {
            score -= 0.1;
        }
    } else if weather.uv <= 1.0 {
        if chromatic {
            score += 0.1;
        } else if light {
            score -= 0.05;
        }
    }

    clamp01(score)
}

/// Keyword-based waterproofing inference over type name and description
fn is_waterproof(item: &ClothingItem) -> bool {
    let kind = item.kind.as_str();
    if kind.contains("coat") || kind.contains("rain") {
        return true;
    }
    match &item.description {
        Some(description) => {
            let description = description.to_lowercase();
            description.contains("waterproof")
                || description.contains("impermeable")
                || description.contains("water repellent")
        }
        None => false,
    }
}

/// Rain suitability
///
/// Waterproof pieces win outright in real rain; in dry weather they are
/// mildly disfavored against everything else.
pub fn rain_score(item: &ClothingItem, weather: &WeatherReading) -> f64 {
    let waterproof = is_waterproof(item);
    if weather.rain > 1.0 {
        if waterproof {
            1.0
        } else {
            0.2
        }
    } else if waterproof {
        0.4
    } else {
        0.6
    }
}

/// Comfort band for a garment category: `(ideal °C, tolerance)`
fn temp_profile(kind: ClothingType) -> (f64, f64) {
    match kind {
        ClothingType::Jacket => (6.0, 10.0),
        ClothingType::Sweater => (12.0, 8.0),
        ClothingType::Pants => (18.0, 12.0),
        ClothingType::Dress => (22.0, 8.0),
        ClothingType::Shirt => (20.0, 8.0),
        ClothingType::Shoes => (20.0, 12.0),
        ClothingType::Accessory => (20.0, 15.0),
    }
}

/// Linear falloff from the category's ideal temperature
pub fn temp_score(item: &ClothingItem, weather: &WeatherReading) -> f64 {
    let (ideal, tolerance) = temp_profile(item.kind);
    clamp01(1.0 - (weather.temp - ideal).abs() / tolerance.max(1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{CHROMATIC_COLORS, COLOR_WHEEL, NEUTRAL_COLORS};
    use chrono::Duration;
    use rand::{rngs::StdRng, SeedableRng};
    use uuid::Uuid;

    fn garment(kind: ClothingType, color: Option<Color>, pattern: Option<Pattern>) -> ClothingItem {
        ClothingItem {
            id: Uuid::new_v4(),
            kind,
            color,
            pattern,
            description: None,
            last_worn_at: None,
        }
    }

    fn shirt(color: Color, pattern: Pattern) -> ClothingItem {
        garment(ClothingType::Shirt, Some(color), Some(pattern))
    }

    fn mild() -> WeatherReading {
        WeatherReading {
            temp: 20.0,
            rain: 0.0,
            uv: 2.0,
        }
    }

    #[test]
    fn test_monochrome_cases() {
        let red = shirt(Color::Red, Pattern::Solid);
        let red_too = shirt(Color::Red, Pattern::Striped);
        let gray = shirt(Color::Gray, Pattern::Solid);
        let blue = shirt(Color::Blue, Pattern::Solid);
        let colorless = garment(ClothingType::Shirt, None, Some(Pattern::Solid));

        assert_eq!(monochrome_score(&red, &red_too), 1.0);
        assert_eq!(monochrome_score(&red, &gray), 0.5);
        assert_eq!(monochrome_score(&red, &blue), 0.0);
        assert_eq!(monochrome_score(&red, &colorless), 0.0);
        assert_eq!(monochrome_score(&colorless, &red), 0.0);
    }

    #[test]
    fn test_analogous_score_tiers() {
        let red = shirt(Color::Red, Pattern::Solid);
        let orange = shirt(Color::Orange, Pattern::Solid);
        let yellow = shirt(Color::Yellow, Pattern::Solid);
        let blue = shirt(Color::Blue, Pattern::Solid);

        assert_eq!(analogous_score(&red, &red), 1.0);
        assert_eq!(analogous_score(&red, &orange), 0.8);
        assert_eq!(analogous_score(&red, &yellow), 0.5);
        assert_eq!(analogous_score(&red, &blue), 0.0);
    }

    #[test]
    fn test_analogous_score_symmetry() {
        for a in CHROMATIC_COLORS {
            for b in CHROMATIC_COLORS {
                let left = analogous_score(&shirt(a, Pattern::Solid), &shirt(b, Pattern::Solid));
                let right = analogous_score(&shirt(b, Pattern::Solid), &shirt(a, Pattern::Solid));
                assert_eq!(left, right, "analogous symmetry broken for {a}/{b}");
            }
        }
    }

    #[test]
    fn test_complementary_score_tiers() {
        let mut rng = StdRng::seed_from_u64(1);
        let red = shirt(Color::Red, Pattern::Solid);
        let green = shirt(Color::Green, Pattern::Solid);
        let yellow = shirt(Color::Yellow, Pattern::Solid);
        let pink = shirt(Color::Pink, Pattern::Solid);

        // Green is red's complement; yellow and blue flank it on the wheel.
        assert_eq!(complementary_score(&red, &green, &mut rng), 1.0);
        assert_eq!(complementary_score(&red, &yellow, &mut rng), 0.5);
        assert_eq!(complementary_score(&red, &pink, &mut rng), 0.0);
    }

    #[test]
    fn test_complementary_score_neutral_base_stays_bounded() {
        let mut rng = StdRng::seed_from_u64(3);
        let gray = shirt(Color::Gray, Pattern::Solid);
        for color in COLOR_WHEEL {
            let score = complementary_score(&gray, &shirt(color, Pattern::Solid), &mut rng);
            assert!((0.0..=1.0).contains(&score));
        }
    }

    #[test]
    fn test_triadic_score_and_symmetry() {
        let red = shirt(Color::Red, Pattern::Solid);
        let blue = shirt(Color::Blue, Pattern::Solid);
        let green = shirt(Color::Green, Pattern::Solid);
        let white = shirt(Color::White, Pattern::Solid);

        assert_eq!(triadic_score(&red, &blue), 1.0);
        assert_eq!(triadic_score(&blue, &red), 1.0);
        assert_eq!(triadic_score(&red, &green), 0.0);
        assert_eq!(triadic_score(&red, &red), 0.0);
        assert_eq!(triadic_score(&white, &red), 1.0);
        assert_eq!(triadic_score(&red, &white), 1.0);
    }

    #[test]
    fn test_pattern_same_pattern_tiers() {
        let base = shirt(Color::Red, Pattern::Striped);
        let same_color = pattern_score(&base, &shirt(Color::Red, Pattern::Striped));
        let analogous = pattern_score(&base, &shirt(Color::Orange, Pattern::Striped));
        let unrelated = pattern_score(&base, &shirt(Color::Blue, Pattern::Striped));
        assert!((same_color - 0.85).abs() < 1e-12);
        assert!((analogous - 0.72).abs() < 1e-12);
        assert_eq!(unrelated, 0.6);
    }

    #[test]
    fn test_pattern_solid_neutralizer() {
        // Solid vs striped with a red/blue color pair: 0.35 + 0.12.
        let solid = shirt(Color::Red, Pattern::Solid);
        let striped = shirt(Color::Blue, Pattern::Striped);
        assert!((pattern_score(&solid, &striped) - 0.47).abs() < 1e-12);

        // Same color on the solid side: 0.35 + 0.2.
        let striped_red = shirt(Color::Red, Pattern::Striped);
        assert!((pattern_score(&solid, &striped_red) - 0.55).abs() < 1e-12);

        // A neutral side adds 0.08; white/black are otherwise unrelated.
        let white_solid = shirt(Color::White, Pattern::Solid);
        let black_plaid = shirt(Color::Black, Pattern::Plaid);
        assert!((pattern_score(&white_solid, &black_plaid) - 0.43).abs() < 1e-12);
    }

    #[test]
    fn test_pattern_busy_mix_penalty() {
        // Graphic + plaid, unrelated colors: -0.3 * avg(0.9, 0.7).
        let graphic = shirt(Color::Red, Pattern::Graphic);
        let plaid = shirt(Color::Purple, Pattern::Plaid);
        assert!((pattern_score(&graphic, &plaid) - (-0.24)).abs() < 1e-12);

        // Same color buys the mix back above zero.
        let plaid_red = shirt(Color::Red, Pattern::Plaid);
        assert!((pattern_score(&graphic, &plaid_red) - 0.36).abs() < 1e-12);

        // Floral adds its own forgiveness bonus (green/red are unrelated).
        let floral = shirt(Color::Green, Pattern::Floral);
        let striped = shirt(Color::Red, Pattern::Striped);
        let expected = -0.3 * (0.8 + 0.6) / 2.0 + 0.12;
        assert!((pattern_score(&floral, &striped) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_pattern_missing_pattern_is_zero() {
        let patterned = shirt(Color::Red, Pattern::Striped);
        let bare = garment(ClothingType::Shirt, Some(Color::Red), None);
        assert_eq!(pattern_score(&patterned, &bare), 0.0);
        assert_eq!(pattern_score(&bare, &patterned), 0.0);
    }

    #[test]
    fn test_pattern_score_stays_in_range() {
        let patterns = [
            Pattern::Solid,
            Pattern::Striped,
            Pattern::Plaid,
            Pattern::PolkaDot,
            Pattern::Floral,
            Pattern::Graphic,
            Pattern::Checked,
        ];
        for a in patterns {
            for b in patterns {
                for ca in COLOR_WHEEL {
                    for cb in COLOR_WHEEL {
                        let score =
                            pattern_score(&shirt(ca, a), &shirt(cb, b));
                        assert!(
                            (-1.0..=1.0).contains(&score),
                            "pattern score out of range: {a:?}/{b:?} {ca}/{cb} -> {score}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_last_worn_never_worn_scores_full() {
        let now = Utc::now();
        assert_eq!(last_worn_score(&shirt(Color::Red, Pattern::Solid), now), 1.0);
    }

    #[test]
    fn test_last_worn_log_decay() {
        let now = Utc::now();
        let worn = |days: i64| {
            let mut item = shirt(Color::Red, Pattern::Solid);
            item.last_worn_at = Some(now - Duration::days(days));
            item
        };

        assert_eq!(last_worn_score(&worn(0), now), 0.0);
        assert_eq!(last_worn_score(&worn(30), now), 1.0);
        assert_eq!(last_worn_score(&worn(400), now), 1.0);

        // Future timestamps clamp to zero days since worn.
        let mut future = shirt(Color::Red, Pattern::Solid);
        future.last_worn_at = Some(now + Duration::days(5));
        assert_eq!(last_worn_score(&future, now), 0.0);

        // Monotone, with early days mattering more than later ones.
        let mut previous = 0.0;
        for days in 0..=30 {
            let score = last_worn_score(&worn(days), now);
            assert!(score >= previous);
            previous = score;
        }
        let early_delta = last_worn_score(&worn(1), now) - last_worn_score(&worn(0), now);
        let late_delta = last_worn_score(&worn(14), now) - last_worn_score(&worn(7), now);
        assert!(early_delta > late_delta);
    }

    #[test]
    fn test_color_for_uv_families() {
        let high_uv = WeatherReading {
            uv: 6.0,
            ..mild()
        };
        let low_uv = WeatherReading { uv: 0.5, ..mild() };

        let white = shirt(Color::White, Pattern::Solid);
        let black = shirt(Color::Black, Pattern::Solid);
        let red = shirt(Color::Red, Pattern::Solid);

        // Bases under neutral UV (2.0): no adjustment.
        assert_eq!(color_for_uv_score(&white, &mild()), 0.8);
        assert_eq!(color_for_uv_score(&black, &mild()), 0.6);
        assert_eq!(color_for_uv_score(&red, &mild()), 0.5);

        // Strong sun favors light, penalizes saturated.
        assert!((color_for_uv_score(&white, &high_uv) - 0.95).abs() < 1e-12);
        assert_eq!(color_for_uv_score(&black, &high_uv), 0.6);
        assert!((color_for_uv_score(&red, &high_uv) - 0.4).abs() < 1e-12);

        // Weak sun flips the adjustment.
        assert!((color_for_uv_score(&white, &low_uv) - 0.75).abs() < 1e-12);
        assert!((color_for_uv_score(&red, &low_uv) - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_color_for_uv_missing_color() {
        let bare = garment(ClothingType::Shirt, None, None);
        assert_eq!(color_for_uv_score(&bare, &mild()), 0.5);
    }

    #[test]
    fn test_rain_score_waterproof_keywords() {
        let rainy = WeatherReading {
            rain: 2.0,
            ..mild()
        };
        let drizzle = WeatherReading {
            rain: 0.5,
            ..mild()
        };

        let mut waterproof = garment(ClothingType::Jacket, Some(Color::Black), None);
        waterproof.description = Some("Waterproof shell with taped seams".to_string());

        assert_eq!(rain_score(&waterproof, &rainy), 1.0);
        assert_eq!(rain_score(&waterproof, &drizzle), 0.4);

        let plain = shirt(Color::Red, Pattern::Solid);
        assert_eq!(rain_score(&plain, &rainy), 0.2);
        assert_eq!(rain_score(&plain, &drizzle), 0.6);
    }

    #[test]
    fn test_rain_score_keyword_case_insensitive() {
        let rainy = WeatherReading {
            rain: 3.0,
            ..mild()
        };
        let mut item = shirt(Color::Blue, Pattern::Solid);
        item.description = Some("IMPERMEABLE fabric".to_string());
        assert_eq!(rain_score(&item, &rainy), 1.0);

        item.description = Some("water repellent finish".to_string());
        assert_eq!(rain_score(&item, &rainy), 1.0);
    }

    #[test]
    fn test_temp_score_comfort_bands() {
        let jacket = garment(ClothingType::Jacket, Some(Color::Black), None);
        let dress = garment(ClothingType::Dress, Some(Color::Red), None);

        let at = |temp: f64| WeatherReading { temp, ..mild() };

        // At the ideal the score is exactly 1.
        assert_eq!(temp_score(&jacket, &at(6.0)), 1.0);
        assert_eq!(temp_score(&dress, &at(22.0)), 1.0);

        // One tolerance away it hits 0 and clamps beyond.
        assert_eq!(temp_score(&jacket, &at(16.0)), 0.0);
        assert_eq!(temp_score(&jacket, &at(40.0)), 0.0);

        // Halfway through the band.
        assert!((temp_score(&dress, &at(18.0)) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_weather_scorers_stay_in_unit_range() {
        let extremes = [
            WeatherReading {
                temp: -30.0,
                rain: 50.0,
                uv: 12.0,
            },
            WeatherReading {
                temp: 45.0,
                rain: 0.0,
                uv: 0.0,
            },
        ];
        let kinds = [
            ClothingType::Pants,
            ClothingType::Sweater,
            ClothingType::Dress,
            ClothingType::Jacket,
            ClothingType::Shirt,
            ClothingType::Shoes,
            ClothingType::Accessory,
        ];
        for weather in extremes {
            for kind in kinds {
                for color in COLOR_WHEEL.iter().copied().chain(NEUTRAL_COLORS) {
                    let item = garment(kind, Some(color), Some(Pattern::Solid));
                    for score in [
                        temp_score(&item, &weather),
                        rain_score(&item, &weather),
                        color_for_uv_score(&item, &weather),
                    ] {
                        assert!((0.0..=1.0).contains(&score));
                    }
                }
            }
        }
    }
}
