//! Color harmony model
//!
//! Complementary, analogous and triadic relationships over the fixed
//! 11-color wheel. Complementary and analogous relations are computed from
//! wheel positions restricted to chromatic hues; the triadic relation is a
//! hand-authored lookup table and deliberately not derived from wheel
//! geometry.

use rand::Rng;

use crate::models::Color;

/// The fixed wheel: chromatic hues first, neutrals last
pub const COLOR_WHEEL: [Color; 11] = [
    Color::Red,
    Color::Orange,
    Color::Yellow,
    Color::Green,
    Color::Blue,
    Color::Purple,
    Color::Pink,
    Color::White,
    Color::Black,
    Color::Gray,
    Color::Brown,
];

/// Colors with no opposite partner on the wheel
pub const NEUTRAL_COLORS: [Color; 4] = [Color::White, Color::Black, Color::Gray, Color::Brown];

/// The chromatic subsequence of the wheel, in wheel order
pub const CHROMATIC_COLORS: [Color; 7] = [
    Color::Red,
    Color::Orange,
    Color::Yellow,
    Color::Green,
    Color::Blue,
    Color::Purple,
    Color::Pink,
];

impl Color {
    pub fn is_neutral(self) -> bool {
        NEUTRAL_COLORS.contains(&self)
    }

    pub fn is_chromatic(self) -> bool {
        !self.is_neutral()
    }

    fn wheel_index(self) -> usize {
        // Every color appears in the wheel, so the position always exists.
        COLOR_WHEEL
            .iter()
            .position(|&c| c == self)
            .unwrap_or_default()
    }

    fn chromatic_index(self) -> Option<usize> {
        CHROMATIC_COLORS.iter().position(|&c| c == self)
    }
}

/// The two full-wheel neighbors of a color, wrapping at the ends
fn wheel_neighbors(color: Color) -> [Color; 2] {
    let index = color.wheel_index();
    let len = COLOR_WHEEL.len();
    [
        COLOR_WHEEL[(index + len - 1) % len],
        COLOR_WHEEL[(index + 1) % len],
    ]
}

/// The opposite chromatic hue on the wheel
fn chromatic_complement(color: Color) -> Option<Color> {
    let index = color.chromatic_index()?;
    let len = CHROMATIC_COLORS.len();
    Some(CHROMATIC_COLORS[(index + len / 2) % len])
}

/// The single complementary color
///
/// Neutrals have no opposite, so a neutral input yields a uniformly random
/// chromatic hue. Callers that need reproducibility must seed `rng`.
pub fn complementary_color<R: Rng + ?Sized>(color: Color, rng: &mut R) -> Color {
    match chromatic_complement(color) {
        Some(complement) => complement,
        None => CHROMATIC_COLORS[rng.random_range(0..CHROMATIC_COLORS.len())],
    }
}

/// The complementary family of a color
///
/// Chromatic input: the color itself, its complement, and the complement's
/// chromatic wheel-neighbors, deduplicated. Neutral input: every chromatic
/// color.
pub fn complementary_colors(color: Color) -> Vec<Color> {
    let Some(complement) = chromatic_complement(color) else {
        return CHROMATIC_COLORS.to_vec();
    };

    let mut family = vec![color, complement];
    for neighbor in wheel_neighbors(complement) {
        if neighbor.is_chromatic() && !family.contains(&neighbor) {
            family.push(neighbor);
        }
    }
    family
}

/// Colors within `distance` wheel steps of `color`, restricted to chromatic
/// hues, starting with `color` itself
///
/// A neutral input is analogous to the whole chromatic range.
pub fn analogous_colors(color: Color, distance: usize) -> Vec<Color> {
    if color.is_neutral() {
        let mut family = vec![color];
        family.extend_from_slice(&CHROMATIC_COLORS);
        return family;
    }

    let index = color.wheel_index();
    let len = COLOR_WHEEL.len();
    let mut family = vec![color];
    for step in 1..=distance {
        for candidate in [
            COLOR_WHEEL[(index + len - (step % len)) % len],
            COLOR_WHEEL[(index + step) % len],
        ] {
            if candidate.is_chromatic() && !family.contains(&candidate) {
                family.push(candidate);
            }
        }
    }
    family
}

/// Triadic companions, from the hand-authored table
///
/// Primaries map to the other primaries, secondaries to the other
/// secondaries, pink to blue/green; each of those also accepts every
/// neutral. A neutral pairs with everything but itself.
pub fn triadic_colors(color: Color) -> Vec<Color> {
    let with_neutrals = |companions: [Color; 2]| {
        let mut family = companions.to_vec();
        family.extend_from_slice(&NEUTRAL_COLORS);
        family
    };

    match color {
        Color::Red => with_neutrals([Color::Blue, Color::Yellow]),
        Color::Blue => with_neutrals([Color::Red, Color::Yellow]),
        Color::Yellow => with_neutrals([Color::Red, Color::Blue]),
        Color::Orange => with_neutrals([Color::Green, Color::Purple]),
        Color::Green => with_neutrals([Color::Orange, Color::Purple]),
        Color::Purple => with_neutrals([Color::Orange, Color::Green]),
        Color::Pink => with_neutrals([Color::Blue, Color::Green]),
        neutral => COLOR_WHEEL.iter().copied().filter(|&c| c != neutral).collect(),
    }
}
