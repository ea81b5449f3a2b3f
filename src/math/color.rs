//! HSL color conversion and piece palette generation
//!
//! Piece colors walk the hue circle once, alternating full and half
//! saturation between neighbors so consecutive piece ids stay visually
//! separable even when their hues are close.

use crate::io::configuration::PIECE_COLOR_LIGHTNESS;

/// Convert an HSL triple to 8-bit RGB
///
/// All inputs are in `[0, 1]`; hue wraps around the circle.
pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> [u8; 3] {
    if saturation <= 0.0 {
        // achromatic
        let value = (lightness * 255.0).round() as u8;
        return [value, value, value];
    }

    let q = if lightness < 0.5 {
        lightness * (1.0 + saturation)
    } else {
        lightness + saturation - lightness * saturation
    };
    let p = 2.0f64.mul_add(lightness, -q);

    [
        channel(p, q, hue + 1.0 / 3.0),
        channel(p, q, hue),
        channel(p, q, hue - 1.0 / 3.0),
    ]
}

/// One distinct color per piece id, in id order
pub fn piece_palette(count: usize) -> Vec<[u8; 3]> {
    (0..count)
        .map(|index| {
            let hue = index as f64 / count as f64;
            let saturation = if index % 2 == 0 { 1.0 } else { 0.5 };
            hsl_to_rgb(hue, saturation, PIECE_COLOR_LIGHTNESS)
        })
        .collect()
}

fn channel(p: f64, q: f64, t: f64) -> u8 {
    (hue_to_rgb(p, q, t) * 255.0).round() as u8
}

fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        return (q - p).mul_add(6.0 * t, p);
    }
    if t < 0.5 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return (q - p).mul_add((2.0 / 3.0 - t) * 6.0, p);
    }
    p
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_anchor_colors() {
        assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), [255, 0, 0]);
        assert_eq!(hsl_to_rgb(1.0 / 3.0, 1.0, 0.5), [0, 255, 0]);
        assert_eq!(hsl_to_rgb(2.0 / 3.0, 1.0, 0.5), [0, 0, 255]);
    }

    #[test]
    fn test_zero_saturation_is_achromatic() {
        assert_eq!(hsl_to_rgb(0.37, 0.0, 0.75), [191, 191, 191]);
    }

    #[test]
    fn test_palette_is_deterministic_and_distinct() {
        let palette = piece_palette(8);
        assert_eq!(palette, piece_palette(8));
        assert_eq!(palette.len(), 8);

        let distinct: std::collections::HashSet<[u8; 3]> = palette.iter().copied().collect();
        assert_eq!(distinct.len(), 8);
    }

    #[test]
    fn test_empty_palette() {
        assert!(piece_palette(0).is_empty());
    }
}
