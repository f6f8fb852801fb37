//! RGB to CIE 1931 xy conversion.
//!
//! Hue bulbs take their color as a chromaticity point. The conversion
//! linearizes sRGB input, maps it to XYZ with the wide-gamut matrix used by
//! the bridge and projects the result onto the xy plane. The point is not
//! clipped to the gamut of any particular bulb model.

/// Linearize one sRGB-encoded channel in `[0, 1]`.
///
/// # Examples
///
/// ```
/// use hue_lights_rs::gamma_correct;
///
/// assert_eq!(gamma_correct(0.0), 0.0);
/// assert!((gamma_correct(1.0) - 1.0).abs() < 1e-12);
/// ```
pub fn gamma_correct(value: f64) -> f64 {
    if value > 0.04045 {
        ((value + 0.055) / (1.0 + 0.055)).powf(2.4)
    } else {
        value / 12.92
    }
}

/// Convert an RGB color to its `(x, y)` chromaticity.
///
/// Pure black has no chromaticity; `(0, 0, 0)` yields `(0.0, 0.0)` instead
/// of dividing by zero.
///
/// # Examples
///
/// ```
/// use hue_lights_rs::rgb_to_xy;
///
/// let (x, y) = rgb_to_xy(255, 0, 0);
/// assert!((x - 0.7006).abs() < 1e-4);
/// assert!((y - 0.2993).abs() < 1e-4);
///
/// assert_eq!(rgb_to_xy(0, 0, 0), (0.0, 0.0));
/// ```
pub fn rgb_to_xy(red: u8, green: u8, blue: u8) -> (f64, f64) {
    let r = gamma_correct(f64::from(red) / 255.0);
    let g = gamma_correct(f64::from(green) / 255.0);
    let b = gamma_correct(f64::from(blue) / 255.0);

    let x = r * 0.664511 + g * 0.154324 + b * 0.162028;
    let y = r * 0.283881 + g * 0.668433 + b * 0.047685;
    let z = r * 0.000088 + g * 0.072310 + b * 0.986039;

    let sum = x + y + z;
    if sum == 0.0 {
        return (0.0, 0.0);
    }

    (x / sum, y / sum)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_white_is_near_white_point() {
        let (x, y) = rgb_to_xy(255, 255, 255);
        // Matrix rows sum to (0.980863, 1.0, 1.058437).
        assert!((x - 0.32272).abs() < 1e-4, "x = {x}");
        assert!((y - 0.32902).abs() < 1e-4, "y = {y}");
    }

    #[test]
    fn test_primaries() {
        let (x, y) = rgb_to_xy(0, 255, 0);
        assert!((x - 0.1724).abs() < 1e-3, "x = {x}");
        assert!((y - 0.7468).abs() < 1e-3, "y = {y}");

        let (x, y) = rgb_to_xy(0, 0, 255);
        assert!((x - 0.1355).abs() < 1e-3, "x = {x}");
        assert!((y - 0.0399).abs() < 1e-3, "y = {y}");
    }

    #[test]
    fn test_black_falls_back_to_origin() {
        let (x, y) = rgb_to_xy(0, 0, 0);
        assert_eq!((x, y), (0.0, 0.0));
        assert!(!x.is_nan() && !y.is_nan());
    }

    #[test]
    fn test_output_within_unit_triangle() {
        for r in (0..=255u16).step_by(15) {
            for g in (0..=255u16).step_by(15) {
                for b in (0..=255u16).step_by(15) {
                    if r == 0 && g == 0 && b == 0 {
                        continue;
                    }
                    let (x, y) = rgb_to_xy(r as u8, g as u8, b as u8);
                    assert!((0.0..=1.0).contains(&x), "x = {x} for {r},{g},{b}");
                    assert!((0.0..=1.0).contains(&y), "y = {y} for {r},{g},{b}");
                    assert!(x + y <= 1.0 + 1e-12, "x + y = {} for {r},{g},{b}", x + y);
                }
            }
        }
    }

    #[test]
    fn test_gray_levels_share_chromaticity() {
        let (wx, wy) = rgb_to_xy(255, 255, 255);
        let (gx, gy) = rgb_to_xy(40, 40, 40);
        assert!((wx - gx).abs() < 1e-9);
        assert!((wy - gy).abs() < 1e-9);
    }

    #[test]
    fn test_gamma_is_monotonic() {
        let mut previous = gamma_correct(0.0);
        for step in 1..=1000 {
            let current = gamma_correct(step as f64 / 1000.0);
            assert!(current >= previous, "not monotonic at {step}");
            previous = current;
        }
    }

    #[test]
    fn test_gamma_linear_segment() {
        assert!((gamma_correct(0.04) - 0.04 / 12.92).abs() < 1e-15);
        assert!((gamma_correct(0.5) - 0.21404).abs() < 1e-4);
    }
}
