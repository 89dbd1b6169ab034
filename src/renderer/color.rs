/// Fully saturated hue stops, one per 60 degrees.
/// red -> yellow -> green -> cyan -> blue -> magenta -> red
pub(crate) const HUE_STOPS: [(f64, f64, f64); 7] = [
    (1.0, 0.0, 0.0), // red      (0)
    (1.0, 1.0, 0.0), // yellow   (60)
    (0.0, 1.0, 0.0), // green    (120)
    (0.0, 1.0, 1.0), // cyan     (180)
    (0.0, 0.0, 1.0), // blue     (240)
    (1.0, 0.0, 1.0), // magenta  (300)
    (1.0, 0.0, 0.0), // red      (360)
];

/// Convert a hue in degrees (any range, wraps) to RGB intensities in [0.0, 1.0].
pub fn hue_to_rgb(hue: f64) -> [f64; 3] {
    let h = hue.rem_euclid(360.0);
    let seg = h / 60.0;
    let i = (seg as usize).min(5);
    let s = seg - i as f64;

    let (r0, g0, b0) = HUE_STOPS[i];
    let (r1, g1, b1) = HUE_STOPS[i + 1];

    [r0 + s * (r1 - r0), g0 + s * (g1 - g0), b0 + s * (b1 - b0)]
}

/// Map one dye channel value to a byte: doubled, clamped to [0, 255].
/// NaN maps to 0.
pub fn channel_to_u8(value: f64) -> u8 {
    let v = value * 2.0;
    if v.is_nan() {
        return 0;
    }
    v.clamp(0.0, 255.0) as u8
}

/// Pack three dye channel values into a `0RGB` pixel.
pub fn dye_to_pixel(r: f64, g: f64, b: f64) -> u32 {
    let (r, g, b) = (channel_to_u8(r) as u32, channel_to_u8(g) as u32, channel_to_u8(b) as u32);
    (r << 16) | (g << 8) | b
}
