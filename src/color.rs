use backdrop_core::Rgba;

/// CSS `rgba()` string for a canvas fill style.
#[inline]
pub fn css_rgba(c: Rgba) -> String {
    let a = (c.a.clamp(0.0, 1.0) * 1000.0).round() / 1000.0;
    format!("rgba({}, {}, {}, {})", c.r, c.g, c.b, a)
}
