/// Rec.601 luma with integer weights, rounded to nearest.
pub(crate) fn luma601_u8(r: u8, g: u8, b: u8) -> u8 {
    ((299 * u32::from(r) + 587 * u32::from(g) + 114 * u32::from(b) + 500) / 1000) as u8
}

/// Luma of one pixel of a 1..=4 channel buffer. Gray sources use the first sample.
pub(crate) fn luma_of(px: &[u8]) -> u8 {
    match px.len() {
        0 => 0,
        1 | 2 => px[0],
        _ => luma601_u8(px[0], px[1], px[2]),
    }
}

/// Equal-weight mix of two samples, rounding halves up.
pub(crate) fn half_mix_u8(a: u8, b: u8) -> u8 {
    ((u16::from(a) + u16::from(b) + 1) / 2) as u8
}

/// `px * (1 - alpha) + color * alpha`, truncated toward zero. `alpha` is clamped to `[0, 1]`.
pub(crate) fn alpha_mix_trunc_u8(px: u8, color: u8, alpha: f32) -> u8 {
    let a = alpha.clamp(0.0, 1.0);
    let v = f32::from(px) * (1.0 - a) + f32::from(color) * a;
    v.clamp(0.0, 255.0) as u8
}

/// Round a non-negative float sample to the nearest 8-bit value.
pub(crate) fn round_u8(v: f32) -> u8 {
    (v + 0.5).clamp(0.0, 255.0) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
