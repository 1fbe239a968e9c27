use super::*;

#[test]
fn luma_extremes_and_primaries() {
    assert_eq!(luma601_u8(0, 0, 0), 0);
    assert_eq!(luma601_u8(255, 255, 255), 255);
    assert_eq!(luma601_u8(255, 0, 0), 76);
    assert_eq!(luma601_u8(0, 255, 0), 150);
    assert_eq!(luma601_u8(0, 0, 255), 29);
}

#[test]
fn luma_of_gray_uses_first_sample() {
    assert_eq!(luma_of(&[42]), 42);
    assert_eq!(luma_of(&[42, 255]), 42);
    assert_eq!(luma_of(&[10, 10, 10, 0]), 10);
}

#[test]
fn half_mix_rounds_half_up() {
    assert_eq!(half_mix_u8(0, 255), 128);
    assert_eq!(half_mix_u8(255, 255), 255);
    assert_eq!(half_mix_u8(100, 100), 100);
}

#[test]
fn alpha_mix_endpoints_and_truncation() {
    assert_eq!(alpha_mix_trunc_u8(37, 255, 0.0), 37);
    assert_eq!(alpha_mix_trunc_u8(37, 255, 1.0), 255);
    assert_eq!(alpha_mix_trunc_u8(0, 255, 0.5), 127);
    assert_eq!(alpha_mix_trunc_u8(10, 200, 7.0), 200);
    assert_eq!(alpha_mix_trunc_u8(10, 200, -1.0), 10);
}
