use super::*;

#[test]
fn taps_clamp_to_edges() {
    let t = taps(2, 4);
    assert_eq!(t[0], Tap { i0: 0, i1: 1, frac: 0.0 });
    assert_eq!(t[1], Tap { i0: 0, i1: 1, frac: 0.25 });
    assert_eq!(t[2], Tap { i0: 0, i1: 1, frac: 0.75 });
    assert_eq!(t[3], Tap { i0: 1, i1: 1, frac: 0.0 });
}

#[test]
fn same_size_resize_is_identity() {
    let src = PixelBuffer::from_raw(2, 2, 3, (0u8..12).collect()).unwrap();
    assert_eq!(resize_bilinear(&src, 2, 2).unwrap(), src);
}

#[test]
fn constant_image_stays_constant_at_any_size() {
    let src = PixelBuffer::filled(7, 5, &[12, 200, 99]).unwrap();
    let out = resize_bilinear(&src, 3, 11).unwrap();
    assert_eq!((out.width, out.height, out.channels), (3, 11, 3));
    assert!(out.data.chunks_exact(3).all(|px| px == [12, 200, 99]));
}

#[test]
fn upscale_interpolates_between_columns() {
    let src = PixelBuffer::from_raw(2, 1, 1, vec![0, 100]).unwrap();
    let out = resize_bilinear(&src, 4, 1).unwrap();
    assert_eq!(out.data, vec![0, 25, 75, 100]);
}

#[test]
fn resize_rejects_empty_target() {
    let src = PixelBuffer::filled(2, 2, &[1]).unwrap();
    assert!(resize_bilinear(&src, 0, 2).is_err());
    let map = WeightMap::filled(2, 2, 1.0);
    assert!(resize_weights_bilinear(&map, 2, 0).is_err());
}

#[test]
fn weight_resize_keeps_range_and_shape() {
    let map = WeightMap::from_rows(vec![vec![0.0, 1.0], vec![1.0, 0.0]]).unwrap();
    let out = resize_weights_bilinear(&map, 5, 3).unwrap();
    assert_eq!((out.width, out.height), (5, 3));
    assert_eq!(out.data.len(), 15);
    assert!(out.data.iter().all(|w| (0.0..=1.0).contains(w)));
}

#[test]
fn weight_resize_survives_values_near_f32_max() {
    let map = WeightMap::from_rows(vec![vec![-3.0e38, 3.0e38]]).unwrap();
    let out = resize_weights_bilinear(&map, 7, 2).unwrap();
    assert!(out.validate().is_ok());
    assert!(out.data.iter().all(|w| (-3.0e38..=3.0e38).contains(w)));
}
