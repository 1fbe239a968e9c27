use super::*;

#[test]
fn normalize_maps_to_unit_range() {
    let map = WeightMap::from_rows(vec![vec![2.0, 4.0], vec![3.0, 6.0]]).unwrap();
    let n = normalize_weights(&map).unwrap();
    assert_eq!(n.data, vec![0.0, 0.5, 0.25, 1.0]);
}

#[test]
fn normalize_flat_and_single_value_maps_is_none() {
    assert!(normalize_weights(&WeightMap::filled(4, 3, 0.5)).is_none());
    assert!(normalize_weights(&WeightMap::filled(1, 1, 9.0)).is_none());
}

#[test]
fn normalize_handles_range_wider_than_f32() {
    let map = WeightMap::from_raw(3, 1, vec![-3.0e38, 0.0, 3.0e38]).unwrap();
    let n = normalize_weights(&map).unwrap();
    assert_eq!(n.data, vec![0.0, 0.5, 1.0]);
}

#[test]
fn wide_range_map_still_blends() {
    let mut buf = PixelBuffer::filled(2, 1, &[100, 100, 100]).unwrap();
    let map = WeightMap::from_raw(2, 1, vec![-3.0e38, 3.0e38]).unwrap();
    let blended = blend_saliency(&mut buf, &map, PixelRect::new(0, 0, 2, 1), Rgb8::GREEN).unwrap();
    assert!(blended);
    assert_eq!(buf.pixel(0, 0), [100, 100, 100]);
    assert_eq!(buf.pixel(1, 0), [0, 255, 0]);
}

#[test]
fn flat_map_is_noop() {
    let mut buf = PixelBuffer::filled(4, 4, &[90, 90, 90]).unwrap();
    let before = buf.clone();
    let blended = blend_saliency(
        &mut buf,
        &WeightMap::filled(2, 2, 0.5),
        PixelRect::new(0, 2, 4, 4),
        Rgb8::GREEN,
    )
    .unwrap();
    assert!(!blended);
    assert_eq!(buf, before);
}

#[test]
fn blend_endpoints_and_region_bounds() {
    let mut buf = PixelBuffer::filled(2, 3, &[100, 100, 100]).unwrap();
    let map = WeightMap::from_rows(vec![vec![0.0, 1.0]]).unwrap();
    let region = PixelRect::new(0, 2, 2, 3);
    assert!(blend_saliency(&mut buf, &map, region, Rgb8::GREEN).unwrap());

    // Rows above the region are untouched.
    for y in 0..2 {
        for x in 0..2 {
            assert_eq!(buf.pixel(x, y), [100, 100, 100]);
        }
    }
    assert_eq!(buf.pixel(0, 2), [100, 100, 100]);
    assert_eq!(buf.pixel(1, 2), [0, 255, 0]);
}

#[test]
fn rescales_map_to_region_span() {
    let mut buf = PixelBuffer::filled(8, 4, &[0, 0, 0]).unwrap();
    let map = WeightMap::from_rows(vec![vec![0.0, 1.0]]).unwrap();
    blend_saliency(&mut buf, &map, PixelRect::new(0, 0, 8, 4), Rgb8::WHITE).unwrap();

    // Alpha grows left to right across the whole region and is constant down columns.
    for y in 0..4 {
        let row: Vec<u8> = (0..8).map(|x| buf.pixel(x, y)[0]).collect();
        assert!(row.windows(2).all(|w| w[0] <= w[1]), "row {y}: {row:?}");
        assert_eq!(row[0], 0);
        assert_eq!(row[7], 255);
    }
}

#[test]
fn rejects_region_outside_buffer() {
    let mut buf = PixelBuffer::filled(2, 2, &[0, 0, 0]).unwrap();
    let map = WeightMap::from_rows(vec![vec![0.0, 1.0]]).unwrap();
    assert!(blend_saliency(&mut buf, &map, PixelRect::new(0, 1, 2, 3), Rgb8::GREEN).is_err());
}
