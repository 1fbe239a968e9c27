use super::*;

fn checker(w: u32, h: u32) -> PixelBuffer {
    let mut buf = PixelBuffer::new(w, h, 3).unwrap();
    for y in 0..h {
        for x in 0..w {
            let v = if (x + y) % 2 == 0 { 40 } else { 90 };
            buf.pixel_mut(x, y).copy_from_slice(&[v, v / 2, v / 3]);
        }
    }
    buf
}

#[test]
fn all_white_source_replaces_rect() {
    let mut dst = checker(8, 6);
    let src = PixelBuffer::filled(3, 3, &[255, 255, 255]).unwrap();
    let rect = PixelRect::new(2, 1, 6, 5);
    paste_masked(&mut dst, &src, rect, DEFAULT_MASK_THRESHOLD).unwrap();

    let expected = resize_bilinear(&src, 4, 4).unwrap();
    assert_eq!(dst.crop(rect).unwrap(), expected);
}

#[test]
fn all_black_source_leaves_destination_unchanged() {
    let mut dst = checker(8, 6);
    let before = dst.clone();
    let src = PixelBuffer::filled(5, 2, &[0, 0, 0]).unwrap();
    paste_masked(&mut dst, &src, PixelRect::new(0, 0, 8, 6), DEFAULT_MASK_THRESHOLD).unwrap();
    assert_eq!(dst, before);
}

#[test]
fn threshold_is_exclusive() {
    let mut dst = PixelBuffer::filled(2, 1, &[1, 2, 3]).unwrap();
    let src = PixelBuffer::from_raw(2, 1, 3, vec![10, 10, 10, 11, 11, 11]).unwrap();
    paste_masked(&mut dst, &src, PixelRect::new(0, 0, 2, 1), 10).unwrap();
    assert_eq!(dst.data, vec![1, 2, 3, 11, 11, 11]);
}

#[test]
fn pixels_outside_rect_are_untouched() {
    let mut dst = checker(6, 6);
    let before = dst.clone();
    let src = PixelBuffer::filled(2, 2, &[200, 200, 200]).unwrap();
    let rect = PixelRect::new(1, 1, 3, 3);
    paste_masked(&mut dst, &src, rect, DEFAULT_MASK_THRESHOLD).unwrap();
    for y in 0..6 {
        for x in 0..6 {
            if (1..3).contains(&x) && (1..3).contains(&y) {
                assert_eq!(dst.pixel(x, y), [200, 200, 200]);
            } else {
                assert_eq!(dst.pixel(x, y), before.pixel(x, y));
            }
        }
    }
}

#[test]
fn mask_follows_luma_not_single_channel() {
    // Pure blue at 60 has luma 7, which is below the default threshold.
    let src = PixelBuffer::from_raw(2, 1, 3, vec![0, 0, 60, 0, 60, 0]).unwrap();
    assert_eq!(foreground_mask(&src, DEFAULT_MASK_THRESHOLD), vec![false, true]);
}

#[test]
fn rejects_bad_rects_and_channel_mismatch() {
    let mut dst = checker(4, 4);
    let src = PixelBuffer::filled(2, 2, &[255, 255, 255]).unwrap();
    assert!(paste_masked(&mut dst, &src, PixelRect::new(2, 2, 5, 4), 10).is_err());
    assert!(paste_masked(&mut dst, &src, PixelRect::new(2, 2, 2, 4), 10).is_err());

    let gray = PixelBuffer::filled(2, 2, &[255]).unwrap();
    assert!(paste_masked(&mut dst, &gray, PixelRect::new(0, 0, 2, 2), 10).is_err());
}
