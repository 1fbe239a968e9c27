use std::io::Cursor;

use super::*;

#[test]
fn decode_png_to_rgb_drops_alpha() {
    let img = image::RgbaImage::from_raw(1, 1, vec![100u8, 50, 200, 128]).unwrap();
    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .unwrap();

    let buf = decode_pixels(&bytes).unwrap();
    assert_eq!((buf.width, buf.height, buf.channels), (1, 1, 3));
    assert_eq!(buf.data, vec![100, 50, 200]);
}

#[test]
fn encode_then_decode_preserves_rgb_pixels() {
    let buf = PixelBuffer::from_raw(2, 1, 3, vec![1, 2, 3, 250, 251, 252]).unwrap();
    let png = encode_png(&buf).unwrap();
    assert_eq!(decode_pixels(&png).unwrap(), buf);
}

#[test]
fn decode_garbage_is_error() {
    assert!(decode_pixels(b"not an image").is_err());
}

#[test]
fn weight_map_loads_from_json_and_gray_png() {
    let dir = std::env::temp_dir().join(format!("saliency-overlay-decode-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    let json_path = dir.join("map.json");
    std::fs::write(&json_path, "[[0.0, 0.5], [1.0, 2.0]]").unwrap();
    let map = load_weight_map(&json_path).unwrap();
    assert_eq!(map.data, vec![0.0, 0.5, 1.0, 2.0]);

    let png_path = dir.join("map.png");
    let gray = PixelBuffer::from_raw(2, 1, 1, vec![0, 255]).unwrap();
    save_png(&gray, &png_path).unwrap();
    let map = load_weight_map(&png_path).unwrap();
    assert_eq!((map.width, map.height), (2, 1));
    assert_eq!(map.data, vec![0.0, 1.0]);

    let bad_path = dir.join("bad.json");
    std::fs::write(&bad_path, "[[1.0], [2.0, 3.0]]").unwrap();
    assert!(load_weight_map(&bad_path).is_err());

    std::fs::remove_dir_all(&dir).ok();
}
