use super::*;

fn lit(icon: &PixelBuffer, x: u32, y: u32) -> bool {
    icon.pixel(x, y)[0] == 255
}

#[test]
fn builtin_icons_are_rgb_and_square() {
    let set = IconSet::builtin();
    for dir in Direction::ALL {
        let icon = set.get(dir);
        icon.validate().unwrap();
        assert_eq!(
            (icon.width, icon.height, icon.channels),
            (BUILTIN_ICON_SIZE, BUILTIN_ICON_SIZE, 3)
        );
        assert!(icon.data.iter().any(|&v| v == 255));
        assert!(icon.data.iter().any(|&v| v == 0));
    }
}

#[test]
fn builtin_arrows_point_their_way() {
    let set = IconSet::builtin();
    let mid = BUILTIN_ICON_SIZE / 2;
    let up = set.get(Direction::Up);
    // Tip near the top, nothing in the top-left corner.
    assert!(lit(up, mid, 6));
    assert!(!lit(up, 0, 0));
    assert!(!lit(up, mid, 1));

    let left = set.get(Direction::Left);
    assert!(lit(left, 6, mid));
    assert!(!lit(left, 1, mid));

    let right = set.get(Direction::Right);
    assert!(lit(right, BUILTIN_ICON_SIZE - 7, mid));
    assert!(!lit(right, BUILTIN_ICON_SIZE - 2, mid));
}

#[test]
fn new_converts_to_rgb_and_rejects_empty() {
    let gray = PixelBuffer::filled(2, 2, &[200]).unwrap();
    let set = IconSet::new(gray.clone(), gray.clone(), gray.clone()).unwrap();
    assert_eq!(set.get(Direction::Right).channels, 3);

    let empty = PixelBuffer::new(0, 3, 3).unwrap();
    assert!(IconSet::new(gray.clone(), empty, gray).is_err());
}

#[test]
fn from_dir_reports_missing_files() {
    let dir = std::env::temp_dir().join("saliency-overlay-no-icons-here");
    assert!(IconSet::from_dir(&dir).is_err());
}
