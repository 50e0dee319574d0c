use super::*;

#[test]
fn solid_fills_every_pixel() {
    let img = SourceImage::solid(3, 2, Rgba8Premul::opaque(255, 0, 0)).unwrap();
    assert_eq!(img.intrinsic_size(), Size::new(3, 2));
    assert_eq!(img.pixels().len(), 24);
    assert!(img.pixels().chunks_exact(4).all(|px| px == [255, 0, 0, 255]));
}

#[test]
fn zero_sized_images_are_rejected() {
    assert!(SourceImage::solid(0, 2, Rgba8Premul::opaque(0, 0, 0)).is_err());
    assert!(SourceImage::from_premul(2, 0, Vec::new()).is_err());
}

#[test]
fn byte_len_is_checked() {
    let err = SourceImage::from_premul(2, 2, vec![0; 12]).unwrap_err();
    assert!(err.to_string().contains("byte len mismatch"));
}

#[test]
fn straight_rgba_is_premultiplied() {
    let img = SourceImage::from_straight_rgba(1, 1, vec![200, 100, 0, 0]).unwrap();
    assert_eq!(img.pixels(), &[0, 0, 0, 0]);
}

#[test]
fn clones_share_pixels() {
    let a = SourceImage::solid(2, 2, Rgba8Premul::opaque(1, 2, 3)).unwrap();
    let b = a.clone();
    assert_eq!(a, b);
    assert_eq!(a.pixels().as_ptr(), b.pixels().as_ptr());
}
