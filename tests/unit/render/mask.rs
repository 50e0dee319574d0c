use super::*;
use crate::assets::resources::{InMemoryResources, NoResources};

const TRIANGLE: &[u8] = br##"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100">
  <path d="M0,0 L100,0 L0,100 Z" fill="#000"/>
</svg>"##;

#[test]
fn circle_mask_covers_center_not_corners() {
    let m = generate_mask(&ViewConfig::circle(), Size::new(64, 64), &NoResources).unwrap();
    assert_eq!(m.size(), Size::new(64, 64));
    assert_eq!(m.coverage(32, 32), 255);
    assert!(m.coverage(32, 2) >= 250);
    assert_eq!(m.coverage(0, 0), 0);
    assert_eq!(m.coverage(63, 63), 0);
    assert_eq!(m.coverage(63, 0), 0);
}

#[test]
fn circle_mask_is_black() {
    let m = generate_mask(&ViewConfig::circle(), Size::new(16, 16), &NoResources).unwrap();
    let px = m.raster().pixel(8, 8);
    assert_eq!((px.r, px.g, px.b, px.a), (0, 0, 0, 255));
}

#[test]
fn circle_in_non_square_bounds_uses_shorter_side() {
    let m = generate_mask(&ViewConfig::circle(), Size::new(100, 40), &NoResources).unwrap();
    assert_eq!(m.coverage(20, 20), 255);
    assert!(m.coverage(20, 38) >= 250);
    // Nothing is drawn past the inscribed 40x40 square.
    assert_eq!(m.coverage(50, 20), 0);
    assert_eq!(m.coverage(90, 20), 0);
}

#[test]
fn rounded_rect_mask_cuts_corners() {
    let cfg = ViewConfig::rounded_rect(20.0).unwrap();
    let m = generate_mask(&cfg, Size::new(300, 100), &NoResources).unwrap();
    assert_eq!(m.coverage(150, 50), 255);
    assert_eq!(m.coverage(5, 50), 255);
    assert!(m.coverage(150, 1) >= 250);
    assert_eq!(m.coverage(0, 0), 0);
    assert_eq!(m.coverage(299, 0), 0);
    assert_eq!(m.coverage(0, 99), 0);
    assert_eq!(m.coverage(299, 99), 0);
}

#[test]
fn zero_radius_rounded_rect_covers_everything() {
    let cfg = ViewConfig::rounded_rect(0.0).unwrap();
    let m = generate_mask(&cfg, Size::new(8, 6), &NoResources).unwrap();
    assert!(m.raster().data.chunks_exact(4).all(|px| px[3] >= 250));
}

#[test]
fn unset_vector_handle_gives_empty_mask() {
    let cfg = ViewConfig::vector_path(ResourceHandle::NONE);
    let m = generate_mask(&cfg, Size::new(10, 10), &NoResources).unwrap();
    assert!(m.is_empty());
}

#[test]
fn vector_mask_follows_svg() {
    let mut res = InMemoryResources::new();
    res.insert(ResourceHandle(1), TRIANGLE.to_vec()).unwrap();
    let cfg = ViewConfig::vector_path(ResourceHandle(1));
    let m = generate_mask(&cfg, Size::new(50, 50), &res).unwrap();
    assert_eq!(m.coverage(5, 5), 255);
    assert_eq!(m.coverage(45, 45), 0);
    assert!(!m.is_empty());
}

#[test]
fn vector_failures_degrade_to_empty_mask() {
    let mut res = InMemoryResources::new();
    res.insert(ResourceHandle(1), b"<svg".to_vec()).unwrap();

    let malformed = ViewConfig::vector_path(ResourceHandle(1));
    assert!(generate_mask(&malformed, Size::new(10, 10), &res).unwrap().is_empty());

    let missing = ViewConfig::vector_path(ResourceHandle(2));
    assert!(generate_mask(&missing, Size::new(10, 10), &res).unwrap().is_empty());
}

#[test]
fn empty_bounds_are_an_error() {
    assert!(generate_mask(&ViewConfig::circle(), Size::new(0, 10), &NoResources).is_err());
}

#[test]
fn shape_path_none_for_vector() {
    assert!(shape_path(ShapeKind::VectorPath, Size::new(4, 4), 0.0).is_none());
    let bbox = shape_path(ShapeKind::Circle, Size::new(10, 6), 0.0)
        .unwrap()
        .bounding_box();
    assert!((bbox.x1 - 6.0).abs() < 1e-6);
    assert!((bbox.y1 - 6.0).abs() < 1e-6);
}
