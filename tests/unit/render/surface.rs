use super::*;

#[test]
fn frame_surface_starts_transparent() {
    let s = FrameSurface::new(Size::new(5, 4)).unwrap();
    assert_eq!(s.size(), Size::new(5, 4));
    assert!(s.frame().is_fully_transparent());
}

#[test]
fn draw_raster_copies_at_offset() {
    let mut s = FrameSurface::new(Size::new(4, 4)).unwrap();
    s.clear(Rgba8Premul::opaque(255, 255, 255));

    let mut r = Raster::new(Size::new(2, 2)).unwrap();
    r.fill(Rgba8Premul::opaque(0, 0, 255));
    s.draw_raster(&r, 1, 1);

    let out = s.into_raster();
    assert_eq!(out.pixel(0, 0), Rgba8Premul::opaque(255, 255, 255));
    assert_eq!(out.pixel(1, 1), Rgba8Premul::opaque(0, 0, 255));
    assert_eq!(out.pixel(2, 2), Rgba8Premul::opaque(0, 0, 255));
    assert_eq!(out.pixel(3, 3), Rgba8Premul::opaque(255, 255, 255));
}

#[test]
fn draw_raster_replaces_with_transparency() {
    let mut s = FrameSurface::new(Size::new(3, 3)).unwrap();
    s.clear(Rgba8Premul::opaque(10, 20, 30));

    let r = Raster::new(Size::new(2, 2)).unwrap();
    s.draw_raster(&r, 0, 0);

    let out = s.frame();
    assert_eq!(out.pixel(0, 0), Rgba8Premul::transparent());
    assert_eq!(out.pixel(1, 1), Rgba8Premul::transparent());
    assert_eq!(out.pixel(2, 2), Rgba8Premul::opaque(10, 20, 30));
}
