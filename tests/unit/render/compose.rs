use super::*;

#[test]
fn dst_in_keeps_destination_color() {
    let dst = [10, 20, 30, 255];
    assert_eq!(dst_in(dst, [0, 0, 0, 255]), dst);
    assert_eq!(dst_in(dst, [255, 255, 255, 255]), dst);
    assert_eq!(dst_in(dst, [0, 0, 0, 0]), [0, 0, 0, 0]);
}

#[test]
fn dst_in_scales_by_mask_alpha() {
    let out = dst_in([200, 100, 0, 255], [0, 0, 0, 128]);
    assert_eq!(out, [100, 50, 0, 128]);

    let translucent = dst_in([64, 64, 64, 128], [9, 9, 9, 128]);
    assert_eq!(translucent, [32, 32, 32, 64]);
}

#[test]
fn dst_in_in_place_checks_lengths() {
    let mut dst = vec![1u8; 8];
    assert!(dst_in_in_place(&mut dst, &[0u8; 4]).is_err());
    assert!(dst_in_in_place(&mut dst[..6], &[0u8; 6]).is_err());
}

#[test]
fn dst_in_in_place_masks_per_pixel() {
    let mut dst = vec![255, 0, 0, 255, 0, 255, 0, 255];
    let mask = vec![0, 0, 0, 255, 0, 0, 0, 0];
    dst_in_in_place(&mut dst, &mask).unwrap();
    assert_eq!(dst, vec![255, 0, 0, 255, 0, 0, 0, 0]);
}

fn raster(w: u32, h: u32, data: Vec<u8>) -> Raster {
    Raster::from_premul(w, h, data).unwrap()
}

#[test]
fn copy_rect_replaces_and_clips() {
    // 3x2 destination filled with white, 2x2 source at (2, -1).
    let mut dst = raster(3, 2, vec![255u8; 3 * 2 * 4]);
    let src = raster(
        2,
        2,
        vec![
            1, 0, 0, 255, 2, 0, 0, 255, //
            3, 0, 0, 255, 0, 0, 0, 0, //
        ],
    );
    copy_rect(&mut dst, &src, 2, -1);

    // Only source row 1, column 0 lands at destination (2, 0).
    assert_eq!(&dst.data[8..12], &[3, 0, 0, 255]);
    assert_eq!(&dst.data[0..8], &[255u8; 8]);
    assert_eq!(&dst.data[12..], &[255u8; 12]);
}

#[test]
fn copy_rect_fully_outside_is_noop() {
    let mut dst = raster(2, 2, vec![7u8; 16]);
    let src = raster(2, 2, vec![0u8; 16]);
    copy_rect(&mut dst, &src, 5, 5);
    copy_rect(&mut dst, &src, -2, 0);
    assert_eq!(dst.data, vec![7u8; 16]);
}

#[test]
fn copy_rect_transparent_pixels_overwrite() {
    let mut dst = raster(1, 1, vec![255u8; 4]);
    copy_rect(&mut dst, &raster(1, 1, vec![0, 0, 0, 0]), 0, 0);
    assert_eq!(dst.data, vec![0, 0, 0, 0]);
}
