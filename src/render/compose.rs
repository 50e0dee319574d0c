use crate::foundation::error::{ShapeViewError, ShapeViewResult};
use crate::foundation::math::mul_div255_u8;
use crate::render::raster::Raster;

/// Premultiplied RGBA8 pixel.
pub type PremulRgba8 = [u8; 4];

/// Porter-Duff destination-in for one pixel: keep `dst` scaled by the source (mask) alpha.
///
/// The mask's color channels are ignored; only coverage matters.
pub fn dst_in(dst: PremulRgba8, mask: PremulRgba8) -> PremulRgba8 {
    match mask[3] {
        0 => [0, 0, 0, 0],
        255 => dst,
        a => {
            let a = u16::from(a);
            [
                mul_div255_u8(u16::from(dst[0]), a),
                mul_div255_u8(u16::from(dst[1]), a),
                mul_div255_u8(u16::from(dst[2]), a),
                mul_div255_u8(u16::from(dst[3]), a),
            ]
        }
    }
}

/// Apply [`dst_in`] across equal-length premultiplied RGBA8 buffers.
pub fn dst_in_in_place(dst: &mut [u8], mask: &[u8]) -> ShapeViewResult<()> {
    if dst.len() != mask.len() || !dst.len().is_multiple_of(4) {
        return Err(ShapeViewError::raster(
            "dst_in_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, m) in dst.chunks_exact_mut(4).zip(mask.chunks_exact(4)) {
        let out = dst_in([d[0], d[1], d[2], d[3]], [m[0], m[1], m[2], m[3]]);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// Copy `src` into `dst` with its top-left corner at `(x, y)`, clipped to `dst`.
///
/// Plain copy: destination pixels under the source are replaced, including with transparency.
pub fn copy_rect(dst: &mut Raster, src: &Raster, x: i32, y: i32) {
    let (dst_w, dst_h) = (dst.width, dst.height);
    let (src_w, src_h) = (src.width, src.height);

    let x0 = i64::from(x).max(0);
    let y0 = i64::from(y).max(0);
    let x1 = (i64::from(x) + i64::from(src_w)).min(i64::from(dst_w));
    let y1 = (i64::from(y) + i64::from(src_h)).min(i64::from(dst_h));
    if x0 >= x1 || y0 >= y1 {
        return;
    }

    let row_bytes = ((x1 - x0) as usize) * 4;
    let sx = (x0 - i64::from(x)) as usize;
    for dy in y0..y1 {
        let sy = (dy - i64::from(y)) as usize;
        let s = (sy * (src_w as usize) + sx) * 4;
        let d = ((dy as usize) * (dst_w as usize) + (x0 as usize)) * 4;
        dst.data[d..d + row_bytes].copy_from_slice(&src.data[s..s + row_bytes]);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/compose.rs"]
mod tests;
