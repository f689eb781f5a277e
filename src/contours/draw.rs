//! Rasterizes closed contours onto an image with a square brush.
use super::Contour;
use crate::image::ImageU8;
use crate::normalize::luminance;

/// Stamp a `thickness × thickness` square whose upper-left quadrant holds the
/// extra pixel for even sizes.
fn stamp(img: &mut ImageU8, x: i32, y: i32, thickness: usize, color: &[u8]) {
    let t = thickness as i32;
    let lo = -(t / 2);
    let hi = t - t / 2;
    for dy in lo..hi {
        for dx in lo..hi {
            let (px, py) = (x + dx, y + dy);
            if px >= 0 && py >= 0 && (px as usize) < img.w && (py as usize) < img.h {
                img.put_pixel(px as usize, py as usize, color);
            }
        }
    }
}

/// Bresenham segment from `(x0, y0)` to `(x1, y1)`, both ends inclusive.
fn draw_segment(
    img: &mut ImageU8,
    (mut x0, mut y0): (i32, i32),
    (x1, y1): (i32, i32),
    thickness: usize,
    color: &[u8],
) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        stamp(img, x0, y0, thickness, color);
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

/// Draw every contour as a closed polyline in place.
///
/// Single-channel targets receive the luminance of `color`. A zero
/// `thickness` draws nothing.
pub fn draw_contours(img: &mut ImageU8, contours: &[Contour], color: [u8; 3], thickness: usize) {
    let gray = [luminance(color[0], color[1], color[2])];
    let color: &[u8] = if img.is_gray() { &gray } else { &color };

    for contour in contours {
        let pts = &contour.points;
        match pts.len() {
            0 => {}
            1 => stamp(img, pts[0].x, pts[0].y, thickness, color),
            n => {
                for i in 0..n {
                    let a = pts[i];
                    let b = pts[(i + 1) % n];
                    draw_segment(img, (a.x, a.y), (b.x, b.y), thickness, color);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contours::Point;

    fn contour(points: &[(i32, i32)]) -> Contour {
        Contour::from_points(points.iter().map(|&(x, y)| Point::new(x, y)).collect())
    }

    #[test]
    fn closed_square_outline_with_unit_stroke() {
        let mut img = ImageU8::rgb(10, 10);
        draw_contours(&mut img, &[contour(&[(2, 2), (2, 6), (6, 6), (6, 2)])], [0, 255, 0], 1);
        for i in 2..=6 {
            assert_eq!(img.pixel(2, i), &[0, 255, 0]);
            assert_eq!(img.pixel(6, i), &[0, 255, 0]);
            assert_eq!(img.pixel(i, 2), &[0, 255, 0]);
            assert_eq!(img.pixel(i, 6), &[0, 255, 0]);
        }
        assert_eq!(img.pixel(4, 4), &[0, 0, 0]);
    }

    #[test]
    fn two_pixel_stroke_is_two_pixels_wide() {
        let mut img = ImageU8::rgb(10, 10);
        draw_contours(&mut img, &[contour(&[(5, 1), (5, 8)])], [0, 255, 0], 2);
        for y in 1..=8 {
            let row: Vec<usize> = (0..10).filter(|&x| img.pixel(x, y)[1] == 255).collect();
            assert_eq!(row, vec![4, 5], "row {y}");
        }
    }

    #[test]
    fn strokes_clip_at_image_border() {
        let mut img = ImageU8::gray(4, 4);
        draw_contours(&mut img, &[contour(&[(0, 0)])], [0, 255, 0], 3);
        assert_eq!(img.get(0, 0), 150);
        assert_eq!(img.get(1, 1), 150);
        assert_eq!(img.get(2, 2), 0);
    }
}
