use std::collections::HashSet;

use super::*;
use crate::foundation::core::Canvas;
use crate::geometry::vec2::Vec2d;
use crate::render::background::blank_background;
use crate::render::framebuffer::Framebuffer;

#[derive(Debug, Default)]
struct Recorder {
    color: Color,
    points: Vec<(i32, i32)>,
    colors: Vec<Color>,
    clears: usize,
    presents: usize,
}

impl Surface for Recorder {
    fn set_draw_color(&mut self, color: Color) {
        self.color = color;
    }

    fn draw_point(&mut self, x: i32, y: i32) {
        self.points.push((x, y));
        self.colors.push(self.color);
    }

    fn clear(&mut self, _color: Color) {
        self.clears += 1;
    }

    fn upload_background(
        &mut self,
        _bytes: &[u8],
        _width: u32,
        _height: u32,
        _stride: usize,
    ) -> EpicycleResult<()> {
        Ok(())
    }

    fn present(&mut self) -> EpicycleResult<()> {
        self.presents += 1;
        Ok(())
    }
}

fn recorder() -> Rasterizer<Recorder> {
    Rasterizer::new(Recorder::default())
}

fn points(r: &Rasterizer<Recorder>) -> Vec<(i32, i32)> {
    r.surface().points.clone()
}

fn point_set(r: &Rasterizer<Recorder>) -> HashSet<(i32, i32)> {
    r.surface().points.iter().copied().collect()
}

#[test]
fn line_to_same_point_is_one_pixel() {
    let mut r = recorder();
    r.draw_line(Pixel::new(7, -3), Pixel::new(7, -3));
    assert_eq!(points(&r), vec![(7, -3)]);
}

#[test]
fn horizontal_and_diagonal_lines() {
    let mut r = recorder();
    r.draw_line(Pixel::new(0, 0), Pixel::new(4, 0));
    assert_eq!(points(&r), vec![(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)]);

    let mut r = recorder();
    r.draw_line(Pixel::new(0, 0), Pixel::new(3, 3));
    assert_eq!(points(&r), vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
}

#[test]
fn lines_are_connected_and_hit_both_endpoints() {
    let cases = [
        ((0, 0), (1, 3)),
        ((5, 2), (-7, 9)),
        ((-4, -4), (10, -1)),
        ((3, 8), (3, -2)),
    ];
    for ((x0, y0), (x1, y1)) in cases {
        let mut r = recorder();
        r.draw_line(Pixel::new(x0, y0), Pixel::new(x1, y1));
        let pts = points(&r);

        let expected = (x1 - x0).abs().max((y1 - y0).abs()) + 1;
        assert_eq!(pts.len(), expected as usize);
        assert_eq!(pts.first(), Some(&(x0, y0)));
        assert_eq!(pts.last(), Some(&(x1, y1)));
        for w in pts.windows(2) {
            assert!((w[0].0 - w[1].0).abs() <= 1 && (w[0].1 - w[1].1).abs() <= 1);
        }
    }
}

#[test]
fn naive_line_matches_bresenham_on_axis_aligned_and_diagonal() {
    for (from, to) in [
        (Pixel::new(0, 0), Pixel::new(4, 0)),
        (Pixel::new(4, 0), Pixel::new(0, 0)),
        (Pixel::new(2, 1), Pixel::new(2, 6)),
        (Pixel::new(0, 0), Pixel::new(3, 3)),
        (Pixel::new(1, 1), Pixel::new(1, 1)),
    ] {
        let mut fast = recorder();
        fast.draw_line(from, to);
        let mut naive = recorder();
        naive.draw_line_naive(from, to);
        assert_eq!(point_set(&fast), point_set(&naive), "{from:?} -> {to:?}");
    }
}

#[test]
fn solid_drawing_expands_to_three_by_three() {
    let mut r = recorder();
    r.set_solid_drawing(true);
    r.set_pixel(5, 5);
    let set = point_set(&r);
    assert_eq!(set.len(), 9);
    for dy in -1..=1 {
        for dx in -1..=1 {
            assert!(set.contains(&(5 + dx, 5 + dy)));
        }
    }
}

#[test]
fn set_color_forwards_to_surface() {
    let mut r = recorder();
    r.set_color(Color::GREEN);
    r.set_pixel(0, 0);
    assert_eq!(r.color(), Color::GREEN);
    assert_eq!(r.surface().colors, vec![Color::GREEN]);
}

#[test]
fn circle_outline_is_eight_way_symmetric() {
    let mut r = recorder();
    r.draw_circle_outline(5, Pixel::new(10, 10));
    let set = point_set(&r);

    for (x, y) in [(15, 10), (5, 10), (10, 15), (10, 5), (14, 13)] {
        assert!(set.contains(&(x, y)), "missing ({x}, {y})");
    }
    for &(x, y) in &set {
        let (dx, dy) = (x - 10, y - 10);
        for (mx, my) in [
            (dx, dy),
            (-dx, dy),
            (dx, -dy),
            (-dx, -dy),
            (dy, dx),
            (-dy, dx),
            (dy, -dx),
            (-dy, -dx),
        ] {
            assert!(set.contains(&(10 + mx, 10 + my)));
        }
        let d = f64::from(dx * dx + dy * dy).sqrt();
        assert!((d - 5.0).abs() < 1.0, "({x}, {y}) is {d} from center");
    }
}

#[test]
fn filled_dot_radius_zero_is_one_pixel() {
    let mut r = recorder();
    r.draw_filled_dot(0, Pixel::new(3, 4));
    assert_eq!(points(&r), vec![(3, 4)]);
}

#[test]
fn filled_dot_includes_slack_ring() {
    let mut r = recorder();
    r.draw_filled_dot(4, Pixel::new(0, 0));
    let set = point_set(&r);
    assert!(set.contains(&(0, 0)));
    assert!(set.contains(&(4, 0)));
    assert!(set.contains(&(3, 3)));
    assert!(set.contains(&(4, 1)));
    assert!(!set.contains(&(4, 2)));
    assert!(!set.contains(&(5, 0)));
}

#[test]
fn shapes_at_the_coordinate_limit_saturate() {
    let mut r = recorder();
    r.set_solid_drawing(true);
    r.draw_filled_dot(4, Pixel::new(i32::MAX, 0));
    r.draw_circle_outline(5, Pixel::new(i32::MAX, i32::MIN));

    let pts = points(&r);
    assert!(!pts.is_empty());
    assert!(pts.contains(&(i32::MAX, 0)));
    assert!(pts.contains(&(i32::MAX - 4, 0)));
    assert!(pts.contains(&(i32::MAX - 5, i32::MIN)));
}

#[test]
fn background_pixel_is_bgr0_at_row_major_offset() {
    let mut r = recorder();
    r.update_background(4, 3);
    let mut bg = blank_background(Canvas {
        width: 4,
        height: 3,
    });

    r.set_background_pixel(&mut bg, 2, 1, Color::RED);
    let off = 4 * 4 + 2 * 4;
    assert_eq!(&bg[off..off + 4], &[0, 0, 179, 0]);

    let before = bg.clone();
    r.set_background_pixel(&mut bg, 4, 0, Color::RED);
    r.set_background_pixel(&mut bg, -1, 0, Color::RED);
    r.set_background_pixel(&mut bg, 0, 3, Color::RED);
    assert_eq!(bg, before);
}

#[test]
fn background_line_writes_only_the_buffer() {
    let mut r = recorder();
    r.update_background(8, 8);
    let mut bg = blank_background(Canvas {
        width: 8,
        height: 8,
    });
    r.draw_line_to_background(&mut bg, Pixel::new(1, 1), Pixel::new(5, 1), Color::BLUE);

    assert!(r.surface().points.is_empty());
    let blue = bg
        .chunks_exact(4)
        .filter(|px| *px == [179, 0, 0, 0])
        .count();
    assert_eq!(blue, 5);
}

#[test]
fn sine_wave_rejects_bad_parameters_without_drawing() {
    let mut r = recorder();
    let p = Pixel::new(0, 0);
    assert!(r.draw_sine_wave(p, p, 0.0, 1.0, 1.0).is_err());
    assert!(r.draw_sine_wave(p, p, 1.0, -1.0, 1.0).is_err());
    assert!(r.draw_sine_wave(p, p, 1.0, 1.0, f32::NAN).is_err());
    assert!(r.draw_sine_wave(p, p, f32::INFINITY, 1.0, 1.0).is_err());
    assert!(points(&r).is_empty());
}

#[test]
fn sine_wave_spans_one_period_around_baseline() {
    let mut r = recorder();
    r.draw_sine_wave(Pixel::new(10, 100), Pixel::new(5, 0), 1.0, 1.0, 1.0)
        .unwrap();
    let pts = points(&r);

    assert_eq!(pts.first(), Some(&(15, 100)));
    assert!(pts.iter().all(|&(x, _)| (15..=375).contains(&x)));
    assert!(pts.iter().all(|&(_, y)| (0..=200).contains(&y)));
    assert!(pts.iter().any(|&(_, y)| y >= 199));
    assert!(pts.iter().any(|&(_, y)| y <= 1));
}

fn scene_rasterizer() -> (Rasterizer<Framebuffer>, Vec<u8>) {
    let canvas = Canvas {
        width: 120,
        height: 100,
    };
    let mut r = Rasterizer::new(Framebuffer::new(canvas));
    r.update_background(canvas.width, canvas.height);
    (r, blank_background(canvas))
}

#[test]
fn draw_renders_chain_and_extends_trail() {
    let (mut r, mut bg) = scene_rasterizer();
    let mut c = Circle::new(Vec2d::new(50.0, 50.0), 10, 0, 1);
    c.rotate(0.0);
    let circles = [c];

    r.draw(&circles, &mut bg, Pixel::new(60, 70)).unwrap();
    assert!(!r.solid_drawing());
    assert_eq!(r.surface().presented_frames(), 1);

    let frame = r.surface().frame();
    assert_eq!(frame.pixel(60, 50), Some([0, 0, 179, 255]));
    assert_eq!(frame.pixel(50, 50), Some([191, 191, 191, 255]));
    assert_eq!(frame.pixel(45, 50), Some([220, 220, 220, 255]));
    assert_eq!(frame.pixel(60, 66), Some([255, 255, 255, 255]));

    let off = pixel_offset(120, 60, 66);
    assert_eq!(&bg[off..off + 4], &[179, 0, 0, 0]);

    r.draw(&circles, &mut bg, Pixel::new(60, 50)).unwrap();
    assert_eq!(r.surface().frame().pixel(60, 66), Some([0, 0, 179, 255]));
}

#[test]
fn draw_far_off_canvas_chain_is_clipped() {
    let (mut r, mut bg) = scene_rasterizer();
    let before = bg.clone();
    let mut c = Circle::new(Vec2d::new(3.0e9, 10.0), 5, 0, 1);
    c.rotate(0.0);

    r.draw(&[c], &mut bg, Pixel::new(i32::MAX, 10)).unwrap();
    assert_eq!(bg, before);
    assert_eq!(r.surface().presented_frames(), 1);
}

#[test]
fn draw_empty_chain_only_refreshes() {
    let (mut r, mut bg) = scene_rasterizer();
    let before = bg.clone();
    r.draw(&[], &mut bg, Pixel::new(0, 0)).unwrap();
    assert_eq!(bg, before);
    assert_eq!(r.surface().presented_frames(), 1);
    assert_eq!(r.surface().frame().pixel(0, 0), Some([255, 255, 255, 255]));
}

#[test]
fn draw_fails_when_background_size_is_stale() {
    let canvas = Canvas {
        width: 10,
        height: 10,
    };
    let mut r = Rasterizer::new(Framebuffer::new(canvas));
    let mut bg = blank_background(canvas);
    assert!(r.draw(&[], &mut bg, Pixel::new(0, 0)).is_err());
    assert_eq!(r.surface().presented_frames(), 0);
}
