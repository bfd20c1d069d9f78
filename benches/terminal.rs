//! Terminal benchmarks

use cellvt::{Argb, GlyphSource, PixelSink, Terminal};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

/// 8x8 solid-block glyph source, enough to exercise the full render path
struct SolidFont;

impl GlyphSource for SolidFont {
    fn char_width(&self) -> i32 {
        8
    }
    fn char_height(&self) -> i32 {
        8
    }
    fn glyph(&self, ch: char) -> &[u8] {
        if ch == ' ' {
            &[0; 8]
        } else {
            &[0xFF; 8]
        }
    }
}

/// Plain framebuffer sink
struct Frame {
    w: i32,
    h: i32,
    pixels: Vec<u32>,
}

impl Frame {
    fn new(w: i32, h: i32) -> Self {
        Self {
            w,
            h,
            pixels: vec![0; (w * h) as usize],
        }
    }
}

impl PixelSink for Frame {
    fn width(&self) -> i32 {
        self.w
    }
    fn height(&self) -> i32 {
        self.h
    }
    fn set_pixel(&mut self, x: i32, y: i32, color: Argb) {
        if x >= 0 && x < self.w && y >= 0 && y < self.h {
            self.pixels[(y * self.w + x) as usize] = color.0;
        }
    }
    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Argb) {
        for py in y.max(0)..(y + h).min(self.h) {
            for px in x.max(0)..(x + w).min(self.w) {
                self.pixels[(py * self.w + px) as usize] = color.0;
            }
        }
    }
}

fn bench_write(c: &mut Criterion) {
    let mut group = c.benchmark_group("terminal");

    let text = "Hello, World! ".repeat(16);
    group.throughput(Throughput::Bytes(text.len() as u64));

    group.bench_function("write_chars", |b| {
        b.iter(|| {
            let mut term = Terminal::new(80, 24).unwrap();
            term.write(&text);
            black_box(term)
        })
    });

    group.finish();
}

fn bench_scroll(c: &mut Criterion) {
    let mut group = c.benchmark_group("terminal");

    group.bench_function("scroll", |b| {
        b.iter(|| {
            let mut term = Terminal::new(80, 24).unwrap();
            for i in 0..100 {
                term.write_line(&format!("Line {}: Some text content here", i));
            }
            black_box(term)
        })
    });

    group.finish();
}

fn bench_resize(c: &mut Criterion) {
    let mut group = c.benchmark_group("terminal");

    group.bench_function("resize", |b| {
        b.iter(|| {
            let mut term = Terminal::new(80, 24).unwrap();
            term.write(&"Hello, World!\n".repeat(20));
            term.resize(120, 40);
            term.resize(80, 24);
            term.resize(132, 50);
            black_box(term)
        })
    });

    group.finish();
}

fn bench_full_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("terminal");

    let mut term = Terminal::new(80, 24).unwrap();
    for i in 0..24 {
        term.write_line(&format!("Row {}: {}", i, "x".repeat(70)));
    }

    group.bench_function("render_full", |b| {
        let mut frame = Frame::new(1280, 720);
        b.iter(|| {
            term.render(&SolidFont, &mut frame);
            black_box(&frame.pixels);
        })
    });

    group.bench_function("render_region", |b| {
        let mut frame = Frame::new(640, 192);
        b.iter(|| {
            term.render_region(&SolidFont, &mut frame, 100, 50, 64, 32);
            black_box(&frame.pixels);
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_write,
    bench_scroll,
    bench_resize,
    bench_full_render
);

criterion_main!(benches);
