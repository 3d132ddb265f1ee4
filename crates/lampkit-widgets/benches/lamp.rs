//! Benchmarks for the lamp toggle.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lampkit_core::{RecordingCanvas, Rect, Widget};
use lampkit_widgets::{LampConfig, LampSize, LampToggle};

fn laid_out(config: LampConfig) -> LampToggle {
    let mut lamp = LampToggle::new(config);
    lamp.layout(Rect::new(0.0, 0.0, 1280.0, 720.0));
    lamp
}

fn bench_lamp_new(c: &mut Criterion) {
    c.bench_function("lamp_new", |b| {
        b.iter(|| LampToggle::new(black_box(LampConfig::new(false).size(LampSize::Large))))
    });
}

fn bench_lamp_paint(c: &mut Criterion) {
    let lamp = laid_out(LampConfig::new(false));

    c.bench_function("lamp_paint_lit", |b| {
        b.iter(|| {
            let mut canvas = RecordingCanvas::new();
            lamp.paint(&mut canvas);
            black_box(canvas.command_count())
        })
    });
}

fn bench_lamp_tick(c: &mut Criterion) {
    let mut lamp = laid_out(LampConfig::new(false));
    lamp.set_config(LampConfig::new(true));

    c.bench_function("lamp_tick_frame", |b| {
        b.iter(|| lamp.tick(black_box(1.0 / 60.0)))
    });
}

fn bench_lamp_toggle_cycle(c: &mut Criterion) {
    let mut lamp = laid_out(LampConfig::new(false));
    let mut is_dark = false;

    c.bench_function("lamp_retarget_and_tick", |b| {
        b.iter(|| {
            is_dark = !is_dark;
            lamp.set_config(LampConfig::new(is_dark));
            for _ in 0..30 {
                lamp.tick(1.0 / 60.0);
            }
            black_box(lamp.current_visual())
        })
    });
}

fn bench_lamp_html(c: &mut Criterion) {
    let lamp = laid_out(LampConfig::new(true).extra_classes("hero"));

    c.bench_function("lamp_to_html", |b| b.iter(|| black_box(lamp.to_html())));
}

criterion_group!(
    benches,
    bench_lamp_new,
    bench_lamp_paint,
    bench_lamp_tick,
    bench_lamp_toggle_cycle,
    bench_lamp_html,
);
criterion_main!(benches);
