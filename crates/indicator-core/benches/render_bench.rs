use anyhow::Result;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use indicator_core::{render_with, IndicatorState, Orientation, RenderOptions};

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_indicator");
    for &(w, h) in &[(300i32, 50i32), (1920, 120)] {
        let opts = RenderOptions::default().with_size(w, h);
        let state = IndicatorState::default().with_value(63).with_offset(12);
        group.bench_function(format!("rgba_{w}x{h}"), |b| {
            b.iter(|| -> Result<()> {
                let img = render_with(&opts, &state)?;
                black_box(img);
                Ok(())
            });
        });
        group.bench_function(format!("png_{w}x{h}"), |b| {
            b.iter(|| -> Result<()> {
                let bytes = render_with(&opts, &state)?.encode_png()?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    let vertical = IndicatorState::default().with_orientation(Orientation::Vertical);
    let opts = RenderOptions::default().with_size(50, 300);
    group.bench_function("rgba_vertical_50x300", |b| {
        b.iter(|| -> Result<()> {
            black_box(render_with(&opts, &vertical)?);
            Ok(())
        });
    });
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
