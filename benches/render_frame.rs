use criterion::{criterion_group, criterion_main, Criterion};

use vhs_vr_viewer::{config::Config, driver::OffscreenSurface, render::FrameRenderer};

fn bench_render_frame(c: &mut Criterion) {
    let config = Config::default();

    let mut group = c.benchmark_group("render_frame");
    for (width, height) in [(480u32, 640u32), (1080, 1920)] {
        let mut surface = OffscreenSurface::new(width, height).unwrap();
        let mut renderer = FrameRenderer::new(&config);

        group.bench_function(format!("{width}x{height}"), |b| {
            b.iter(|| renderer.render_frame(&mut surface).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render_frame);
criterion_main!(benches);
