use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use graphit::system::series::SeriesBuffer;
use graphit::ui::draw;
use graphit::ui::theme::Theme;
use graphit::ui::view::{PanelLayout, View};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use std::hint::black_box;

const WIDTHS: [u16; 3] = [80, 160, 320];

fn filled_series(width: u16) -> SeriesBuffer {
    let mut series = SeriesBuffer::new(usize::from(width) - 1);
    for i in 0..usize::from(width) * 2 {
        series.push((i * 4096) as f64);
    }
    series
}

fn bench_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("series_push_80_160_320");
    for width in WIDTHS {
        group.bench_with_input(BenchmarkId::from_parameter(width), &width, |b, &width| {
            let mut series = filled_series(width);
            let mut next = 0.0;
            b.iter(|| {
                next += 1.0;
                series.push(black_box(next));
            });
        });
    }
    group.finish();
}

fn bench_view_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("view_build_80_160_320");
    for width in WIDTHS {
        let series = filled_series(width);
        let layout = PanelLayout::for_size(width, 50);
        group.bench_with_input(BenchmarkId::from_parameter(width), &width, |b, _| {
            b.iter(|| {
                black_box(View::build(
                    &series.values(),
                    "PID 4242 uses 123456789 bytes",
                    "java -Xmx1g MemoryHog",
                    series.peak(),
                    layout,
                ))
            });
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_render_80_160_320");
    let theme = Theme::default();
    for width in WIDTHS {
        let series = filled_series(width);
        let view = View::build(
            &series.values(),
            "PID 4242 uses 123456789 bytes",
            "java -Xmx1g MemoryHog",
            series.peak(),
            PanelLayout::for_size(width, 50),
        );
        let mut terminal = Terminal::new(TestBackend::new(width, 50)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(width), &width, |b, _| {
            b.iter(|| {
                terminal.draw(|frame| draw(frame, &view, &theme)).unwrap();
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_push, bench_view_build, bench_render);
criterion_main!(benches);
