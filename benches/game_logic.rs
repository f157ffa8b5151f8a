use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_runner::core::{GameConfig, GameState, Map, SimpleRng};
use tui_runner::term::{encode_diff_into, FrameBuffer, GameView};

fn fresh_state() -> GameState {
    let config = GameConfig::new(100, 32, 12345)
        .with_frame_delay_ms(0)
        .with_spawn_gap(1_000_000, 1_000_000);
    GameState::new(config).unwrap()
}

fn bench_frame_step(c: &mut Criterion) {
    let mut state = fresh_state();
    let mut frame = 0u32;

    c.bench_function("frame_step_100x32", |b| {
        b.iter(|| {
            if state.game_over() {
                state = fresh_state();
            }
            state.scroll();
            frame = frame.wrapping_add(1);
            black_box(state.tick(frame % 20 == 0));
        })
    });
}

fn bench_map_scroll(c: &mut Criterion) {
    let layout = GameConfig::new(100, 32, 1).validate().unwrap();
    let mut rng = SimpleRng::new(1);
    let mut map = Map::generate(layout, &mut rng).unwrap();

    c.bench_function("map_scroll_left", |b| {
        b.iter(|| {
            map.scroll_left(black_box(&mut rng));
            map.clear_band();
        })
    });
}

fn bench_render_diff(c: &mut Criterion) {
    let mut state = fresh_state();
    let view = GameView::default();
    let mut prev = FrameBuffer::default();
    let mut next = FrameBuffer::default();
    let mut out = Vec::with_capacity(64 * 1024);
    view.render_into(&state, &mut prev);

    c.bench_function("render_and_diff", |b| {
        b.iter(|| {
            if state.game_over() {
                state = fresh_state();
            }
            state.scroll();
            let _ = state.tick(false);
            view.render_into(&state, &mut next);
            out.clear();
            encode_diff_into(&prev, &next, &mut out).unwrap();
            std::mem::swap(&mut prev, &mut next);
            black_box(out.len());
        })
    });
}

criterion_group!(benches, bench_frame_step, bench_map_scroll, bench_render_diff);
criterion_main!(benches);
