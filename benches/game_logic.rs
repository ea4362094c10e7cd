use criterion::{black_box, criterion_group, criterion_main, Criterion};
use matrix_tetris::core::{catalog, GameSession, Grid, RenderSnapshot};
use matrix_tetris::types::{InputCommand, Rgb, WIDTH, WORK_HEIGHT};

fn bench_frame(c: &mut Criterion) {
    c.bench_function("session_frame", |b| {
        let mut session = GameSession::new(12345);
        b.iter(|| {
            if session.is_game_over() {
                session = GameSession::new(12345);
            }
            session.frame(black_box(&[InputCommand::MoveLeft]));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_2_lines", |b| {
        b.iter(|| {
            let mut grid = Grid::new();
            // Fill the bottom 2 rows.
            for y in (WORK_HEIGHT - 2) as i8..WORK_HEIGHT as i8 {
                for x in 0..WIDTH as i8 {
                    grid.set(x, y, Some(Rgb::new(255, 0, 255)));
                }
            }
            grid.clear_full_lines()
        })
    });
}

fn bench_can_place(c: &mut Criterion) {
    let grid = Grid::new();
    let tee = catalog()[3].pattern;

    c.bench_function("can_place", |b| {
        b.iter(|| grid.can_place(black_box(&tee), black_box(3), black_box(6)))
    });
}

fn bench_rotation(c: &mut Criterion) {
    let tee = catalog()[3].pattern;

    c.bench_function("pattern_rotate_ccw", |b| {
        b.iter(|| black_box(&tee).rotated(black_box(90)))
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let session = GameSession::new(12345);
    let mut snap = RenderSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            session.snapshot_into(&mut snap);
        })
    });
}

criterion_group!(
    benches,
    bench_frame,
    bench_line_clear,
    bench_can_place,
    bench_rotation,
    bench_snapshot
);
criterion_main!(benches);
