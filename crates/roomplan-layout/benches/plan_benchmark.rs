//! Placement benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use roomplan_layout::{generate_layout, generate_with_bed_ladder, BedSize, PlanOptions, PlanRequest, UnderWindowUse, WallSide};

fn default_room(c: &mut Criterion) {
    let request = PlanRequest::default();
    let options = PlanOptions::default();
    c.bench_function("plan_default_room", |b| {
        b.iter(|| generate_layout(black_box(&request), black_box(&options)))
    });
}

fn large_room_with_desk(c: &mut Criterion) {
    let mut request = PlanRequest::default();
    request.room.width = 6000.0;
    request.room.depth = 5000.0;
    request.window.sill_height = 750.0;
    request.under_window_use = UnderWindowUse::StudyTable;
    request.dresser.enabled = true;
    let options = PlanOptions::default();
    c.bench_function("plan_large_room_with_desk", |b| {
        b.iter(|| generate_layout(black_box(&request), black_box(&options)))
    });
}

fn bed_ladder(c: &mut Criterion) {
    let mut request = PlanRequest::default();
    request.room.width = 2600.0;
    request.room.depth = 5000.0;
    request.door.wall = WallSide::Right;
    request.door.offset = 2100.0;
    request.door.width = 800.0;
    request.window.wall = WallSide::Left;
    request.window.width = 4600.0;
    request.bed.size = BedSize::King;
    let options = PlanOptions::default();
    c.bench_function("plan_bed_ladder", |b| {
        b.iter(|| generate_with_bed_ladder(black_box(&request), black_box(&options)))
    });
}

criterion_group!(benches, default_room, large_room_with_desk, bed_ladder);
criterion_main!(benches);
