//! Slot-finding throughput for growing numbers of participants.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use meeting_planner::{MeetingPlanner, Participant};
use std::hint::black_box;

/// A work week in minutes with a pseudo-random meeting load per person.
fn build_participants(count: usize) -> Vec<Participant> {
    (0..count)
        .map(|i| {
            let mut p = Participant::new(i as i64, format!("person-{i}"));
            for day in 0..5i64 {
                let day_start = day * 24 * 60 + 9 * 60;
                for slot in 0..6i64 {
                    let offset = ((i as i64 * 37 + slot * 53 + day * 11) % 8) * 60;
                    let start = day_start + offset;
                    p.add_busy_interval(start, start + 30 + (slot % 3) * 15)
                        .unwrap();
                }
            }
            p
        })
        .collect()
}

fn bench_find_available_slots(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_available_slots");
    for count in [2usize, 10, 50, 200] {
        let participants = build_participants(count);
        let mut planner = MeetingPlanner::new();
        for p in &participants {
            planner.add_participant(p);
        }
        group.bench_with_input(BenchmarkId::from_parameter(count), &planner, |b, planner| {
            b.iter(|| {
                planner
                    .find_available_slots(black_box(30), black_box(0), black_box(7 * 24 * 60))
                    .unwrap()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_find_available_slots);
criterion_main!(benches);
