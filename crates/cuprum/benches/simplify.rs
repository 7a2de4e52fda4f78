use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use cuprum::geom::point;
use cuprum::{AnchorKind, NetSegmentSimplifier};
use std::hint::black_box;

// A horizontal spine crossed by `rungs` vertical lines: every crossing mints
// a junction and splits two lines, which is the quadratic hot path.
fn simplify_crossing_comb(rungs: usize) {
    let mut simplifier: NetSegmentSimplifier = NetSegmentSimplifier::new();
    let left = simplifier.add_anchor(AnchorKind::Junction, point(0, 0), (), ());
    let right = simplifier.add_anchor(
        AnchorKind::Junction,
        point((rungs as i64 + 1) * 1000, 0),
        (),
        (),
    );
    simplifier.add_line(left, right, (), 1);
    for i in 0..rungs {
        let x = (i as i64 + 1) * 1000;
        let top = simplifier.add_anchor(AnchorKind::Junction, point(x, 1000), (), ());
        let bottom = simplifier.add_anchor(AnchorKind::Junction, point(x, -1000), (), ());
        simplifier.add_line(top, bottom, (), 1);
    }
    black_box(simplifier.simplify());
}

fn bench_simplify(c: &mut Criterion) {
    let mut group = c.benchmark_group("simplify");
    for &rungs in &[2usize, 4, 8] {
        group.bench_with_input(
            BenchmarkId::new("crossing_comb", rungs),
            &rungs,
            |b, &rungs| b.iter(|| simplify_crossing_comb(rungs)),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_simplify);
criterion_main!(benches);
