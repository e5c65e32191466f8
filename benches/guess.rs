// benches/guess.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use cr_scrape::guess::construct_edu_url;

const NAMES: &[&str] = &[
    "Princeton University",
    "Massachusetts Institute of Technology",
    "The University of Chicago",
    "University of California, Berkeley",
    "University of North Carolina--Chapel Hill",
    "Gonzaga University",
    "Boston College",
    "College of William & Mary",
    "Rice University",
    "Case Western Reserve University",
];

fn bench_guess(c: &mut Criterion) {
    c.bench_function("construct_edu_url", |b| {
        b.iter(|| {
            for name in NAMES {
                black_box(construct_edu_url(black_box(name)));
            }
        })
    });
}

criterion_group!(benches, bench_guess);
criterion_main!(benches);
