use std::hint::black_box;
use std::time::{Duration, Instant};

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use omnibox::{ComboBox, ComboOption, NavKey, filter_options};

/// Generate synthetic options with a few recurring words
fn generate_options(num_options: usize) -> Vec<ComboOption> {
    const WORDS: [&str; 5] = ["Republic", "Island", "Kingdom", "United", "Federation"];
    (0..num_options)
        .map(|i| {
            ComboOption::new(format!("{} of Place {}", WORDS[i % WORDS.len()], i), i.to_string())
        })
        .collect()
}

fn bench_filter_options(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_options");

    for size in [250, 1_000, 10_000].iter() {
        let options = generate_options(*size);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("common_word", size), size, |b, _| {
            b.iter(|| filter_options(black_box(&options), black_box("united")));
        });
        group.bench_with_input(BenchmarkId::new("no_match", size), size, |b, _| {
            b.iter(|| filter_options(black_box(&options), black_box("zzz")));
        });
        group.bench_with_input(BenchmarkId::new("empty_query", size), size, |b, _| {
            b.iter(|| filter_options(black_box(&options), black_box("")));
        });
    }

    group.finish();
}

fn bench_typing_session(c: &mut Criterion) {
    let options = generate_options(1_000);

    c.bench_function("typing_session_1000", |b| {
        b.iter(|| {
            let start = Instant::now();
            let mut combo = ComboBox::with_defaults(options.clone());
            for (i, ch) in "kingdom".chars().enumerate() {
                combo.push_char(ch, start + Duration::from_millis(i as u64 * 50));
            }
            combo.tick(start + Duration::from_secs(1));
            combo.handle_key(NavKey::ArrowDown, start);
            black_box(combo.handle_key(NavKey::Enter, start))
        });
    });
}

criterion_group!(benches, bench_filter_options, bench_typing_session);
criterion_main!(benches);
