//! Benchmarks for word-search puzzle generation.
//!
//! # Benchmarks
//!
//! - **`generator_small`**: Eight short spelling words in a 10x10 grid with all
//!   directions allowed. This is the typical size of a practice list.
//! - **`generator_dense`**: Twenty words of mixed length in a 12x12 grid with
//!   forward-only, non-diagonal placement, where many words exhaust their
//!   placement budget and end up unplaced.
//! - **`generator_large`**: The dense list in the largest supported grid.
//!
//! # Test Data
//!
//! Uses three fixed seeds to ensure reproducibility while measuring several
//! cases.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::{hint, time::Duration};

use criterion::{
    BatchSize, BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main,
};
use wordlace_core::{MAX_GRID_SIZE, WordList};
use wordlace_generator::{GeneratorConfig, PuzzleGenerator, PuzzleSeed};

const SEEDS: [u64; 3] = [0x00c0_ffee, 42, 1_234_567_890];

const SMALL_WORDS: &[&str] = &[
    "cat", "dog", "sun", "tree", "house", "apple", "school", "friend",
];

const DENSE_WORDS: &[&str] = &[
    "because", "different", "answer", "beautiful", "believe", "bicycle", "breathe", "calendar",
    "caught", "certain", "describe", "experience", "favourite", "February", "grammar", "island",
    "knowledge", "library", "mention", "ordinary",
];

fn bench_case(c: &mut Criterion, name: &str, words: &[&str], config: GeneratorConfig) {
    let words = WordList::from_raw(words);
    let generator = PuzzleGenerator::new(config);

    for (i, seed) in SEEDS.into_iter().enumerate() {
        let seed = PuzzleSeed::new(seed);
        c.bench_with_input(
            BenchmarkId::new(name, format!("seed_{i}")),
            &seed,
            |b, seed| {
                b.iter_batched(
                    || hint::black_box(*seed),
                    |seed| generator.generate_with_seed(&words, seed),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

fn bench_generator_small(c: &mut Criterion) {
    bench_case(
        c,
        "generator_small",
        SMALL_WORDS,
        GeneratorConfig::default().size(10),
    );
}

fn bench_generator_dense(c: &mut Criterion) {
    let config = GeneratorConfig::default()
        .size(12)
        .allow_diagonals(false)
        .allow_backwards(false);
    bench_case(c, "generator_dense", DENSE_WORDS, config);
}

fn bench_generator_large(c: &mut Criterion) {
    bench_case(
        c,
        "generator_large",
        DENSE_WORDS,
        GeneratorConfig::default().size(MAX_GRID_SIZE),
    );
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(8));
    targets =
        bench_generator_small,
        bench_generator_dense,
        bench_generator_large
);
criterion_main!(benches);
