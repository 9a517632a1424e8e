//! # Moodmix Performance Benchmarks
//!
//! ## Benchmark Categories
//!
//! - **Grouping**: Normalization plus classification over growing catalogs
//! - **Aggregation**: Statistics and merging of large groupings
//! - **Queries**: Search and lucky pick
//!
//! ## Running Benchmarks
//!
//! ```bash
//! cargo bench
//! cargo bench grouping
//! ```

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use moodmix::playlist::{build_playlists, merge_playlists};
use moodmix::profile::Profile;
use moodmix::query::{lucky_pick, search_songs, PickMode};
use moodmix::song::{RawSong, Song};
use moodmix::stats::compute_playlist_stats;
use serde_json::json;
use std::hint::black_box;

const GENRES: &[&str] = &["Rock", "lofi", "Jazz", "post-punk", "ambient", "pop", "Party House"];

/// Helper function to create raw songs with a realistic mix of field types
fn create_raw_songs(count: usize) -> Vec<RawSong> {
    (1..=count)
        .map(|i| {
            let energy = if i % 3 == 0 { json!((i % 11).to_string()) } else { json!(i % 11) };
            let tags = if i % 2 == 0 { json!("single") } else { json!(["a", "b"]) };
            serde_json::from_value(json!({
                "title": format!("  Song {i:04} "),
                "artist": format!("Artist {}", (i - 1) / 20 + 1),
                "genre": GENRES[i % GENRES.len()],
                "energy": energy,
                "tags": tags,
            }))
            .expect("Failed to build raw song")
        })
        .collect()
}

fn benchmark_grouping(c: &mut Criterion) {
    let mut group = c.benchmark_group("grouping");
    let profile = Profile::with_favorite_genre("jazz");

    for size in [10, 100, 1000, 10_000].iter() {
        let songs = create_raw_songs(*size);

        group.bench_with_input(BenchmarkId::new("build_playlists", size), &songs, |b, songs| {
            b.iter(|| build_playlists(black_box(songs), black_box(&profile)))
        });
    }

    group.finish();
}

fn benchmark_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregation");
    let playlists = build_playlists(&create_raw_songs(10_000), &Profile::default());

    group.bench_function("stats_10000", |b| {
        b.iter(|| compute_playlist_stats(black_box(&playlists)))
    });

    group.bench_function("merge_10000", |b| {
        b.iter(|| merge_playlists(black_box(&playlists), black_box(&playlists)))
    });

    group.finish();
}

fn benchmark_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("queries");
    let playlists = build_playlists(&create_raw_songs(10_000), &Profile::default());
    let all: Vec<Song> = playlists.iter().cloned().collect();

    group.bench_function("search_artist", |b| {
        b.iter(|| search_songs(black_box(&all), black_box("artist 5"), "artist"))
    });

    group.bench_function("search_empty_query", |b| {
        b.iter_batched(
            || all.clone(),
            |songs| search_songs(black_box(&songs), "", "artist"),
            BatchSize::LargeInput,
        )
    });

    group.bench_function("lucky_pick_any", |b| {
        b.iter(|| lucky_pick(black_box(&playlists), PickMode::Any).map(|song| song.energy.as_f64()))
    });

    group.finish();
}

criterion_group!(benches, benchmark_grouping, benchmark_aggregation, benchmark_queries);

criterion_main!(benches);
