criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        converting_hand_to_index,
        converting_index_to_hand,
        looking_up_combinatorics,
        querying_completion_count,
        querying_probability,
        sampling_cluster_pair,
}

fn converting_hand_to_index(c: &mut criterion::Criterion) {
    let index = thai_poker::index::hand_index();
    let hand = Hand::from(0b1011u32);
    c.bench_function("convert a Hand to its dense index", |b| {
        b.iter(|| index.to_index(hand))
    });
}

fn converting_index_to_hand(c: &mut criterion::Criterion) {
    let index = thai_poker::index::hand_index();
    c.bench_function("convert a dense index back to a Hand", |b| {
        b.iter(|| index.from_index(100_000))
    });
}

fn looking_up_combinatorics(c: &mut criterion::Criterion) {
    let comb = thai_poker::combinatorics::comb();
    c.bench_function("look up C(24, 6) and its reciprocal", |b| {
        b.iter(|| (comb.get(24, 6), comb.get_inv(24, 6)))
    });
}

fn querying_completion_count(c: &mut criterion::Criterion) {
    let table = thai_poker::probability::table();
    let hand = Hand::from(0b1011u32);
    c.bench_function("query a zeta-transformed completion count", |b| {
        b.iter(|| table.completion_count(Bet::Check, 6, hand))
    });
}

fn querying_probability(c: &mut criterion::Criterion) {
    let table = thai_poker::probability::table();
    let hand = Hand::from(0b1011u32);
    c.bench_function("query completion probability for one hand", |b| {
        b.iter(|| table.probability(Bet::Check, 6, hand))
    });
}

fn sampling_cluster_pair(c: &mut criterion::Criterion) {
    let hc = thai_poker::cluster::clusters();
    c.bench_function("sample a disjoint pair of 2-card hands", |b| {
        b.iter(|| hc.sample(2, 2))
    });
}

use thai_poker::cards::Bet;
use thai_poker::cards::Hand;
