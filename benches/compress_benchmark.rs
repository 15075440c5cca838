use baldw64::compress::{self, ShuffleSelector, BLOCK_SIZE, STATE_WORDS};
use baldw64::constants::H;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut rnd = rand::thread_rng();
    let mut block = [0u8; BLOCK_SIZE];
    for i in block.iter_mut() {
        *i = rnd.gen();
    }

    c.bench_function("compress one block", |b| {
        let mut state: [u64; STATE_WORDS] = H;
        b.iter(|| {
            compress::compress_block(&mut state, black_box(&block), ShuffleSelector::default());
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
