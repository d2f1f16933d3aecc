use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;
use std::collections::BTreeMap;

const SIZES: [usize; 4] = [100, 1000, 5000, 10000];

// Keys are drawn from [0, 10 * size) so that a few of them collide.
fn generate_keys(size: usize) -> Vec<u32> {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    (0..size)
        .map(|_| rng.gen_range(0, size as u32 * 10))
        .collect()
}

fn bench_btreemap_insert(c: &mut Criterion) {
    for &size in SIZES.iter() {
        let keys = generate_keys(size);
        c.bench_function(&format!("bench btreemap insert {}", size), move |b| {
            b.iter(|| {
                let mut map = BTreeMap::new();
                for &key in &keys {
                    map.insert(key, "value");
                }
                black_box(map)
            })
        });
    }
}

fn bench_btreemap_get(c: &mut Criterion) {
    let keys = generate_keys(SIZES[SIZES.len() - 1]);
    let mut map = BTreeMap::new();
    for &key in &keys {
        map.insert(key, "value");
    }

    c.bench_function("bench btreemap get", move |b| {
        b.iter(|| {
            for key in &keys {
                black_box(map.get(key));
            }
        })
    });
}

macro_rules! bst_map_benches {
    ($($module_name:ident: $type_name:ident,)*) => {
        $(
            mod $module_name {
                use balanced_maps::$module_name::$type_name;
                use super::{generate_keys, SIZES};
                use criterion::{Criterion, black_box};

                pub fn bench_insert(c: &mut Criterion) {
                    for &size in SIZES.iter() {
                        let keys = generate_keys(size);
                        c.bench_function(&format!("bench {} insert {}", stringify!($module_name), size), move |b| b.iter(|| {
                            let mut map = $type_name::new();
                            for &key in &keys {
                                map.put(key, "value");
                            }
                            black_box(map)
                        }));
                    }
                }

                pub fn bench_get(c: &mut Criterion) {
                    let keys = generate_keys(SIZES[SIZES.len() - 1]);
                    let mut map = $type_name::new();
                    for &key in &keys {
                        map.put(key, "value");
                    }

                    c.bench_function(&format!("bench {} get", stringify!($module_name)), move |b| b.iter(|| {
                        for key in &keys {
                            let _ = black_box(map.get(key));
                        }
                    }));
                }
            }
        )*

        criterion_group!(
            benches,
            bench_btreemap_get,
            bench_btreemap_insert,
            $(
                $module_name::bench_get,
                $module_name::bench_insert,
            )*
        );
    }
}

bst_map_benches!(
    avl_tree: AvlMap,
    treap: TreapMap,
);

criterion_main!(benches);
