use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ordered_collections::heap::{heap_sort, heap_sort_in_place};
use rand::Rng;

const SORT_SIZE: usize = 10_000;

fn random_values(count: usize) -> Vec<u32> {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    (0..count).map(|_| rng.next_u32()).collect()
}

fn bench_std_sort(c: &mut Criterion) {
    let values = random_values(SORT_SIZE);
    c.bench_function("bench std sort", move |b| {
        b.iter(|| {
            let mut copy = values.clone();
            copy.sort();
            black_box(copy);
        })
    });
}

fn bench_heap_sort(c: &mut Criterion) {
    let values = random_values(SORT_SIZE);
    c.bench_function("bench heap sort", move |b| {
        b.iter(|| {
            black_box(heap_sort(&values));
        })
    });
}

fn bench_heap_sort_in_place(c: &mut Criterion) {
    let values = random_values(SORT_SIZE);
    c.bench_function("bench heap sort in place", move |b| {
        b.iter(|| {
            let mut copy = values.clone();
            heap_sort_in_place(&mut copy);
            black_box(copy);
        })
    });
}

macro_rules! tree_sort_benches {
    ($($module_name:ident: $type_name:ident,)*) => {
        $(
            mod $module_name {
                use criterion::{black_box, Criterion};
                use ordered_collections::$module_name::$type_name;
                use super::{random_values, SORT_SIZE};

                pub fn bench_sort(c: &mut Criterion) {
                    let values = random_values(SORT_SIZE);
                    c.bench_function(
                        &format!("bench {} sort", stringify!($module_name)),
                        move |b| {
                            b.iter(|| {
                                let mut set = $type_name::new();
                                for value in &values {
                                    set.insert(*value);
                                }
                                black_box(set.to_sorted_vec());
                            })
                        },
                    );
                }
            }
        )*

        criterion_group!(
            benches,
            bench_std_sort,
            bench_heap_sort,
            bench_heap_sort_in_place,
            $(
                $module_name::bench_sort,
            )*
        );
    }
}

tree_sort_benches!(
    avl_tree: AvlMultiset,
    bst_tree: BstMultiset,
);

criterion_main!(benches);
