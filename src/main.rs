use tracing::info;
use tracing_subscriber::EnvFilter;

use two_sum::{brute_force, complement, hashmap, two_pointer};

fn run(name: &str, two_sum: fn(Vec<i32>, i32) -> Vec<i32>) {
    info!("running {name}");

    println!("{:?}", two_sum(vec![2, 7, 11, 15], 9)); // [0, 1]
    println!("{:?}", two_sum(vec![3, 2, 4], 6)); // [1, 2]
    println!("{:?}", two_sum(vec![3, 3], 6)); // [0, 1]
}

fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    run("hashmap", hashmap::two_sum);
    run("complement", complement::two_sum);
    run("brute_force", brute_force::two_sum);
    run("two_pointer", two_pointer::two_sum);
}
