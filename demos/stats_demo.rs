use clap::Parser;
use prim_hash::LongObjectHashMap;
use prim_hash::PhiMixer;
use prim_hash::SortedIterationView;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short = 'c', long = "target_capacity", default_value_t = 1000)]
    target_capacity: usize,

    #[arg(short = 'l', long = "load_factor", default_value_t = 0.75)]
    load_factor: f64,

    #[arg(short = 's', long = "stride", default_value_t = 1)]
    stride: i64,

    #[arg(short = 'w', long = "width", default_value_t = 64)]
    width: usize,
}

fn main() {
    let args = Args::parse();

    println!(
        "Creating LongObjectHashMap with target capacity {} and load factor {}",
        args.target_capacity, args.load_factor
    );

    let mut map = match LongObjectHashMap::with_load_factor(
        args.target_capacity,
        args.load_factor,
        PhiMixer::default(),
    ) {
        Ok(map) => map,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    println!(
        "Actual capacity: {} ({} slots)",
        map.capacity(),
        map.slot_count()
    );
    println!("Filling map with keys spaced {} apart...", args.stride);

    if args.stride == 0 {
        eprintln!("stride must be non-zero");
        std::process::exit(2);
    }

    let num_values = map.capacity() as i64;
    for i in 0..num_values {
        let Some(key) = i.checked_mul(args.stride) else {
            eprintln!("stride {} overflows i64 at entry {i}", args.stride);
            std::process::exit(2);
        };
        if map.insert(key, i).is_some() {
            panic!("Key already exists in map: {key}");
        }
    }

    println!("Inserted {} entries into map", map.len());
    println!(
        "Final load factor: {:.2}%",
        (map.len() as f64 / map.slot_count() as f64) * 100.0
    );
    println!(
        "Key distribution: [{}]",
        map.visualize_key_distribution(args.width)
    );

    map.probe_histogram().print();
    map.debug_stats().print();

    let view = SortedIterationView::new(&map, |a, b| b.cmp(&a));
    let largest = view.keys().take(5).collect::<Vec<_>>();
    println!("Five largest keys: {largest:?}");

    map.retain(|key, _| key % 2 == 0);
    map.shrink_to_fit();
    println!(
        "After dropping odd keys: {} entries in {} slots [{}]",
        map.len(),
        map.slot_count(),
        map.visualize_key_distribution(args.width)
    );
    map.debug_stats().print();
}
