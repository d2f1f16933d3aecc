use balanced_maps::avl_tree::AvlMap;
use balanced_maps::treap::TreapMap;
use balanced_maps::Error;
use log::{info, warn};
use simplelog::{Config, LevelFilter, SimpleLogger};

const ENTRIES: [(u32, &str); 7] = [
    (50, "fifty"),
    (30, "thirty"),
    (70, "seventy"),
    (20, "twenty"),
    (40, "forty"),
    (60, "sixty"),
    (80, "eighty"),
];

fn print_entries(entries: Vec<(&u32, &&str)>) {
    for (key, value) in entries {
        println!("{} => {}", key, value);
    }
}

fn main() -> Result<(), Error> {
    if SimpleLogger::init(LevelFilter::Info, Config::default()).is_err() {
        eprintln!("a logger is already installed");
    }

    let mut avl_map = AvlMap::new();
    for &(key, value) in ENTRIES.iter() {
        avl_map.put(key, value);
    }
    info!("avl tree holds {} keys at height {}", avl_map.len(), avl_map.height());
    println!("in-order traversal:");
    print_entries(avl_map.traverse());
    println!("getting key 40: {}", avl_map.get(&40)?);

    let mut treap_map = TreapMap::new();
    for &(key, value) in ENTRIES.iter() {
        treap_map.put(key, value);
    }
    info!("treap holds {} keys at height {}", treap_map.len(), treap_map.height());
    println!("in-order traversal:");
    print_entries(treap_map.traverse());
    println!("searching for key 40: {}", treap_map.get(&40)?);

    println!("removing key 30...");
    treap_map.remove(&30);
    print_entries(treap_map.traverse());
    match treap_map.get(&30) {
        Ok(value) => println!("key 30 is still present: {}", value),
        Err(err) => warn!("lookup of key 30 failed: {}", err),
    }

    Ok(())
}
