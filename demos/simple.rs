//! A simple example showing the use of a Bloom filter.
use bloomset::BloomFilter;

fn main() -> Result<(), bloomset::Error> {
    let mut filter = BloomFilter::new(1000, 0.05)?;

    println!("bits: {}", filter.bits());
    println!("hashes: {}", filter.hashes());

    filter.insert(b"Apple");
    filter.insert(b"Cherry");
    filter.insert(b"Peach");

    println!("Apple: {}", filter.contains(b"Apple")); // true
    println!("Banana: {}", filter.contains(b"Banana")); // false, barring a false positive

    Ok(())
}
