//! Versioned lookups with the persistent trie
use trie_persistent::Trie;

fn main() {
    // Every mutation derives a new version; old versions stay valid.
    let v0 = Trie::new();
    let v1 = v0.put(b"config/retries", 3u32);
    let v2 = v1.put(b"config/retries", 5u32);
    let v3 = v2.put(b"config/name", String::from("primary"));

    assert_eq!(v1.get::<u32>(b"config/retries"), Some(&3));
    assert_eq!(v2.get::<u32>(b"config/retries"), Some(&5));
    assert_eq!(v3.get::<String>(b"config/name"), Some(&String::from("primary")));

    // v0 was never touched.
    assert!(v0.is_empty());

    // Asking for the wrong type reads as absence, never a misread.
    assert_eq!(v2.get::<String>(b"config/retries"), None);

    // Removal prunes emptied branches; the prior version keeps them.
    let v4 = v3.remove(b"config/name");
    assert_eq!(v4.get::<String>(b"config/name"), None);
    assert_eq!(v3.get::<String>(b"config/name"), Some(&String::from("primary")));

    println!("v0={} v1={} v2={} v3={} v4={}", v0.len(), v1.len(), v2.len(), v3.len(), v4.len());
}
