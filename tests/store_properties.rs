//! Behaviour of the redundant store through the public API

use energesis::adapters::MemoryMedium;
use energesis::store::{CORRUPT_BYTE, STR_WINDOW};
use energesis::{RedundantStore, StoreConfig};

/// 1 KiB medium, like an ATmega328
type Uno = MemoryMedium<1024>;

fn open() -> RedundantStore<Uno> {
    RedundantStore::open(Uno::new(), StoreConfig::ATMEGA328)
}

#[test]
fn set_size_rounds_down_to_32() {
    let mut store = RedundantStore::new(Uno::new());
    for requested in 0..=341u16 {
        let size = store.set_size(requested);
        assert_eq!(size % 32, 0);
        assert!(size <= requested && requested - size < 32);
        if requested % 32 == 0 {
            assert_eq!(size, requested);
        }
    }
}

#[test]
fn every_byte_reads_back_what_was_written() {
    let mut store = open();
    for index in 0..store.size() {
        assert!(store.write_byte(index, (index * 7) as u8));
    }
    for index in 0..store.size() {
        assert_eq!(store.read_byte(index), (index * 7) as u8);
        let base = index as usize * 3;
        let copies = &store.medium().cells()[base..base + 3];
        assert!(copies.iter().all(|&c| c == (index * 7) as u8));
    }
}

#[test]
fn fix_restores_single_corrupt_copy() {
    let mut store = open();
    store.write_byte(17, 0xA5);
    for slot in 0..3u32 {
        store.medium_mut().corrupt(17 * 3 + slot, 0x00);
        let report = store.fix();
        assert_eq!(report.repaired, 1);
        assert_eq!(report.reset, 0);
        assert_eq!(store.medium().cells()[51..54], [0xA5; 3]);
    }
}

#[test]
fn fix_resets_three_way_disagreement() {
    let mut store = open();
    store.medium_mut().corrupt(30, 1);
    store.medium_mut().corrupt(31, 2);
    store.medium_mut().corrupt(32, 3);
    assert_eq!(store.read_byte(10), CORRUPT_BYTE);

    let report = store.fix();
    assert_eq!(report.reset, 1);
    assert_eq!(store.medium().cells()[30..33], [0, 0, 0]);
    assert_eq!(store.read_byte(10), 0);
}

#[test]
fn repair_on_open() {
    let mut medium = Uno::new();
    medium.corrupt(4, 0x00);
    let config = StoreConfig::ATMEGA328.with_repair_on_open(true);
    let store = RedundantStore::open(medium, config);
    assert_eq!(store.medium().cells()[3..6], [0xFF; 3]);
}

#[test]
fn out_of_range_reads_are_always_255() {
    let mut store = open();
    let size = store.size();
    for index in [size, size + 1, 1000, u16::MAX] {
        assert_eq!(store.read_byte(index), CORRUPT_BYTE);
        assert!(!store.write_byte(index, 0));
    }
}

#[test]
fn clear_whole_store() {
    let mut store = open();
    let size = store.size();
    assert!(store.clear_block(0, size));
    assert!((0..size).all(|i| store.read_byte(i) == 0));
}

#[test]
fn strings_round_trip() {
    let mut store = open();
    assert!(store.write_str32(0, "hello"));
    assert_eq!(store.read_str32(0).as_str(), "hello");
    assert!(store.write_str32(0, ""));
    assert_eq!(store.read_str32(0).as_str(), "");

    let alphabet = "abcdefghijklmnopqrstuvwxyzABCDEF";
    for len in 0..=STR_WINDOW {
        let text = &alphabet[..len];
        assert!(store.write_str32(100, text));
        assert_eq!(store.read_str32(100).as_str(), text);
    }
}
