use super::*;

#[test]
fn empty_slot_misses() {
    let slot = CacheSlot::<u8>::new();
    assert!(slot.get(Size::new(1, 1)).is_none());
    assert!(!slot.is_valid(Size::new(1, 1)));
    assert_eq!(slot.generation(), 0);
}

#[test]
fn store_then_hit_for_same_key_only() {
    let mut slot = CacheSlot::new();
    assert_eq!(*slot.store(Size::new(4, 4), 7u32), 7);
    assert_eq!(slot.get(Size::new(4, 4)), Some(&7));
    assert!(slot.get(Size::new(4, 5)).is_none());
}

#[test]
fn evict_drops_and_bumps_generation() {
    let mut slot = CacheSlot::new();
    slot.store(Size::new(2, 2), "x");
    let g = slot.generation();
    assert!(slot.evict());
    assert!(slot.generation() > g);
    assert!(!slot.is_valid(Size::new(2, 2)));
    assert!(!slot.evict());
}

#[test]
fn store_replaces_previous_entry() {
    let mut slot = CacheSlot::new();
    slot.store(Size::new(2, 2), 1);
    let g1 = slot.generation();
    slot.store(Size::new(3, 3), 2);
    assert!(slot.generation() > g1);
    assert!(slot.get(Size::new(2, 2)).is_none());
    assert_eq!(slot.get(Size::new(3, 3)), Some(&2));
}
