// Copyright 2026 The pullstream authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pullstream_collections::{MinHeap, MIN_CAPACITY};

fn drain<V, K: Ord, F: Fn(&V) -> K>(mut heap: MinHeap<V, K, F>) -> Vec<V> {
    let mut out = Vec::with_capacity(heap.len());
    while let Ok(value) = heap.pop() {
        out.push(value);
    }
    out
}

#[test]
fn test_pushes_drain_in_non_decreasing_key_order() {
    // Arrange
    let mut heap = MinHeap::create();
    let mut values: Vec<u32> = (0..100).collect();
    fastrand::seed(7);
    fastrand::shuffle(&mut values);

    // Act
    for value in values {
        heap.push(value);
    }

    // Assert
    let drained = drain(heap);
    assert_eq!(drained, (0..100).collect::<Vec<_>>());
}

#[test]
fn test_from_items_drains_same_as_sorting_by_key() {
    // Arrange
    let items = vec![(3, "c"), (1, "a"), (4, "d"), (1, "b"), (5, "e")];
    let key = |item: &(u32, &'static str)| item.0;

    // Act
    let heap = MinHeap::from_items(items.clone(), key).unwrap();
    let drained = drain(heap);

    // Assert: key order only; no stability guarantee across equal keys
    let mut expected_keys: Vec<u32> = items.iter().map(key).collect();
    expected_keys.sort_unstable();
    let drained_keys: Vec<u32> = drained.iter().map(key).collect();
    assert_eq!(drained_keys, expected_keys);
}

#[test]
fn test_from_items_empty_input_fails() {
    let err = MinHeap::from_items(Vec::<u32>::new(), |v| *v).unwrap_err();

    assert!(err.is_empty_input());
}

#[test]
fn test_pop_empty_fails_with_heap_empty() {
    let mut heap = MinHeap::<u32, u32>::create();

    assert!(heap.pop().unwrap_err().is_heap_empty());
}

#[test]
fn test_peek_empty_fails_with_heap_empty() {
    let heap = MinHeap::<u32, u32>::create();

    assert!(heap.peek().unwrap_err().is_heap_empty());
}

#[test]
fn test_peek_returns_min_without_removing() {
    let mut heap = MinHeap::with_items(vec![5, 3, 8]).unwrap();

    assert_eq!(heap.peek().unwrap(), &3);
    assert_eq!(heap.peek().unwrap(), &3);
    assert_eq!(heap.len(), 3);
    assert_eq!(heap.pop().unwrap(), 3);
}

#[test]
fn test_with_items_uses_value_as_key() {
    let heap = MinHeap::with_items(vec![9, 2, 7, 2, 1]).unwrap();

    assert_eq!(drain(heap), vec![1, 2, 2, 7, 9]);
}

#[test]
fn test_heapify_matches_incremental_pushes() {
    // Arrange
    let mut values: Vec<u32> = (0..64).collect();
    fastrand::seed(11);
    fastrand::shuffle(&mut values);

    // Act
    let bulk = MinHeap::with_items(values.clone()).unwrap();
    let mut incremental = MinHeap::create();
    for value in values {
        incremental.push(value);
    }

    // Assert
    assert_eq!(drain(bulk), drain(incremental));
}

#[test]
fn test_resize_transparency_over_one_thousand_elements() {
    // Arrange
    let mut heap = MinHeap::create();

    // Act: descending pushes force worst-case sift-ups and several doublings
    for value in (0..1000).rev() {
        heap.push(value);
    }
    assert!(heap.capacity() > 1000);

    // Assert
    assert_eq!(drain_counted(&mut heap), (0..1000).collect::<Vec<_>>());
    assert_eq!(heap.capacity(), MIN_CAPACITY);
}

fn drain_counted(heap: &mut MinHeap<i32, i32>) -> Vec<i32> {
    let mut out = Vec::with_capacity(heap.len());
    while let Ok(value) = heap.pop() {
        out.push(value);
    }
    out
}

#[test]
fn test_key_extraction_orders_by_key_not_value() {
    // Shorter strings first, regardless of their contents.
    let heap =
        MinHeap::from_items(vec!["long-entry", "ab", "medium"], |s: &&str| s.len()).unwrap();

    let drained = drain(heap);

    assert_eq!(drained, vec!["ab", "medium", "long-entry"]);
}

#[test]
fn test_capacity_request_below_floor_is_enforced_not_an_error() {
    let mut heap = MinHeap::with_capacity(|v: &u32| *v, 1);

    assert_eq!(heap.capacity(), MIN_CAPACITY);
    heap.push(3);
    assert_eq!(heap.pop().unwrap(), 3);
}

#[test]
fn test_clear_discards_contents_and_resets_capacity() {
    let mut heap = MinHeap::with_items((0..500).collect()).unwrap();

    heap.clear();

    assert!(heap.is_empty());
    assert_eq!(heap.capacity(), MIN_CAPACITY);
    assert!(heap.pop().is_err());
}
