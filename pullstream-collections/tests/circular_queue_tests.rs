// Copyright 2026 The pullstream authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pullstream_collections::{CircularQueue, MIN_CAPACITY};

#[test]
fn test_dequeue_order_matches_enqueue_order() {
    // Arrange
    let mut queue = CircularQueue::new();

    // Act
    for i in 0..10 {
        queue.enqueue(i);
    }

    // Assert
    for i in 0..10 {
        assert_eq!(queue.dequeue().unwrap(), i);
    }
    assert!(queue.is_empty());
}

#[test]
fn test_len_tracks_enqueues_minus_dequeues() {
    let mut queue = CircularQueue::new();
    assert_eq!(queue.len(), 0);

    for i in 0..5 {
        queue.enqueue(i);
    }
    assert_eq!(queue.len(), 5);

    queue.dequeue().unwrap();
    queue.dequeue().unwrap();
    assert_eq!(queue.len(), 3);

    queue.enqueue(99);
    assert_eq!(queue.len(), 4);
}

#[test]
fn test_batch_dequeue_equals_sequential_dequeues() {
    // Arrange
    let mut batched = CircularQueue::from((0..20).collect::<Vec<_>>());
    let mut sequential = CircularQueue::from((0..20).collect::<Vec<_>>());

    // Act
    let batch = batched.batch_dequeue(7).unwrap();
    let singles: Vec<_> = (0..7).map(|_| sequential.dequeue().unwrap()).collect();

    // Assert
    assert_eq!(batch, singles);
    assert_eq!(batched.len(), sequential.len());
}

#[test]
fn test_batch_enqueue_preserves_order_across_single_resize() {
    // Arrange
    let mut queue = CircularQueue::new();
    queue.enqueue(-1);

    // Act: 100 items cannot fit in the floor-sized buffer
    queue.batch_enqueue(0..100);

    // Assert
    assert_eq!(queue.len(), 101);
    assert_eq!(queue.dequeue().unwrap(), -1);
    for i in 0..100 {
        assert_eq!(queue.dequeue().unwrap(), i);
    }
}

#[test]
fn test_dequeue_empty_fails_with_queue_empty() {
    let mut queue = CircularQueue::<u32>::new();

    let err = queue.dequeue().unwrap_err();

    assert!(err.is_queue_empty());
}

#[test]
fn test_peek_empty_fails_with_queue_empty() {
    let queue = CircularQueue::<u32>::new();

    assert!(queue.peek().unwrap_err().is_queue_empty());
}

#[test]
fn test_batch_dequeue_underflow_leaves_queue_unmutated() {
    // Arrange
    let mut queue = CircularQueue::from(vec![1, 2, 3]);

    // Act
    let err = queue.batch_dequeue(5).unwrap_err();

    // Assert: all-or-nothing
    assert!(err.is_queue_underflow());
    assert_eq!(queue.len(), 3);
    assert_eq!(queue.batch_dequeue(3).unwrap(), vec![1, 2, 3]);
}

#[test]
fn test_peek_does_not_remove() {
    let mut queue = CircularQueue::from(vec![10, 20]);

    assert_eq!(queue.peek().unwrap(), &10);
    assert_eq!(queue.peek().unwrap(), &10);
    assert_eq!(queue.len(), 2);
    assert_eq!(queue.dequeue().unwrap(), 10);
}

#[test]
fn test_resize_transparency_over_one_thousand_elements() {
    // Arrange
    let mut queue = CircularQueue::new();

    // Act: force several doublings, then drain through several halvings
    for i in 0..1000 {
        queue.enqueue(i);
    }
    assert!(queue.capacity() > 1000);

    // Assert: FIFO order survives every resize
    for i in 0..1000 {
        assert_eq!(queue.dequeue().unwrap(), i);
    }
    assert!(queue.is_empty());
    assert_eq!(queue.capacity(), MIN_CAPACITY);
}

#[test]
fn test_wraparound_with_interleaved_operations() {
    // Repeatedly lap the ring so front/rear wrap past the buffer end.
    let mut queue = CircularQueue::new();
    let mut expected = 0;

    for round in 0..200 {
        queue.enqueue(round * 2);
        queue.enqueue(round * 2 + 1);
        assert_eq!(queue.dequeue().unwrap(), expected);
        expected += 1;
        if round % 2 == 1 {
            assert_eq!(queue.dequeue().unwrap(), expected);
            expected += 1;
        }
    }

    while let Ok(value) = queue.dequeue() {
        assert_eq!(value, expected);
        expected += 1;
    }
    assert_eq!(expected, 400);
}

#[test]
fn test_capacity_request_below_floor_is_enforced_not_an_error() {
    let mut queue = CircularQueue::with_capacity(1);

    assert_eq!(queue.capacity(), MIN_CAPACITY);
    queue.enqueue(7);
    assert_eq!(queue.dequeue().unwrap(), 7);
}

#[test]
fn test_from_vec_sizes_to_fit_and_preserves_order() {
    let items: Vec<u32> = (0..40).collect();

    let mut queue = CircularQueue::from(items.clone());

    assert_eq!(queue.len(), 40);
    assert!(queue.capacity() >= 41);
    for item in items {
        assert_eq!(queue.dequeue().unwrap(), item);
    }
}

#[test]
fn test_clear_discards_contents_and_resets_capacity() {
    let mut queue = CircularQueue::from((0..500).collect::<Vec<_>>());

    queue.clear();

    assert!(queue.is_empty());
    assert_eq!(queue.capacity(), MIN_CAPACITY);
    assert!(queue.dequeue().is_err());
}
