use std::time::Duration;

use pullstream::prelude::*;
use pullstream_test_utils::{collect_values, delayed_values, ErrorInjectingStream};

#[tokio::test]
async fn test_pipeline_generate_transform_merge() {
    // Arrange: three jittered sources, each mapped and filtered before the
    // merge.
    let streams: Vec<BoxPullStream<i32>> = (0..3)
        .map(|lane| {
            let values = (0..10).map(|i| i * 3 + lane).collect();
            boxed(
                delayed_values(values, Duration::from_millis(1), 3)
                    .map_items(|x| x * 2)
                    .filter_items(|x| x % 4 == 0),
            )
        })
        .collect();

    // Act
    let mut values = collect_values(streams.merge_concurrent(2)).await;

    // Assert: the doubled multiples of four out of 0..30, in some order.
    values.sort_unstable();
    let expected: Vec<i32> = (0..30).map(|x| x * 2).filter(|x| x % 4 == 0).collect();
    assert_eq!(values, expected);
}

#[tokio::test]
async fn test_pipeline_merge_map_into_chunks() {
    // Arrange
    let upstream = from_values((1..=9).collect::<Vec<i32>>());

    // Act: fan out, then group the completions into chunks of four.
    let chunks: Vec<Vec<i32>> = collect_values(
        upstream
            .merge_map_concurrent(3, |x| async move { Ok(x * x) })
            .buffer_count(4),
    )
    .await;

    // Assert: chunk sizes are deterministic, contents only as a multiset.
    assert_eq!(chunks.iter().map(Vec::len).collect::<Vec<_>>(), vec![4, 4, 1]);
    let mut values: Vec<i32> = chunks.into_iter().flatten().collect();
    values.sort_unstable();
    assert_eq!(values, (1..=9).map(|x| x * x).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_pipeline_recovers_from_merge_failure() {
    // Arrange: one faulty source poisons the merge; map_error converts the
    // terminal failure into a sentinel value.
    let faulty = ErrorInjectingStream::new(futures::stream::iter(vec![1]), 0);
    let streams = vec![boxed(faulty), boxed(from_values(vec![10, 20]))];

    // Act
    let values = collect_values(streams.merge_concurrent(1).map_error(|_| -1)).await;

    // Assert: count 1 arms the faulty source last, so both healthy values
    // surface before the sentinel ends the stream.
    assert_eq!(values, vec![10, 20, -1]);
}

#[tokio::test]
async fn test_pipeline_slot_order_merge_is_deterministic() {
    // Arrange: immediate sources with one value each.
    let streams = vec![from_values(vec!["a"]), from_values(vec!["b"])];

    // Act
    let values = collect_values(streams.merge_with_policy(2, YieldPolicy::SlotOrder)).await;

    // Assert: slots are armed from the back of the input.
    assert_eq!(values, vec!["b", "a"]);
}
