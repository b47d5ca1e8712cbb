use futures::{stream, StreamExt};
use pullstream_core::StreamItem;
use pullstream_stream::{from_values, BufferCountExt};
use pullstream_test_utils::{collect_values, expect_next_error, ErrorInjectingStream};

#[tokio::test]
async fn test_buffer_count_emits_full_chunks() {
    let chunked = from_values(vec![1, 2, 3, 4, 5, 6]).buffer_count(3);

    assert_eq!(
        collect_values(chunked).await,
        vec![vec![1, 2, 3], vec![4, 5, 6]]
    );
}

#[tokio::test]
async fn test_buffer_count_flushes_partial_tail() {
    let chunked = from_values(vec![1, 2, 3, 4, 5]).buffer_count(2);

    assert_eq!(
        collect_values(chunked).await,
        vec![vec![1, 2], vec![3, 4], vec![5]]
    );
}

#[tokio::test]
async fn test_buffer_count_empty_source_emits_nothing() {
    let mut chunked = from_values(Vec::<i32>::new()).buffer_count(4);

    assert!(chunked.next().await.is_none());
}

#[tokio::test]
async fn test_buffer_count_zero_size_behaves_as_one() {
    let chunked = from_values(vec![1, 2]).buffer_count(0);

    assert_eq!(collect_values(chunked).await, vec![vec![1], vec![2]]);
}

#[tokio::test]
async fn test_buffer_count_forwards_error_and_keeps_buffer() {
    // Arrange: error lands mid-chunk; the partial buffer survives it.
    let source = ErrorInjectingStream::new(stream::iter(vec![1, 2, 3]), 1);
    let mut chunked = source.buffer_count(2);

    // Act / Assert
    let error = expect_next_error(&mut chunked).await;
    assert!(error.is_upstream_failure());
    assert_eq!(chunked.next().await, Some(StreamItem::Value(vec![1, 2])));
    assert_eq!(chunked.next().await, Some(StreamItem::Value(vec![3])));
    assert!(chunked.next().await.is_none());
}

#[tokio::test]
async fn test_buffer_count_chunk_equal_to_source_length() {
    let chunked = from_values(vec![1, 2, 3]).buffer_count(3);

    assert_eq!(collect_values(chunked).await, vec![vec![1, 2, 3]]);
}
