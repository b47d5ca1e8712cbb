use futures::{stream, StreamExt};
use pullstream_core::StreamItem;
use pullstream_stream::{from_values, MapErrorExt};
use pullstream_test_utils::{collect_values, ErrorInjectingStream};

#[tokio::test]
async fn test_map_error_substitutes_fallback_and_ends() {
    // Arrange: the source would keep producing after its error.
    let source = ErrorInjectingStream::new(stream::iter(vec![1, 2, 3]), 1);

    // Act
    let recovered = source.map_error(|_| -1);

    // Assert: values after the fault are never pulled.
    assert_eq!(collect_values(recovered).await, vec![1, -1]);
}

#[tokio::test]
async fn test_map_error_is_transparent_without_errors() {
    let recovered = from_values(vec![1, 2, 3]).map_error(|_| -1);

    assert_eq!(collect_values(recovered).await, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_map_error_fallback_carries_error_context() {
    // Arrange
    let source = ErrorInjectingStream::new(stream::iter(Vec::<String>::new()), 0);

    // Act
    let mut recovered = source.map_error(|error| error.to_string());

    // Assert
    match recovered.next().await {
        Some(StreamItem::Value(message)) => assert!(message.contains("injected error")),
        other => panic!("expected the fallback value, got {other:?}"),
    }
    assert!(recovered.next().await.is_none());
}
