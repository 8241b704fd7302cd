use super::*;

#[test]
fn slides_endpoint_is_api_route() {
    assert_eq!(SLIDES_ENDPOINT, "/api/slides");
}

#[test]
fn slides_request_failed_message_formats_status() {
    assert_eq!(slides_request_failed_message(502, None), "slides request failed: 502");
}

#[test]
fn slides_request_failed_message_includes_server_error() {
    assert_eq!(
        slides_request_failed_message(500, Some("Failed to load slides")),
        "slides request failed: 500 (Failed to load slides)"
    );
    assert_eq!(slides_request_failed_message(500, Some("  ")), "slides request failed: 500");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn fetch_slides_is_unavailable_outside_browser() {
    let result = block_on_ready(fetch_slides());
    assert_eq!(result, Err("not available on server".to_owned()));
}

/// Minimal executor for a future that completes on first poll.
#[cfg(not(feature = "hydrate"))]
fn block_on_ready<F: std::future::Future>(fut: F) -> F::Output {
    use std::task::{Context, Poll, Waker};

    let mut fut = std::pin::pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(out) => out,
        Poll::Pending => panic!("future should complete without waiting"),
    }
}
