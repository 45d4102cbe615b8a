//! Body capture with guaranteed replay.
//!
//! HTTP bodies are single-read streams. `capture` drains the stream once and
//! hands back the request rebuilt around a fresh `Body` over the bytes read,
//! on every path, including a failed or over-limit read. Callers therefore
//! never hold a request whose body was consumed.

use axum::{body::Body, http::Request};
use bytes::{Bytes, BytesMut};
use futures_util::StreamExt;

use jsonrpc_filter_core::error::{FilterError, Result};

/// Read the whole body (up to `limit` bytes) and restore it on the request.
///
/// The returned `Bytes` share storage with the replayed body, so inspecting
/// them costs no extra copy.
pub async fn capture(req: Request<Body>, limit: usize) -> (Request<Body>, Result<Bytes>) {
    let (parts, body) = req.into_parts();

    let mut buf = BytesMut::new();
    let mut read = Ok(());
    let mut stream = body.into_data_stream();

    while let Some(chunk) = stream.next().await {
        match chunk {
            Ok(data) => {
                if buf.len() + data.len() > limit {
                    read = Err(FilterError::BodyRead(format!(
                        "request body exceeds {limit} bytes"
                    )));
                    break;
                }
                buf.extend_from_slice(&data);
            }
            Err(e) => {
                read = Err(FilterError::BodyRead(e.to_string()));
                break;
            }
        }
    }

    let bytes = buf.freeze();
    let req = Request::from_parts(parts, Body::from(bytes.clone()));
    (req, read.map(|()| bytes))
}
