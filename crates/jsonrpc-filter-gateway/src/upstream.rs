//! Upstream forwarder: the "next handler" used by the binary.
//!
//! Sends the (already filtered and replayed) request to the JSON-RPC backend
//! and relays the response. Hop-by-hop headers are dropped in both directions.

use std::time::Duration;

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, Request, StatusCode, Uri},
    response::{IntoResponse, Response},
};

use jsonrpc_filter_core::error::{FilterError, Result};

use crate::app_state::AppState;

const HOP_BY_HOP: [header::HeaderName; 8] = [
    header::CONNECTION,
    header::PROXY_AUTHENTICATE,
    header::PROXY_AUTHORIZATION,
    header::TE,
    header::TRAILER,
    header::TRANSFER_ENCODING,
    header::UPGRADE,
    header::HOST,
];

pub struct Upstream {
    client: reqwest::Client,
    base: String,
}

impl Upstream {
    pub fn new(base: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| FilterError::Internal(format!("http client build failed: {e}")))?;
        Ok(Self {
            client,
            base: base.trim_end_matches('/').to_string(),
        })
    }

    /// Upstream URL for an inbound URI (path and query are preserved).
    pub fn target_url(&self, uri: &Uri) -> String {
        let pq = uri.path_and_query().map(|p| p.as_str()).unwrap_or("/");
        format!("{}{}", self.base, pq)
    }

    pub async fn send(&self, req: Request<Body>) -> Result<Response> {
        let (parts, body) = req.into_parts();
        let body = axum::body::to_bytes(body, usize::MAX)
            .await
            .map_err(|e| FilterError::BodyRead(e.to_string()))?;

        let mut headers = parts.headers;
        strip_hop_by_hop(&mut headers);
        // recomputed by the client from the body
        headers.remove(header::CONTENT_LENGTH);

        let url = self.target_url(&parts.uri);
        let resp = self
            .client
            .request(parts.method, &url)
            .headers(headers)
            .body(body)
            .send()
            .await
            .map_err(|e| FilterError::Upstream(e.to_string()))?;

        let status = resp.status();
        let mut resp_headers = resp.headers().clone();
        strip_hop_by_hop(&mut resp_headers);
        let bytes = resp
            .bytes()
            .await
            .map_err(|e| FilterError::Upstream(e.to_string()))?;

        let mut out = Response::new(Body::from(bytes));
        *out.status_mut() = status;
        *out.headers_mut() = resp_headers;
        Ok(out)
    }
}

fn strip_hop_by_hop(headers: &mut HeaderMap) {
    for h in HOP_BY_HOP.iter() {
        headers.remove(h);
    }
    headers.remove("keep-alive");
}

pub async fn forward(State(state): State<AppState>, req: Request<Body>) -> Response {
    match state.upstream().send(req).await {
        Ok(resp) => resp,
        Err(e) => {
            tracing::error!(error = %e, code = e.client_code().as_str(), "upstream request failed");
            (StatusCode::BAD_GATEWAY, e.to_string()).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn target_url_keeps_path_and_query() {
        let up = Upstream::new("http://node:8545/", Duration::from_secs(1)).unwrap();
        let uri: Uri = "/rpc/v1?key=abc".parse().unwrap();
        assert_eq!(up.target_url(&uri), "http://node:8545/rpc/v1?key=abc");

        let root: Uri = "/".parse().unwrap();
        assert_eq!(up.target_url(&root), "http://node:8545/");
    }

    #[test]
    fn hop_by_hop_headers_are_dropped() {
        let mut h = HeaderMap::new();
        h.insert(header::CONNECTION, "keep-alive".parse().unwrap());
        h.insert(header::HOST, "proxy.local".parse().unwrap());
        h.insert("keep-alive", "timeout=5".parse().unwrap());
        h.insert(header::CONTENT_TYPE, "application/json".parse().unwrap());
        h.insert(header::AUTHORIZATION, "Bearer t".parse().unwrap());

        strip_hop_by_hop(&mut h);

        assert_eq!(h.len(), 2);
        assert!(h.contains_key(header::CONTENT_TYPE));
        assert!(h.contains_key(header::AUTHORIZATION));
    }
}
