//! JSON-RPC call descriptor.
//!
//! Only `method` takes part in policy decisions. `id`, `params` and `jsonrpc`
//! are skipped without being materialized; they still reach the backend
//! because the original body bytes are forwarded, never a re-encoding.
//!
//! Decoding rules:
//! - object: the `method` key, matched ASCII case-insensitively (`Method`,
//!   `METHOD`), must be a string or `null`; other keys are skipped
//! - missing or `null` method decodes as the empty string
//! - several `method` keys (in any case): the last one wins
//! - a bare `null` decodes as a call with an empty method
//! - anything else is a type error

use std::fmt;

use serde::de::{Deserialize, Deserializer, IgnoredAny, MapAccess, Visitor};

/// A single JSON-RPC call, reduced to the field the filter inspects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallDescriptor {
    /// Remote procedure name. Empty when absent from the payload.
    pub method: String,
}

impl CallDescriptor {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
        }
    }

    pub fn method(&self) -> &str {
        &self.method
    }
}

impl<'de> Deserialize<'de> for CallDescriptor {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(CallVisitor)
    }
}

struct CallVisitor;

impl<'de> Visitor<'de> for CallVisitor {
    type Value = CallDescriptor;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON-RPC call object")
    }

    fn visit_unit<E>(self) -> std::result::Result<Self::Value, E> {
        Ok(CallDescriptor::default())
    }

    fn visit_none<E>(self) -> std::result::Result<Self::Value, E> {
        Ok(CallDescriptor::default())
    }

    fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut method = String::new();
        while let Some(key) = map.next_key::<String>()? {
            if key.eq_ignore_ascii_case("method") {
                // null keeps whatever was there before
                if let Some(m) = map.next_value::<Option<String>>()? {
                    method = m;
                }
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        Ok(CallDescriptor { method })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn decode(s: &str) -> serde_json::Result<CallDescriptor> {
        serde_json::from_str(s)
    }

    #[test]
    fn reads_method_and_skips_other_fields() {
        let c = decode(r#"{"jsonrpc":"2.0","id":7,"method":"eth_call","params":[{"to":"0x0"},"latest"]}"#)
            .unwrap();
        assert_eq!(c.method(), "eth_call");
    }

    #[test]
    fn missing_method_is_empty() {
        assert_eq!(decode(r#"{"id":1}"#).unwrap().method, "");
        assert_eq!(decode(r#"{"method":null}"#).unwrap().method, "");
    }

    #[test]
    fn duplicate_method_keeps_last() {
        let c = decode(r#"{"method":"eth_call","method":"eth_sendTransaction"}"#).unwrap();
        assert_eq!(c.method, "eth_sendTransaction");
    }

    #[test]
    fn method_key_matches_any_case() {
        assert_eq!(decode(r#"{"Method":"eth_call"}"#).unwrap().method, "eth_call");
        assert_eq!(decode(r#"{"METHOD":"eth_call"}"#).unwrap().method, "eth_call");
    }

    #[test]
    fn case_variant_method_keys_keep_last() {
        let c = decode(r#"{"method":"eth_call","METHOD":"eth_sendTransaction"}"#).unwrap();
        assert_eq!(c.method, "eth_sendTransaction");

        let c = decode(r#"{"Method":"eth_sendTransaction","method":"eth_call"}"#).unwrap();
        assert_eq!(c.method, "eth_call");
    }

    #[test]
    fn case_variant_null_method_keeps_previous() {
        let c = decode(r#"{"method":"eth_call","Method":null}"#).unwrap();
        assert_eq!(c.method, "eth_call");
    }

    #[test]
    fn near_miss_keys_are_ignored() {
        assert_eq!(decode(r#"{"methods":"eth_call"}"#).unwrap().method, "");
        assert_eq!(decode(r#"{"method ":"eth_call"}"#).unwrap().method, "");
    }

    #[test]
    fn null_is_an_empty_call() {
        assert_eq!(decode("null").unwrap(), CallDescriptor::default());
    }

    #[test]
    fn non_object_shapes_are_rejected() {
        assert!(decode(r#"[{"method":"eth_call"}]"#).is_err());
        assert!(decode(r#""eth_call""#).is_err());
        assert!(decode("42").is_err());
        assert!(decode(r#"{"method":5}"#).is_err());
    }
}
