//! Remote collection fetcher port.
//!
//! The browser build implements [`Fetcher`] over the Fetch API; tests use
//! [`crate::testing::StubFetcher`]. One attempt per call, no retry.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::FetchError;

/// HTTP GET returning a parsed JSON body.
///
/// Implementations must map any non-2xx status to [`FetchError::Status`]
/// and an unparseable body to [`FetchError::Decode`].
#[allow(async_fn_in_trait)]
pub trait Fetcher {
    /// GET `url` and parse the body as JSON.
    async fn get_json(&self, url: &str) -> Result<Value, FetchError>;
}

impl<F: Fetcher + ?Sized> Fetcher for &F {
    async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        (**self).get_json(url).await
    }
}

/// Decode a collection payload.
///
/// Accepts a bare array, a paginated `{"results": [...]}` object, or `null`
/// (treated as empty).
pub fn decode_list<T: DeserializeOwned>(value: Value) -> Result<Vec<T>, FetchError> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Array(_) => Ok(serde_json::from_value(value)?),
        Value::Object(mut map) => match map.remove("results") {
            Some(results @ Value::Array(_)) => Ok(serde_json::from_value(results)?),
            _ => Err(FetchError::Decode("expected a list".to_string())),
        },
        _ => Err(FetchError::Decode("expected a list".to_string())),
    }
}

/// Percent-encode a query or path component.
pub fn encode_component(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_decode_list_shapes() {
        let list: Vec<u32> = decode_list(json!([1, 2])).unwrap();
        assert_eq!(list, vec![1, 2]);

        let page: Vec<u32> = decode_list(json!({ "count": 1, "results": [3] })).unwrap();
        assert_eq!(page, vec![3]);

        let empty: Vec<u32> = decode_list(Value::Null).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_decode_list_rejects_non_lists() {
        assert!(matches!(
            decode_list::<u32>(json!({ "detail": "Not found." })),
            Err(FetchError::Decode(_))
        ));
        assert!(matches!(
            decode_list::<u32>(json!("oops")),
            Err(FetchError::Decode(_))
        ));
        assert!(matches!(
            decode_list::<u32>(json!(["a"])),
            Err(FetchError::Decode(_))
        ));
    }

    #[test]
    fn test_encode_component() {
        assert_eq!(encode_component("fade"), "fade");
        assert_eq!(encode_component("beard grooming"), "beard%20grooming");
        assert_eq!(encode_component("a&b=c/d"), "a%26b%3Dc%2Fd");
    }
}
