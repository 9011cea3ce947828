use serde::de::{self, DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Free-form analytics/statistics object returned by the `*/stats` and
/// `*/analytics` endpoints.
pub type Stats = serde_json::Map<String, Value>;

/// Keys under which list endpoints wrap their arrays, in lookup order.
const LIST_KEYS: [&str; 4] = ["data", "users", "items", "results"];

/// Default page size reported for an unrecognized paginated body.
const DEFAULT_PAGE_SIZE: u32 = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct MessageResponse {
    pub message: String,
}

/// A list body in any of the shapes the backend uses.
///
/// Accepts a bare array or an object wrapping the array under `data`,
/// `users`, `items` or `results`. Any other shape (including `null` from a
/// 204) decodes to an empty list.
#[derive(Debug, Clone, PartialEq)]
pub struct ListResponse<T>(pub Vec<T>);

impl<T> ListResponse<T> {
    pub fn into_inner(self) -> Vec<T> {
        self.0
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for ListResponse<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let items = match value {
            Value::Array(_) => value,
            Value::Object(mut map) => {
                let wrapped = LIST_KEYS.iter().find_map(|key| match map.remove(*key) {
                    Some(v @ Value::Array(_)) => Some(v),
                    _ => None,
                });
                match wrapped {
                    Some(v) => v,
                    None => return Ok(ListResponse(Vec::new())),
                }
            }
            _ => return Ok(ListResponse(Vec::new())),
        };
        serde_json::from_value(items)
            .map(ListResponse)
            .map_err(de::Error::custom)
    }
}

/// One page of a paginated listing.
///
/// A bare array decodes as a single page holding every item.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

impl<T> Paginated<T> {
    fn single_page(data: Vec<T>) -> Self {
        let len = data.len();
        Self {
            data,
            total: len as u64,
            page: 1,
            page_size: len as u32,
            total_pages: 1,
        }
    }

    fn empty() -> Self {
        Self {
            data: Vec::new(),
            total: 0,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            total_pages: 0,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PaginatedWire<T> {
    data: Vec<T>,
    #[serde(default)]
    total: Option<u64>,
    #[serde(default)]
    page: Option<u32>,
    #[serde(default)]
    page_size: Option<u32>,
    #[serde(default)]
    total_pages: Option<u32>,
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Paginated<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let is_envelope = matches!(value.get("data"), Some(Value::Array(_)));
        match value {
            Value::Array(_) => serde_json::from_value(value)
                .map(Paginated::single_page)
                .map_err(de::Error::custom),
            Value::Object(_) if is_envelope => {
                let wire: PaginatedWire<T> =
                    serde_json::from_value(value).map_err(de::Error::custom)?;
                let len = wire.data.len();
                Ok(Paginated {
                    total: wire.total.unwrap_or(len as u64),
                    page: wire.page.unwrap_or(1),
                    page_size: wire.page_size.unwrap_or(len as u32),
                    total_pages: wire.total_pages.unwrap_or(1),
                    data: wire.data,
                })
            }
            _ => Ok(Paginated::empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_response_accepts_bare_array() {
        let list: ListResponse<u32> = serde_json::from_str("[1, 2, 3]").unwrap();
        assert_eq!(list.into_inner(), vec![1, 2, 3]);
    }

    #[test]
    fn test_list_response_unwraps_known_keys() {
        let list: ListResponse<String> =
            serde_json::from_str(r#"{"users": ["a@x.io"], "count": 1}"#).unwrap();
        assert_eq!(list.0, vec!["a@x.io".to_string()]);

        let list: ListResponse<u32> =
            serde_json::from_str(r#"{"data": [7], "total": 1, "page": 1}"#).unwrap();
        assert_eq!(list.0, vec![7]);
    }

    #[test]
    fn test_list_response_skips_non_array_wrapper() {
        // "data" is an object here, so lookup falls through to "items"
        let list: ListResponse<u32> =
            serde_json::from_str(r#"{"data": {"x": 1}, "items": [4, 5]}"#).unwrap();
        assert_eq!(list.0, vec![4, 5]);
    }

    #[test]
    fn test_list_response_unknown_shape_is_empty() {
        let list: ListResponse<u32> = serde_json::from_str(r#"{"message": "ok"}"#).unwrap();
        assert!(list.0.is_empty());
        let list: ListResponse<u32> = serde_json::from_value(Value::Null).unwrap();
        assert!(list.0.is_empty());
    }

    #[test]
    fn test_list_response_propagates_item_errors() {
        let result: Result<ListResponse<u32>, _> = serde_json::from_str(r#"["nope"]"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_paginated_from_envelope() {
        let page: Paginated<u32> = serde_json::from_str(
            r#"{"data": [1, 2], "total": 42, "page": 3, "pageSize": 2, "totalPages": 21}"#,
        )
        .unwrap();
        assert_eq!(page.data, vec![1, 2]);
        assert_eq!(page.total, 42);
        assert_eq!(page.page, 3);
        assert_eq!(page.page_size, 2);
        assert_eq!(page.total_pages, 21);
    }

    #[test]
    fn test_paginated_from_bare_array() {
        let page: Paginated<u32> = serde_json::from_str("[5, 6, 7]").unwrap();
        assert_eq!(page.total, 3);
        assert_eq!(page.page, 1);
        assert_eq!(page.page_size, 3);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_paginated_unknown_shape_is_empty_first_page() {
        let page: Paginated<u32> = serde_json::from_str(r#"{"detail": "weird"}"#).unwrap();
        assert!(page.data.is_empty());
        assert_eq!(page.total, 0);
        assert_eq!(page.page_size, 20);
        assert_eq!(page.total_pages, 0);
    }
}
