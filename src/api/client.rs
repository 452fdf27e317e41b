//! GraphQL HTTP Client
//!
//! Issues the clash list query and decodes the GraphQL response envelope.

use gloo_net::http::Request;

/// Default GraphQL endpoint URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8080/graphql";

/// Get the endpoint URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("clash_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

// ============ Query Document ============

/// Query for the full clash collection, no arguments
const CLASHES_QUERY: &str = r#"
query GetClashes {
  clashes {
    id
    title
    pictureUrl
    participants {
      id
      pictureUrl
    }
  }
}
"#;

// ============ Response Types ============

/// A clash as returned by the endpoint
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Clash {
    pub id: String,
    pub title: String,
    pub picture_url: String,
    #[serde(default)]
    pub participants: Vec<Participant>,
}

/// A member of a clash's participant list
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub id: String,
    pub picture_url: String,
}

/// Standard GraphQL response envelope
#[derive(Debug, serde::Deserialize)]
struct GraphqlResponse<T> {
    #[serde(default)]
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphqlError>,
}

#[derive(Debug, serde::Deserialize)]
struct GraphqlError {
    message: String,
}

#[derive(Debug, Default, serde::Deserialize)]
struct ClashesData {
    #[serde(default)]
    clashes: Vec<Clash>,
}

// ============ API Functions ============

/// Fetch the full clash collection
pub async fn fetch_clashes() -> Result<Vec<Clash>, String> {
    #[derive(serde::Serialize)]
    struct QueryRequest<'a> {
        query: &'a str,
        #[serde(rename = "operationName")]
        operation_name: &'a str,
    }

    let api_base = get_api_base();

    let response = Request::post(&api_base)
        .json(&QueryRequest {
            query: CLASHES_QUERY,
            operation_name: "GetClashes",
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Server error: HTTP {}", response.status()));
    }

    let body: GraphqlResponse<ClashesData> = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    decode_clashes(body)
}

/// Reduce the envelope to the clash list. Server-reported errors win over any
/// partial `data`; the first error's message is what the UI shows.
fn decode_clashes(body: GraphqlResponse<ClashesData>) -> Result<Vec<Clash>, String> {
    if let Some(err) = body.errors.into_iter().next() {
        return Err(err.message);
    }

    body.data
        .map(|data| data.clashes)
        .ok_or_else(|| "Empty response".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(json: &str) -> Result<Vec<Clash>, String> {
        let body: GraphqlResponse<ClashesData> = serde_json::from_str(json).unwrap();
        decode_clashes(body)
    }

    #[test]
    fn test_decode_full_response() {
        let clashes = decode(
            r#"{"data":{"clashes":[{"id":"1","title":"Boxing Night","pictureUrl":"https://x/1.png","participants":[{"id":"a","pictureUrl":"https://x/a.png"},{"id":"b","pictureUrl":"https://x/b.png"}]}]}}"#,
        )
        .unwrap();

        assert_eq!(clashes.len(), 1);
        assert_eq!(clashes[0].id, "1");
        assert_eq!(clashes[0].title, "Boxing Night");
        assert_eq!(clashes[0].picture_url, "https://x/1.png");

        let ids: Vec<&str> = clashes[0].participants.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[test]
    fn test_decode_empty_collection() {
        let clashes = decode(r#"{"data":{"clashes":[]}}"#).unwrap();
        assert!(clashes.is_empty());
    }

    #[test]
    fn test_decode_missing_participants() {
        let clashes = decode(
            r#"{"data":{"clashes":[{"id":"1","title":"Solo","pictureUrl":"https://x/1.png"}]}}"#,
        )
        .unwrap();
        assert!(clashes[0].participants.is_empty());
    }

    #[test]
    fn test_decode_server_error() {
        let err = decode(r#"{"data":null,"errors":[{"message":"Network error"}]}"#).unwrap_err();
        assert_eq!(err, "Network error");
    }

    #[test]
    fn test_decode_error_wins_over_partial_data() {
        let err = decode(
            r#"{"data":{"clashes":[{"id":"1","title":"Partial","pictureUrl":""}]},"errors":[{"message":"field failed"},{"message":"second"}]}"#,
        )
        .unwrap_err();
        assert_eq!(err, "field failed");
    }

    #[test]
    fn test_decode_missing_data() {
        let err = decode("{}").unwrap_err();
        assert_eq!(err, "Empty response");
    }
}
