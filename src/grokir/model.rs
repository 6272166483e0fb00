use serde::{Deserialize, Deserializer, Serialize};

/// A single hit returned by the full-text search endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResult {
    #[serde(deserialize_with = "nullable")]
    pub slug: String,
    #[serde(deserialize_with = "nullable")]
    pub title: String,
    #[serde(deserialize_with = "nullable")]
    pub snippet: String,
    #[serde(deserialize_with = "nullable")]
    pub relevance_score: f64,
    // The API sends this as a numeric string; null reads as 0
    #[serde(with = "view_count")]
    pub view_count: u64,
    #[serde(deserialize_with = "nullable")]
    pub title_highlights: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub snippet_highlights: Vec<String>,
}

/// A page fetched by slug. Empty `description` or `content` means absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Page {
    #[serde(deserialize_with = "nullable")]
    pub title: String,
    #[serde(deserialize_with = "nullable")]
    pub slug: String,
    #[serde(deserialize_with = "nullable")]
    pub description: String,
    #[serde(deserialize_with = "nullable")]
    pub content: String,
}

/// Treats an explicit JSON `null` the same as a missing field.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

mod view_count {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(value: &u64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        match Option::<Raw>::deserialize(deserializer)? {
            None => Ok(0),
            Some(Raw::Number(n)) => Ok(n),
            Some(Raw::Text(s)) => s
                .trim()
                .parse()
                .map_err(|_| D::Error::custom(format!("invalid view_count {s:?}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_view_count_from_string() {
        let json = r#"{"slug":"k8s","title":"Kubernetes","snippet":"Container orchestrator","relevance_score":0.9,"view_count":"1000"}"#;
        let result: SearchResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.slug, "k8s");
        assert_eq!(result.view_count, 1000);
        assert!(result.title_highlights.is_empty());
        assert!(result.snippet_highlights.is_empty());
    }

    #[test]
    fn decodes_view_count_from_number() {
        let json = r#"{"slug":"k8s","title":"Kubernetes","view_count":42}"#;
        let result: SearchResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.view_count, 42);
    }

    #[test]
    fn rejects_non_numeric_view_count() {
        let json = r#"{"slug":"k8s","title":"Kubernetes","view_count":"lots"}"#;
        let err = serde_json::from_str::<SearchResult>(json).unwrap_err();
        assert!(err.to_string().contains("invalid view_count"));
    }

    #[test]
    fn null_numeric_fields_decode_as_zero() {
        let json = r#"{"results":[
            {"slug":"a","title":"A","relevance_score":null,"view_count":"1"},
            {"slug":"b","title":"B","relevance_score":0.1,"view_count":null}
        ]}"#;
        let value: serde_json::Value = serde_json::from_str(json).unwrap();
        let results: Vec<SearchResult> =
            serde_json::from_value(value["results"].clone()).unwrap();

        assert_eq!(results[0].relevance_score, 0.0);
        assert_eq!(results[0].view_count, 1);
        assert_eq!(results[1].relevance_score, 0.1);
        assert_eq!(results[1].view_count, 0);
    }

    #[test]
    fn view_count_is_written_back_as_string() {
        let result = SearchResult {
            slug: "k8s".into(),
            view_count: 12500,
            ..Default::default()
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["view_count"], "12500");
    }

    #[test]
    fn null_highlights_decode_as_empty() {
        let json = r#"{"slug":"a","title":"A","title_highlights":null,"snippet_highlights":["<em>a</em>"]}"#;
        let result: SearchResult = serde_json::from_str(json).unwrap();
        assert!(result.title_highlights.is_empty());
        assert_eq!(result.snippet_highlights, vec!["<em>a</em>".to_string()]);
    }

    #[test]
    fn page_with_missing_fields_decodes_to_empty_strings() {
        let page: Page =
            serde_json::from_str(r#"{"title":"Minimal","slug":"minimal","description":null}"#)
                .unwrap();
        assert_eq!(page.title, "Minimal");
        assert!(page.description.is_empty());
        assert!(page.content.is_empty());
    }
}
