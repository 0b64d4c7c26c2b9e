use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Canonical web links for an object, keyed by service name.
///
/// The API only ever sends `spotify` today; any other service is kept so it
/// survives a decode/encode cycle.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExternalLinks {
    pub spotify: String,
    #[serde(flatten)]
    other: BTreeMap<String, String>,
}

impl ExternalLinks {
    pub fn new(spotify: impl Into<String>) -> Self {
        ExternalLinks {
            spotify: spotify.into(),
            other: BTreeMap::new(),
        }
    }

    /// Sets the link for `service`, returning the previous one. `spotify`
    /// always lands in the dedicated field so the key is written only once.
    pub fn insert(&mut self, service: impl Into<String>, url: impl Into<String>) -> Option<String> {
        let service = service.into();
        let url = url.into();
        if service == "spotify" {
            Some(std::mem::replace(&mut self.spotify, url))
        } else {
            self.other.insert(service, url)
        }
    }

    pub fn services(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        std::iter::once(("spotify", self.spotify.as_str()))
            .chain(self.other.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }

    pub fn get(&self, service: &str) -> Option<&str> {
        match service {
            "spotify" => Some(self.spotify.as_str()),
            _ => self.other.get(service).map(String::as_str),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn single_service() {
        let links: ExternalLinks =
            serde_json::from_value(json!({ "spotify": "https://open.example/u/1" })).unwrap();
        assert_eq!(links, ExternalLinks::new("https://open.example/u/1"));
        assert_eq!(links.get("spotify"), Some("https://open.example/u/1"));
        assert_eq!(links.get("youtube"), None);
        assert_eq!(
            serde_json::to_value(&links).unwrap(),
            json!({ "spotify": "https://open.example/u/1" })
        );
    }

    #[test]
    fn extra_services_are_kept() {
        let value = json!({ "spotify": "https://open.example/a", "mirror": "https://m.example/a" });
        let links: ExternalLinks = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(links.get("mirror"), Some("https://m.example/a"));
        assert_eq!(serde_json::to_value(&links).unwrap(), value);
    }

    #[test]
    fn inserting_spotify_replaces_the_main_link() {
        let mut links = ExternalLinks::new("https://open.example/a");
        assert_eq!(
            links.insert("spotify", "https://open.example/b"),
            Some("https://open.example/a".to_string())
        );
        assert_eq!(links.insert("mirror", "https://m.example/b"), None);

        let encoded = serde_json::to_string(&links).unwrap();
        assert_eq!(
            encoded,
            r#"{"spotify":"https://open.example/b","mirror":"https://m.example/b"}"#
        );
        let decoded: ExternalLinks = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, links);
        let services: Vec<(&str, &str)> = decoded.services().collect();
        assert_eq!(
            services,
            [("spotify", "https://open.example/b"), ("mirror", "https://m.example/b")]
        );
    }

    #[test]
    fn spotify_link_is_required() {
        let result = serde_json::from_value::<ExternalLinks>(json!({ "mirror": "x" }));
        assert!(result.is_err());
    }
}
