use serde::{Deserialize, Deserializer, Serialize};

/// Envelope returned by the CORS relay. `contents` carries the upstream
/// body as a JSON-encoded string. The field must be present; only an
/// explicit `null` decodes to `None`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RelayEnvelope {
    #[serde(deserialize_with = "required_nullable")]
    pub contents: Option<String>,
}

// A custom deserializer turns off serde's implicit `None` for absent `Option` fields.
fn required_nullable<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)
}

/// Decoded karma feed body.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct KarmaFeed {
    #[serde(default)]
    pub stats: Option<KarmaStats>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct KarmaStats {
    #[serde(rename = "karmaDelta", default)]
    pub karma_delta: Option<f64>,
}

impl KarmaFeed {
    /// Karma delta for the feed window, zero when the feed omits it.
    pub fn karma_delta(&self) -> f64 {
        self.stats
            .as_ref()
            .and_then(|stats| stats.karma_delta)
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_karma_delta_present() {
        let feed: KarmaFeed =
            serde_json::from_str(r#"{"stats":{"karmaDelta":12.5,"karma":900}}"#).unwrap();
        assert_eq!(feed.karma_delta(), 12.5);
    }

    #[test]
    fn test_karma_delta_defaults_to_zero() {
        for body in [r#"{}"#, r#"{"stats":{}}"#, r#"{"stats":null}"#, r#"{"stats":{"karmaDelta":null}}"#] {
            let feed: KarmaFeed = serde_json::from_str(body).unwrap();
            assert_eq!(feed.karma_delta(), 0.0, "body: {body}");
        }
    }

    #[test]
    fn test_envelope_without_contents_is_rejected() {
        let result = serde_json::from_str::<RelayEnvelope>(r#"{"status":{"http_code":500}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_envelope_with_null_contents() {
        let envelope: RelayEnvelope = serde_json::from_str(r#"{"contents":null}"#).unwrap();
        assert!(envelope.contents.is_none());
    }
}
