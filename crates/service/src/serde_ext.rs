//! Serde helpers for optional entity references.
use serde::{Deserialize, Deserializer};
use uuid::Uuid;

fn parse_id<'de, D: Deserializer<'de>>(raw: Option<String>) -> Result<Option<Uuid>, D::Error> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => Uuid::parse_str(s).map(Some).map_err(serde::de::Error::custom),
    }
}

/// `null`, `""` and a missing field all mean "no reference".
pub fn optional_id<'de, D>(de: D) -> Result<Option<Uuid>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(de)?;
    parse_id::<D>(raw)
}

/// Three-state reference for patches: missing field → `None` (keep), `null`/`""` →
/// `Some(None)` (clear), id → `Some(Some(id))`. Pair with `#[serde(default)]`.
pub fn patch_id<'de, D>(de: D) -> Result<Option<Option<Uuid>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(de)?;
    parse_id::<D>(raw).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "patch_id")]
        image_id: Option<Option<Uuid>>,
    }

    #[test]
    fn distinguishes_absent_null_and_value() {
        let p: Patch = serde_json::from_str("{}").unwrap();
        assert_eq!(p.image_id, None);
        let p: Patch = serde_json::from_str(r#"{"image_id":null}"#).unwrap();
        assert_eq!(p.image_id, Some(None));
        let p: Patch = serde_json::from_str(r#"{"image_id":""}"#).unwrap();
        assert_eq!(p.image_id, Some(None));
        let id = Uuid::new_v4();
        let p: Patch = serde_json::from_str(&format!(r#"{{"image_id":"{}"}}"#, id)).unwrap();
        assert_eq!(p.image_id, Some(Some(id)));
    }

    #[test]
    fn rejects_malformed_ids() {
        assert!(serde_json::from_str::<Patch>(r#"{"image_id":"nope"}"#).is_err());
    }
}
