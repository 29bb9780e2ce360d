use serde::{Deserialize, Deserializer};

/// Identifiers come from the page renderer either as JSON strings or as
/// integer row ids. Both are normalized to their string form.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Int(i64),
    Float(f64),
}

impl RawId {
    fn into_string(self) -> String {
        match self {
            RawId::Text(s) => s.trim().to_string(),
            RawId::Int(n) => n.to_string(),
            RawId::Float(f) if f.fract() == 0.0 => format!("{}", f as i64),
            RawId::Float(f) => f.to_string(),
        }
    }
}

/// `deserialize_with` helper for required id fields.
pub fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    RawId::deserialize(deserializer).map(RawId::into_string)
}

/// `deserialize_with` helper for optional id fields. Blank strings become `None`.
pub fn deserialize_opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawId>::deserialize(deserializer)?;
    Ok(raw.map(RawId::into_string).filter(|s| !s.is_empty()))
}
