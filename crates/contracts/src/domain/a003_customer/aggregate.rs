use crate::domain::common::deserialize_id;
use serde::{Deserialize, Serialize};

/// Покупатель магазина
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRow {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
}

impl CustomerRow {
    fn phone_text(&self) -> Option<&str> {
        self.phone
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }

    /// "Name · Phone", or just the name when there is no phone.
    pub fn display_label(&self) -> String {
        match self.phone_text() {
            Some(phone) => format!("{} · {}", self.name, phone),
            None => self.name.clone(),
        }
    }

    /// Text matched by customer searches: name and phone joined by a space.
    pub fn search_haystack(&self) -> String {
        format!("{} {}", self.name, self.phone_text().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(phone: Option<&str>) -> CustomerRow {
        CustomerRow {
            id: "1".into(),
            name: "Ayesha Khan".into(),
            phone: phone.map(String::from),
        }
    }

    #[test]
    fn test_display_label() {
        assert_eq!(customer(Some("0300-1234567")).display_label(), "Ayesha Khan · 0300-1234567");
        assert_eq!(customer(None).display_label(), "Ayesha Khan");
        assert_eq!(customer(Some("  ")).display_label(), "Ayesha Khan");
    }

    #[test]
    fn test_search_haystack() {
        assert_eq!(customer(Some("0300")).search_haystack(), "Ayesha Khan 0300");
        assert_eq!(customer(None).search_haystack(), "Ayesha Khan ");
    }
}
