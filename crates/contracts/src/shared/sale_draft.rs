//! Wire format of an in-progress sale kept in session storage while the
//! manager leaves the page to create a customer.

use crate::domain::common::deserialize_id;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftStage {
    /// Only the product checklist was chosen
    #[default]
    Select,
    /// Quantity/price rows were generated and possibly edited
    Details,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftEntry {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    /// "1" when the row was sold with expense pricing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expense: Option<String>,
}

impl DraftEntry {
    pub fn uses_expense(&self) -> bool {
        self.expense.as_deref().map(str::trim) == Some("1")
    }
}

#[derive(Debug, Error)]
pub enum DraftError {
    #[error("malformed sale draft: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("sale draft has no entries")]
    Empty,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleDraft {
    #[serde(default)]
    pub stage: DraftStage,
    pub entries: Vec<DraftEntry>,
}

impl SaleDraft {
    /// An empty draft is never a value: callers delete the stored one instead.
    pub fn new(stage: DraftStage, entries: Vec<DraftEntry>) -> Option<Self> {
        if entries.is_empty() {
            None
        } else {
            Some(Self { stage, entries })
        }
    }

    pub fn to_json(&self) -> Result<String, DraftError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(raw: &str) -> Result<Self, DraftError> {
        let draft: SaleDraft = serde_json::from_str(raw)?;
        if draft.entries.is_empty() {
            return Err(DraftError::Empty);
        }
        Ok(draft)
    }

    pub fn entry(&self, id: &str) -> Option<&DraftEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entry(id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_details_draft_json_shape() {
        let draft = SaleDraft::new(
            DraftStage::Details,
            vec![DraftEntry {
                id: "7".into(),
                quantity: Some("3".into()),
                price: Some("500".into()),
                expense: Some("0".into()),
            }],
        )
        .unwrap();
        assert_eq!(
            draft.to_json().unwrap(),
            r#"{"stage":"details","entries":[{"id":"7","quantity":"3","price":"500","expense":"0"}]}"#
        );
    }

    #[test]
    fn test_select_draft_omits_missing_fields() {
        let draft = SaleDraft::new(
            DraftStage::Select,
            vec![DraftEntry {
                id: "3".into(),
                quantity: None,
                price: Some("120.00".into()),
                expense: None,
            }],
        )
        .unwrap();
        assert_eq!(
            draft.to_json().unwrap(),
            r#"{"stage":"select","entries":[{"id":"3","price":"120.00"}]}"#
        );
    }

    #[test]
    fn test_empty_entries_are_not_a_draft() {
        assert!(SaleDraft::new(DraftStage::Details, Vec::new()).is_none());
        assert!(matches!(
            SaleDraft::from_json(r#"{"stage":"select","entries":[]}"#),
            Err(DraftError::Empty)
        ));
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        assert!(matches!(SaleDraft::from_json("{not json"), Err(DraftError::Malformed(_))));
        assert!(matches!(SaleDraft::from_json(r#"{"stage":"details"}"#), Err(DraftError::Malformed(_))));
    }

    #[test]
    fn test_numeric_ids_and_missing_stage() {
        let draft = SaleDraft::from_json(r#"{"entries":[{"id":7,"expense":"1"}]}"#).unwrap();
        assert_eq!(draft.stage, DraftStage::Select);
        assert!(draft.contains("7"));
        assert!(draft.entry("7").unwrap().uses_expense());
    }
}
