use contracts::domain::a003_customer::CustomerRow;

pub const CUSTOMER_PLACEHOLDER: &str = "Select customer";

/// Customer attached to the sale being entered (hidden `sale_customer_id`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CustomerSelection {
    customer_id: Option<String>,
}

impl CustomerSelection {
    pub fn new(customer_id: Option<String>) -> Self {
        let mut selection = Self::default();
        if let Some(id) = customer_id {
            selection.select(&id);
        }
        selection
    }

    /// A blank id clears the selection.
    pub fn select(&mut self, id: &str) {
        let id = id.trim();
        self.customer_id = (!id.is_empty()).then(|| id.to_string());
    }

    pub fn clear(&mut self) {
        self.customer_id = None;
    }

    pub fn customer_id(&self) -> Option<&str> {
        self.customer_id.as_deref()
    }

    /// Value of the hidden form field.
    pub fn form_value(&self) -> String {
        self.customer_id.clone().unwrap_or_default()
    }

    fn customer<'a>(&self, customers: &'a [CustomerRow]) -> Option<&'a CustomerRow> {
        let id = self.customer_id.as_deref()?;
        customers.iter().find(|c| c.id == id)
    }

    /// "Name · Phone", "Name", or the placeholder when nobody known is selected.
    pub fn label(&self, customers: &[CustomerRow]) -> String {
        self.customer(customers)
            .map(CustomerRow::display_label)
            .unwrap_or_else(|| CUSTOMER_PLACEHOLDER.to_string())
    }

    /// The clear button is shown only for a customer present in the list.
    pub fn show_clear(&self, customers: &[CustomerRow]) -> bool {
        self.customer(customers).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customers() -> Vec<CustomerRow> {
        vec![
            CustomerRow {
                id: "4".into(),
                name: "Ayesha Khan".into(),
                phone: Some("0300-1234567".into()),
            },
            CustomerRow {
                id: "9".into(),
                name: "Bilal".into(),
                phone: None,
            },
        ]
    }

    #[test]
    fn test_labels() {
        let list = customers();
        let mut selection = CustomerSelection::default();
        assert_eq!(selection.label(&list), "Select customer");
        assert!(!selection.show_clear(&list));

        selection.select("4");
        assert_eq!(selection.label(&list), "Ayesha Khan · 0300-1234567");
        assert!(selection.show_clear(&list));
        assert_eq!(selection.form_value(), "4");

        selection.select("9");
        assert_eq!(selection.label(&list), "Bilal");
    }

    #[test]
    fn test_clear_and_blank_select() {
        let list = customers();
        let mut selection = CustomerSelection::new(Some("4".into()));
        selection.clear();
        assert_eq!(selection.customer_id(), None);
        assert_eq!(selection.form_value(), "");
        assert!(!selection.show_clear(&list));

        selection.select("9");
        selection.select("  ");
        assert_eq!(selection.customer_id(), None);
    }

    #[test]
    fn test_unknown_id_keeps_value_but_shows_placeholder() {
        let list = customers();
        let selection = CustomerSelection::new(Some("77".into()));
        assert_eq!(selection.form_value(), "77");
        assert_eq!(selection.label(&list), "Select customer");
        assert!(!selection.show_clear(&list));
    }
}
