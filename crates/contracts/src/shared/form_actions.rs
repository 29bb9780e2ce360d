use serde::{Deserialize, Serialize};

const RETURN_PLACEHOLDER: &str = "/0/return";

fn default_return_template() -> String {
    "/manager/sales/0/return".to_string()
}

/// Адреса нативных POST-форм панели. Пустая строка означает «текущая страница».
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormActions {
    pub add_category: String,
    pub rename_category: String,
    pub add_brand: String,
    pub rename_brand: String,
    pub edit_product: String,
    pub restock_batch: String,
    pub record_sale: String,
    pub create_customer: String,
    /// Шаблон с `/0/return`, id продажи подставляется на месте нуля
    pub return_sale_template: String,
}

impl Default for FormActions {
    fn default() -> Self {
        Self {
            add_category: String::new(),
            rename_category: String::new(),
            add_brand: String::new(),
            rename_brand: String::new(),
            edit_product: String::new(),
            restock_batch: String::new(),
            record_sale: String::new(),
            create_customer: String::new(),
            return_sale_template: default_return_template(),
        }
    }
}

impl FormActions {
    /// Return form action for one sale.
    pub fn return_url(&self, sale_id: &str) -> String {
        self.return_sale_template
            .replacen(RETURN_PLACEHOLDER, &format!("/{}/return", sale_id), 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_return_url_substitutes_sale_id() {
        let actions = FormActions::default();
        assert_eq!(actions.return_url("42"), "/manager/sales/42/return");
    }

    #[test]
    fn test_return_url_keeps_template_without_placeholder() {
        let actions = FormActions {
            return_sale_template: "/returns".into(),
            ..FormActions::default()
        };
        assert_eq!(actions.return_url("42"), "/returns");
    }
}
