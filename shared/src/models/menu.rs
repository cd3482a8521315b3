//! Menu Records

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single dish or drink on the menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub description: String,
    /// Price in the house currency, two decimal places
    pub price: Decimal,
}

impl MenuItem {
    pub fn new(name: &str, description: &str, price: Decimal) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            price,
        }
    }

    /// Price formatted for display, e.g. `$8.50`
    pub fn display_price(&self) -> String {
        format!("${:.2}", self.price)
    }
}

/// A named group of menu items
///
/// Categories render in the order the registry defines them, never sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuCategory {
    pub name: String,
    pub items: Vec<MenuItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_price_keeps_two_decimals() {
        let item = MenuItem::new("Espresso", "Strong and aromatic", Decimal::new(300, 2));
        assert_eq!(item.display_price(), "$3.00");

        let item = MenuItem::new("Bruschetta", "Toasted baguette", Decimal::new(850, 2));
        assert_eq!(item.display_price(), "$8.50");
    }
}
