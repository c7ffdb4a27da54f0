use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A named menu category and its items, in display order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuCategory {
    pub name: String,
    pub items: Vec<String>,
}

/// A campus drop-off point and its base delivery time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryLocation {
    pub name: String,
    pub base_minutes: u32,
}

/// Menu, price table and delivery locations served by a `DeliveryService`.
///
/// Categories and locations keep their insertion order; every listing the
/// service produces walks them in that order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub categories: Vec<MenuCategory>,
    pub prices: HashMap<String, Decimal>,
    pub locations: Vec<DeliveryLocation>,
}

/// An item name paired with its price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricedItem {
    pub name: String,
    pub price: Decimal,
}

/// One category block of a menu listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuSection {
    pub category: String,
    pub items: Vec<PricedItem>,
}

/// Result of `show_menu`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuListing {
    pub sections: Vec<MenuSection>,
}

/// Result of `search_items_under_price`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffordableItems {
    pub price_limit: Decimal,
    pub items: Vec<PricedItem>,
}

impl MenuCategory {
    pub fn new(name: impl Into<String>, items: &[&str]) -> Self {
        Self {
            name: name.into(),
            items: items.iter().map(|item| item.to_string()).collect(),
        }
    }
}

impl DeliveryLocation {
    pub fn new(name: impl Into<String>, base_minutes: u32) -> Self {
        Self {
            name: name.into(),
            base_minutes,
        }
    }
}

impl Catalog {
    pub fn new(
        categories: Vec<MenuCategory>,
        prices: HashMap<String, Decimal>,
        locations: Vec<DeliveryLocation>,
    ) -> Self {
        Self {
            categories,
            prices,
            locations,
        }
    }

    /// The campus menu: drinks, breakfast and lunch, delivered to three buildings
    pub fn campus() -> Self {
        let categories = vec![
            MenuCategory::new("Energy Drinks", &["Monster", "Rockstar"]),
            MenuCategory::new(
                "Coffee Drinks",
                &[
                    "Latte",
                    "Mocha",
                    "Peppermint Patty Coffee",
                    "Caramel Apple Latte",
                    "Iced Ginger Spice Coffee",
                ],
            ),
            MenuCategory::new("Breakfast", &["Bagel", "Donut", "Scone"]),
            MenuCategory::new("Lunch", &["Falafel Wrap", "Hummus & Pita", "Chicken Wrap"]),
        ];

        let prices = [
            ("Monster", dec!(3.00)),
            ("Rockstar", dec!(3.00)),
            ("Latte", dec!(4.50)),
            ("Mocha", dec!(4.00)),
            ("Peppermint Patty Coffee", dec!(5.00)),
            ("Caramel Apple Latte", dec!(5.50)),
            ("Iced Ginger Spice Coffee", dec!(4.50)),
            ("Bagel", dec!(2.50)),
            ("Donut", dec!(1.50)),
            ("Scone", dec!(2.00)),
            ("Falafel Wrap", dec!(5.50)),
            ("Hummus & Pita", dec!(4.00)),
            ("Chicken Wrap", dec!(6.00)),
        ]
        .into_iter()
        .map(|(name, price)| (name.to_string(), price))
        .collect();

        let locations = vec![
            DeliveryLocation::new("Library", 10),
            DeliveryLocation::new("Academic Success Center", 8),
            DeliveryLocation::new("ITEC Computer Lab", 15),
        ];

        Self::new(categories, prices, locations)
    }

    pub fn category(&self, name: &str) -> Option<&MenuCategory> {
        self.categories.iter().find(|category| category.name == name)
    }

    pub fn price(&self, item: &str) -> Option<Decimal> {
        self.prices.get(item).copied()
    }

    pub fn base_minutes(&self, location: &str) -> Option<u32> {
        self.locations
            .iter()
            .find(|candidate| candidate.name == location)
            .map(|candidate| candidate.base_minutes)
    }

    /// Every item in catalog order, paired with its category
    pub fn items(&self) -> impl Iterator<Item = (&MenuCategory, &str)> {
        self.categories
            .iter()
            .flat_map(|category| category.items.iter().map(move |item| (category, item.as_str())))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::campus()
    }
}

impl AffordableItems {
    /// Matching item names in catalog order
    pub fn names(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.name.as_str()).collect()
    }

    pub fn into_names(self) -> Vec<String> {
        self.items.into_iter().map(|item| item.name).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl fmt::Display for PricedItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ${:.2}", self.name, self.price)
    }
}

impl fmt::Display for MenuSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "=== {} ===", self.category)?;
        for item in &self.items {
            writeln!(f, "{}", item)?;
        }
        Ok(())
    }
}

impl fmt::Display for MenuListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for section in &self.sections {
            write!(f, "{}", section)?;
        }
        Ok(())
    }
}

impl fmt::Display for AffordableItems {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Items priced under ${:.2}:", self.price_limit)?;
        for item in &self.items {
            writeln!(f, "{}", item)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_campus_catalog_lookups() {
        let catalog = Catalog::campus();

        assert_eq!(catalog.categories.len(), 4);
        assert_eq!(catalog.price("Latte"), Some(dec!(4.50)));
        assert_eq!(catalog.price("Espresso"), None);
        assert_eq!(catalog.base_minutes("ITEC Computer Lab"), Some(15));
        assert_eq!(catalog.base_minutes("Gym"), None);

        let breakfast = catalog.category("Breakfast").unwrap();
        assert_eq!(breakfast.items, vec!["Bagel", "Donut", "Scone"]);
        assert!(catalog.category("breakfast").is_none());
    }

    #[test]
    fn test_items_walk_catalog_order() {
        let catalog = Catalog::campus();
        let names: Vec<&str> = catalog.items().map(|(_, item)| item).collect();

        assert_eq!(names.len(), 13);
        assert_eq!(names.first(), Some(&"Monster"));
        assert_eq!(names.last(), Some(&"Chicken Wrap"));
    }

    #[test]
    fn test_priced_item_formats_two_decimals() {
        let item = PricedItem {
            name: "Donut".to_string(),
            price: dec!(1.5),
        };
        assert_eq!(item.to_string(), "Donut: $1.50");
    }

    #[test]
    fn test_menu_listing_display() {
        let listing = MenuListing {
            sections: vec![MenuSection {
                category: "Breakfast".to_string(),
                items: vec![
                    PricedItem {
                        name: "Bagel".to_string(),
                        price: dec!(2.50),
                    },
                    PricedItem {
                        name: "Scone".to_string(),
                        price: dec!(2),
                    },
                ],
            }],
        };

        assert_eq!(
            listing.to_string(),
            "\n=== Breakfast ===\nBagel: $2.50\nScone: $2.00\n"
        );
    }

    #[test]
    fn test_affordable_items_display() {
        let found = AffordableItems {
            price_limit: dec!(2),
            items: vec![PricedItem {
                name: "Donut".to_string(),
                price: dec!(1.50),
            }],
        };

        assert_eq!(
            found.to_string(),
            "Items priced under $2.00:\nDonut: $1.50\n"
        );
        assert_eq!(found.names(), vec!["Donut"]);
        assert_eq!(found.into_names(), vec!["Donut".to_string()]);
    }
}
