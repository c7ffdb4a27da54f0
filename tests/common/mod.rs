#![allow(dead_code)]

use std::collections::HashMap;

use campus_delivery::models::{Catalog, DeliveryLocation, MenuCategory};
use campus_delivery::DeliveryService;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Items on the campus menu priced at or under $5.00, in menu order
pub const ITEMS_UNDER_FIVE: [&str; 10] = [
    "Monster",
    "Rockstar",
    "Latte",
    "Mocha",
    "Peppermint Patty Coffee",
    "Iced Ginger Spice Coffee",
    "Bagel",
    "Donut",
    "Scone",
    "Hummus & Pita",
];

pub fn campus_service() -> DeliveryService {
    DeliveryService::new()
}

/// Every item name on the campus menu, in menu order
pub fn campus_items() -> Vec<String> {
    Catalog::campus()
        .items()
        .map(|(_, item)| item.to_string())
        .collect()
}

/// A small two-category catalog used to check the service is not tied to campus data
pub fn food_truck_catalog() -> Catalog {
    let prices: HashMap<String, Decimal> = [
        ("Taco", dec!(3.25)),
        ("Burrito", dec!(8.75)),
        ("Horchata", dec!(2.00)),
    ]
    .into_iter()
    .map(|(name, price)| (name.to_string(), price))
    .collect();

    Catalog::new(
        vec![
            MenuCategory::new("Mains", &["Taco", "Burrito"]),
            MenuCategory::new("Drinks", &["Horchata"]),
        ],
        prices,
        vec![
            DeliveryLocation::new("Dorm A", 12),
            DeliveryLocation::new("Stadium", 25),
        ],
    )
}
