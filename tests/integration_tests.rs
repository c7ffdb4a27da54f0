mod common;

use campus_delivery::models::{RatingOutcome, ServiceError};
use campus_delivery::DeliveryService;
use common::{campus_service, food_truck_catalog, ITEMS_UNDER_FIVE};
use rust_decimal_macros::dec;

#[test]
fn test_demo_order_flow() {
    let mut service = campus_service();

    let menu = service.show_menu(Some("Coffee Drinks")).unwrap();
    assert_eq!(
        menu.to_string(),
        "\n=== Coffee Drinks ===\n\
         Latte: $4.50\n\
         Mocha: $4.00\n\
         Peppermint Patty Coffee: $5.00\n\
         Caramel Apple Latte: $5.50\n\
         Iced Ginger Spice Coffee: $4.50\n"
    );

    let summary = service
        .print_order(
            "ITEC Computer Lab",
            &["Latte", "Peppermint Patty Coffee"],
            9,
            true,
            true,
        )
        .unwrap();
    assert_eq!(summary.subtotal, dec!(9.50));
    assert_eq!(summary.total, dec!(10.35));
    assert_eq!(summary.estimated_minutes, 17);
    // Discounted total still exceeds the raw subtotal, so no notice is shown
    assert!(!summary.discount_applied);
    assert_eq!(
        summary.to_string(),
        "\n=== Order Summary ===\n\
         Delivery to: ITEC Computer Lab\n\
         \n\
         Items ordered:\n \
         - Latte: $4.50\n \
         - Peppermint Patty Coffee: $5.00\n\
         \n\
         Subtotal: $9.50\n\
         Total after discount: $10.35\n\
         Estimated delivery time: 17 minutes\n"
    );

    let outcome = service.rate_delivery(4);
    assert_eq!(outcome, RatingOutcome::Accepted { rating: 4 });
    assert!(outcome.to_string().contains("4 stars"));
    assert_eq!(service.ratings(), &[4]);

    let affordable = service.search_items_under_price(dec!(5.00)).unwrap();
    assert_eq!(affordable.names(), ITEMS_UNDER_FIVE.to_vec());
    assert!(affordable
        .to_string()
        .starts_with("Items priced under $5.00:\nMonster: $3.00\n"));
}

#[test]
fn test_discount_notice_when_total_drops_below_subtotal() {
    let service = campus_service();
    let summary = service
        .print_order("Library", &["Chicken Wrap", "Falafel Wrap"], 14, true, false)
        .unwrap();

    assert_eq!(summary.subtotal, dec!(11.50));
    assert_eq!(summary.total, dec!(10.35));
    assert!(summary.discount_applied);
    assert!(summary.to_string().contains("Student discount applied!\n"));
    assert_eq!(summary.estimated_minutes, 10);
}

#[test]
fn test_no_discount_notice_without_student_id() {
    let service = campus_service();
    let summary = service
        .print_order("Library", &["Chicken Wrap", "Falafel Wrap"], 14, false, false)
        .unwrap();

    assert_eq!(summary.total, dec!(11.50));
    assert!(!summary.discount_applied);
}

#[test]
fn test_invalid_rating_leaves_log_unchanged() {
    let mut service = campus_service();
    service.rate_delivery(3);

    let outcome = service.rate_delivery(6);
    assert!(!outcome.is_accepted());
    assert_eq!(
        outcome.message(),
        "Invalid rating. Please provide a rating between 1 and 5 stars."
    );
    assert_eq!(service.ratings(), &[3]);
    assert_eq!(service.average_rating(), Some(dec!(3)));
}

#[test]
fn test_listing_calls_are_idempotent() {
    let service = campus_service();

    assert_eq!(service.show_menu(None), service.show_menu(None));
    assert_eq!(
        service.search_items_under_price(dec!(4.00)),
        service.search_items_under_price(dec!(4.00))
    );
}

#[test]
fn test_unknown_lookups_surface_typed_errors() {
    let service = campus_service();

    assert!(matches!(
        service.show_menu(Some("Dessert")),
        Err(ServiceError::UnknownCategory { .. })
    ));
    assert!(matches!(
        service.calculate_total(&["Pizza"], false, false),
        Err(ServiceError::UnknownItem { .. })
    ));
    assert!(matches!(
        service.estimate_delivery("Parking Lot", 12, false),
        Err(ServiceError::UnknownLocation { .. })
    ));
    assert!(matches!(
        service.print_order("Library", &["Latte"], 30, false, false),
        Err(ServiceError::InvalidHour { hour: 30 })
    ));
}

#[test]
fn test_custom_catalog() {
    let service = DeliveryService::with_catalog(food_truck_catalog()).unwrap();

    let menu = service.show_menu(None).unwrap();
    assert_eq!(
        menu.to_string(),
        "\n=== Mains ===\nTaco: $3.25\nBurrito: $8.75\n\n=== Drinks ===\nHorchata: $2.00\n"
    );

    assert_eq!(
        service.calculate_total(&["Burrito", "Horchata"], true, false),
        Ok(dec!(10.75) * dec!(0.9))
    );
    assert_eq!(service.estimate_delivery("Stadium", 12, true), Ok(27));
    assert!(service.show_menu(Some("Coffee Drinks")).is_err());
}

#[test]
fn test_json_rendering_of_reports() {
    let service = campus_service();
    let affordable = service.search_items_under_price(dec!(1.50)).unwrap();

    let json = serde_json::to_value(&affordable).unwrap();
    assert_eq!(json["items"][0]["name"], "Donut");
    assert_eq!(json["items"].as_array().map(Vec::len), Some(1));
}
