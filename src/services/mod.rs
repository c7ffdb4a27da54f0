// Services module - business logic layer

pub mod delivery_service;

pub use delivery_service::{is_peak_hour, DeliveryService};
