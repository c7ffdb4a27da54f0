use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::{debug, info, instrument, warn};

use crate::models::{
    is_valid_hour, is_valid_rating, AffordableItems, Catalog, MenuListing, MenuSection,
    OrderSummary, PricedItem, RatingOutcome, ServiceError, ServiceResult, Validate,
};

/// Flat fee added to an order when priority delivery is requested
pub const PRIORITY_SURCHARGE: Decimal = dec!(2.00);
/// Totals strictly above this amount (after surcharge) qualify for the student discount
pub const STUDENT_DISCOUNT_THRESHOLD: Decimal = dec!(10.00);
/// Multiplier applied to a qualifying total
pub const STUDENT_DISCOUNT_RATE: Decimal = dec!(0.9);
/// Minutes taken off the base time for priority delivery
pub const PRIORITY_TIME_REDUCTION: i32 = 3;
/// Minutes added during peak hours
pub const PEAK_HOUR_DELAY: i32 = 5;
/// Inclusive hour windows during which deliveries run slower
pub const PEAK_WINDOWS: [(u32, u32); 2] = [(9, 10), (11, 13)];

/// True when `hour` falls inside one of the peak windows
pub fn is_peak_hour(hour: u32) -> bool {
    PEAK_WINDOWS
        .iter()
        .any(|(start, end)| (*start..=*end).contains(&hour))
}

/// Service for browsing the menu, pricing orders, estimating delivery and
/// collecting ratings
pub struct DeliveryService {
    catalog: Catalog,
    ratings: Vec<u8>,
}

impl DeliveryService {
    /// Create a service over the campus catalog
    pub fn new() -> Self {
        Self {
            catalog: Catalog::campus(),
            ratings: Vec::new(),
        }
    }

    /// Create a service over a caller-supplied catalog, validating it first
    pub fn with_catalog(catalog: Catalog) -> ServiceResult<Self> {
        catalog.validate()?;

        info!(
            categories = catalog.categories.len(),
            locations = catalog.locations.len(),
            "Catalog loaded"
        );

        Ok(Self {
            catalog,
            ratings: Vec::new(),
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Ratings accepted so far, in submission order
    pub fn ratings(&self) -> &[u8] {
        &self.ratings
    }

    /// Mean of accepted ratings rounded to two places, `None` before the first rating
    pub fn average_rating(&self) -> Option<Decimal> {
        if self.ratings.is_empty() {
            return None;
        }

        let sum: Decimal = self.ratings.iter().map(|rating| Decimal::from(*rating)).sum();
        Some((sum / Decimal::from(self.ratings.len())).round_dp(2))
    }

    /// Look up the price of a single item
    pub fn price_of(&self, item: &str) -> ServiceResult<Decimal> {
        self.catalog
            .price(item)
            .ok_or_else(|| ServiceError::UnknownItem {
                item: item.to_string(),
            })
    }

    /// Look up the base delivery time of a location
    pub fn base_delivery_minutes(&self, location: &str) -> ServiceResult<u32> {
        self.catalog
            .base_minutes(location)
            .ok_or_else(|| ServiceError::UnknownLocation {
                location: location.to_string(),
            })
    }

    /// List one category, or the whole menu when `category` is `None`
    #[instrument(skip(self))]
    pub fn show_menu(&self, category: Option<&str>) -> ServiceResult<MenuListing> {
        let sections = match category {
            Some(name) => {
                let category = self.catalog.category(name).ok_or_else(|| {
                    warn!("Category not found");
                    ServiceError::UnknownCategory {
                        category: name.to_string(),
                    }
                })?;
                vec![self.menu_section(&category.name, &category.items)?]
            }
            None => self
                .catalog
                .categories
                .iter()
                .map(|category| self.menu_section(&category.name, &category.items))
                .collect::<ServiceResult<Vec<_>>>()?,
        };

        debug!(sections = sections.len(), "Menu listed");
        Ok(MenuListing { sections })
    }

    /// Price an order.
    ///
    /// The priority surcharge is added before the discount check, so the
    /// student discount threshold is compared against the post-surcharge total.
    #[instrument(skip(self, items), fields(item_count = items.len()))]
    pub fn calculate_total<S: AsRef<str>>(
        &self,
        items: &[S],
        has_student_id: bool,
        priority_delivery: bool,
    ) -> ServiceResult<Decimal> {
        let mut total = self.subtotal(items)?;

        if priority_delivery {
            total = total
                .checked_add(PRIORITY_SURCHARGE)
                .ok_or_else(|| overflow("order total"))?;
        }

        if has_student_id && total > STUDENT_DISCOUNT_THRESHOLD {
            total = total
                .checked_mul(STUDENT_DISCOUNT_RATE)
                .ok_or_else(|| overflow("order total"))?;
            debug!("Student discount applied");
        }

        debug!(%total, "Order total calculated");
        Ok(total)
    }

    /// Estimate delivery minutes for a location at the given hour.
    ///
    /// The result is not clamped and may be zero or negative for very short
    /// base times with priority delivery outside peak hours.
    #[instrument(skip(self))]
    pub fn estimate_delivery(
        &self,
        location: &str,
        current_hour: u32,
        priority_delivery: bool,
    ) -> ServiceResult<i32> {
        if !is_valid_hour(current_hour) {
            return Err(ServiceError::InvalidHour { hour: current_hour });
        }

        let base_minutes = self.base_delivery_minutes(location)?;
        let mut minutes =
            i32::try_from(base_minutes).map_err(|_| overflow("delivery estimate"))?;

        if priority_delivery {
            minutes = minutes
                .checked_sub(PRIORITY_TIME_REDUCTION)
                .ok_or_else(|| overflow("delivery estimate"))?;
        }

        if is_peak_hour(current_hour) {
            minutes = minutes
                .checked_add(PEAK_HOUR_DELAY)
                .ok_or_else(|| overflow("delivery estimate"))?;
        }

        debug!(minutes, "Delivery time estimated");
        Ok(minutes)
    }

    /// Build the order summary: itemized prices, subtotal, total and delivery estimate
    #[instrument(skip(self, items), fields(item_count = items.len()))]
    pub fn print_order<S: AsRef<str>>(
        &self,
        location: &str,
        items: &[S],
        current_hour: u32,
        has_student_id: bool,
        priority_delivery: bool,
    ) -> ServiceResult<OrderSummary> {
        let lines = items
            .iter()
            .map(|item| self.priced_item(item.as_ref()))
            .collect::<ServiceResult<Vec<_>>>()?;

        let total = self.calculate_total(items, has_student_id, priority_delivery)?;
        let estimated_minutes = self.estimate_delivery(location, current_hour, priority_delivery)?;
        let subtotal = checked_sum(lines.iter().map(|line| line.price))?;

        info!(%subtotal, %total, estimated_minutes, "Order summary prepared");

        Ok(OrderSummary {
            location: location.to_string(),
            items: lines,
            subtotal,
            total,
            discount_applied: has_student_id && total < subtotal,
            estimated_minutes,
        })
    }

    /// Record a delivery rating. Values outside 1-5 are rejected without touching the log.
    #[instrument(skip(self))]
    pub fn rate_delivery(&mut self, rating: i32) -> RatingOutcome {
        match u8::try_from(rating) {
            Ok(accepted) if is_valid_rating(rating) => {
                self.ratings.push(accepted);
                info!(total_ratings = self.ratings.len(), "Rating recorded");
                RatingOutcome::Accepted { rating: accepted }
            }
            _ => {
                warn!("Rating out of range, ignored");
                RatingOutcome::Rejected { rating }
            }
        }
    }

    /// Every item priced at or under `price_limit`, in catalog order
    #[instrument(skip(self))]
    pub fn search_items_under_price(&self, price_limit: Decimal) -> ServiceResult<AffordableItems> {
        let mut items = Vec::new();

        for (_, item) in self.catalog.items() {
            let priced = self.priced_item(item)?;
            if priced.price <= price_limit {
                items.push(priced);
            }
        }

        debug!(matches = items.len(), "Price search completed");
        Ok(AffordableItems { price_limit, items })
    }

    fn subtotal<S: AsRef<str>>(&self, items: &[S]) -> ServiceResult<Decimal> {
        let prices = items
            .iter()
            .map(|item| self.price_of(item.as_ref()))
            .collect::<ServiceResult<Vec<_>>>()?;
        checked_sum(prices)
    }

    fn priced_item(&self, item: &str) -> ServiceResult<PricedItem> {
        Ok(PricedItem {
            name: item.to_string(),
            price: self.price_of(item)?,
        })
    }

    fn menu_section(&self, category: &str, items: &[String]) -> ServiceResult<MenuSection> {
        let items = items
            .iter()
            .map(|item| self.priced_item(item))
            .collect::<ServiceResult<Vec<_>>>()?;

        Ok(MenuSection {
            category: category.to_string(),
            items,
        })
    }
}

fn checked_sum(prices: impl IntoIterator<Item = Decimal>) -> ServiceResult<Decimal> {
    prices
        .into_iter()
        .try_fold(Decimal::ZERO, |total, price| total.checked_add(price))
        .ok_or_else(|| overflow("order subtotal"))
}

fn overflow(operation: &str) -> ServiceError {
    ServiceError::ArithmeticOverflow {
        operation: operation.to_string(),
    }
}

impl Default for DeliveryService {
    fn default() -> Self {
        Self::new()
    }
}
