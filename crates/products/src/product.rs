use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, Entity};

/// Product identifier: the decimal string issued by the store's sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Ordering key that sorts sequence-issued ids numerically ("2" before "10").
    pub(crate) fn sort_key(&self) -> (usize, &str) {
        (self.0.len(), self.0.as_str())
    }
}

impl From<u64> for ProductId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Client-supplied product fields, as decoded from a create/update payload.
///
/// `name` and `price` are optional at decode time so that their absence is
/// reported by [`ProductInput::validate`] rather than by the decoder. Any `id`
/// or timestamps in the payload are ignored.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub quantity: Option<u32>,
    #[serde(default)]
    pub category: Option<String>,
}

impl ProductInput {
    /// Convenience constructor for the two required fields.
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: Some(name.into()),
            price: Some(price),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Check the input without side effects.
    pub fn validate(&self) -> DomainResult<()> {
        self.checked().map(|_| ())
    }

    /// The required fields, once they pass validation.
    fn checked(&self) -> DomainResult<(&str, f64)> {
        let name = match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => return Err(DomainError::validation("name is required")),
        };

        match self.price {
            None => Err(DomainError::validation("price is required")),
            Some(price) if price.is_nan() || price < 0.0 => {
                Err(DomainError::validation("price cannot be negative"))
            }
            Some(price) => Ok((name, price)),
        }
    }
}

/// A catalog product as stored and returned by the service.
///
/// Only the service constructs or revises products, so the invariants below hold for
/// every value observable outside this crate:
/// - `name` is non-blank and `price` is non-negative,
/// - `created_at <= updated_at`,
/// - `id` and `created_at` never change after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    id: ProductId,
    name: String,
    description: Option<String>,
    price: f64,
    quantity: u32,
    category: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Product {
    /// Build a brand-new product from validated input. Both timestamps are `now`.
    pub(crate) fn create(
        id: ProductId,
        input: ProductInput,
        now: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let (name, price) = input.checked()?;
        let name = name.to_string();
        Ok(Self {
            id,
            name,
            description: input.description,
            price,
            quantity: input.quantity.unwrap_or_default(),
            category: input.category,
            created_at: now,
            updated_at: now,
        })
    }

    /// Replace all client-supplied fields, keeping `id` and `created_at`.
    pub(crate) fn revise(&self, input: &ProductInput, now: DateTime<Utc>) -> DomainResult<Self> {
        let (name, price) = input.checked()?;
        Ok(Self {
            id: self.id.clone(),
            name: name.to_string(),
            description: input.description.clone(),
            price,
            quantity: input.quantity.unwrap_or_default(),
            category: input.category.clone(),
            created_at: self.created_at,
            updated_at: now.max(self.created_at),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Case-insensitive exact match on category; products without one never match.
    pub fn in_category(&self, category: &str) -> bool {
        self.category
            .as_deref()
            .is_some_and(|c| c.to_lowercase() == category.to_lowercase())
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn now() -> DateTime<Utc> {
        Utc::now()
    }

    #[test]
    fn validate_accepts_minimal_input() {
        assert!(ProductInput::new("Lamp", 0.0).validate().is_ok());
    }

    #[test]
    fn validate_rejects_missing_or_blank_name() {
        let missing = ProductInput {
            price: Some(1.0),
            ..ProductInput::default()
        };
        assert_eq!(
            missing.validate(),
            Err(DomainError::validation("name is required"))
        );

        let blank = ProductInput::new("   ", 1.0);
        assert_eq!(
            blank.validate(),
            Err(DomainError::validation("name is required"))
        );
    }

    #[test]
    fn validate_rejects_negative_or_missing_price() {
        let negative = ProductInput::new("Lamp", -0.01);
        assert!(negative.validate().unwrap_err().is_validation());

        let missing = ProductInput {
            name: Some("Lamp".into()),
            ..ProductInput::default()
        };
        assert_eq!(
            missing.validate(),
            Err(DomainError::validation("price is required"))
        );
    }

    #[test]
    fn create_and_revise_report_the_validation_reason() {
        let err = Product::create(ProductId::from(1), ProductInput::new(" ", 1.0), now())
            .unwrap_err();
        assert_eq!(err, DomainError::validation("name is required"));

        let p = Product::create(ProductId::from(1), ProductInput::new("Lamp", 1.0), now())
            .unwrap();
        let no_price = ProductInput {
            name: Some("Lamp".into()),
            ..ProductInput::default()
        };
        assert_eq!(
            p.revise(&no_price, now()),
            Err(DomainError::validation("price is required"))
        );
    }

    #[test]
    fn create_defaults_quantity_and_stamps_equal_timestamps() {
        let t = now();
        let p = Product::create(ProductId::from(1), ProductInput::new("Lamp", 12.5), t).unwrap();
        assert_eq!(p.id().as_str(), "1");
        assert_eq!(p.quantity(), 0);
        assert_eq!(p.category(), None);
        assert_eq!(p.created_at(), t);
        assert_eq!(p.updated_at(), t);
    }

    #[test]
    fn revise_keeps_identity_and_creation_time() {
        let t0 = now();
        let original = Product::create(
            ProductId::from(7),
            ProductInput::new("Lamp", 12.5).with_category("Lighting"),
            t0,
        )
        .unwrap();

        let t1 = t0 + Duration::seconds(5);
        let revised = original
            .revise(&ProductInput::new("Desk Lamp", 15.0).with_quantity(3), t1)
            .unwrap();

        assert!(revised.has_id(original.id()));
        assert_eq!(revised.created_at(), t0);
        assert_eq!(revised.updated_at(), t1);
        assert_eq!(revised.name(), "Desk Lamp");
        assert_eq!(revised.quantity(), 3);
        // Full replacement: fields absent from the new input are cleared.
        assert_eq!(revised.category(), None);
    }

    #[test]
    fn revise_never_moves_updated_at_before_created_at() {
        let t0 = now();
        let original =
            Product::create(ProductId::from(1), ProductInput::new("Lamp", 1.0), t0).unwrap();
        let revised = original
            .revise(&ProductInput::new("Lamp", 2.0), t0 - Duration::hours(1))
            .unwrap();
        assert_eq!(revised.updated_at(), t0);
    }

    #[test]
    fn in_category_is_case_insensitive_and_exact() {
        let p = Product::create(
            ProductId::from(1),
            ProductInput::new("Mouse", 29.99).with_category("Electronics"),
            now(),
        )
        .unwrap();
        assert!(p.in_category("electronics"));
        assert!(p.in_category("ELECTRONICS"));
        assert!(!p.in_category("Electro"));

        let uncategorized =
            Product::create(ProductId::from(2), ProductInput::new("Thing", 1.0), now()).unwrap();
        assert!(!uncategorized.in_category(""));
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let p = Product::create(ProductId::from(3), ProductInput::new("Chair", 299.99), now())
            .unwrap();
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["id"], "3");
        assert_eq!(json["price"], 299.99);
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert!(json["description"].is_null());
    }

    #[test]
    fn input_ignores_payload_identity_fields() {
        let input: ProductInput = serde_json::from_value(serde_json::json!({
            "id": "99",
            "name": "Keyboard",
            "price": 89.99,
            "createdAt": "2020-01-01T00:00:00Z"
        }))
        .unwrap();
        assert_eq!(input, ProductInput::new("Keyboard", 89.99));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: whitespace-only names never validate.
            #[test]
            fn blank_names_are_rejected(name in "[ \t\n]{0,10}", price in 0.0f64..10_000.0) {
                prop_assert!(ProductInput::new(name, price).validate().is_err());
            }

            /// Property: negative prices never validate.
            #[test]
            fn negative_prices_are_rejected(
                name in "[A-Za-z][A-Za-z0-9 ]{0,30}",
                price in -10_000.0f64..-0.0001,
            ) {
                prop_assert!(ProductInput::new(name, price).validate().is_err());
            }

            /// Property: any non-blank name with a non-negative price validates.
            #[test]
            fn well_formed_inputs_are_accepted(
                name in "[A-Za-z][A-Za-z0-9 ]{0,30}",
                price in 0.0f64..10_000.0,
            ) {
                prop_assert!(ProductInput::new(name, price).validate().is_ok());
            }
        }
    }
}
