use crate::{BusinessId, ProductType};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A sellable product of one business (membership plan, PT package, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Option<i64>,
    pub business_id: Option<BusinessId>,
    pub product_type: ProductType,
    pub name: String,
    /// Price in the smallest currency unit
    pub price: i64,
    pub description: Option<String>,
    /// Validity period in days, when the product is time-based
    pub valid_days: Option<i32>,
    /// Number of uses included, when the product is count-based
    pub usage_count: Option<i32>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    pub fn new(product_type: ProductType, name: impl Into<String>, price: i64) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            business_id: None,
            product_type,
            name: name.into(),
            price,
            description: None,
            valid_days: None,
            usage_count: None,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }
}
