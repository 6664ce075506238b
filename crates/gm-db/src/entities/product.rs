use crate::entity::{TenantEntity, datetime_from_unix};
use crate::repository::TenantScopedRepository;
use crate::service::TenantScopedService;
use crate::Result as DbErrorResult;

use gm_core::{BusinessId, Product, ProductType, TenantContext};

use std::str::FromStr;

use sqlx::query::Query;
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{Row, Sqlite};

pub type ProductRepository = TenantScopedRepository<Product>;
pub type ProductService = TenantScopedService<Product>;

impl TenantEntity for Product {
    const ENTITY: &'static str = "product";
    const TABLE: &'static str = "products";
    const ID_COLUMN: &'static str = "product_id";
    const COLUMNS: &'static [&'static str] = &[
        "product_id",
        "business_id",
        "product_type",
        "name",
        "price",
        "description",
        "valid_days",
        "usage_count",
        "is_active",
        "created_at",
        "updated_at",
    ];
    const UPDATE_COLUMNS: &'static [&'static str] = &[
        "product_type",
        "name",
        "price",
        "description",
        "valid_days",
        "usage_count",
        "is_active",
        "updated_at",
    ];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn business_id(&self) -> Option<BusinessId> {
        self.business_id
    }

    fn set_business_id(&mut self, business_id: BusinessId) {
        self.business_id = Some(business_id);
    }

    fn from_row(row: &SqliteRow) -> DbErrorResult<Self> {
        let business_id: i64 = row.try_get("business_id")?;
        let product_type: String = row.try_get("product_type")?;
        let is_active: i64 = row.try_get("is_active")?;

        Ok(Product {
            id: Some(row.try_get("product_id")?),
            business_id: Some(BusinessId::new(business_id)?),
            product_type: ProductType::from_str(&product_type)?,
            name: row.try_get("name")?,
            price: row.try_get("price")?,
            description: row.try_get("description")?,
            valid_days: row.try_get("valid_days")?,
            usage_count: row.try_get("usage_count")?,
            is_active: is_active != 0,
            created_at: datetime_from_unix("products.created_at", row.try_get("created_at")?)?,
            updated_at: datetime_from_unix("products.updated_at", row.try_get("updated_at")?)?,
        })
    }

    fn bind_insert<'q>(
        &'q self,
        query: Query<'q, Sqlite, SqliteArguments<'q>>,
    ) -> Query<'q, Sqlite, SqliteArguments<'q>> {
        query
            .bind(self.product_type.as_str())
            .bind(self.name.as_str())
            .bind(self.price)
            .bind(self.description.as_deref())
            .bind(self.valid_days)
            .bind(self.usage_count)
            .bind(i64::from(self.is_active))
            .bind(self.created_at.timestamp())
            .bind(self.updated_at.timestamp())
    }

    fn bind_update<'q>(
        &'q self,
        query: Query<'q, Sqlite, SqliteArguments<'q>>,
    ) -> Query<'q, Sqlite, SqliteArguments<'q>> {
        query
            .bind(self.product_type.as_str())
            .bind(self.name.as_str())
            .bind(self.price)
            .bind(self.description.as_deref())
            .bind(self.valid_days)
            .bind(self.usage_count)
            .bind(i64::from(self.is_active))
            .bind(self.updated_at.timestamp())
    }
}

impl ProductRepository {
    /// Products currently on sale for the active business.
    pub async fn find_active(&self) -> DbErrorResult<Vec<Product>> {
        let business = TenantContext::current()?;
        let sql = format!(
            "SELECT {} FROM products WHERE business_id = ? AND is_active = 1 ORDER BY product_id",
            Product::COLUMNS.join(", ")
        );

        let rows = sqlx::query(&sql)
            .bind(business.get())
            .fetch_all(self.pool())
            .await?;

        rows.iter().map(Product::from_row).collect()
    }
}
