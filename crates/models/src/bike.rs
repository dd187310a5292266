use sea_orm::{entity::prelude::*, Set};
use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::validation::{ObjectReader, ValidationErrors};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum Category {
    #[sea_orm(string_value = "Mountain")]
    Mountain,
    #[sea_orm(string_value = "Road")]
    Road,
    #[sea_orm(string_value = "Hybrid")]
    Hybrid,
    #[sea_orm(string_value = "Electric")]
    Electric,
}

impl Category {
    pub const ALL: [Category; 4] = [Category::Mountain, Category::Road, Category::Hybrid, Category::Electric];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Mountain => "Mountain",
            Category::Road => "Road",
            Category::Hybrid => "Hybrid",
            Category::Electric => "Electric",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bikes")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub brand: String,
    #[sea_orm(column_type = "Double")]
    pub price: f64,
    pub category: Category,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub quantity: i32,
    pub in_stock: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Bike fields matched by the catalog search term.
pub const SEARCHABLE: [Column; 3] = [Column::Name, Column::Brand, Column::Category];

impl Model {
    /// Case-insensitive substring match of `needle` against the searchable fields.
    /// `needle` must already be lowercased.
    pub fn matches_search(&self, needle: &str) -> bool {
        [self.name.as_str(), self.brand.as_str(), self.category.as_str()]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// A validated bike ready to be persisted.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBike {
    pub name: String,
    pub brand: String,
    pub price: f64,
    pub category: Category,
    pub description: String,
    pub quantity: i32,
    pub in_stock: bool,
}

impl NewBike {
    /// Validate an untyped request body against the bike schema.
    ///
    /// `inStock` is optional and follows `quantity` when omitted.
    pub fn parse(value: &Value) -> Result<Self, ValidationErrors> {
        let mut r = ObjectReader::new(value);
        let name = r.string("name", "Name is required");
        let brand = r.string("brand", "Brand is required");
        let price = r.number("price", |p| p > 0.0, "Price must be a positive number");
        let category = match r.string("category", "Category is required") {
            Some(raw) => match Category::parse(&raw) {
                Some(c) => Some(c),
                None => {
                    r.reject(
                        "category",
                        format!(
                            "Invalid enum value. Expected 'Mountain' | 'Road' | 'Hybrid' | 'Electric', received '{}'",
                            raw
                        ),
                    );
                    None
                }
            },
            None => None,
        };
        let description = r.string("description", "Description is required");
        let quantity = r.integer("quantity", |q| q >= 0, "Quantity must be a non-negative integer");
        let in_stock = r.optional_bool("inStock");

        r.finish(|| {
            let quantity = quantity?;
            Some(NewBike {
                name: name?,
                brand: brand?,
                price: price?,
                category: category?,
                description: description?,
                quantity,
                in_stock: in_stock.unwrap_or(quantity > 0),
            })
        })
    }

    pub fn into_model(self) -> Model {
        let now: DateTimeWithTimeZone = Utc::now().into();
        Model {
            id: Uuid::new_v4(),
            name: self.name,
            brand: self.brand,
            price: self.price,
            category: self.category,
            description: self.description,
            quantity: self.quantity,
            in_stock: self.in_stock,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn into_active_model(self) -> ActiveModel {
        let m = self.into_model();
        ActiveModel {
            id: Set(m.id),
            name: Set(m.name),
            brand: Set(m.brand),
            price: Set(m.price),
            category: Set(m.category),
            description: Set(m.description),
            quantity: Set(m.quantity),
            in_stock: Set(m.in_stock),
            created_at: Set(m.created_at),
            updated_at: Set(m.updated_at),
        }
    }
}

/// Partial update body. Fields are applied as given, without schema checks;
/// unknown keys are ignored.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BikePatch {
    pub name: Option<String>,
    pub brand: Option<String>,
    pub price: Option<f64>,
    pub category: Option<Category>,
    pub description: Option<String>,
    pub quantity: Option<i32>,
    pub in_stock: Option<bool>,
}

impl BikePatch {
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    pub fn apply_to_active(self, am: &mut ActiveModel) {
        if let Some(v) = self.name { am.name = Set(v); }
        if let Some(v) = self.brand { am.brand = Set(v); }
        if let Some(v) = self.price { am.price = Set(v); }
        if let Some(v) = self.category { am.category = Set(v); }
        if let Some(v) = self.description { am.description = Set(v); }
        if let Some(v) = self.quantity { am.quantity = Set(v); }
        if let Some(v) = self.in_stock { am.in_stock = Set(v); }
        am.updated_at = Set(Utc::now().into());
    }

    pub fn apply_to_model(self, m: &mut Model) {
        if let Some(v) = self.name { m.name = v; }
        if let Some(v) = self.brand { m.brand = v; }
        if let Some(v) = self.price { m.price = v; }
        if let Some(v) = self.category { m.category = v; }
        if let Some(v) = self.description { m.description = v; }
        if let Some(v) = self.quantity { m.quantity = v; }
        if let Some(v) = self.in_stock { m.in_stock = v; }
        m.updated_at = Utc::now().into();
    }
}
