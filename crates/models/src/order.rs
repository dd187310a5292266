use sea_orm::{entity::prelude::*, Set};
use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::ModelError;
use crate::validation::{is_email, ObjectReader, ValidationErrors};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub email: String,
    pub product: Uuid,
    pub quantity: i32,
    #[sea_orm(column_type = "Double")]
    pub total_price: f64,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Order body after schema validation. `product` is still the raw id string
/// sent by the client; see [`NewOrder::into_draft`].
#[derive(Clone, Debug, PartialEq)]
pub struct NewOrder {
    pub email: String,
    pub product: String,
    pub quantity: i32,
    pub total_price: f64,
}

/// Order with its product converted to a database reference.
/// This is the only shape the persistence layer accepts.
#[derive(Clone, Debug, PartialEq)]
pub struct OrderDraft {
    pub email: String,
    pub product: Uuid,
    pub quantity: i32,
    pub total_price: f64,
}

/// Convert a client supplied id string into a bike reference.
pub fn parse_reference(raw: &str) -> Result<Uuid, ModelError> {
    Uuid::parse_str(raw.trim()).map_err(|_| {
        ModelError::InvalidReference(format!("'{}' is not a valid bike id", raw))
    })
}

impl NewOrder {
    pub fn parse(value: &Value) -> Result<Self, ValidationErrors> {
        let mut r = ObjectReader::new(value);
        let email = match r.string("email", "Email is required") {
            Some(e) if is_email(&e) => Some(e),
            Some(_) => {
                r.reject("email", "Invalid email");
                None
            }
            None => None,
        };
        let product = r.string("product", "Product is required");
        let quantity = r.integer("quantity", |q| q >= 1, "Quantity must be at least 1");
        let total_price = r.number("totalPrice", |p| p > 0.0, "Total price must be a positive number");

        r.finish(|| {
            Some(NewOrder {
                email: email?,
                product: product?,
                quantity: quantity?,
                total_price: total_price?,
            })
        })
    }

    pub fn into_draft(self) -> Result<OrderDraft, ModelError> {
        let product = parse_reference(&self.product)?;
        Ok(OrderDraft {
            email: self.email,
            product,
            quantity: self.quantity,
            total_price: self.total_price,
        })
    }
}

impl OrderDraft {
    pub fn into_model(self) -> Model {
        let now: DateTimeWithTimeZone = Utc::now().into();
        Model {
            id: Uuid::new_v4(),
            email: self.email,
            product: self.product,
            quantity: self.quantity,
            total_price: self.total_price,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn into_active_model(self) -> ActiveModel {
        let m = self.into_model();
        ActiveModel {
            id: Set(m.id),
            email: Set(m.email),
            product: Set(m.product),
            quantity: Set(m.quantity),
            total_price: Set(m.total_price),
            created_at: Set(m.created_at),
            updated_at: Set(m.updated_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_then_convert_reference() {
        let id = Uuid::new_v4();
        let order = NewOrder::parse(&json!({
            "email": "rider@example.com",
            "product": id.to_string(),
            "quantity": 2,
            "totalPrice": 2599.0
        }))
        .unwrap();
        assert_eq!(order.product, id.to_string());
        let draft = order.into_draft().unwrap();
        assert_eq!(draft.product, id);
    }

    #[test]
    fn parse_collects_all_violations() {
        let err = NewOrder::parse(&json!({
            "email": "not-an-email",
            "quantity": 0,
            "totalPrice": "lots"
        }))
        .unwrap_err();
        assert!(err.has_field("email"));
        assert!(err.has_field("product"));
        assert!(err.has_field("quantity"));
        assert!(err.has_field("totalPrice"));
    }

    #[test]
    fn malformed_product_id_is_not_a_reference() {
        let order = NewOrder::parse(&json!({
            "email": "rider@example.com",
            "product": "64f0c0ffee",
            "quantity": 1,
            "totalPrice": 10.0
        }))
        .unwrap();
        let err = order.into_draft().unwrap_err();
        assert!(matches!(err, ModelError::InvalidReference(_)));
    }
}
