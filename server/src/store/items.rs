use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use super::{IdSequence, RequestedId};
use crate::{error::AppError, validate::Field};

const NOT_FOUND: AppError = AppError::NotFound("Item not found");
const CREATE_INVALID: &str = "Name and numeric price are required";
const PRICE_INVALID: &str = "Price must be a number if provided";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u64,
    pub name: Value,
    pub price: Number,
}

/// Body of `POST /items` and `PUT /items/{id}`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ItemPayload {
    pub name: Field<Value>,
    pub price: Field<Number>,
}

#[derive(Debug, Clone)]
pub struct ItemStore {
    items: Vec<Item>,
    ids: IdSequence,
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::seeded()
    }
}

impl ItemStore {
    pub fn seeded() -> Self {
        Self {
            items: vec![
                Item {
                    id: 1,
                    name: Value::from("Apple"),
                    price: Number::from(100),
                },
                Item {
                    id: 2,
                    name: Value::from("Banana"),
                    price: Number::from(200),
                },
            ],
            ids: IdSequence::starting_at(3),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::seeded();
    }

    pub fn list(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: RequestedId) -> Result<&Item, AppError> {
        self.items
            .iter()
            .find(|item| id.matches(item.id))
            .ok_or(NOT_FOUND)
    }

    pub fn create(&mut self, payload: ItemPayload) -> Result<Item, AppError> {
        let name = payload.name.required_truthy(CREATE_INVALID)?;
        let price = payload.price.required(CREATE_INVALID)?;

        let item = Item {
            id: self.ids.next_id(),
            name,
            price,
        };
        self.items.push(item.clone());
        Ok(item)
    }

    /// Overwrites only the fields present in `payload`. `name` is taken as
    /// sent; nothing is written unless `price`, when present, is a number.
    pub fn update(&mut self, id: RequestedId, payload: ItemPayload) -> Result<Item, AppError> {
        let item = self
            .items
            .iter_mut()
            .find(|item| id.matches(item.id))
            .ok_or(NOT_FOUND)?;

        let name = payload.name.given();
        let price = payload.price.optional(PRICE_INVALID)?;

        if let Some(name) = name {
            item.name = name;
        }
        if let Some(price) = price {
            item.price = price;
        }
        Ok(item.clone())
    }

    pub fn delete(&mut self, id: RequestedId) -> Result<Item, AppError> {
        let index = self
            .items
            .iter()
            .position(|item| id.matches(item.id))
            .ok_or(NOT_FOUND)?;
        Ok(self.items.remove(index))
    }
}
