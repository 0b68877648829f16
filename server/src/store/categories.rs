use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{IdSequence, RequestedId};
use crate::{error::AppError, validate::Field};

const NOT_FOUND: AppError = AppError::NotFound("Category not found");
const NAME_REQUIRED: &str = "Name is required";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    pub name: Value,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CategoryPayload {
    pub name: Field<Value>,
}

#[derive(Debug, Clone)]
pub struct CategoryStore {
    categories: Vec<Category>,
    ids: IdSequence,
}

impl Default for CategoryStore {
    fn default() -> Self {
        Self::seeded()
    }
}

impl CategoryStore {
    pub fn seeded() -> Self {
        Self {
            categories: vec![
                Category {
                    id: 1,
                    name: Value::from("Fruits"),
                },
                Category {
                    id: 2,
                    name: Value::from("Vegetables"),
                },
            ],
            ids: IdSequence::starting_at(3),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::seeded();
    }

    pub fn list(&self) -> &[Category] {
        &self.categories
    }

    pub fn get(&self, id: RequestedId) -> Result<&Category, AppError> {
        self.categories
            .iter()
            .find(|category| id.matches(category.id))
            .ok_or(NOT_FOUND)
    }

    pub fn create(&mut self, payload: CategoryPayload) -> Result<Category, AppError> {
        let name = payload.name.required_truthy(NAME_REQUIRED)?;
        let category = Category {
            id: self.ids.next_id(),
            name,
        };
        self.categories.push(category.clone());
        Ok(category)
    }

    pub fn update(
        &mut self,
        id: RequestedId,
        payload: CategoryPayload,
    ) -> Result<Category, AppError> {
        let category = self
            .categories
            .iter_mut()
            .find(|category| id.matches(category.id))
            .ok_or(NOT_FOUND)?;

        if let Some(name) = payload.name.given() {
            category.name = name;
        }
        Ok(category.clone())
    }

    pub fn delete(&mut self, id: RequestedId) -> Result<Category, AppError> {
        let index = self
            .categories
            .iter()
            .position(|category| id.matches(category.id))
            .ok_or(NOT_FOUND)?;
        Ok(self.categories.remove(index))
    }
}
