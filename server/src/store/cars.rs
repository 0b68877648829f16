//! Cars and the tasks nested under them.
//!
//! Both collections live in one [`Garage`] so a car delete and the removal of
//! its tasks happen in the same `&mut self` call. Tasks carry globally unique
//! ids but are only reachable through the car they were created under; every
//! task operation runs the same pipeline:
//!
//! 1. resolve the parent car (`Car not found`)
//! 2. resolve the task and check `task.car_id` (`Task not found`)
//! 3. validate the payload (`400`)
//! 4. mutate
//!
//! Only `year` and `completed` are type-checked. Text fields are kept as the
//! client sent them, `null` included.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use super::{IdSequence, RequestedId};
use crate::{error::AppError, validate::Field};

const CAR_NOT_FOUND: AppError = AppError::NotFound("Car not found");
const TASK_NOT_FOUND: AppError = AppError::NotFound("Task not found");

const PLATE_REQUIRED: &str = "plateNumber is required";
const YEAR_INVALID: &str = "year must be a number if provided";

const TITLE_REQUIRED: &str = "title is required";
const COMPLETED_INVALID: &str = "completed must be a boolean if provided";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub id: u64,
    pub plate_number: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<Number>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: u64,
    pub car_id: u64,
    pub title: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Value>,
    pub completed: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CarPayload {
    pub plate_number: Field<Value>,
    pub brand: Field<Value>,
    pub model: Field<Value>,
    pub year: Field<Number>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TaskPayload {
    pub title: Field<Value>,
    pub description: Field<Value>,
    pub completed: Field<bool>,
}

/// A fully validated car update. Applying it cannot fail.
#[derive(Debug)]
struct CarChanges {
    plate_number: Option<Value>,
    brand: Option<Value>,
    model: Option<Value>,
    year: Option<Number>,
}

impl CarPayload {
    fn into_changes(self) -> Result<CarChanges, AppError> {
        Ok(CarChanges {
            plate_number: self.plate_number.given(),
            brand: self.brand.given(),
            model: self.model.given(),
            year: self.year.optional(YEAR_INVALID)?,
        })
    }
}

impl CarChanges {
    fn apply(self, car: &mut Car) {
        if let Some(plate_number) = self.plate_number {
            car.plate_number = plate_number;
        }
        if let Some(brand) = self.brand {
            car.brand = Some(brand);
        }
        if let Some(model) = self.model {
            car.model = Some(model);
        }
        if let Some(year) = self.year {
            car.year = Some(year);
        }
    }
}

/// A fully validated task update.
#[derive(Debug)]
struct TaskChanges {
    title: Option<Value>,
    description: Option<Value>,
    completed: Option<bool>,
}

impl TaskPayload {
    fn into_changes(self) -> Result<TaskChanges, AppError> {
        Ok(TaskChanges {
            title: self.title.given(),
            description: self.description.given(),
            completed: self.completed.optional(COMPLETED_INVALID)?,
        })
    }
}

impl TaskChanges {
    fn apply(self, task: &mut Task) {
        if let Some(title) = self.title {
            task.title = title;
        }
        if let Some(description) = self.description {
            task.description = Some(description);
        }
        if let Some(completed) = self.completed {
            task.completed = completed;
        }
    }
}

/// Cars plus their tasks, with one id sequence each.
#[derive(Debug, Clone)]
pub struct Garage {
    cars: Vec<Car>,
    tasks: Vec<Task>,
    car_ids: IdSequence,
    task_ids: IdSequence,
}

impl Default for Garage {
    fn default() -> Self {
        Self::seeded()
    }
}

impl Garage {
    pub fn seeded() -> Self {
        Self {
            cars: vec![
                Car {
                    id: 1,
                    plate_number: Value::from("ABC-123"),
                    brand: Some(Value::from("Toyota")),
                    model: Some(Value::from("Corolla")),
                    year: Some(Number::from(2010)),
                },
                Car {
                    id: 2,
                    plate_number: Value::from("XYZ-987"),
                    brand: Some(Value::from("Ford")),
                    model: Some(Value::from("Focus")),
                    year: Some(Number::from(2016)),
                },
            ],
            tasks: vec![Task {
                id: 1,
                car_id: 1,
                title: Value::from("Oil change"),
                description: Some(Value::from("Replace engine oil and filter")),
                completed: false,
            }],
            car_ids: IdSequence::starting_at(3),
            task_ids: IdSequence::starting_at(2),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::seeded();
    }

    // --- cars ---

    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    pub fn car(&self, id: RequestedId) -> Result<&Car, AppError> {
        self.cars
            .iter()
            .find(|car| id.matches(car.id))
            .ok_or(CAR_NOT_FOUND)
    }

    pub fn create_car(&mut self, payload: CarPayload) -> Result<Car, AppError> {
        let plate_number = payload.plate_number.required_truthy(PLATE_REQUIRED)?;
        let brand = payload.brand.given();
        let model = payload.model.given();
        let year = payload.year.optional(YEAR_INVALID)?;

        let car = Car {
            id: self.car_ids.next_id(),
            plate_number,
            brand,
            model,
            year,
        };
        self.cars.push(car.clone());
        Ok(car)
    }

    pub fn update_car(&mut self, id: RequestedId, payload: CarPayload) -> Result<Car, AppError> {
        let index = self.car_index(id)?;
        let changes = payload.into_changes()?;
        let car = &mut self.cars[index];
        changes.apply(car);
        Ok(car.clone())
    }

    /// Removes the car and every task that belongs to it. Returns the car and
    /// the number of tasks removed with it.
    pub fn delete_car(&mut self, id: RequestedId) -> Result<(Car, usize), AppError> {
        let index = self.car_index(id)?;
        let car = self.cars.remove(index);
        let before = self.tasks.len();
        self.tasks.retain(|task| task.car_id != car.id);
        Ok((car, before - self.tasks.len()))
    }

    // --- tasks ---

    pub fn tasks(&self, car_id: RequestedId) -> Result<Vec<Task>, AppError> {
        let car = self.car(car_id)?;
        Ok(self
            .tasks
            .iter()
            .filter(|task| task.car_id == car.id)
            .cloned()
            .collect())
    }

    pub fn task(&self, car_id: RequestedId, task_id: RequestedId) -> Result<&Task, AppError> {
        let index = self.task_index(car_id, task_id)?;
        Ok(&self.tasks[index])
    }

    pub fn create_task(
        &mut self,
        car_id: RequestedId,
        payload: TaskPayload,
    ) -> Result<Task, AppError> {
        let car_id = self.car(car_id)?.id;

        let title = payload.title.required_truthy(TITLE_REQUIRED)?;
        let description = payload.description.given();
        let completed = payload.completed.optional(COMPLETED_INVALID)?.unwrap_or(false);

        let task = Task {
            id: self.task_ids.next_id(),
            car_id,
            title,
            description,
            completed,
        };
        self.tasks.push(task.clone());
        Ok(task)
    }

    pub fn update_task(
        &mut self,
        car_id: RequestedId,
        task_id: RequestedId,
        payload: TaskPayload,
    ) -> Result<Task, AppError> {
        let index = self.task_index(car_id, task_id)?;
        let changes = payload.into_changes()?;
        let task = &mut self.tasks[index];
        changes.apply(task);
        Ok(task.clone())
    }

    pub fn delete_task(
        &mut self,
        car_id: RequestedId,
        task_id: RequestedId,
    ) -> Result<Task, AppError> {
        let index = self.task_index(car_id, task_id)?;
        Ok(self.tasks.remove(index))
    }

    fn car_index(&self, id: RequestedId) -> Result<usize, AppError> {
        self.cars
            .iter()
            .position(|car| id.matches(car.id))
            .ok_or(CAR_NOT_FOUND)
    }

    /// Parent first, then the task by global id, then the scope check. A task
    /// that exists under another car is reported exactly like a missing one.
    fn task_index(&self, car_id: RequestedId, task_id: RequestedId) -> Result<usize, AppError> {
        let car_id = self.car(car_id)?.id;
        self.tasks
            .iter()
            .position(|task| task_id.matches(task.id))
            .filter(|&index| self.tasks[index].car_id == car_id)
            .ok_or(TASK_NOT_FOUND)
    }
}
