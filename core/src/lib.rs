//! Synchronous, I/O-free client core for the depot API.
//!
//! # Overview
//! [`DepotClient`] builds [`HttpRequest`] values and parses [`HttpResponse`]
//! values; the caller performs the round-trip in between. Every route of the
//! server has a `build_*` method, and responses go through one of four
//! generic parsers chosen by the expected status and shape.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::DepotClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{
    Car, CarUpdate, Category, CategoryUpdate, Item, ItemUpdate, NewCar, NewCategory, NewItem,
    NewTask, Task, TaskUpdate,
};
