pub mod cars;
pub mod categories;
pub mod items;
