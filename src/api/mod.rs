mod rest;

pub use rest::{BackendClient, Order, TableQuery};
