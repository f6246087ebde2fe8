/// Navigation route table
pub mod routes;

pub use routes::{Page, Route, RouteMatch, Router};
