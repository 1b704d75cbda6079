pub mod errors;
pub mod extract;
pub mod routes;
pub mod startup;
pub mod store;

pub use startup::run;
