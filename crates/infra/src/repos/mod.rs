pub mod activity_logs;
pub mod addresses;
pub mod congregations;
pub mod publishers;
pub mod territories;

pub use activity_logs::{NewActivityLog, UpdateActivityLog};
pub use publishers::PublisherFilter;
pub use territories::{CheckoutError, TerritoryFilter};
