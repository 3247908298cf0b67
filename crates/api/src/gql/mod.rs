pub mod common;
pub mod compose;
pub mod domains;
pub mod error;
pub mod loaders;
pub mod root;
pub mod schema;

pub use compose::ComposeError;
pub use root::{MutationRoot, QueryRoot};
pub use schema::{build_schema, AppSchema};
