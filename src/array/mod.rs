mod populate;
mod query_op;
pub mod utility_array;
mod write_op;

pub use populate::{PopulateCount, populated_array, populated_array_with};
pub use utility_array::UtilityArray;
