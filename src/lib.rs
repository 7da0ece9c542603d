pub mod array;
pub mod error;
pub mod ext;
pub mod formatting;
pub mod record;
pub mod value;

pub use array::{PopulateCount, UtilityArray, populated_array, populated_array_with};
pub use error::ArrayError;
pub use ext::{ArrayExt, extract_map};
pub use formatting::{NumericRange, Ordinal, number_ordinal, with_ordinal};
pub use record::{Fields, Record};
pub use value::{Number, Value};
