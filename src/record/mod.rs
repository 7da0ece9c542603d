mod fields;
#[allow(clippy::module_inception)]
pub mod record;

pub use fields::Fields;
pub use record::{FastMap, Record};

#[cfg(test)]
mod tests;
