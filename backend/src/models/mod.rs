pub mod calendar;
pub mod filter;
pub mod records;

pub use calendar::*;
pub use filter::*;
pub use records::*;
