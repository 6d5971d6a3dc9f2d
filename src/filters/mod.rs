//! Catalog-search filter controllers.
//!
//! Each controller is independent and persistence-free: `selected` drives the
//! search, `locked` suppresses `reset`, `shown` tracks UI expand/collapse.

mod date_range;
pub mod options;
mod range;
mod section;
mod sections;

pub use date_range::{DateRange, DateRangeFilter};
pub use range::{Range, RangeFilter};
pub use section::SectionFilter;
pub use sections::{FilterNode, SectionsFilter};
