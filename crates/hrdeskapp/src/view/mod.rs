//! # List Views
//!
//! Every list screen turns a raw record collection into what the user sees
//! through the same three steps, always in this order:
//!
//! ```text
//! records ──▶ FilterPredicate ──▶ FieldComparator ──▶ paginate ──▶ ViewResult
//!             search / dropdowns   field, then id      clamp page
//!             / date bucket
//! ```
//!
//! - [`filter`]: [`FilterSpec`] (what the user picked) and [`FilterPredicate`]
//!   (the spec resolved against today's date).
//! - [`compare`]: [`FieldComparator`], reading fields as the schema declares.
//! - [`sort`]: [`SortSpec`] and header-click toggling.
//! - [`page`]: [`PageState`], [`PageSize`] and [`ViewResult`].
//! - [`pipeline`]: [`ViewPipeline`], the composition of the above.
//!
//! The pipeline is generic over [`Record`](crate::model::Record); each screen
//! only contributes a schema and its defaults (see [`crate::screens`]).

pub mod compare;
pub mod filter;
pub mod page;
pub mod pipeline;
pub mod sort;

pub use compare::{FieldComparator, SortKey};
pub use filter::{DateBucket, DateRange, FilterPredicate, FilterSpec, ALL};
pub use page::{paginate, total_pages, PageSize, PageState, ViewResult, PAGE_SIZES};
pub use pipeline::ViewPipeline;
pub use sort::{SortOrder, SortSpec};
