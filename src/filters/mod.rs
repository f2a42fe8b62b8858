pub mod apply;

pub use apply::{filter_options, matches_query};
