pub mod error;
pub mod export;
pub mod metrics;
pub mod report;
pub mod runner;
pub mod search;
pub mod types;
pub mod util;

pub use search::{BinarySearch, SearchScheme, SequentialSearch};
pub use types::*;

#[ctor::ctor]
fn init_color_backtrace() {
    color_backtrace::install();
}
