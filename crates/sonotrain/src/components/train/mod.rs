//! Donation flow views: collect files and a label, then upload and review.

mod collect_view;
mod file_row;
mod result_view;

pub use collect_view::CollectView;
pub use file_row::FileRow;
pub use result_view::ResultView;
