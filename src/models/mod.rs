pub mod common;
pub mod files;
pub mod grades;
pub mod homeworks;
pub mod submissions;

pub use common::{ApiResponse, ErrorCode, PaginationInfo};
