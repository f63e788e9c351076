pub mod validate;

pub use validate::{SCORE_RANGE_MESSAGE, parse_score_input};
