pub mod review;

pub use review::{parse_id, ReviewManager};
