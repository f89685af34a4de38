pub mod countdown;

pub use countdown::{format_countdown, format_end_date};
