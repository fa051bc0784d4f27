// Utility functions
// Pure display helpers shared by booking, chat, and session views

pub mod format;
pub mod time;

pub use format::{currency_symbol, format_amount_with_separator, format_price};
pub use time::{format_countdown, format_relative_time};
