pub mod check_metadata;
pub mod consume_one;
