mod consumer_wrapper;
mod settings;

pub use consumer_wrapper::*;
pub use settings::*;
