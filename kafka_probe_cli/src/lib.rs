pub mod app_config;
pub mod args;
pub mod report;
pub mod startup;
