pub mod produce_one;
