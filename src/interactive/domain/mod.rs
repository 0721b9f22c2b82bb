pub mod grouping;
pub mod models;

#[cfg(test)]
mod grouping_test;
