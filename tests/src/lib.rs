#![cfg(test)]

mod scan;
mod utils;
