#![cfg(test)]

mod test;
mod utils;
