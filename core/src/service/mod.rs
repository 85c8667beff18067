pub mod board_service;

#[cfg(test)]
mod board_service_test;
