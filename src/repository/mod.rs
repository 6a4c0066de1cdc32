pub mod order_line_repository;
pub mod order_repository;
