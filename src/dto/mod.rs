pub mod order_lines;
pub mod orders;
