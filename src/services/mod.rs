pub mod order_line_service;
pub mod order_service;
pub mod stock_service;
