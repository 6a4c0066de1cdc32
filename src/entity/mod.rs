pub mod order_lines;
pub mod orders;

pub use order_lines::Entity as OrderLines;
pub use orders::Entity as Orders;
