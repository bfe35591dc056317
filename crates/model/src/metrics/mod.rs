pub mod order_count;
pub mod period;
