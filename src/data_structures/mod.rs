pub mod priority_queue;
pub mod route_table;

pub use priority_queue::FrontierQueue;
pub use route_table::{Relaxation, RouteTable};
