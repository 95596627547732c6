pub mod async_op;
pub mod generation;

pub use async_op::{AsyncOp, Status};
pub use generation::{RequestGeneration, RequestTicket};
