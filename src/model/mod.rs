pub mod deque;
pub mod list;
pub mod queues;
pub mod stack;
pub mod traits;
