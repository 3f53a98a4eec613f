// Application Layer - The queue store and its operation surface

pub mod store;

pub use store::{CreateQueueRequest, QueueStore};
