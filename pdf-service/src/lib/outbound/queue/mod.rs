pub mod sqs;

pub use sqs::SqsTaskQueue;
