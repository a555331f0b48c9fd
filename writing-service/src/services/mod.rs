pub mod metrics;
pub mod prompts;
pub mod providers;
pub mod tasks;
pub mod tone;

pub use metrics::{get_metrics, init_metrics};
pub use providers::TextProvider;
pub use tasks::Task;
