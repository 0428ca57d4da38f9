mod piperun_activity_repository;
mod traits;

pub use piperun_activity_repository::{has_data, PipeRunActivityRepository};
pub use traits::ActivityRepository;
