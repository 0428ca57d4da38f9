mod mock_activity_repository;

pub use mock_activity_repository::MockActivityRepository;
