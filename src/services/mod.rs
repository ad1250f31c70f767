// Database access services

pub mod error;
pub mod member_service;
pub mod workout_session_service;

pub use error::RepositoryError;
pub use member_service::{MemberRepository, MemberService};
pub use workout_session_service::{WorkoutSessionRepository, WorkoutSessionService};

#[cfg(test)]
pub use member_service::MockMemberRepository;
#[cfg(test)]
pub use workout_session_service::MockWorkoutSessionRepository;
