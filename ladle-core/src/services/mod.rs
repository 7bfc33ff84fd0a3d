//! Service layer - the domain repositories and app infrastructure
//!
//! Services own the per-entity invariants (uniqueness, upsert, cascade
//! delete, cache coherence) on top of the persistent store. Each service
//! focuses on one entity or concern.

pub mod logging;
mod recipes;
mod reviews;
mod users;

pub use logging::{LogEntry, LogEvent, LoggingService};
pub use recipes::RecipeService;
pub use reviews::ReviewService;
pub use users::{RegistrationForm, UserService};
