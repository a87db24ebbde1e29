#[cfg(test)]
pub(crate) mod testing;

pub mod author_service;
pub mod category_service;
pub mod dashboard_service;
pub mod fragment_service;
pub mod list_state;
pub mod mutation;
pub mod query;
pub mod reply_service;
pub mod session_service;
pub mod student_service;
pub mod subscription_service;
pub mod user_service;

pub use author_service::AuthorService;
pub use category_service::CategoryService;
pub use dashboard_service::DashboardService;
pub use fragment_service::FragmentService;
pub use list_state::ListState;
pub use mutation::MutationOutcome;
pub use query::{Debouncer, PageQuery};
pub use reply_service::ReplyService;
pub use session_service::SessionService;
pub use student_service::StudentService;
pub use subscription_service::SubscriptionService;
pub use user_service::UserService;

/// Message shown when a plain list fetch fails; the stale collection stays
/// visible behind it.
pub(crate) const FETCH_FAILURE_MESSAGE: &str = "Something went wrong, please try again later";
