mod users;
pub use users::Users;

mod user_detail;
pub use user_detail::UserDetail;
