mod layout;
pub use layout::DashboardLayout;

mod login;
pub use login::Login;

mod dashboard;
pub use dashboard::Dashboard;

mod users;
pub use users::Users;

mod settings;
pub use settings::Settings;

mod not_found;
pub use not_found::NotFound;
