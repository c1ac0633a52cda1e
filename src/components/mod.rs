pub mod all_users;
pub mod login;
pub mod profile;

pub use all_users::AllUsersScreen;
pub use login::LoginScreen;
pub use profile::ProfileScreen;
