//! Pages and route layouts of the site.

mod home;
pub use home::Home;

mod not_found;
pub use not_found::PageNotFound;

mod shell;
pub use shell::Shell;
