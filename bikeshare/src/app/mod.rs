mod bikeshare_app;
pub mod prompt;
pub mod session;

pub use bikeshare_app::BikeshareApp;
pub use prompt::InputCollector;
pub use session::SessionState;
