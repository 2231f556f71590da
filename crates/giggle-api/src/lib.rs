pub mod catalog;
pub mod challenges;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod preview;
pub mod router;
pub mod state;
pub mod submissions;
pub mod validation;

pub use router::{App, app, router};
pub use state::{AppState, AppStateInner, DelayRange};
