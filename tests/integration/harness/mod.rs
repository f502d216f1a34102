pub mod app;
pub mod assertions;
pub mod builders;
pub mod time;

pub use app::{
    embedded_app, headless_app, reset_session_changes, session_changes, track_session_changes,
};
pub use assertions::*;
pub use builders::*;
pub use time::*;
