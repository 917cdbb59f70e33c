//! Usage: Application layer (shell controller, window factory, run-event wiring, managed state, logging).

pub(crate) mod app_state;
pub(crate) mod lifecycle;
pub(crate) mod logging;
pub(crate) mod shell;
pub(crate) mod window;
