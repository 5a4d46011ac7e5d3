//! DesignCraft studio — the session layer around the canvas core.
//!
//! DESIGN
//! ======
//! The `canvas` crate owns the document and all pointer interaction; it is
//! synchronous and never touches the network. This crate wraps it in a
//! shared, lockable workspace and adds everything that talks to the remote
//! persistence service: saving, listing, opening and deleting projects,
//! the caller's profile, and the transient notifications those produce.
//!
//! | Module | Role |
//! |--------|------|
//! | [`backend`] | Persistence collaborator trait, errors, in-memory backend |
//! | [`state`] | `AppState` and the per-session `Workspace` |
//! | [`services`] | Project and profile operations |
//! | [`notify`] | Bounded queue of user-visible notifications |
//! | [`config`] | Environment-driven settings |
//! | [`telemetry`] | Tracing subscriber setup |

pub mod backend;
pub mod config;
pub mod notify;
pub mod services;
pub mod state;
pub mod telemetry;

pub use canvas;
