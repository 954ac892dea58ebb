//! Loop Remote Command Core
//!
//! Domain types for turning a Loop remote-command event into an APNs
//! notification: events, deployment settings, device profiles, payloads,
//! and the pure translation between them.

mod error;
mod event;
mod fields;
mod payload;
mod profile;
mod settings;
mod translate;

pub use error::*;
pub use event::*;
pub use fields::*;
pub use payload::*;
pub use profile::*;
pub use settings::*;
pub use translate::*;
