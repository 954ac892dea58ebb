//! Loop Push Notifications
//!
//! Validates a remote command, translates it into an APNs notification and
//! delivers it to the Loop device, reporting the outcome exactly once.

mod apns;
mod completion;
mod dispatcher;
mod error;
mod report;
mod scoped;
mod traits;

pub use apns::*;
pub use completion::*;
pub use dispatcher::*;
pub use error::*;
pub use report::*;
pub use scoped::*;
pub use traits::*;
