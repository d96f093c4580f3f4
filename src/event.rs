use std::fmt::Debug;

/// An occurrence inside an event-driven service.
///
/// Events carry no behavior of their own. They are `Send` so that a runtime
/// may hand them to whichever task hosts the handler.
pub trait Event: Debug + Send {}
