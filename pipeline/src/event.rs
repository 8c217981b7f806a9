//! Pipeline events.
use crate::container::Container;
use slate_core::session::SessionChanges;

/// Notifications emitted by the lifecycle operations.
/// Subscribers run synchronously, in registration order.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineEvent {
    /// The session switched task, asset or app.
    TaskChanged(SessionChanges),

    /// An instance was created for publishing.
    Created { instance: String },

    /// A representation was loaded into the scene.
    Loaded(Container),

    /// A container changed version.
    Updated(Container),

    /// A container changed representation.
    Switched(Container),

    /// A container was removed from the scene.
    Removed(Container),
}

pub(crate) type Subscriber = Box<dyn Fn(&PipelineEvent)>;
