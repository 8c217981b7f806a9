//! Pipeline context.
//!
//! An explicit context object carrying everything the historical pipeline
//! kept as process-wide globals: the filesystem root, the active session,
//! registered families and default data, plugin registries, the host, and
//! event subscribers. Contexts are independent; several can coexist in
//! one process, e.g. one per test.
use crate::error::{Error, Result};
use crate::event::{PipelineEvent, Subscriber};
use crate::host::Host;
use crate::plugin::{Creator, InventoryAction, Loader, PluginRegistry};
use indexmap::IndexMap;
use slate_core::db::DocumentStore;
use slate_core::session::{Session, SessionChanges};
use slate_core::types::DataMap;

/// Value of the `id` attribute marking a grouping as a publishable
/// instance.
pub const INSTANCE_ID: &str = "slate.instance";

// *************************
// *** Family Definition ***
// *************************

/// A family registered with the context.
#[derive(Debug, Clone, PartialEq)]
pub struct FamilyDefinition {
    pub name: String,
    pub label: Option<String>,

    /// Family-specific data imprinted onto new instances.
    pub data: DataMap,
}

impl FamilyDefinition {
    pub fn new(name: impl Into<String>) -> FamilyDefinition {
        FamilyDefinition {
            name: name.into(),
            label: None,
            data: DataMap::new(),
        }
    }
}

// ************************
// *** Pipeline Context ***
// ************************

/// Mutable state of one pipeline session.
pub struct PipelineContext {
    root: String,
    session: Session,
    families: IndexMap<String, FamilyDefinition>,
    default_data: DataMap,
    host: Option<Box<dyn Host>>,
    subscribers: Vec<Subscriber>,

    pub loaders: PluginRegistry<dyn Loader>,
    pub creators: PluginRegistry<dyn Creator>,
    pub inventory_actions: PluginRegistry<dyn InventoryAction>,
}

impl PipelineContext {
    pub fn new(root: impl Into<String>, session: Session) -> PipelineContext {
        let mut default_data = DataMap::new();
        default_data.insert(String::from("id"), serde_json::json!(INSTANCE_ID));
        default_data.insert(String::from("family"), serde_json::json!("{family}"));

        PipelineContext {
            root: root.into(),
            session,
            families: IndexMap::new(),
            default_data,
            host: None,
            subscribers: Vec::new(),
            loaders: PluginRegistry::new(),
            creators: PluginRegistry::new(),
            inventory_actions: PluginRegistry::new(),
        }
    }

    /// Builds a context from the `SLATE_*` environment, anchored at the
    /// session's root.
    pub fn from_env() -> Result<PipelineContext> {
        let session = Session::from_env()?;
        let root = session.root.clone().unwrap_or_default();
        Ok(PipelineContext::new(root, session))
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn register_root(&mut self, root: impl Into<String>) {
        self.root = root.into();
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    // *** families ***

    pub fn register_family(&mut self, family: FamilyDefinition) {
        self.families.insert(family.name.clone(), family);
    }

    pub fn deregister_family(&mut self, name: &str) -> Option<FamilyDefinition> {
        self.families.shift_remove(name)
    }

    pub fn registered_families(&self) -> impl Iterator<Item = &FamilyDefinition> {
        self.families.values()
    }

    pub fn family(&self, name: &str) -> Option<&FamilyDefinition> {
        self.families.get(name)
    }

    // *** default data ***

    /// Data imprinted onto every new instance, before family data.
    pub fn default_data(&self) -> &DataMap {
        &self.default_data
    }

    pub fn register_data(&mut self, key: impl Into<String>, value: serde_json::Value) {
        self.default_data.insert(key.into(), value);
    }

    // *** host ***

    /// Installs a host, replacing any previous one.
    pub fn register_host(&mut self, host: Box<dyn Host>) {
        if let Some(previous) = &self.host {
            tracing::debug!(
                "replacing host `{previous}` with `{next}`",
                previous = previous.name(),
                next = host.name(),
            );
        }

        self.host = Some(host);
    }

    pub fn registered_host(&self) -> Result<&dyn Host> {
        self.host.as_deref().ok_or(Error::NoHost)
    }

    pub fn registered_host_mut(&mut self) -> Result<&mut dyn Host> {
        match self.host.as_deref_mut() {
            Some(host) => Ok(host),
            None => Err(Error::NoHost),
        }
    }

    pub fn deregister_host(&mut self) -> Option<Box<dyn Host>> {
        self.host.take()
    }

    // *** events ***

    /// Subscribes to lifecycle events.
    pub fn on(&mut self, subscriber: impl Fn(&PipelineEvent) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    pub fn emit(&self, event: &PipelineEvent) {
        tracing::debug!("emitting {event:?}");
        for subscriber in &self.subscribers {
            subscriber(event);
        }
    }

    // *** session switching ***

    /// Switches the session to a different task work area and emits
    /// [`PipelineEvent::TaskChanged`].
    pub fn update_current_task(
        &mut self,
        store: &dyn DocumentStore,
        task: Option<&str>,
        asset: Option<&str>,
        app: Option<&str>,
    ) -> Result<SessionChanges> {
        let changes = self
            .session
            .compute_changes(store, &self.root, task, asset, app)?;

        if changes.is_empty() {
            return Ok(changes);
        }

        self.session.apply(&changes);
        self.emit(&PipelineEvent::TaskChanged(changes.clone()));
        Ok(changes)
    }

    /// Splits the context into its host and the rest.
    /// Lifecycle operations need the host mutably while reading plugins.
    pub(crate) fn host_and_rest(&mut self) -> Result<(&mut dyn Host, ContextView<'_>)> {
        let Some(host) = self.host.as_deref_mut() else {
            return Err(Error::NoHost);
        };

        Ok((
            host,
            ContextView {
                root: &self.root,
                session: &self.session,
                families: &self.families,
                default_data: &self.default_data,
                loaders: &self.loaders,
                creators: &self.creators,
                subscribers: &self.subscribers,
            },
        ))
    }
}

/// Read-only view of a context with the host borrowed out.
pub(crate) struct ContextView<'a> {
    pub root: &'a str,
    pub session: &'a Session,
    pub families: &'a IndexMap<String, FamilyDefinition>,
    pub default_data: &'a DataMap,
    pub loaders: &'a PluginRegistry<dyn Loader>,
    pub creators: &'a PluginRegistry<dyn Creator>,
    pub subscribers: &'a [Subscriber],
}

impl ContextView<'_> {
    pub fn emit(&self, event: &PipelineEvent) {
        tracing::debug!("emitting {event:?}");
        for subscriber in self.subscribers {
            subscriber(event);
        }
    }
}

#[cfg(test)]
#[path = "./context_test.rs"]
mod context_test;
