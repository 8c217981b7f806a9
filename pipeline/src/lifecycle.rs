//! Container lifecycle.
//!
//! The state machine over scene containers: Absent, Loaded after
//! [`PipelineContext::load`], retagged by [`PipelineContext::update`] and
//! [`PipelineContext::switch`], terminal after [`PipelineContext::remove`].
//! Update stages everything fallible first, swaps the file reference, then
//! rewrites the container attributes, rolling the reference back if the
//! rewrite fails; a partial update never leaves a silently inconsistent
//! container behind.
use crate::container::Container;
use crate::context::{ContextView, PipelineContext};
use crate::error::{Container as ContainerError, Lookup as LookupError, Plugin as PluginError,
    Result};
use crate::event::PipelineEvent;
use crate::host::{Error as HostError, Host};
use crate::plugin::{compatible_loaders, is_compatible_loader, Loader};
use crate::resolve::{self, RepresentationContext};
use slate_core::db::{DocumentStore, SearchFilter};
use slate_core::project::{Document, DocumentKind, Version};
use slate_core::session::Session;
use slate_core::template::PathTemplate;
use slate_core::types::{DataMap, DocumentId, VersionNumber};
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;

// **********************
// *** Version Target ***
// **********************

/// Version an update resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionTarget {
    /// Most recent version, by descending numeric name.
    Latest,

    Number(VersionNumber),
}

// ******************
// *** Operations ***
// ******************

impl PipelineContext {
    /// Creates a new instance to be published.
    ///
    /// Marks host content with a subset name and family so extractors
    /// can later find and publish it. Runs the first creator registered
    /// for the family, or groups content directly when none is.
    ///
    /// # Returns
    /// Name of the instance grouping.
    pub fn create(
        &mut self,
        name: &str,
        asset: &str,
        family: &str,
        options: &DataMap,
    ) -> Result<String> {
        let (host, view) = self.host_and_rest()?;

        let Some(definition) = view.families.get(family) else {
            return Err(ContainerError::FamilyNotValid(family.to_string()).into());
        };

        let mut data = view.default_data.clone();
        for (key, value) in &definition.data {
            data.insert(key.clone(), value.clone());
        }
        data.insert(String::from("name"), serde_json::json!(name));
        data.insert(String::from("asset"), serde_json::json!(asset));
        let data = resolve_dynamic_properties(data, name, asset, family)?;

        let instance = format!("{name}_SET");
        if host.exists(&instance) {
            return Err(ContainerError::AlreadyExists(instance).into());
        }

        let creators: Vec<_> = view
            .creators
            .discover()
            .into_iter()
            .filter(|creator| creator.family() == family)
            .collect();

        if creators.is_empty() {
            let use_selection = options
                .get("useSelection")
                .and_then(|value| value.as_bool())
                .unwrap_or(false);

            let nodes = if use_selection {
                host.selection()
            } else {
                Vec::new()
            };
            host.create_grouping(&instance, nodes)?;
        } else {
            let mut created = false;
            for creator in creators {
                tracing::info!(
                    "creating '{name}' with '{creator}'",
                    creator = creator.name(),
                );

                match creator.process(host, &instance, options) {
                    Ok(_) => {
                        created = true;
                        break;
                    }
                    Err(err) => {
                        tracing::warn!("creator `{}` failed: {err}", creator.name());
                    }
                }
            }

            if !created {
                return Err(PluginError::NoCreatorsRun(family.to_string()).into());
            }
        }

        host.imprint(&instance, &data)?;
        view.emit(&PipelineEvent::Created {
            instance: instance.clone(),
        });

        Ok(instance)
    }

    /// Loads a representation into the scene.
    ///
    /// Every compatible loader runs; a loader failing on host io is
    /// skipped with a warning while its siblings still run. The produced
    /// nodes are grouped into a tagged container.
    pub fn load(
        &mut self,
        store: &dyn DocumentStore,
        representation: &DocumentId,
        name: Option<&str>,
        namespace: Option<&str>,
        options: &DataMap,
    ) -> Result<Container> {
        let (host, view) = self.host_and_rest()?;
        let context = resolve::representation_context(store, representation)?;

        let loaders = compatible_loaders(view.loaders, &context);
        if loaders.is_empty() {
            return Err(PluginError::NoLoadersRun(context.representation.name.clone()).into());
        }

        let name = name.unwrap_or(&context.subset.name).to_string();
        let namespace = match namespace {
            Some(namespace) => namespace.to_string(),
            None => unique_namespace(host, &context.asset.name),
        };

        let mut nodes = Vec::new();
        let mut ran = Vec::new();
        for loader in loaders {
            tracing::info!(
                "running '{loader}' on '{asset}'",
                loader = loader.name(),
                asset = context.asset.name,
            );

            match loader.load(host, &context, &name, &namespace, options) {
                Ok(produced) => {
                    nodes.extend(produced);
                    ran.push(loader.name().to_string());
                }
                Err(crate::Error::Host(HostError::Io(reason))) => {
                    tracing::warn!("loader `{}` skipped: {reason}", loader.name());
                }
                Err(err) => return Err(err),
            }
        }

        if ran.is_empty() {
            return Err(PluginError::NoLoadersRun(context.representation.name.clone()).into());
        }
        if nodes.is_empty() {
            return Err(PluginError::NoNodesProduced(context.representation.name.clone()).into());
        }

        let container = Container {
            object_name: format!("{namespace}:{name}_CON"),
            name,
            namespace,
            asset: context.asset.name.clone(),
            subset: context.subset.name.clone(),
            version: context.version.name,
            representation: context.representation.id.clone(),
            loader: ran.join(" "),
            source: context.version.data.source.clone(),
        };

        host.containerise(&container, nodes)?;
        view.emit(&PipelineEvent::Loaded(container.clone()));

        Ok(container)
    }

    /// Updates a container to a different version of its subset.
    ///
    /// Upgrade and downgrade share this path; the target version must
    /// carry a representation of the same name, it is never substituted.
    pub fn update(
        &mut self,
        store: &dyn DocumentStore,
        container: &Container,
        target: VersionTarget,
    ) -> Result<Container> {
        let (host, view) = self.host_and_rest()?;
        let current = resolve::representation_context(store, &container.representation)?;

        let new_version = target_version(store, &current, target)?;
        let new_representation = sibling_representation(store, &current, &new_version)?;

        let mut context = current;
        context.version = new_version;
        context.representation = new_representation;

        let new_path = publish_path(&context, view.root, view.session)?;
        let loader = container_loader(&view, container)?;

        // stage complete; swap the reference, then rewrite attributes
        let reference_node = host.reference_node(&container.object_name);
        let old_path = match &reference_node {
            Some(node) => host.reference_path(node).ok(),
            None => None,
        };

        loader.update(host, container, &new_path)?;

        let mut updated = container.clone();
        updated.version = context.version.name;
        updated.representation = context.representation.id.clone();
        updated.source = context.version.data.source.clone();

        if let Err(err) = host.imprint(&container.object_name, &updated.to_data()) {
            rollback_reference(host, &reference_node, &old_path);
            return Err(err.into());
        }

        tracing::info!(
            "grading '{name}' from '{from}' to '{to}'",
            name = container.name,
            from = container.version,
            to = updated.version,
        );

        view.emit(&PipelineEvent::Updated(updated.clone()));
        Ok(updated)
    }

    /// Switches a container to a different representation.
    ///
    /// The container's loader must support switching and be compatible
    /// with the new representation's context.
    pub fn switch(
        &mut self,
        store: &dyn DocumentStore,
        container: &Container,
        representation: &DocumentId,
    ) -> Result<Container> {
        let (host, view) = self.host_and_rest()?;
        let context = resolve::representation_context(store, representation)?;

        let loader = container_loader(&view, container)?;
        if !is_compatible_loader(loader.as_ref(), &context) {
            return Err(PluginError::Incompatible {
                loader: loader.name().to_string(),
                subset: context.subset.name.clone(),
            }
            .into());
        }

        let new_path = publish_path(&context, view.root, view.session)?;
        loader.switch(host, container, &context, &new_path)?;

        let mut switched = container.clone();
        switched.asset = context.asset.name.clone();
        switched.subset = context.subset.name.clone();
        switched.version = context.version.name;
        switched.representation = context.representation.id.clone();
        switched.source = context.version.data.source.clone();
        host.imprint(&container.object_name, &switched.to_data())?;

        view.emit(&PipelineEvent::Switched(switched.clone()));
        Ok(switched)
    }

    /// Removes a container from the scene.
    ///
    /// Safe to call when the container's namespace was already cleaned
    /// up out-of-band; the reference is still detached.
    pub fn remove(&mut self, container: &Container) -> Result<()> {
        let (host, view) = self.host_and_rest()?;
        let loader = container_loader(&view, container)?;

        tracing::info!("removing '{name}'", name = container.name);
        loader.remove(host, container)?;

        view.emit(&PipelineEvent::Removed(container.clone()));
        Ok(())
    }

    /// Containers present in the open scene.
    pub fn ls(&self) -> Result<Vec<Container>> {
        Ok(self.registered_host()?.ls())
    }
}

// ***************
// *** Helpers ***
// ***************

/// Publish path of a representation context, from the project's
/// publish template.
pub fn publish_path(
    context: &RepresentationContext,
    root: &str,
    session: &Session,
) -> Result<PathBuf> {
    let template = PathTemplate::parse(context.project.config.template.publish.clone())?;

    let mut data = session.template_data(root);
    data.insert(String::from("project"), context.project.name.clone());
    data.insert(
        String::from("silo"),
        context.asset.silo.clone().unwrap_or_default(),
    );
    data.insert(String::from("asset"), context.asset.name.clone());
    data.insert(String::from("subset"), context.subset.name.clone());
    data.insert(String::from("version"), context.version.name.to_string());
    data.insert(
        String::from("representation"),
        context.representation.name.clone(),
    );

    Ok(PathBuf::from(template.format(&data)?))
}

/// First loader of the container's recorded loaders that is still
/// registered. The `loader` attribute holds the space-joined names of
/// the loaders that ran.
fn container_loader(view: &ContextView<'_>, container: &Container) -> Result<Arc<dyn Loader>> {
    for name in container.loader.split_whitespace() {
        if let Some(loader) = view.loaders.get(name) {
            return Ok(loader);
        }
    }

    Err(PluginError::Unknown(container.loader.clone()).into())
}

fn target_version(
    store: &dyn DocumentStore,
    current: &RepresentationContext,
    target: VersionTarget,
) -> Result<Version> {
    match target {
        VersionTarget::Latest => resolve::latest_version(store, &current.subset.id)
            .ok_or_else(|| {
                LookupError::NotFound {
                    kind: DocumentKind::Version,
                    name: String::from("latest"),
                }
                .into()
            }),

        VersionTarget::Number(number) => {
            let mut filter =
                SearchFilter::children_of(DocumentKind::Version, current.subset.id.clone());
            filter.version = Some(number);

            match store.find_one(&filter, None) {
                Some(Document::Version(version)) => Ok(version),
                _ => Err(LookupError::NotFound {
                    kind: DocumentKind::Version,
                    name: number.to_string(),
                }
                .into()),
            }
        }
    }
}

/// Representation with the same name as the current one, under `version`.
fn sibling_representation(
    store: &dyn DocumentStore,
    current: &RepresentationContext,
    version: &Version,
) -> Result<slate_core::project::Representation> {
    let mut filter = SearchFilter::children_of(DocumentKind::Representation, version.id.clone());
    filter.name = Some(current.representation.name.clone());

    match store.find_one(&filter, None) {
        Some(Document::Representation(representation)) => Ok(representation),
        _ => Err(LookupError::NotFound {
            kind: DocumentKind::Representation,
            name: current.representation.name.clone(),
        }
        .into()),
    }
}

/// First `{asset}_NN` namespace not yet present among scene containers.
fn unique_namespace(host: &dyn Host, asset: &str) -> String {
    let used: HashSet<String> = host
        .ls()
        .into_iter()
        .map(|container| container.namespace)
        .collect();

    let mut count = 1;
    loop {
        let namespace = format!("{asset}_{count:02}");
        if !used.contains(&namespace) {
            return namespace;
        }
        count += 1;
    }
}

/// Resolves `{name}`-style placeholders in instance data values.
fn resolve_dynamic_properties(
    data: DataMap,
    name: &str,
    asset: &str,
    family: &str,
) -> Result<DataMap> {
    let mut values = slate_core::template::TemplateData::new();
    values.insert(String::from("name"), name.to_string());
    values.insert(String::from("asset"), asset.to_string());
    values.insert(String::from("family"), family.to_string());

    let mut resolved = DataMap::new();
    for (key, value) in data {
        let Some(text) = value.as_str() else {
            resolved.insert(key, value);
            continue;
        };

        if !text.contains('{') {
            resolved.insert(key, value);
            continue;
        }

        let template = PathTemplate::parse(text)
            .map_err(|_| ContainerError::InvalidDynamicProperty(key.clone()))?;
        let formatted = template
            .format(&values)
            .map_err(|_| ContainerError::InvalidDynamicProperty(key.clone()))?;
        resolved.insert(key, serde_json::json!(formatted));
    }

    Ok(resolved)
}

fn rollback_reference(host: &mut dyn Host, reference_node: &Option<String>, path: &Option<PathBuf>) {
    let (Some(node), Some(path)) = (reference_node, path) else {
        return;
    };

    if let Err(err) = host.load_reference(node, path) {
        tracing::warn!("could not roll back reference `{node}`: {err}");
    }
}

#[cfg(test)]
#[path = "./lifecycle_test.rs"]
mod lifecycle_test;
