//! Dev utils for lifecycle and resolution tests.
use crate::container::Container;
use crate::context::{FamilyDefinition, PipelineContext};
use crate::error::Result;
use crate::host::{DebugHost, Error as HostError, Host};
use crate::lifecycle::publish_path;
use crate::plugin::{Creator, Loader, Plugin};
use crate::publish::{publish, Publish};
use crate::resolve::{locate, ContentAddress, RepresentationContext};
use slate_core::db::{DocumentStore, MemoryStore};
use slate_core::project::{Asset, Project};
use slate_core::session::Session;
use slate_core::types::{DataMap, DocumentId, VersionNumber};
use std::path::Path;
use std::sync::Arc;

pub const ROOT: &str = "/projects";
pub const FAMILY: &str = "slate.model";

lazy_static::lazy_static! {
    static ref TRACING: () = {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    };
}

/// Routes `tracing` output into the test log. Installed once.
pub fn init_tracing() {
    lazy_static::initialize(&TRACING);
}

/// A seeded store with project `hulk`, asset `Bruce` and subset
/// `modelDefault` published `versions` times.
pub struct Fixture {
    pub store: MemoryStore,
    pub project: Project,
    pub asset: Asset,
}

pub fn project_fixture(versions: i64, representations: &[&str]) -> Fixture {
    init_tracing();

    let mut store = MemoryStore::new();
    let project = Project::new("hulk");
    let mut asset = Asset::new("Bruce", project.id.clone());
    asset.silo = Some(String::from("assets"));

    store.insert_one(project.clone().into()).unwrap();
    store.insert_one(asset.clone().into()).unwrap();

    for number in 1..=versions {
        publish(
            &mut store,
            Publish {
                asset: asset.id.clone(),
                subset: String::from("modelDefault"),
                families: vec![String::from(FAMILY)],
                author: Some(String::from("marcus")),
                source: Some(format!("/work/Bruce/model_v{number:03}.ma")),
                representations: representations.iter().map(|r| r.to_string()).collect(),
            },
        )
        .unwrap();
    }

    Fixture {
        store,
        project,
        asset,
    }
}

/// Id of the named representation of `modelDefault` at `version`.
pub fn representation_id(
    fixture: &Fixture,
    version: i64,
    representation: &str,
) -> DocumentId {
    locate(
        &fixture.store,
        &ContentAddress {
            project: String::from("hulk"),
            asset: String::from("Bruce"),
            subset: String::from("modelDefault"),
            version: Some(VersionNumber::new(version)),
            representation: representation.to_string(),
        },
    )
    .expect("representation should exist")
}

/// A context with a [`DebugHost`] installed, the model family registered
/// and a [`MockLoader`] for `ma` representations.
pub fn context_fixture() -> PipelineContext {
    init_tracing();

    let mut context = PipelineContext::new(ROOT, Session::new("hulk"));
    context.register_host(Box::new(DebugHost::new()));
    context.register_family(FamilyDefinition::new(FAMILY));
    context
        .loaders
        .register(Arc::new(MockLoader::reference_loader()))
        .unwrap();
    context
}

// *******************
// *** Mock Loader ***
// *******************

/// Reference-based loader double with configurable compatibility.
pub struct MockLoader {
    pub name: String,
    pub order: i32,
    pub families: Vec<String>,
    pub representations: Vec<String>,

    /// Fail loading with a host io error, to exercise skip-and-continue.
    pub fail_io: bool,
}

impl MockLoader {
    pub fn reference_loader() -> MockLoader {
        MockLoader {
            name: String::from("ReferenceLoader"),
            order: 0,
            families: vec![String::from(FAMILY)],
            representations: vec![String::from("ma")],
            fail_io: false,
        }
    }
}

impl Plugin for MockLoader {
    fn name(&self) -> &str {
        &self.name
    }

    fn order(&self) -> i32 {
        self.order
    }
}

impl Loader for MockLoader {
    fn families(&self) -> Vec<String> {
        self.families.clone()
    }

    fn representations(&self) -> Vec<String> {
        self.representations.clone()
    }

    fn load(
        &self,
        host: &mut dyn Host,
        context: &RepresentationContext,
        _name: &str,
        namespace: &str,
        _options: &DataMap,
    ) -> Result<Vec<String>> {
        if self.fail_io {
            return Err(HostError::Io(String::from("file unreadable")).into());
        }

        let path = publish_path(context, ROOT, &Session::new(&context.project.name))?;
        let (reference_node, mut nodes) = host.create_reference(namespace, &path)?;
        nodes.push(reference_node);
        Ok(nodes)
    }

    fn switch(
        &self,
        host: &mut dyn Host,
        container: &Container,
        _context: &RepresentationContext,
        path: &Path,
    ) -> Result<()> {
        self.update(host, container, path)
    }
}

// ********************
// *** Mock Creator ***
// ********************

/// Creator double using the default selection-grouping behavior.
pub struct MockCreator {
    pub name: String,
    pub family: String,
}

impl Plugin for MockCreator {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Creator for MockCreator {
    fn family(&self) -> String {
        self.family.clone()
    }
}
