use super::*;
use crate::dev_utils::{project_fixture, representation_id};
use crate::error::Error;
use slate_core::db::MemoryStore;
use slate_core::project::MasterVersion;

fn subset_of(store: &MemoryStore, asset: &DocumentId) -> Subset {
    let mut filter = SearchFilter::children_of(DocumentKind::Subset, asset.clone());
    filter.name = Some(String::from("modelDefault"));

    match store.find_one(&filter, None) {
        Some(Document::Subset(subset)) => subset,
        _ => panic!("fixture should contain the subset"),
    }
}

#[test]
fn parenthood_should_walk_to_the_project() {
    let fixture = project_fixture(2, &["ma"]);
    let representation = representation_id(&fixture, 2, "ma");
    let document = fixture.store.get(&representation).unwrap();

    let parents = parenthood(&fixture.store, &document);

    let kinds: Vec<_> = parents.iter().map(Document::kind).collect();
    assert_eq!(
        vec![
            DocumentKind::Version,
            DocumentKind::Subset,
            DocumentKind::Asset,
            DocumentKind::Project,
        ],
        kinds,
        "ancestors should come nearest first"
    );
}

#[test]
fn parenthood_should_truncate_on_broken_link() {
    let fixture = project_fixture(1, &["ma"]);
    let orphan = Representation::new("ma", DocumentId::new());
    let document = Document::Representation(orphan);

    assert!(parenthood(&fixture.store, &document).is_empty());
}

#[test]
fn parenthood_should_substitute_master_version() {
    let mut fixture = project_fixture(2, &["ma"]);
    let subset = subset_of(&fixture.store, &fixture.asset.id);
    let target = representation_id(&fixture, 2, "ma");
    let Some(Document::Representation(target)) = fixture.store.get(&target) else {
        panic!("fixture should contain the representation");
    };

    let master = MasterVersion {
        id: DocumentId::new(),
        parent: subset.id.clone(),
        version_id: target.parent.clone(),
    };
    let representation = Representation::new("ma", master.id.clone());
    fixture.store.insert_one(master.into()).unwrap();
    fixture
        .store
        .insert_one(representation.clone().into())
        .unwrap();

    let parents = parenthood(&fixture.store, &Document::Representation(representation));

    let Some(Document::Version(version)) = parents.first() else {
        panic!("master version should resolve to the version it points at");
    };
    assert_eq!(VersionNumber::new(2), version.name);
}

#[test]
fn representation_context_should_resolve_full_chain() {
    let fixture = project_fixture(3, &["ma"]);
    let representation = representation_id(&fixture, 2, "ma");

    let context = representation_context(&fixture.store, &representation).unwrap();

    assert_eq!("hulk", context.project.name);
    assert_eq!("Bruce", context.asset.name);
    assert_eq!("modelDefault", context.subset.name);
    assert_eq!(VersionNumber::new(2), context.version.name);
    assert_eq!("ma", context.representation.name);
}

#[test]
fn representation_context_should_error_on_unknown_id() {
    let fixture = project_fixture(1, &["ma"]);

    let res = representation_context(&fixture.store, &DocumentId::new());

    assert!(matches!(
        res,
        Err(Error::Lookup(LookupError::DoesNotExist(_)))
    ));
}

#[test]
fn representation_context_should_error_on_broken_chain() {
    let mut fixture = project_fixture(1, &["ma"]);
    let orphan = Representation::new("ma", DocumentId::new());
    fixture.store.insert_one(orphan.clone().into()).unwrap();

    let res = representation_context(&fixture.store, &orphan.id);

    assert!(matches!(
        res,
        Err(Error::Lookup(LookupError::BrokenParentChain(id))) if id == orphan.id
    ));
}

#[test]
fn locate_should_resolve_explicit_version() {
    let fixture = project_fixture(3, &["ma"]);

    let found = locate(
        &fixture.store,
        &ContentAddress {
            project: String::from("hulk"),
            asset: String::from("Bruce"),
            subset: String::from("modelDefault"),
            version: Some(VersionNumber::new(2)),
            representation: String::from("ma"),
        },
    )
    .unwrap();

    // an address and its chain of parents name the same document
    let context = representation_context(&fixture.store, &found).unwrap();
    assert_eq!(VersionNumber::new(2), context.version.name);
    assert_eq!("ma", context.representation.name);
}

#[test]
fn locate_should_resolve_latest_when_version_unset() {
    let fixture = project_fixture(3, &["ma"]);

    let found = locate(
        &fixture.store,
        &ContentAddress {
            project: String::from("hulk"),
            asset: String::from("Bruce"),
            subset: String::from("modelDefault"),
            version: None,
            representation: String::from("ma"),
        },
    )
    .unwrap();

    let context = representation_context(&fixture.store, &found).unwrap();
    assert_eq!(VersionNumber::new(3), context.version.name);
}

#[test]
fn latest_version_should_order_numerically() {
    // v12 sorts after v9 numerically, not lexically
    let fixture = project_fixture(12, &["ma"]);
    let subset = subset_of(&fixture.store, &fixture.asset.id);

    let latest = latest_version(&fixture.store, &subset.id).unwrap();

    assert_eq!(VersionNumber::new(12), latest.name);
}

#[test]
fn locate_should_return_none_on_unknown_level() {
    let fixture = project_fixture(1, &["ma"]);

    let addresses = [
        ("hulk", "Clark", "modelDefault", "ma"),
        ("hulk", "Bruce", "rigDefault", "ma"),
        ("hulk", "Bruce", "modelDefault", "abc"),
        ("loki", "Bruce", "modelDefault", "ma"),
    ];

    for (project, asset, subset, representation) in addresses {
        let found = locate(
            &fixture.store,
            &ContentAddress {
                project: project.to_string(),
                asset: asset.to_string(),
                subset: subset.to_string(),
                version: None,
                representation: representation.to_string(),
            },
        );

        assert!(found.is_none(), "{project}/{asset}/{subset}/{representation}");
    }
}
