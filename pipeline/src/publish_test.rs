use super::*;
use crate::dev_utils::project_fixture;
use crate::error::Error;

fn mock_publish(asset: DocumentId, representations: &[&str]) -> Publish {
    Publish {
        asset,
        subset: String::from("modelDefault"),
        families: vec![String::from("slate.model")],
        author: Some(String::from("marcus")),
        source: Some(String::from("/work/Bruce/model.ma")),
        representations: representations.iter().map(|r| r.to_string()).collect(),
    }
}

#[test]
fn first_publish_should_create_subset_at_version_one() {
    let mut fixture = project_fixture(0, &[]);

    let published = publish(
        &mut fixture.store,
        mock_publish(fixture.asset.id.clone(), &["ma"]),
    )
    .unwrap();

    assert_eq!("modelDefault", published.subset.name);
    assert_eq!(fixture.asset.id, published.subset.parent);
    assert_eq!(VersionNumber::FIRST, published.version.name);
    assert_eq!(vec![String::from("slate.model")], published.subset.families);
}

#[test]
fn publish_should_allocate_monotonic_numbers() {
    let mut fixture = project_fixture(0, &[]);

    for expected in 1..=5 {
        let published = publish(
            &mut fixture.store,
            mock_publish(fixture.asset.id.clone(), &["ma"]),
        )
        .unwrap();

        assert_eq!(VersionNumber::new(expected), published.version.name);
    }
}

#[test]
fn publish_should_reuse_the_subset() {
    let mut fixture = project_fixture(0, &[]);

    let first = publish(
        &mut fixture.store,
        mock_publish(fixture.asset.id.clone(), &["ma"]),
    )
    .unwrap();
    let second = publish(
        &mut fixture.store,
        mock_publish(fixture.asset.id.clone(), &["ma"]),
    )
    .unwrap();

    assert_eq!(first.subset.id, second.subset.id);

    let filter = SearchFilter::children_of(DocumentKind::Subset, fixture.asset.id.clone());
    assert_eq!(1, fixture.store.find(&filter).len());
}

#[test]
fn publish_should_insert_representations() {
    let mut fixture = project_fixture(0, &[]);

    let published = publish(
        &mut fixture.store,
        mock_publish(fixture.asset.id.clone(), &["ma", "abc"]),
    )
    .unwrap();

    let filter =
        SearchFilter::children_of(DocumentKind::Representation, published.version.id.clone());
    let names: Vec<_> = fixture
        .store
        .find(&filter)
        .iter()
        .filter_map(Document::name)
        .collect();

    assert_eq!(vec![String::from("ma"), String::from("abc")], names);
}

#[test]
fn publish_should_stamp_version_data() {
    let mut fixture = project_fixture(0, &[]);

    let published = publish(
        &mut fixture.store,
        mock_publish(fixture.asset.id.clone(), &["ma"]),
    )
    .unwrap();

    assert_eq!(Some(String::from("marcus")), published.version.data.author);
    assert_eq!(
        Some(String::from("/work/Bruce/model.ma")),
        published.version.data.source
    );
    assert_eq!(
        vec![String::from("slate.model")],
        published.version.data.families
    );
}

#[test]
fn publish_should_error_on_unknown_asset() {
    let mut fixture = project_fixture(0, &[]);

    let res = publish(&mut fixture.store, mock_publish(DocumentId::new(), &["ma"]));

    assert!(matches!(
        res,
        Err(Error::Lookup(LookupError::DoesNotExist(_)))
    ));
}

#[test]
fn next_version_number_should_not_reserve() {
    let fixture = project_fixture(2, &["ma"]);
    let filter = SearchFilter::children_of(DocumentKind::Subset, fixture.asset.id.clone());
    let subset = fixture
        .store
        .find_one(&filter, None)
        .map(|doc| doc.id().clone())
        .expect("fixture should contain the subset");

    // allocation is a read; two reads with no write in between collide
    let first = next_version_number(&fixture.store, &subset);
    let second = next_version_number(&fixture.store, &subset);

    assert_eq!(first, second);
    assert_eq!(VersionNumber::new(3), first);
}
