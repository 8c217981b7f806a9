use super::*;
use slate_core::types::{DocumentId, VersionNumber};

fn mock_container(object_name: &str, namespace: &str) -> Container {
    Container {
        object_name: object_name.to_string(),
        name: String::from("modelDefault"),
        namespace: namespace.to_string(),
        asset: String::from("Bruce"),
        subset: String::from("modelDefault"),
        version: VersionNumber::FIRST,
        representation: DocumentId::new(),
        loader: String::from("ReferenceLoader"),
        source: None,
    }
}

#[test]
fn create_grouping_should_reject_duplicates() {
    let mut host = DebugHost::new();
    host.create_grouping("model_SET", Vec::new()).unwrap();

    let res = host.create_grouping("model_SET", Vec::new());
    assert!(matches!(res, Err(Error::ObjectExists(_))));
}

#[test]
fn ls_should_only_list_tagged_groupings() {
    let mut host = DebugHost::new();
    host.create_grouping("plain_SET", Vec::new()).unwrap();

    let container = mock_container("Bruce_01:modelDefault_CON", "Bruce_01");
    host.containerise(&container, Vec::new()).unwrap();

    let listed = host.ls();
    assert_eq!(1, listed.len());
    assert_eq!(container, listed[0]);
}

#[test]
fn reference_round_trip_should_work() {
    let mut host = DebugHost::new();
    let path = Path::new("/publish/modelDefault/v001/modelDefault.ma");
    let (reference_node, nodes) = host.create_reference("Bruce_01", path).unwrap();

    assert!(host.has_namespace("Bruce_01"));
    assert_eq!(path, host.reference_path(&reference_node).unwrap());

    let mut container = mock_container("Bruce_01:modelDefault_CON", "Bruce_01");
    container.object_name = String::from("Bruce_01:modelDefault_CON");
    let mut members = nodes.clone();
    members.push(reference_node.clone());
    host.containerise(&container, members).unwrap();

    assert_eq!(
        Some(reference_node.clone()),
        host.reference_node(&container.object_name)
    );

    host.remove_reference(&reference_node).unwrap();
    assert!(!host.exists(&container.object_name), "grouping should go");
    assert!(host.ls().is_empty());
}

#[test]
fn remove_namespace_should_error_when_already_removed() {
    let mut host = DebugHost::new();
    host.create_reference("Bruce_01", Path::new("/p/file.ma"))
        .unwrap();

    host.remove_namespace("Bruce_01").unwrap();
    let res = host.remove_namespace("Bruce_01");

    assert!(matches!(res, Err(Error::NamespaceAlreadyRemoved(_))));
}
