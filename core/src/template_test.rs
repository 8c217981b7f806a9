use super::*;

fn data(entries: &[(&str, &str)]) -> TemplateData {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn format_should_resolve_publish_path() {
    let template = PathTemplate::parse(
        "{root}/{project}/{silo}/{asset}/publish/{subset}/v{version:0>3}/{subset}.{representation}",
    )
    .unwrap();

    let path = template
        .format(&data(&[
            ("root", "/projects"),
            ("project", "hulk"),
            ("silo", "assets"),
            ("asset", "Bruce"),
            ("subset", "modelDefault"),
            ("version", "2"),
            ("representation", "ma"),
        ]))
        .unwrap();

    assert_eq!(
        "/projects/hulk/assets/Bruce/publish/modelDefault/v002/modelDefault.ma",
        path
    );
}

#[test]
fn format_should_error_on_missing_value() {
    let template = PathTemplate::parse("{root}/{project}").unwrap();
    let res = template.format(&data(&[("root", "/projects")]));

    assert!(matches!(
        res,
        Err(Error::Template(TemplateError::MissingValue(key))) if key == "project"
    ));
}

#[test]
fn parse_should_reject_unclosed_placeholder() {
    let res = PathTemplate::parse("{root}/{project");

    assert!(matches!(
        res,
        Err(Error::Template(TemplateError::Unclosed(_)))
    ));
}

#[test]
fn parse_should_reject_unknown_format_spec() {
    let res = PathTemplate::parse("{version:>3}");

    assert!(matches!(
        res,
        Err(Error::Template(TemplateError::UnsupportedSpec(_)))
    ));
}

#[test]
fn pad_should_not_truncate_wide_values() {
    let template = PathTemplate::parse("v{version:0>3}").unwrap();
    let path = template.format(&data(&[("version", "1000")])).unwrap();

    assert_eq!("v1000", path);
}

#[test]
fn keys_should_list_placeholders_in_order() {
    let template = PathTemplate::parse("{root}/{project}/{asset}").unwrap();

    assert_eq!(vec!["root", "project", "asset"], template.keys());
}
