//! Dev utils for document tests.
use crate::types::DataMap;
use fake::faker::lorem::raw::{Word, Words};
use fake::locales::EN;
use fake::Fake;
use serde_json::Value;

/// Creates a random document name.
pub fn mock_name() -> String {
    Word(EN).fake()
}

/// Creates a random free-form data map.
pub fn mock_data() -> DataMap {
    let tags: Vec<String> = Words(EN, 1..8).fake();

    let mut data = DataMap::new();
    data.insert(String::from("tags"), Value::from(tags));
    data.insert(String::from("label"), Value::from(mock_name()));
    data.insert(
        String::from("frame_start"),
        Value::from((1..1001).fake::<i64>()),
    );

    data
}
