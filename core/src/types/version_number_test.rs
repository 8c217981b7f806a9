use super::*;
use rand::Rng;

#[test]
fn next_should_increment() {
    let v = VersionNumber::FIRST;

    assert_eq!(VersionNumber::new(2), v.next());
}

#[test]
fn padded_should_zero_pad_to_three() {
    assert_eq!("001", VersionNumber::new(1).padded());
    assert_eq!("042", VersionNumber::new(42).padded());
    assert_eq!("1000", VersionNumber::new(1000).padded());
}

#[test]
fn ordering_should_be_numeric() {
    assert!(VersionNumber::new(2) < VersionNumber::new(10));
}

#[test]
fn ordering_should_match_the_underlying_number() {
    let mut rng = rand::thread_rng();
    for _ in 0..100 {
        let a: i64 = rng.gen_range(1..10_000);
        let b: i64 = rng.gen_range(1..10_000);

        assert_eq!(
            a.cmp(&b),
            VersionNumber::new(a).cmp(&VersionNumber::new(b))
        );
    }
}
