use super::*;
use rstest::rstest;

fn env(pairs: &[(&str, &str)]) -> EnvironmentMap {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn set(apps: &[(&str, &[(&str, &str)])]) -> EnvironmentSet {
    apps.iter()
        .map(|(name, pairs)| (name.to_string(), env(pairs)))
        .collect()
}

fn assert_lossless(environments: &EnvironmentSet, partition: &Partition) {
    for (app, original) in environments {
        let rebuilt = partition.reconstruct(app, original.keys()).unwrap();
        assert_eq!(&rebuilt, original, "environment of {app} was not preserved");
    }
}

#[test]
fn test_shared_key_with_diverging_neighbour() {
    let environments = set(&[
        ("A", &[("K1", "v"), ("K2", "a")]),
        ("B", &[("K1", "v"), ("K2", "b")]),
        ("C", &[("K1", "v")]),
    ]);

    let partition = Partition::compute(&environments);

    assert_eq!(partition.shared(), &env(&[("K1", "v")]));
    assert_eq!(partition.residual("A"), Some(&env(&[("K2", "a")])));
    assert_eq!(partition.residual("B"), Some(&env(&[("K2", "b")])));
    assert_eq!(partition.residual("C"), Some(&EnvironmentMap::new()));
    assert_eq!(partition.fully_shared_apps().collect::<Vec<_>>(), vec!["C"]);
    assert_lossless(&environments, &partition);
}

#[test]
fn test_single_application_shares_nothing() {
    let environments = set(&[("A", &[("X", "1")])]);

    let partition = Partition::compute(&environments);

    assert!(partition.shared().is_empty());
    assert_eq!(partition.residual("A"), Some(&env(&[("X", "1")])));
}

#[test]
fn test_majority_does_not_override_disagreement() {
    let environments = set(&[
        ("app1", &[("LEVEL", "X")]),
        ("app2", &[("LEVEL", "X")]),
        ("app3", &[("LEVEL", "Y")]),
    ]);

    let partition = Partition::compute(&environments);

    assert!(!partition.shared().contains_key("LEVEL"));
    for (app, value) in [("app1", "X"), ("app2", "X"), ("app3", "Y")] {
        assert_eq!(partition.residual(app), Some(&env(&[("LEVEL", value)])));
    }
}

#[rstest]
#[case::key_unique_to_one_app(
    vec![("a", vec![("ONLY", "1")]), ("b", vec![("OTHER", "2")])],
    vec![]
)]
#[case::identical_everywhere(
    vec![("a", vec![("K", "1")]), ("b", vec![("K", "1")]), ("c", vec![("K", "1")])],
    vec![("K", "1")]
)]
#[case::identical_in_two_of_three(
    vec![("a", vec![("K", "1")]), ("b", vec![("K", "1")]), ("c", vec![("Z", "9")])],
    vec![("K", "1")]
)]
#[case::empty_string_values_are_values(
    vec![("a", vec![("EMPTY", "")]), ("b", vec![("EMPTY", "")])],
    vec![("EMPTY", "")]
)]
#[case::empty_and_non_empty_values_differ(
    vec![("a", vec![("E", "")]), ("b", vec![("E", "x")])],
    vec![]
)]
#[case::all_values_differ(
    vec![("a", vec![("K", "1")]), ("b", vec![("K", "2")])],
    vec![]
)]
#[case::mixed_key_counts(
    vec![("a", vec![("K", "1"), ("L", "2"), ("M", "3")]), ("b", vec![("K", "1")])],
    vec![("K", "1")]
)]
fn test_shared_map(
    #[case] apps: Vec<(&str, Vec<(&str, &str)>)>,
    #[case] expected_shared: Vec<(&str, &str)>,
) {
    let environments: EnvironmentSet = apps
        .iter()
        .map(|(name, pairs)| (name.to_string(), env(pairs)))
        .collect();
    let partition = Partition::compute(&environments);
    assert_eq!(partition.shared(), &env(&expected_shared));
    assert_lossless(&environments, &partition);
}

#[test]
fn test_empty_value_stays_in_residual_when_another_app_differs() {
    let environments = set(&[("a", &[("E", "")]), ("b", &[("E", "x")])]);

    let partition = Partition::compute(&environments);

    assert!(partition.shared().is_empty());
    assert_eq!(partition.residual("a"), Some(&env(&[("E", "")])));
    assert_eq!(partition.residual("b"), Some(&env(&[("E", "x")])));
    assert_eq!(partition.fully_shared_apps().count(), 0);
}

#[test]
fn test_no_key_appears_in_shared_and_residual_with_same_value() {
    let environments = set(&[
        ("a", &[("K", "1"), ("L", "x"), ("M", "m")]),
        ("b", &[("K", "1"), ("L", "y")]),
        ("c", &[("K", "1"), ("M", "m"), ("N", "n")]),
    ]);

    let partition = Partition::compute(&environments);

    for (_, residual) in partition.residuals() {
        for (key, value) in residual {
            assert_ne!(partition.shared().get(key), Some(value));
        }
    }
    for (key, value) in partition.shared() {
        let owners = environments
            .values()
            .filter(|env| env.get(key) == Some(value))
            .count();
        assert!(owners >= 2, "{key} promoted with only {owners} owner(s)");
    }
    assert_lossless(&environments, &partition);
}

#[test]
fn test_partition_is_idempotent() {
    let environments = set(&[
        ("a", &[("K", "1"), ("L", "x")]),
        ("b", &[("K", "1"), ("L", "y")]),
    ]);

    assert_eq!(
        Partition::compute(&environments),
        Partition::compute(&environments)
    );
}

#[test]
fn test_repeated_runs_agree() {
    // Each run indexes through fresh hash maps with their own iteration order.
    let environments = set(&[
        ("web", &[("DB", "pg"), ("PORT", "8080"), ("MODE", "web")]),
        ("worker", &[("MODE", "worker"), ("DB", "pg")]),
        ("cron", &[("DB", "pg"), ("PORT", "8080")]),
    ]);

    let expected = Partition::compute(&environments);
    for _ in 0..32 {
        assert_eq!(Partition::compute(&environments), expected);
    }
    assert_eq!(expected.shared(), &env(&[("DB", "pg"), ("PORT", "8080")]));
    assert_eq!(expected.residual("cron"), Some(&EnvironmentMap::new()));
}

#[test]
fn test_empty_input() {
    let partition = Partition::compute(&EnvironmentSet::new());
    assert!(partition.is_empty());
    assert_eq!(partition.residuals().count(), 0);
}

#[test]
fn test_reconstruct_unknown_app() {
    let partition = Partition::compute(&set(&[("a", &[("K", "1")])]));
    let keys = vec!["K".to_string()];
    assert_eq!(partition.reconstruct("missing", keys.iter()), None);
}
