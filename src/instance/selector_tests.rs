use super::*;
use crate::instance::InstanceStatus;

fn vm(name: &str, status: InstanceStatus, service: &str, created: &str) -> InstanceDescriptor {
    InstanceDescriptor::new(name, status, created)
        .with_zone("us-central1-a")
        .with_label(SERVICE_LABEL_KEY, service)
}

fn running(name: &str, service: &str, created: &str) -> InstanceDescriptor {
    vm(name, InstanceStatus::Running, service, created)
}

#[test]
fn test_selects_oldest_matching_service() {
    let instances = vec![
        running("a", "foo", "2024-01-01T00:00:00Z"),
        running("b", "foo", "2023-06-01T00:00:00Z"),
        running("c", "bar", "2020-01-01T00:00:00Z"),
    ];

    let oldest = select_oldest_running(&instances, "foo");

    assert_eq!(oldest.name, "b");
    assert_eq!(oldest.zone, "us-central1-a");
    assert_eq!(oldest.created_at, instances[1].created_at());
}

#[test]
fn test_non_running_instances_are_ignored() {
    let instances = vec![vm("a", InstanceStatus::Terminated, "foo", "2020-01-01T00:00:00Z")];

    let oldest = select_oldest_running(&instances, "foo");

    assert!(!oldest.is_found());
    assert_eq!(oldest, Candidate::none());
}

#[test]
fn test_empty_input_is_not_found() {
    let instances: Vec<InstanceDescriptor> = Vec::new();

    let oldest = select_oldest_running(&instances, "foo");

    assert_eq!(oldest.name, "");
    assert!(oldest.created_at.is_none());
}

#[test]
fn test_missing_service_label_is_not_a_match() {
    let unlabelled = InstanceDescriptor::new("bare", InstanceStatus::Running, "2019-01-01T00:00:00Z")
        .with_label("team", "infra");
    let instances = vec![unlabelled, running("a", "foo", "2024-01-01T00:00:00Z")];

    let oldest = select_oldest_running(&instances, "foo");

    assert_eq!(oldest.name, "a");
}

#[test]
fn test_missing_label_lookup_reports_instance() {
    let unlabelled = InstanceDescriptor::new("bare", InstanceStatus::Running, "2019-01-01T00:00:00Z");

    let err = service_label(&unlabelled).unwrap_err();

    assert!(matches!(err, ReaperError::MissingLabel(ref name) if name == "bare"));
}

#[test]
fn test_unparseable_timestamp_is_skipped() {
    let instances = vec![
        running("broken", "foo", "not-a-time"),
        running("a", "foo", "2024-01-01T00:00:00Z"),
    ];

    let oldest = select_oldest_running(&instances, "foo");

    assert_eq!(oldest.name, "a");
}

#[test]
fn test_ties_keep_first_seen() {
    let instances = vec![
        running("first", "foo", "2023-01-01T00:00:00Z"),
        running("second", "foo", "2023-01-01T00:00:00Z"),
    ];

    let oldest = select_oldest_running(&instances, "foo");

    assert_eq!(oldest.name, "first");
}

#[test]
fn test_offsets_are_compared_as_instants() {
    // 09:00-08:00 is 17:00Z, later than 12:00Z.
    let instances = vec![
        running("pacific", "foo", "2024-03-01T09:00:00-08:00"),
        running("utc", "foo", "2024-03-01T12:00:00+00:00"),
    ];

    let oldest = select_oldest_running(&instances, "foo");

    assert_eq!(oldest.name, "utc");
}

#[test]
fn test_never_selects_non_matching_and_is_minimal() {
    let instances = vec![
        running("a", "foo", "2022-05-01T00:00:00Z"),
        vm("b", InstanceStatus::Stopped, "foo", "2010-01-01T00:00:00Z"),
        running("c", "foo", "2021-05-01T00:00:00Z"),
        running("d", "bar", "2000-01-01T00:00:00Z"),
        running("e", "foo", "2023-05-01T00:00:00Z"),
        vm("f", InstanceStatus::Suspended, "foo", "2011-01-01T00:00:00Z"),
    ];

    let oldest = select_oldest_running(&instances, "foo");
    let chosen = instances.iter().find(|i| i.name == oldest.name).unwrap();

    assert!(chosen.is_running());
    assert_eq!(chosen.labels.get(SERVICE_LABEL_KEY).map(String::as_str), Some("foo"));
    for other in instances
        .iter()
        .filter(|i| i.is_running() && i.labels.get(SERVICE_LABEL_KEY).map(String::as_str) == Some("foo"))
    {
        assert!(oldest.created_at <= other.created_at());
    }
    assert_eq!(oldest.name, "c");
}

#[test]
fn test_selection_is_idempotent() {
    let instances = vec![
        running("a", "foo", "2024-01-01T00:00:00Z"),
        running("b", "foo", "2023-06-01T00:00:00Z"),
    ];

    let first = select_oldest_running(&instances, "foo");
    let second = select_oldest_running(&instances, "foo");

    assert_eq!(first, second);
}

#[test]
fn test_order_does_not_change_result() {
    let mut instances = vec![
        running("a", "foo", "2024-01-01T00:00:00Z"),
        running("b", "foo", "2023-06-01T00:00:00Z"),
        running("c", "foo", "2023-09-01T00:00:00Z"),
    ];
    let forward = select_oldest_running(&instances, "foo");
    instances.reverse();
    let backward = select_oldest_running(&instances, "foo");

    assert_eq!(forward, backward);
}
