use super::*;

#[test]
fn test_timer_records_name_and_kind() {
    let timer = OperationTimer::new("entity_list").kind("policy");
    assert_eq!(timer.name, "entity_list");
    assert_eq!(timer.kind, Some("policy"));
}

#[test]
fn test_elapsed_grows() {
    let timer = OperationTimer::new("sleepy");
    std::thread::sleep(Duration::from_millis(5));
    assert!(timer.elapsed() >= Duration::from_millis(5));
}

#[test]
fn test_request_id_is_short_hex() {
    let id = generate_request_id();
    assert_eq!(id.len(), 12);
    assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn test_request_ids_differ() {
    assert_ne!(generate_request_id(), generate_request_id());
}
