//! Write behaviour of create, update and delete.

use sheetdb_testkit::prelude::*;

#[test]
fn ids_are_distinct_and_positive() {
    let test_store = TestStore::memory();
    let a = test_store.create(sample_student("Ana", 1)).unwrap();
    let b = test_store.create(sample_student("Ben", 1)).unwrap();

    assert_eq!(a.meta.id, 1);
    assert!(b.meta.id > 0);
    assert_ne!(a.meta.id, b.meta.id);
}

#[test]
fn second_delete_returns_false_without_writing() {
    let test_store = TestStore::memory();
    test_store.create(sample_student("Ana", 1)).unwrap();

    assert!(test_store.delete(1).unwrap());
    let writes = test_store.writes();

    assert!(!test_store.delete(1).unwrap());
    assert_eq!(test_store.writes(), writes);
}

#[test]
fn update_of_unknown_id_is_a_silent_no_op() {
    let test_store = TestStore::memory();
    test_store.create(sample_student("Ana", 1)).unwrap();
    let writes = test_store.writes();
    let before = test_store.get_all().unwrap();

    let mut ghost = sample_student("Ghost", 9);
    ghost.meta.id = 42;
    let returned = test_store.update(ghost.clone()).unwrap();

    assert_eq!(returned, ghost);
    assert_eq!(test_store.writes(), writes);
    assert_eq!(test_store.get_all().unwrap(), before);
}

#[test]
fn file_is_not_touched_by_no_op_update() {
    with_file_store(|store, path| {
        store.create(sample_student("Ana", 1)).unwrap();
        let before = std::fs::read(path).unwrap();

        let mut ghost = sample_student("Ghost", 9);
        ghost.meta.id = 42;
        store.update(ghost).unwrap();

        assert_eq!(std::fs::read(path).unwrap(), before);
    });
}

#[test]
fn service_reports_not_found() {
    let service = StudentService::new(TestStore::memory().store);

    assert!(matches!(service.get(5), Err(CoreError::NotFound { id: 5, .. })));
    assert!(matches!(service.delete(5), Err(CoreError::NotFound { .. })));
}
