use gradebook_core::{
    FileConnectionProvider, SqliteSubjectRepository, Subject, SubjectRepository,
};
use tempfile::TempDir;

fn file_repo() -> (TempDir, SqliteSubjectRepository<FileConnectionProvider>) {
    let dir = tempfile::tempdir().unwrap();
    let provider = FileConnectionProvider::new(dir.path().join("gradebook.db"));
    (dir, SqliteSubjectRepository::new(provider))
}

#[test]
fn append_then_load_all_roundtrip() {
    let (_dir, repo) = file_repo();

    repo.append("alice", "Math", 77).unwrap();

    let loaded = repo.load_all("alice").unwrap();
    assert!(loaded.contains(&Subject::new("alice", "Math", 77)));
}

#[test]
fn load_all_for_unknown_owner_is_empty() {
    let (_dir, repo) = file_repo();
    repo.append("alice", "Math", 77).unwrap();

    assert!(repo.load_all("nobody").unwrap().is_empty());
}

#[test]
fn load_all_is_scoped_by_owner_and_keeps_insertion_order() {
    let (_dir, repo) = file_repo();
    repo.append("alice", "Physics", 60).unwrap();
    repo.append("bob", "Physics", 99).unwrap();
    repo.append("alice", "Art", 88).unwrap();
    repo.append("alice", "Biology", 71).unwrap();

    let names: Vec<_> = repo
        .load_all("alice")
        .unwrap()
        .into_iter()
        .map(|subject| subject.name)
        .collect();
    assert_eq!(names, vec!["Physics", "Art", "Biology"]);

    let bob = repo.load_all("bob").unwrap();
    assert_eq!(bob, vec![Subject::new("bob", "Physics", 99)]);
}

#[test]
fn duplicates_are_stored_as_separate_rows() {
    let (_dir, repo) = file_repo();
    repo.append("alice", "Math", 50).unwrap();
    repo.append("alice", "Math", 50).unwrap();

    assert_eq!(repo.load_all("alice").unwrap().len(), 2);
}

#[test]
fn marks_are_stored_without_range_checks() {
    let (_dir, repo) = file_repo();
    repo.append("alice", "Bonus", 150).unwrap();
    repo.append("alice", "Penalty", -10).unwrap();
    repo.append("alice", "Zero", 0).unwrap();

    let marks: Vec<_> = repo
        .load_all("alice")
        .unwrap()
        .into_iter()
        .map(|subject| subject.marks)
        .collect();
    assert_eq!(marks, vec![150, -10, 0]);
}

#[test]
fn repeated_reads_of_unchanged_data_are_stable() {
    let (_dir, repo) = file_repo();
    repo.append("alice", "Math", 10).unwrap();
    repo.append("alice", "Music", 20).unwrap();

    assert_eq!(repo.load_all("alice").unwrap(), repo.load_all("alice").unwrap());
}

#[test]
fn rows_survive_a_new_provider_for_the_same_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gradebook.db");

    SqliteSubjectRepository::new(FileConnectionProvider::new(&path))
        .append("alice", "Math", 42)
        .unwrap();

    let reopened = SqliteSubjectRepository::new(FileConnectionProvider::new(&path));
    assert_eq!(
        reopened.load_all("alice").unwrap(),
        vec![Subject::new("alice", "Math", 42)]
    );
}

#[test]
fn subject_serializes_with_field_names() {
    let json = serde_json::to_value(Subject::new("alice", "Math", 77)).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "owner": "alice", "name": "Math", "marks": 77 })
    );
}
