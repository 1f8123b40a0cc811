//! Unit tests for the bookmark use cases: add, edit, remove, tag and list.
//!
//! Most tests run against the file repository in a temp directory. A
//! recording in-memory repository checks that invalid input never reaches
//! storage.

use std::cell::{Cell, RefCell};
use std::io;

use bkm::repositories::{BookmarkRepository, FileBookmarkRepository};
use bkm::types::bookmark::{Bookmark, BookmarkId, BookmarkTag};
use bkm::types::errors::{BookmarkError, RepositoryError, ValidationError};
use bkm::usecases::{
    AddBookmark, EditBookmark, ListBookmarks, RemoveBookmark, SearchBookmarks, TagBookmark,
    TitlePolicy,
};
use rstest::rstest;
use tempfile::TempDir;

const NO_TAGS: &[&str] = &[];

/// In-memory repository that counts writes and can be told to fail them.
#[derive(Default)]
struct RecordingRepository {
    bookmarks: RefCell<Vec<Bookmark>>,
    saves: Cell<usize>,
    fail_writes: bool,
}

impl RecordingRepository {
    fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    fn write_error(&self) -> RepositoryError {
        RepositoryError::Io {
            path: "memory".into(),
            source: io::Error::new(io::ErrorKind::Other, "disk full"),
        }
    }
}

impl BookmarkRepository for RecordingRepository {
    fn save(&self, bookmark: &Bookmark) -> Result<(), RepositoryError> {
        if self.fail_writes {
            return Err(self.write_error());
        }
        self.saves.set(self.saves.get() + 1);
        let mut all = self.bookmarks.borrow_mut();
        match all.iter().position(|b| b == bookmark) {
            Some(i) => all[i] = bookmark.clone(),
            None => all.push(bookmark.clone()),
        }
        Ok(())
    }

    fn find_by_id(&self, id: &BookmarkId) -> Result<Option<Bookmark>, RepositoryError> {
        Ok(self.bookmarks.borrow().iter().find(|b| b.id() == id).cloned())
    }

    fn find_all(&self) -> Result<Vec<Bookmark>, RepositoryError> {
        Ok(self.bookmarks.borrow().clone())
    }

    fn find_by_tag(&self, tag: &BookmarkTag) -> Result<Vec<Bookmark>, RepositoryError> {
        Ok(self
            .bookmarks
            .borrow()
            .iter()
            .filter(|b| b.has_tag(tag))
            .cloned()
            .collect())
    }

    fn remove(&self, id: &BookmarkId) -> Result<(), RepositoryError> {
        let mut all = self.bookmarks.borrow_mut();
        let before = all.len();
        all.retain(|b| b.id() != id);
        if all.len() == before {
            return Err(RepositoryError::NotFound(id.value().to_string()));
        }
        Ok(())
    }
}

fn file_repo(dir: &TempDir) -> FileBookmarkRepository {
    FileBookmarkRepository::new(dir.path())
}

fn tag_values(bookmark: &Bookmark) -> Vec<&str> {
    bookmark.tags().iter().map(|t| t.value()).collect()
}

// === AddBookmark ===

#[test]
fn test_add_bookmark_persists_trimmed_values() {
    let dir = TempDir::new().unwrap();
    let repo = file_repo(&dir);

    let added = AddBookmark::new(&repo)
        .execute("  https://www.rust-lang.org  ", "  Rust  ", &[" lang ", "systems"])
        .unwrap();

    assert_eq!(added.title().value(), "Rust");
    assert_eq!(added.url().value(), "https://www.rust-lang.org");
    assert_eq!(tag_values(&added), vec!["lang", "systems"]);

    let stored = repo.find_by_id(added.id()).unwrap().unwrap();
    assert_eq!(stored.created_at(), added.created_at());
    assert_eq!(stored.title(), added.title());
}

#[test]
fn test_add_bookmark_generates_distinct_ids() {
    let dir = TempDir::new().unwrap();
    let repo = file_repo(&dir);
    let add = AddBookmark::new(&repo);

    let a = add.execute("https://a.example", "Same", NO_TAGS).unwrap();
    let b = add.execute("https://a.example", "Same", NO_TAGS).unwrap();

    assert_ne!(a.id(), b.id());
    assert_eq!(repo.find_all().unwrap().len(), 2);
}

#[rstest]
#[case("https://a.example", "", "BookmarkTitle cannot be empty")]
#[case("ftp://a.example", "Title", "Invalid protocol: ftp:. Only http and https are allowed")]
#[case("", "Title", "BookmarkUrl cannot be empty")]
fn test_add_bookmark_rejects_invalid_input(
    #[case] url: &str,
    #[case] title: &str,
    #[case] message: &str,
) {
    let repo = RecordingRepository::default();
    let err = AddBookmark::new(&repo).execute(url, title, NO_TAGS).unwrap_err();

    assert_eq!(err.messages(), vec![message.to_string()]);
    assert_eq!(repo.saves.get(), 0);
}

#[test]
fn test_add_bookmark_title_checked_before_url() {
    let repo = RecordingRepository::default();
    let err = AddBookmark::new(&repo).execute("nope", "", NO_TAGS).unwrap_err();
    assert!(matches!(
        err,
        BookmarkError::Validation(ref errors) if errors == &[ValidationError::Empty { field: "BookmarkTitle" }]
    ));
}

#[test]
fn test_add_bookmark_reports_all_bad_tags() {
    let repo = RecordingRepository::default();
    let long = "x".repeat(51);
    let err = AddBookmark::new(&repo)
        .execute("https://a.example", "Title", &["ok", "", long.as_str()])
        .unwrap_err();

    assert_eq!(err.messages().len(), 2);
    assert_eq!(repo.saves.get(), 0);
}

#[test]
fn test_add_bookmark_rejects_duplicate_tags() {
    let repo = RecordingRepository::default();
    let err = AddBookmark::new(&repo)
        .execute("https://a.example", "Title", &["rust", " rust"])
        .unwrap_err();
    assert!(matches!(err, BookmarkError::DuplicateTag(ref t) if t == "rust"));
}

#[test]
fn test_add_bookmark_with_unique_titles() {
    let repo = RecordingRepository::default();
    let add = AddBookmark::new(&repo).with_title_policy(TitlePolicy::RejectDuplicates);

    add.execute("https://a.example", "Docs", NO_TAGS).unwrap();
    let err = add.execute("https://b.example", " Docs ", NO_TAGS).unwrap_err();

    assert_eq!(err.to_string(), "A bookmark titled 'Docs' already exists");
    assert_eq!(repo.find_all().unwrap().len(), 1);
}

#[rstest]
#[case(None, TitlePolicy::AllowDuplicates)]
#[case(Some("false"), TitlePolicy::AllowDuplicates)]
#[case(Some("yes"), TitlePolicy::AllowDuplicates)]
#[case(Some("true"), TitlePolicy::RejectDuplicates)]
#[case(Some(" TRUE "), TitlePolicy::RejectDuplicates)]
fn test_title_policy_from_setting(#[case] value: Option<&str>, #[case] expected: TitlePolicy) {
    assert_eq!(TitlePolicy::from_setting(value), expected);
}

#[test]
fn test_add_bookmark_storage_failure_is_surfaced() {
    let repo = RecordingRepository::failing();
    let err = AddBookmark::new(&repo)
        .execute("https://a.example", "Title", NO_TAGS)
        .unwrap_err();
    assert!(matches!(err, BookmarkError::Storage(RepositoryError::Io { .. })));
}

// === EditBookmark ===

#[test]
fn test_edit_bookmark_replaces_fields_and_keeps_created_at() {
    let dir = TempDir::new().unwrap();
    let repo = file_repo(&dir);
    let original = AddBookmark::new(&repo)
        .execute("https://old.example", "Old", &["a"])
        .unwrap();

    let edited = EditBookmark::new(&repo)
        .execute(original.id().value(), "https://new.example", "New", &["b", "c"])
        .unwrap();

    assert_eq!(edited.id(), original.id());
    assert_eq!(edited.created_at(), original.created_at());
    assert!(edited.updated_at() > original.updated_at());

    let stored = repo.find_by_id(original.id()).unwrap().unwrap();
    assert_eq!(stored.title().value(), "New");
    assert_eq!(stored.url().value(), "https://new.example");
    assert_eq!(tag_values(&stored), vec!["b", "c"]);
    assert_eq!(stored.updated_at(), edited.updated_at());
}

#[test]
fn test_edit_unknown_bookmark_is_not_found() {
    let repo = RecordingRepository::default();
    let id = BookmarkId::generate();
    let err = EditBookmark::new(&repo)
        .execute(id.value(), "https://a.example", "T", NO_TAGS)
        .unwrap_err();
    assert_eq!(err.to_string(), format!("Bookmark not found: {}", id));
}

#[test]
fn test_edit_rejects_malformed_id() {
    let repo = RecordingRepository::default();
    let err = EditBookmark::new(&repo)
        .execute("123", "https://a.example", "T", NO_TAGS)
        .unwrap_err();
    assert!(matches!(err, BookmarkError::Validation(_)));
}

// === RemoveBookmark ===

#[test]
fn test_remove_bookmark_returns_removed() {
    let dir = TempDir::new().unwrap();
    let repo = file_repo(&dir);
    let added = AddBookmark::new(&repo)
        .execute("https://a.example", "Gone soon", NO_TAGS)
        .unwrap();

    let removed = RemoveBookmark::new(&repo).execute(added.id().value()).unwrap();

    assert_eq!(removed.title().value(), "Gone soon");
    assert!(repo.find_all().unwrap().is_empty());
}

#[test]
fn test_remove_bookmark_twice_fails() {
    let dir = TempDir::new().unwrap();
    let repo = file_repo(&dir);
    let added = AddBookmark::new(&repo)
        .execute("https://a.example", "Once", NO_TAGS)
        .unwrap();
    let remove = RemoveBookmark::new(&repo);

    remove.execute(added.id().value()).unwrap();
    assert!(matches!(
        remove.execute(added.id().value()),
        Err(BookmarkError::NotFound(_))
    ));
}

// === TagBookmark ===

#[test]
fn test_tag_add_and_remove_persist() {
    let dir = TempDir::new().unwrap();
    let repo = file_repo(&dir);
    let added = AddBookmark::new(&repo)
        .execute("https://a.example", "Tagged", &["one"])
        .unwrap();
    let tagger = TagBookmark::new(&repo);

    let with_two = tagger.add(added.id().value(), "two").unwrap();
    assert_eq!(tag_values(&with_two), vec!["one", "two"]);

    let with_second = tagger.remove(added.id().value(), "one").unwrap();
    assert_eq!(tag_values(&with_second), vec!["two"]);

    let stored = repo.find_by_id(added.id()).unwrap().unwrap();
    assert_eq!(tag_values(&stored), vec!["two"]);
    assert!(stored.updated_at() > added.updated_at());
}

#[test]
fn test_tag_rejected_change_leaves_store_untouched() {
    let repo = RecordingRepository::default();
    let added = AddBookmark::new(&repo)
        .execute("https://a.example", "Tagged", &["one"])
        .unwrap();
    let tagger = TagBookmark::new(&repo);

    assert!(matches!(
        tagger.add(added.id().value(), "one"),
        Err(BookmarkError::DuplicateTag(_))
    ));
    assert!(matches!(
        tagger.remove(added.id().value(), "missing"),
        Err(BookmarkError::TagNotFound(_))
    ));
    assert_eq!(repo.saves.get(), 1);
}

#[test]
fn test_tag_unknown_bookmark_is_not_found() {
    let repo = RecordingRepository::default();
    let err = TagBookmark::new(&repo)
        .add(BookmarkId::generate().value(), "x")
        .unwrap_err();
    assert!(matches!(err, BookmarkError::NotFound(_)));
}

// === ListBookmarks ===

#[test]
fn test_list_all_and_by_tag() {
    let dir = TempDir::new().unwrap();
    let repo = file_repo(&dir);
    let add = AddBookmark::new(&repo);
    let a = add.execute("https://a.example", "A", &["rust"]).unwrap();
    let b = add.execute("https://b.example", "B", &["go"]).unwrap();

    let list = ListBookmarks::new(&repo);
    assert_eq!(list.execute(None).unwrap(), vec![a.clone(), b]);
    assert_eq!(list.execute(Some(" rust ")).unwrap(), vec![a]);
    assert!(list.execute(Some("python")).unwrap().is_empty());
}

#[test]
fn test_list_rejects_blank_tag() {
    let repo = RecordingRepository::default();
    assert!(matches!(
        ListBookmarks::new(&repo).execute(Some("  ")),
        Err(BookmarkError::Validation(_))
    ));
}

#[test]
fn test_use_cases_accept_trait_objects() {
    let repo = RecordingRepository::default();
    let dyn_repo: &dyn BookmarkRepository = &repo;
    AddBookmark::new(dyn_repo)
        .execute("https://a.example", "Dyn", NO_TAGS)
        .unwrap();
    assert_eq!(ListBookmarks::new(dyn_repo).execute(None).unwrap().len(), 1);
}

// === Timestamp range ===

/// A bookmark already stamped at the last representable millisecond cannot
/// be mutated, and the store stays readable.
#[test]
fn test_mutation_at_latest_timestamp_fails_and_keeps_store_readable() {
    let dir = TempDir::new().unwrap();
    let id = "550e8400-e29b-41d4-a716-446655440000";
    let content = format!(
        r#"[{{"id":"{}","title":"Far future","url":"https://future.example","tags":[],"createdAt":"2024-01-01T00:00:00.000Z","updatedAt":"9999-12-31T23:59:59.999Z"}}]"#,
        id
    );
    let path = dir.path().join("bookmarks.json");
    std::fs::write(&path, &content).unwrap();
    let repo = file_repo(&dir);

    let err = TagBookmark::new(&repo).add(id, "x").unwrap_err();
    assert!(matches!(
        err,
        BookmarkError::Validation(ref errors)
            if matches!(errors.as_slice(), [ValidationError::TimestampOverflow { field: "updatedAt", .. }])
    ));
    assert_eq!(
        err.messages(),
        vec!["updatedAt cannot advance past 9999-12-31T23:59:59.999Z".to_string()]
    );

    assert_eq!(std::fs::read_to_string(&path).unwrap(), content);
    let all = repo.find_all().unwrap();
    assert_eq!(all.len(), 1);
    assert!(all[0].tags().is_empty());
    assert_eq!(SearchBookmarks::new(&repo).execute("future").unwrap().len(), 1);
}
