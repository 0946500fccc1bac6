use std::cell::RefCell;
use std::rc::Rc;

use uuid::Uuid;
use voxnote_core::{
    MemoryKeyValueStorage, NoteStore, Notifier, NotesApp, UnsupportedSpeechProvider,
    MSG_NOTE_CREATED, MSG_NOTE_DELETED,
};

#[derive(Clone, Default)]
struct RecordingNotifier {
    messages: Rc<RefCell<Vec<String>>>,
}

impl RecordingNotifier {
    fn taken(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.messages.borrow_mut().push(format!("success:{message}"));
    }

    fn warning(&self, message: &str) {
        self.messages.borrow_mut().push(format!("warning:{message}"));
    }

    fn error(&self, message: &str) {
        self.messages.borrow_mut().push(format!("error:{message}"));
    }
}

fn app_with_notifier(notifier: RecordingNotifier) -> NotesApp {
    let store = NoteStore::open(Box::new(MemoryKeyValueStorage::new())).unwrap();
    NotesApp::new(
        store,
        Box::new(UnsupportedSpeechProvider),
        Box::new(notifier),
    )
}

#[test]
fn search_text_filters_visible_cards_per_keystroke() {
    let mut app = app_with_notifier(RecordingNotifier::default());
    app.create_note("buy milk").unwrap();
    app.create_note("call mom").unwrap();
    app.create_note("milk delivery schedule").unwrap();

    app.set_search("m");
    assert_eq!(app.visible_cards(0).len(), 3);

    app.set_search("mi");
    let cards = app.visible_cards(0);
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].content, "milk delivery schedule");
    assert_eq!(cards[1].content, "buy milk");

    app.set_search("");
    assert_eq!(app.visible_cards(0).len(), 3);
}

#[test]
fn create_note_announces_success() {
    let notifier = RecordingNotifier::default();
    let mut app = app_with_notifier(notifier.clone());

    assert!(app.create_note("hello").unwrap());
    assert_eq!(notifier.taken(), vec![format!("success:{MSG_NOTE_CREATED}")]);
}

#[test]
fn create_note_with_empty_content_warns_instead() {
    let notifier = RecordingNotifier::default();
    let mut app = app_with_notifier(notifier.clone());

    assert!(!app.create_note("").unwrap());
    assert!(app.store().is_empty());
    let messages = notifier.taken();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].starts_with("warning:"));
}

#[test]
fn delete_note_announces_once_per_actual_removal() {
    let notifier = RecordingNotifier::default();
    let mut app = app_with_notifier(notifier.clone());
    app.create_note("to remove").unwrap();
    let id = app.store().notes()[0].id;

    assert!(app.delete_note(id).unwrap());
    assert!(!app.delete_note(id).unwrap());
    assert!(!app.delete_note(Uuid::new_v4()).unwrap());

    let messages = notifier.taken();
    let deletions = messages
        .iter()
        .filter(|m| *m == &format!("success:{MSG_NOTE_DELETED}"))
        .count();
    assert_eq!(deletions, 1);
}

#[test]
fn cards_carry_relative_age_from_now() {
    let mut app = app_with_notifier(RecordingNotifier::default());
    app.create_note("aging note").unwrap();

    let created_at = app.store().notes()[0].created_at;
    let two_days = 2 * 24 * 60 * 60 * 1000;
    let cards = app.visible_cards(created_at + two_days);

    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].age, "2 days ago");
}
