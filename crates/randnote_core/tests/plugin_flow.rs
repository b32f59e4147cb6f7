use randnote_core::{
    CustomDirectorySlot, FsVault, HostResult, InMemorySettingsStore, JsonFileSettingsStore,
    NoteOpener, NoteRecord, NoteSource, Notifier, RandomNotePlugin, RunOutcome, Settings,
};
use std::cell::RefCell;
use std::fs;

struct StaticSource(Vec<NoteRecord>);

impl NoteSource for StaticSource {
    fn list_all_notes(&self) -> HostResult<Vec<NoteRecord>> {
        Ok(self.0.clone())
    }
}

#[derive(Default)]
struct RecordingOpener(RefCell<Vec<String>>);

impl NoteOpener for RecordingOpener {
    fn open(&self, note: &NoteRecord) -> HostResult<()> {
        self.0.borrow_mut().push(note.path.clone());
        Ok(())
    }
}

#[derive(Default)]
struct RecordingNotifier(RefCell<Vec<String>>);

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.0.borrow_mut().push(message.to_string());
    }
}

#[test]
fn empty_vault_yields_no_notes_notice_with_context() {
    let plugin = RandomNotePlugin::load(InMemorySettingsStore::default()).unwrap();
    let source = StaticSource(vec![]);
    let opener = RecordingOpener::default();

    for (id, context) in [
        ("open-random-note", "in vault"),
        ("open-random-note-past-week", "from past 7 days"),
        ("open-random-note-past-month", "from past 30 days"),
        ("open-random-note-past-year", "from past 365 days"),
    ] {
        let notifier = RecordingNotifier::default();
        let outcome = plugin.invoke(id, &source, &opener, &notifier, 0).unwrap();
        assert_eq!(
            outcome,
            RunOutcome::NoNotes {
                context: context.to_string()
            }
        );
        let messages = notifier.0.borrow();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].starts_with("No notes found"));
        assert!(messages[0].contains(context));
    }
    assert!(opener.0.borrow().is_empty());
}

#[test]
fn custom_directory_action_opens_only_matching_notes() {
    let mut settings = Settings::default();
    settings.set_custom_directory(CustomDirectorySlot::Two, "Projects");
    let plugin = RandomNotePlugin::load(InMemorySettingsStore::new(settings)).unwrap();

    let source = StaticSource(vec![
        NoteRecord::new("Projects/a.md", 0),
        NoteRecord::new("Journal/b.md", 0),
    ]);
    let opener = RecordingOpener::default();
    let notifier = RecordingNotifier::default();

    for _ in 0..10 {
        let outcome = plugin
            .invoke("open-random-note-custom-dir-2", &source, &opener, &notifier, 0)
            .unwrap();
        assert_eq!(outcome, RunOutcome::Opened(NoteRecord::new("Projects/a.md", 0)));
    }
    assert!(opener.0.borrow().iter().all(|path| path == "Projects/a.md"));
    assert_eq!(notifier.0.borrow()[0], "Opened random note: a");
}

#[test]
fn custom_directory_with_no_matches_names_directory() {
    let mut settings = Settings::default();
    settings.set_custom_directory(CustomDirectorySlot::One, "Archive");
    let plugin = RandomNotePlugin::load(InMemorySettingsStore::new(settings)).unwrap();

    let notifier = RecordingNotifier::default();
    let outcome = plugin
        .invoke(
            "open-random-note-custom-dir-1",
            &StaticSource(vec![NoteRecord::new("Projects/a.md", 0)]),
            &RecordingOpener::default(),
            &notifier,
            0,
        )
        .unwrap();
    assert!(matches!(outcome, RunOutcome::NoNotes { .. }));
    assert_eq!(
        notifier.0.borrow().as_slice(),
        ["No notes found in Archive directory!"]
    );
}

#[test]
fn settings_edits_keep_commands_in_sync() {
    let mut plugin = RandomNotePlugin::load(InMemorySettingsStore::default()).unwrap();
    assert_eq!(plugin.commands().len(), 4);

    let report = plugin
        .update_custom_directory(CustomDirectorySlot::One, "Daily")
        .unwrap();
    assert_eq!(report.added, vec!["open-random-note-custom-dir-1".to_string()]);
    assert_eq!(plugin.commands().len(), 5);

    let report = plugin
        .update_custom_directory(CustomDirectorySlot::One, "Weekly")
        .unwrap();
    assert_eq!(report.updated, vec!["open-random-note-custom-dir-1".to_string()]);
    let spec = plugin
        .commands()
        .into_iter()
        .find(|spec| spec.id == "open-random-note-custom-dir-1")
        .unwrap();
    assert_eq!(spec.name, "Open random note from \"Weekly\"");

    let report = plugin
        .update_custom_directory(CustomDirectorySlot::One, "   ")
        .unwrap();
    assert_eq!(report.removed, vec!["open-random-note-custom-dir-1".to_string()]);
    assert_eq!(plugin.commands().len(), 4);
}

#[test]
fn filesystem_vault_end_to_end() {
    let vault_dir = tempfile::tempdir().unwrap();
    let data_dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(vault_dir.path().join("Projects")).unwrap();
    fs::write(vault_dir.path().join("Projects/roadmap.md"), "# Roadmap").unwrap();
    fs::write(vault_dir.path().join("loose.md"), "loose").unwrap();

    let mut plugin = RandomNotePlugin::load(JsonFileSettingsStore::in_dir(data_dir.path())).unwrap();
    plugin
        .update_custom_directory(CustomDirectorySlot::Three, "Projects")
        .unwrap();

    let reloaded = RandomNotePlugin::load(JsonFileSettingsStore::in_dir(data_dir.path())).unwrap();
    assert_eq!(reloaded.settings().custom_directory_3, "Projects");

    let vault = FsVault::new(vault_dir.path());
    let opener = RecordingOpener::default();
    let notifier = RecordingNotifier::default();
    let outcome = reloaded
        .invoke(
            "open-random-note-custom-dir-3",
            &vault,
            &opener,
            &notifier,
            randnote_core::now_ms(),
        )
        .unwrap();
    match outcome {
        RunOutcome::Opened(note) => assert_eq!(note.path, "Projects/roadmap.md"),
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert_eq!(
        notifier.0.borrow().as_slice(),
        ["Opened random note: roadmap"]
    );
}
