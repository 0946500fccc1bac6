//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `voxnote_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use voxnote_core::model::note::now_epoch_ms;
use voxnote_core::{
    LogNotifier, MemoryKeyValueStorage, NoteStore, NotesApp, UnsupportedSpeechProvider,
};

fn main() {
    println!("voxnote_core ping={}", voxnote_core::ping());
    println!("voxnote_core version={}", voxnote_core::core_version());

    // Why: run a scripted create/search/delete pass against an in-memory
    // store to validate core wiring independently of any UI runtime.
    let store = match NoteStore::open(Box::new(MemoryKeyValueStorage::new())) {
        Ok(store) => store,
        Err(err) => {
            eprintln!("voxnote_core store open failed: {err}");
            std::process::exit(1);
        }
    };

    let mut app = NotesApp::new(
        store,
        Box::new(UnsupportedSpeechProvider),
        Box::new(LogNotifier),
    );

    if let Err(err) = demo(&mut app) {
        eprintln!("voxnote_core demo failed: {err}");
        std::process::exit(1);
    }
}

fn demo(app: &mut NotesApp) -> Result<(), voxnote_core::StoreError> {
    app.create_note("buy milk")?;
    app.create_note("call mom")?;

    app.set_search("milk");
    let now = now_epoch_ms();
    for card in app.visible_cards(now) {
        println!("match content={:?} age={}", card.content, card.age);
    }

    app.set_search("");
    println!("notes total={}", app.store().len());
    Ok(())
}
