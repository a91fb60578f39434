use std::fs;
use std::sync::Arc;

use jt_core::user_dict::CustomWords;

use super::*;

// Main page: c, a, t, Sel, then a Term button.
const CAT: [u32; 5] = [4, 5, 2, 6, 0];
const SEL: u32 = 6;

fn write_word_list(dir: &tempfile::TempDir, lines: &[&str]) -> String {
    let path = dir.path().join("words.txt");
    fs::write(&path, lines.join("\n")).unwrap();
    path.to_string_lossy().into_owned()
}

fn make_engine(dir: &tempfile::TempDir, custom: Option<Arc<JtCustomWords>>) -> Arc<JtEngine> {
    let words = write_word_list(dir, &["cat;50;NN", "act;40;VB", "cats;100;NNS"]);
    let dict = JtDictionary::load(words, None, None).unwrap();
    JtEngine::new(dict, custom, None).unwrap()
}

#[test]
fn test_session_types_a_word() {
    let dir = tempfile::tempdir().unwrap();
    let session = make_engine(&dir, None).create_session();

    let mut last = None;
    for index in CAT {
        last = Some(session.handle_press(index));
    }
    let resp = last.unwrap();
    assert_eq!(resp.snapshot.output_text, "Cat ");
    assert_eq!(resp.snapshot.page, "Main");
    assert_eq!(resp.snapshot.button_labels.len(), 8);
    assert!(resp.requests.is_empty());
}

#[test]
fn test_candidates_cross_the_boundary() {
    let dir = tempfile::tempdir().unwrap();
    let session = make_engine(&dir, None).create_session();
    for index in &CAT[..3] {
        session.handle_press(*index);
    }
    let resp = session.handle_press(SEL);
    let snap = resp.snapshot;
    assert_eq!(snap.selected, Some(0));
    assert_eq!(snap.candidates[0].kind, JtCandidateKind::Exact);
    assert_eq!(snap.candidates[0].output, "Cat");
    assert_eq!(snap.preview_text, "Cat");
}

#[test]
fn test_sessions_are_independent() {
    let dir = tempfile::tempdir().unwrap();
    let engine = make_engine(&dir, None);
    let a = engine.create_session();
    let b = engine.create_session();
    a.handle_press(4);
    assert!(b.snapshot().key_history_text.is_empty());

    a.reset();
    assert_eq!(a.snapshot().key_history_text, "");
}

#[test]
fn test_custom_word_is_persisted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("custom.txt");
    let store = JtCustomWords::open(path.to_string_lossy().into_owned()).unwrap();
    let session = make_engine(&dir, Some(Arc::clone(&store))).create_session();

    session.offer_custom_word("Zelda".to_string());
    session.handle_press(SEL);
    let resp = session.handle_press(0);
    assert_eq!(resp.snapshot.output_text, "Zelda ");
    assert_eq!(
        resp.requests,
        [JtRequest::PersistCustomWord {
            word: "Zelda".to_string()
        }]
    );

    assert_eq!(store.list(), ["Zelda"]);
    let on_disk = CustomWords::open(&path).unwrap();
    assert_eq!(on_disk.list(), ["Zelda"]);
}

#[test]
fn test_dictionary_snapshot_roundtrip_and_lookup() {
    let dir = tempfile::tempdir().unwrap();
    let words = write_word_list(&dir, &["cat;50;NN", "cats;100;NNS", "act;40;VB"]);
    let dict = JtDictionary::load(words, None, None).unwrap();
    let compiled = dir.path().join("words.jtd");
    dict.save(compiled.to_string_lossy().into_owned()).unwrap();

    let reopened = JtDictionary::open(compiled.to_string_lossy().into_owned()).unwrap();
    assert_eq!(reopened.stats().entries, 3);
    let found: Vec<String> = reopened
        .lookup("cat".to_string(), 10)
        .into_iter()
        .map(|c| c.output)
        .collect();
    assert_eq!(found, ["cat", "cats"]);
    assert!(reopened.lookup("c@t".to_string(), 10).is_empty());
}

#[test]
fn test_missing_dictionary_is_io_error() {
    let err = JtDictionary::load("/nonexistent/words.txt".to_string(), None, None)
        .err()
        .unwrap();
    assert!(matches!(err, JtError::Io { .. }));
}

#[test]
fn test_bad_page_graph_is_invalid_data() {
    let dir = tempfile::tempdir().unwrap();
    let words = write_word_list(&dir, &["cat;50;NN"]);
    let dict = JtDictionary::load(words, None, None).unwrap();
    let err = JtEngine::new(dict, None, Some("not = [valid".to_string()))
        .err()
        .unwrap();
    assert!(matches!(err, JtError::InvalidData { .. }));
}
