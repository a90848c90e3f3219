use std::fs;
use std::sync::Mutex;
use std::thread::sleep;
use std::time::Duration;
use tempfile::TempDir;

use amoozdb_core::ingest::SegmentSource;
use amoozdb_core::traits::SegmentStore;
use amoozdb_core::{IndexedSegment, SavedSegment};

#[derive(Default)]
struct RecordingStore {
    seen: Mutex<Vec<IndexedSegment>>,
}

impl SegmentStore for RecordingStore {
    fn persist(&self, segment: &IndexedSegment) -> anyhow::Result<SavedSegment> {
        self.seen.lock().unwrap().push(segment.clone());
        Ok(SavedSegment { partition: "amooozeshyar-test".into(), id: segment.segment_id() })
    }
}

struct FailingStore;

impl SegmentStore for FailingStore {
    fn persist(&self, _segment: &IndexedSegment) -> anyhow::Result<SavedSegment> {
        Err(anyhow::anyhow!("connection refused"))
    }
}

#[test]
fn before_save_stamps_current_instant() {
    let mut segment = IndexedSegment::new("سلام");
    let before = chrono::Utc::now();
    segment.before_save();
    let after = chrono::Utc::now();

    let created_at = segment.created_at.expect("stamped");
    assert!(created_at >= before && created_at <= after);
    assert_eq!(segment.created_timestamp, Some(created_at.timestamp_millis()));
}

#[test]
fn before_save_overwrites_caller_values_and_restamps() {
    let mut segment = IndexedSegment::new("سلام");
    segment.created_timestamp = Some(1);
    segment.before_save();
    let first = segment.created_timestamp.expect("stamped");
    assert!(first > 1);

    sleep(Duration::from_millis(10));
    segment.before_save();
    let second = segment.created_timestamp.expect("stamped");
    assert!(second > first, "second stamp {second} should follow {first}");
}

#[test]
fn save_stamps_then_delegates_with_text_untouched() {
    let store = RecordingStore::default();
    let mut segment = IndexedSegment::new("و این یک آزمایش است");
    let saved = segment.save(&store).expect("save");

    let seen = store.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0], segment);
    assert_eq!(seen[0].text, "و این یک آزمایش است");
    assert_eq!(saved.id, segment.segment_id());
}

#[test]
fn save_passes_store_errors_through() {
    let mut segment = IndexedSegment::new("سلام");
    let err = segment.save(&FailingStore).unwrap_err();
    assert_eq!(err.to_string(), "connection refused");
    assert!(segment.created_at.is_some());
}

#[test]
fn source_reads_paragraphs_from_txt_files() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path();
    fs::create_dir_all(dir.join("nested")).unwrap();
    fs::write(dir.join("a.txt"), "اول\n\nدوم").unwrap();
    fs::write(dir.join("nested/b.txt"), "سوم").unwrap();
    fs::write(dir.join("skip.md"), "نه").unwrap();

    let segments = SegmentSource::new().read_directory(dir).expect("read");
    let texts: Vec<&str> = segments.iter().map(|s| s.text.as_str()).collect();
    assert_eq!(texts, vec!["اول", "دوم", "سوم"]);
    assert!(segments.iter().all(|s| s.created_at.is_none()));

    let limited = SegmentSource::with_limit(1).read_directory(dir).expect("read limited");
    assert_eq!(limited.len(), 2);
}
