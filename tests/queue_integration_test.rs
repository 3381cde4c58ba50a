//! Queue integration tests
//!
//! Tests for queue construction, advancement, and removal boundary logic.
//! Focus on real-world scenarios: playing through an album, skip buttons,
//! UI-driven batch removal.

use playback_queue::{Queue, QueueError, RepeatMode, ShiftOptions};

#[derive(Debug, Clone, PartialEq)]
struct Track {
    id: String,
    title: String,
}

fn track(id: &str, title: &str) -> Track {
    Track {
        id: id.to_string(),
        title: title.to_string(),
    }
}

fn album_queue(count: usize) -> Queue<Track> {
    let mut queue = Queue::new();
    for i in 1..=count {
        queue.append(track(&i.to_string(), &format!("Track {}", i)));
    }
    queue
}

fn ids(queue: &Queue<Track>) -> Vec<String> {
    queue.iter().map(|t| t.id.clone()).collect()
}

// ===== Playing through an album =====

#[test]
fn test_play_through_album_no_repeat() {
    let mut queue = album_queue(3);

    let mut played = Vec::new();
    while let Some(current) = queue.current() {
        played.push(current.id.clone());
        queue.shift(ShiftOptions::default()).unwrap();
    }

    assert_eq!(played, vec!["1", "2", "3"]);
    assert!(queue.is_empty());
    assert_eq!(queue.current(), None);
}

#[test]
fn test_repeat_all_cycles_forever() {
    let mut queue = album_queue(3);
    queue.set_repeat_mode(RepeatMode::RepeatAll);

    // Two full cycles: every track comes around twice, nothing is lost
    let mut played = Vec::new();
    for _ in 0..6 {
        played.push(queue.current().unwrap().id.clone());
        queue.shift(ShiftOptions::default()).unwrap();
    }

    assert_eq!(played, vec!["1", "2", "3", "1", "2", "3"]);
    assert_eq!(queue.len(), 3);
}

#[test]
fn test_repeat_one_track_finished_vs_user_skip() {
    let mut queue = album_queue(2);
    queue.set_repeat_mode(RepeatMode::RepeatOne);

    // Track finished naturally: player asks to honor repetition
    queue
        .shift(ShiftOptions {
            times: 1,
            ignore_repetition: false,
        })
        .unwrap();
    assert_eq!(queue.current().unwrap().id, "1");

    // User hits next: the advance is forced
    queue.shift(ShiftOptions::default()).unwrap();
    assert_eq!(queue.current().unwrap().id, "2");
}

#[test]
fn test_repeat_all_index_renders_track_x_of_n() {
    let mut queue = album_queue(5);
    queue.set_repeat_mode(RepeatMode::RepeatAllIndex);

    for expected in [1, 2, 3, 4, 0, 1] {
        queue.shift(ShiftOptions::default()).unwrap();
        assert_eq!(queue.current_index(), expected);
        assert_eq!(queue.len(), 5, "rotation must not drop tracks");
    }

    // After six advances on a five-track cycle we are back past the start
    assert_eq!(queue.current().unwrap().id, "2");
}

// ===== Skip button =====

#[test]
fn test_skip_several_tracks_at_once() {
    let mut queue = album_queue(5);

    queue
        .shift(ShiftOptions {
            times: 3,
            ..Default::default()
        })
        .unwrap();

    assert_eq!(ids(&queue), vec!["4", "5"]);
}

#[test]
fn test_skip_with_bad_count_is_loud() {
    let mut queue = album_queue(3);

    let err = queue
        .shift(ShiftOptions {
            times: -1,
            ..Default::default()
        })
        .unwrap_err();

    assert_eq!(err, QueueError::InvalidShiftCount(-1));
    assert_eq!(queue.len(), 3, "failed shift must not mutate");
}

// ===== UI-driven removal =====

#[test]
fn test_remove_selected_rows() {
    let mut queue = album_queue(5);

    // User selects rows 1 and 3 in the up-next list
    let removed = queue.remove_multi(&[1, 3]);

    assert_eq!(
        removed.iter().map(|t| t.id.as_str()).collect::<Vec<_>>(),
        vec!["2", "4"]
    );
    assert_eq!(ids(&queue), vec!["1", "3", "5"]);
}

#[test]
fn test_stale_ui_indices_are_quiet() {
    let mut queue = album_queue(3);

    // The UI raced a refresh and sent indices that no longer exist
    assert_eq!(queue.remove_at(7), None);
    assert!(queue.remove_multi(&[5, 6, 7]).is_empty());
    assert_eq!(queue.len(), 3);
}

#[test]
fn test_current_track_cannot_be_removed_by_index() {
    let mut queue = album_queue(3);

    assert_eq!(queue.remove_at(0), None);
    assert!(queue.remove_multi(&[0]).is_empty());
    let removed = queue.remove_range(0.0, 1.0).unwrap();
    assert!(removed.is_empty());

    assert_eq!(queue.current().unwrap().id, "1");
    assert_eq!(queue.len(), 3);
}

#[test]
fn test_clear_up_next_section() {
    let mut queue = album_queue(6);

    // "Clear up next" removes everything after the playing track
    let up_next_end = queue.len() as f64;
    let removed = queue.remove_range(1.0, up_next_end).unwrap();

    assert_eq!(removed.len(), 5);
    assert_eq!(ids(&queue), vec!["1"]);
}

#[test]
fn test_remove_tracks_by_artist_filter() {
    let mut queue: Queue<Track> = Queue::new();
    queue.append(track("1", "Keep"));
    queue.append(track("2", "Drop"));
    queue.append(track("3", "Keep"));
    queue.append(track("4", "Drop"));

    let removed = queue.remove(|t| t.title == "Drop");

    assert_eq!(
        removed.iter().map(|t| t.id.as_str()).collect::<Vec<_>>(),
        vec!["2", "4"]
    );
    assert_eq!(ids(&queue), vec!["1", "3"]);
}

// ===== Shuffle =====

#[test]
fn test_shuffle_never_interrupts_current_track() {
    let mut queue = album_queue(10);
    queue.shift(ShiftOptions::default()).unwrap();
    let now_playing = queue.current().unwrap().clone();

    queue.shuffle();

    assert_eq!(queue.current(), Some(&now_playing));
    assert_eq!(queue.len(), 10 - 1);
}

#[test]
fn test_shuffle_then_play_through_visits_everything() {
    let mut queue = album_queue(8);
    queue.shuffle();

    let mut played: Vec<String> = Vec::new();
    while let Some(current) = queue.current() {
        played.push(current.id.clone());
        queue.shift(ShiftOptions::default()).unwrap();
    }

    played.sort_unstable();
    let mut expected: Vec<String> = (1..=8).map(|i| i.to_string()).collect();
    expected.sort_unstable();
    assert_eq!(played, expected);
}

// ===== Mode changes from the frontend =====

#[test]
fn test_frontend_mode_strings() {
    let mut queue = album_queue(2);

    queue.set_repeat_mode_name("REPEAT-ALL");
    assert_eq!(queue.repeat_mode(), RepeatMode::RepeatAll);

    // Garbage from an old client version changes nothing
    queue.set_repeat_mode_name("repeat-all");
    queue.set_repeat_mode_name("SHUFFLE");
    assert_eq!(queue.repeat_mode(), RepeatMode::RepeatAll);
}
