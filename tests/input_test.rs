//! Integration test: input
//!
//! Keys and swipes feeding a live session.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use gridsnake::config::GameConfig;
use gridsnake::game::{Direction, GameSession};
use gridsnake::input::{map_key, GameInput, SwipeTracker};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn press(c: char) -> Option<GameInput> {
    map_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
}

#[test]
fn test_wasd_is_case_insensitive() {
    for (lower, upper, dir) in [
        ('w', 'W', Direction::Up),
        ('a', 'A', Direction::Left),
        ('s', 'S', Direction::Down),
        ('d', 'D', Direction::Right),
    ] {
        assert_eq!(press(lower), Some(GameInput::Steer(dir)));
        assert_eq!(press(upper), Some(GameInput::Steer(dir)));
    }
}

#[test]
fn test_shifted_letters_still_map() {
    let key = KeyEvent::new(KeyCode::Char('M'), KeyModifiers::SHIFT);
    assert_eq!(map_key(key), Some(GameInput::CycleSpeed));
}

#[test]
fn test_swipe_steers_session() {
    let mut session = GameSession::new(GameConfig::default(), ChaCha8Rng::seed_from_u64(42));
    let mut swipe = SwipeTracker::new(session.config().swipe_dead_zone);

    // Horizontal swipe on a rightward snake is same-axis and refused.
    swipe.begin(300.0, 300.0);
    let dir = swipe.update(340.0, 302.0).unwrap();
    assert_eq!(dir, Direction::Right);
    assert!(!session.steer(dir));
    swipe.end();

    swipe.begin(300.0, 300.0);
    assert_eq!(swipe.update(303.0, 295.0), None);
    let dir = swipe.update(302.0, 280.0).unwrap();
    assert_eq!(dir, Direction::Up);
    assert!(session.steer(dir));
    assert_eq!(swipe.update(400.0, 280.0), None);
    swipe.end();

    session.tick(0);
    assert_eq!(session.direction(), Direction::Up);
}
