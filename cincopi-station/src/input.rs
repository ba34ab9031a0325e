//! Keyboard stand-in for the Sense HAT joystick
//!
//! Each line read from stdin is one event:
//!
//! | key | event          |
//! |-----|----------------|
//! | `u` | up pressed     |
//! | `r` | up released    |
//! | `d` | down pressed   |
//! | `l` | left pressed   |
//! | `m` | middle pressed |

use std::io::{self, BufRead};
use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};

use cincopi_core::traits::{StickAction, StickDirection, StickEvent};

/// Translate one input line into a joystick event
pub fn parse_key(line: &str) -> Option<StickEvent> {
    let (direction, action) = match line.trim() {
        "u" => (StickDirection::Up, StickAction::Pressed),
        "r" => (StickDirection::Up, StickAction::Released),
        "d" => (StickDirection::Down, StickAction::Pressed),
        "l" => (StickDirection::Left, StickAction::Pressed),
        "m" => (StickDirection::Middle, StickAction::Pressed),
        _ => return None,
    };
    Some(StickEvent::new(direction, action))
}

/// Forward events from `source` until it ends or the station goes away
pub fn forward<R: BufRead>(source: R, events: &Sender<StickEvent>) {
    for line in source.lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                log::warn!("Joystick input failed: {}", err);
                return;
            }
        };
        match parse_key(&line) {
            Some(event) => {
                if events.send(event).is_err() {
                    return;
                }
            }
            None => log::debug!("Ignoring input {:?}", line),
        }
    }
}

/// Read stdin on a background thread
pub fn spawn_stdin(events: Sender<StickEvent>) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("joystick".to_string())
        .spawn(move || forward(io::stdin().lock(), &events))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn keys_map_to_events() {
        assert_eq!(
            parse_key("u\n"),
            Some(StickEvent::new(StickDirection::Up, StickAction::Pressed))
        );
        assert_eq!(
            parse_key(" r "),
            Some(StickEvent::new(StickDirection::Up, StickAction::Released))
        );
        assert_eq!(parse_key("x"), None);
        assert_eq!(parse_key(""), None);
    }

    #[test]
    fn forward_sends_in_order() {
        let (tx, rx) = mpsc::channel();
        forward("u\nr\nnoise\nd\n".as_bytes(), &tx);
        drop(tx);

        let events: Vec<_> = rx.iter().collect();
        assert_eq!(
            events,
            vec![
                StickEvent::new(StickDirection::Up, StickAction::Pressed),
                StickEvent::new(StickDirection::Up, StickAction::Released),
                StickEvent::new(StickDirection::Down, StickAction::Pressed),
            ]
        );
    }
}
