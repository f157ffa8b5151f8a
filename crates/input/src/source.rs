//! Non-blocking key sources.
//!
//! The game loop polls once per frame and must never wait for a key. Sources
//! offer one key of lookahead: a key returned by [`KeySource::peek_key`] stays
//! queued and is handed out by the next [`KeySource::poll_key`].

use std::collections::VecDeque;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

pub trait KeySource {
    /// Take the next pending key press, or `None` right away if there is none.
    fn poll_key(&mut self) -> Result<Option<KeyEvent>>;

    /// Look at the next pending key press without consuming it.
    fn peek_key(&mut self) -> Result<Option<KeyEvent>>;
}

impl<K: KeySource + ?Sized> KeySource for &mut K {
    fn poll_key(&mut self) -> Result<Option<KeyEvent>> {
        (**self).poll_key()
    }

    fn peek_key(&mut self) -> Result<Option<KeyEvent>> {
        (**self).peek_key()
    }
}

/// A non-blocking stream of raw terminal events.
pub trait EventReader {
    /// Next queued event, or `None` right away if nothing is pending.
    fn next_event(&mut self) -> Result<Option<Event>>;
}

/// crossterm's global event queue, polled with a zero timeout.
///
/// Requires raw mode to be enabled by the caller.
#[derive(Debug, Default, Clone, Copy)]
pub struct CrosstermEvents;

impl EventReader for CrosstermEvents {
    fn next_event(&mut self) -> Result<Option<Event>> {
        if event::poll(Duration::ZERO)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }
}

/// Key presses filtered out of an [`EventReader`], with one key of lookahead.
#[derive(Debug, Default)]
pub struct Lookahead<R> {
    reader: R,
    pending: Option<KeyEvent>,
}

/// Key presses from the terminal.
pub type TerminalKeys = Lookahead<CrosstermEvents>;

impl<R: EventReader> Lookahead<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: None,
        }
    }

    fn read_press(&mut self) -> Result<Option<KeyEvent>> {
        while let Some(ev) = self.reader.next_event()? {
            if let Event::Key(key) = ev {
                // Ignore terminal auto-repeat and releases; one press is one jump.
                if key.kind == KeyEventKind::Press {
                    return Ok(Some(key));
                }
            }
        }
        Ok(None)
    }
}

impl<R: EventReader> KeySource for Lookahead<R> {
    fn poll_key(&mut self) -> Result<Option<KeyEvent>> {
        if let Some(key) = self.pending.take() {
            return Ok(Some(key));
        }
        self.read_press()
    }

    fn peek_key(&mut self) -> Result<Option<KeyEvent>> {
        if self.pending.is_none() {
            self.pending = self.read_press()?;
        }
        Ok(self.pending)
    }
}

/// Key presses scheduled by frame, for tests and demos.
///
/// Each `poll_key` call counts as one frame. A key scheduled for frame `f`
/// becomes available at the `f`-th poll (0-based) and stays queued until taken.
#[derive(Debug, Clone, Default)]
pub struct ScriptedKeys {
    schedule: VecDeque<(u64, KeyEvent)>,
    polls: u64,
}

impl ScriptedKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a key press for `frame`.
    pub fn press_at(mut self, frame: u64, code: KeyCode) -> Self {
        self.push(frame, KeyEvent::from(code));
        self
    }

    /// Schedule a full key event (with modifiers) for `frame`.
    pub fn push(&mut self, frame: u64, key: KeyEvent) {
        let at = self.schedule.partition_point(|&(f, _)| f <= frame);
        self.schedule.insert(at, (frame, key));
    }

    /// Number of polls made so far.
    pub fn polls(&self) -> u64 {
        self.polls
    }

    /// Scheduled keys not yet consumed.
    pub fn remaining(&self) -> usize {
        self.schedule.len()
    }

    fn next_due(&self) -> Option<KeyEvent> {
        self.schedule
            .front()
            .filter(|&&(frame, _)| frame <= self.polls)
            .map(|&(_, key)| key)
    }
}

impl KeySource for ScriptedKeys {
    fn poll_key(&mut self) -> Result<Option<KeyEvent>> {
        let key = self.next_due();
        if key.is_some() {
            self.schedule.pop_front();
        }
        self.polls += 1;
        Ok(key)
    }

    fn peek_key(&mut self) -> Result<Option<KeyEvent>> {
        Ok(self.next_due())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    impl EventReader for VecDeque<Event> {
        fn next_event(&mut self) -> Result<Option<Event>> {
            Ok(self.pop_front())
        }
    }

    fn key_event(code: KeyCode, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent::new_with_kind(code, KeyModifiers::NONE, kind))
    }

    fn code(key: Option<KeyEvent>) -> Option<KeyCode> {
        key.map(|k| k.code)
    }

    #[test]
    fn scripted_keys_wait_for_their_frame() {
        let mut keys = ScriptedKeys::new().press_at(2, KeyCode::Char(' '));
        assert_eq!(code(keys.poll_key().unwrap()), None);
        assert_eq!(code(keys.poll_key().unwrap()), None);
        assert_eq!(code(keys.poll_key().unwrap()), Some(KeyCode::Char(' ')));
        assert_eq!(code(keys.poll_key().unwrap()), None);
        assert_eq!(keys.polls(), 4);
    }

    #[test]
    fn peek_does_not_consume() {
        let mut keys = ScriptedKeys::new().press_at(0, KeyCode::Up);
        assert_eq!(code(keys.peek_key().unwrap()), Some(KeyCode::Up));
        assert_eq!(code(keys.peek_key().unwrap()), Some(KeyCode::Up));
        assert_eq!(keys.remaining(), 1);
        assert_eq!(code(keys.poll_key().unwrap()), Some(KeyCode::Up));
        assert_eq!(keys.remaining(), 0);
        assert_eq!(code(keys.peek_key().unwrap()), None);
    }

    #[test]
    fn keys_are_ordered_by_frame_then_insertion() {
        let mut keys = ScriptedKeys::new()
            .press_at(1, KeyCode::Char('b'))
            .press_at(0, KeyCode::Char('a'))
            .press_at(1, KeyCode::Char('c'));
        assert_eq!(code(keys.poll_key().unwrap()), Some(KeyCode::Char('a')));
        assert_eq!(code(keys.poll_key().unwrap()), Some(KeyCode::Char('b')));
        // 'c' was due at frame 1 but only one key is taken per poll.
        assert_eq!(code(keys.poll_key().unwrap()), Some(KeyCode::Char('c')));
    }

    #[test]
    fn works_through_a_mutable_reference() {
        fn drain(mut source: impl KeySource) -> usize {
            let mut n = 0;
            while source.poll_key().unwrap().is_some() {
                n += 1;
            }
            n
        }
        let mut keys = ScriptedKeys::new()
            .press_at(0, KeyCode::Up)
            .press_at(0, KeyCode::Up);
        assert_eq!(drain(&mut keys), 2);
        assert_eq!(keys.remaining(), 0);
    }

    #[test]
    fn lookahead_keeps_only_presses() {
        let events = VecDeque::from(vec![
            Event::Resize(80, 24),
            key_event(KeyCode::Char(' '), KeyEventKind::Release),
            key_event(KeyCode::Char(' '), KeyEventKind::Repeat),
            Event::FocusGained,
            key_event(KeyCode::Up, KeyEventKind::Press),
        ]);
        let mut keys = Lookahead::new(events);
        assert_eq!(code(keys.poll_key().unwrap()), Some(KeyCode::Up));
        assert_eq!(code(keys.poll_key().unwrap()), None);
    }

    #[test]
    fn lookahead_peek_is_handed_out_by_the_next_poll() {
        let events = VecDeque::from(vec![
            key_event(KeyCode::Char(' '), KeyEventKind::Release),
            key_event(KeyCode::Char('r'), KeyEventKind::Press),
            key_event(KeyCode::Char('q'), KeyEventKind::Press),
        ]);
        let mut keys = Lookahead::new(events);
        assert_eq!(code(keys.peek_key().unwrap()), Some(KeyCode::Char('r')));
        // A second peek must not read past the pending key.
        assert_eq!(code(keys.peek_key().unwrap()), Some(KeyCode::Char('r')));
        assert_eq!(code(keys.poll_key().unwrap()), Some(KeyCode::Char('r')));
        assert_eq!(code(keys.poll_key().unwrap()), Some(KeyCode::Char('q')));
        assert_eq!(code(keys.peek_key().unwrap()), None);
        assert_eq!(code(keys.poll_key().unwrap()), None);
    }

    #[test]
    fn lookahead_on_an_empty_reader() {
        let mut keys = Lookahead::new(VecDeque::new());
        assert_eq!(code(keys.peek_key().unwrap()), None);
        assert_eq!(code(keys.poll_key().unwrap()), None);
    }
}
