use egui::{Event, Key};

use crate::breakout::mechanics::{Direction, GameCommand};

/// Player input collected during one frame
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserInput {
    /// in order of arrival
    pub commands: Vec<GameCommand>,
    pub exit: bool,
}

pub fn command_for_key(key: Key) -> Option<GameCommand> {
    match key {
        Key::ArrowLeft => Some(GameCommand::MovePanel(Direction::Left)),
        Key::ArrowRight => Some(GameCommand::MovePanel(Direction::Right)),
        Key::Enter => Some(GameCommand::Restart),
        _ => None,
    }
}

/// Keys of all key-press events, including auto-repeated ones
pub fn pressed_keys(events: &[Event]) -> Vec<Key> {
    events
        .iter()
        .filter_map(|e| match e {
            Event::Key { key, pressed: true, .. } => Some(*key),
            _ => None,
        })
        .collect()
}

pub fn read_user_input<I>(pressed_keys: I) -> UserInput
where
    I: IntoIterator<Item = Key>,
{
    let mut input = UserInput::default();
    for key in pressed_keys {
        if key == Key::Escape {
            input.exit = true;
        } else if let Some(command) = command_for_key(key) {
            input.commands.push(command);
        }
    }
    input
}

#[cfg(test)]
mod test {
    use egui::{Event, Key};
    use rstest::rstest;

    use crate::breakout::mechanics::{Direction, GameCommand};

    use super::*;

    #[rstest]
    #[case(Key::ArrowLeft, Some(GameCommand::MovePanel(Direction::Left)))]
    #[case(Key::ArrowRight, Some(GameCommand::MovePanel(Direction::Right)))]
    #[case(Key::Enter, Some(GameCommand::Restart))]
    #[case(Key::Space, None)]
    #[case(Key::ArrowUp, None)]
    fn test_command_for_key(#[case] key: Key, #[case] expected: Option<GameCommand>) {
        assert_eq!(command_for_key(key), expected);
    }

    #[test]
    fn test_read_user_input_keeps_order() {
        let input = read_user_input([Key::ArrowRight, Key::A, Key::Enter, Key::ArrowLeft]);
        assert_eq!(
            input,
            UserInput {
                commands: vec![
                    GameCommand::MovePanel(Direction::Right),
                    GameCommand::Restart,
                    GameCommand::MovePanel(Direction::Left),
                ],
                exit: false,
            }
        );
    }

    #[test]
    fn test_escape_requests_exit() {
        let input = read_user_input([Key::ArrowLeft, Key::Escape]);
        assert!(input.exit);
        assert_eq!(input.commands, vec![GameCommand::MovePanel(Direction::Left)]);
    }

    #[test]
    fn test_non_key_events_are_ignored() {
        let events = vec![Event::Text("x".to_string()), Event::Copy, Event::PointerGone];
        assert!(pressed_keys(&events).is_empty());
    }
}
