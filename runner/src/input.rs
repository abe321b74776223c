use std::str::FromStr;

use snake_common::{Direction, log};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc::UnboundedSender;
use tokio_stream::StreamExt;
use tokio_stream::wrappers::LinesStream;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    Turn(Direction),
    Swipe { start: (f64, f64), end: (f64, f64) },
    Restart,
    Quit,
}

impl FromStr for InputEvent {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let command = parts.next().ok_or_else(|| "Empty command".to_string())?.to_lowercase();

        let event = match command.as_str() {
            "up" | "u" => InputEvent::Turn(Direction::Up),
            "down" | "d" => InputEvent::Turn(Direction::Down),
            "left" | "l" => InputEvent::Turn(Direction::Left),
            "right" | "r" => InputEvent::Turn(Direction::Right),
            "restart" => InputEvent::Restart,
            "quit" | "q" => InputEvent::Quit,
            "swipe" => {
                let coords = parts
                    .map(|p| match p.parse::<f64>() {
                        Ok(value) if value.is_finite() => Ok(value),
                        Ok(_) => Err(format!("Coordinate '{}' is not finite", p)),
                        Err(e) => Err(format!("Bad coordinate '{}': {}", p, e)),
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                let &[x1, y1, x2, y2] = coords.as_slice() else {
                    return Err(format!("swipe needs 4 coordinates, got {}", coords.len()));
                };
                return Ok(InputEvent::Swipe {
                    start: (x1, y1),
                    end: (x2, y2),
                });
            }
            other => return Err(format!("Unknown command '{}'", other)),
        };

        if let Some(extra) = parts.next() {
            return Err(format!("Unexpected argument '{}'", extra));
        }
        Ok(event)
    }
}

/// Forwards parsed commands until the reader ends, `quit` arrives or the session hangs up.
pub async fn read_commands<R>(reader: R, sender: UnboundedSender<InputEvent>)
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = LinesStream::new(reader.lines());

    while let Some(line) = lines.next().await {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log!("Failed to read input: {}", e);
                break;
            }
        };

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match trimmed.parse::<InputEvent>() {
            Ok(event) => {
                if sender.send(event).is_err() || event == InputEvent::Quit {
                    break;
                }
            }
            Err(e) => log!("Ignoring input '{}': {}", trimmed, e),
        }
    }
}
