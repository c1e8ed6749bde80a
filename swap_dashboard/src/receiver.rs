use crossbeam_channel::Sender;
use log::{debug, error, info};
use std::io::BufRead;
use swap_common::{Result, SwapError};

use crate::model::event::UiEvent;

/// Line-oriented command receiver.
///
/// Reads one command per line from any `BufRead` (stdin in the binary) and
/// forwards the parsed `UiEvent`, or the parse error, to the event loop. A bad
/// line never stops the receiver.
pub struct CommandReceiver<R: BufRead> {
    input: R,
}

impl<R: BufRead> CommandReceiver<R> {
    /// Wraps an input source.
    pub fn new(input: R) -> Self {
        Self { input }
    }

    /// Blocking loop: parse lines until EOF or until the event loop hangs up.
    pub fn receive_loop_with_channel(self, tx: Sender<Result<UiEvent>>) -> Result<()> {
        info!("Command receiver started");
        for line in self.input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            debug!("Received command {:?}", line);
            let parsed = line.parse::<UiEvent>();
            let quit = matches!(parsed, Ok(UiEvent::Quit));
            if tx.send(parsed).is_err() {
                error!("Event loop is gone, dropping input");
                return Err(SwapError::Command("event loop closed".to_string()));
            }
            if quit {
                break;
            }
        }
        info!("Command receiver stopping...");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;

    #[test]
    fn forwards_events_and_errors_in_order() {
        let input = "amount 2\n\nbogus\nswap\n";
        let (tx, rx) = unbounded();
        CommandReceiver::new(input.as_bytes())
            .receive_loop_with_channel(tx)
            .unwrap();

        let got: Vec<Result<UiEvent>> = rx.iter().collect();
        assert_eq!(got.len(), 3);
        assert!(matches!(&got[0], Ok(UiEvent::SetAmount(a)) if a == "2"));
        assert!(matches!(&got[1], Err(SwapError::Command(_))));
        assert!(matches!(&got[2], Ok(UiEvent::Swap)));
    }

    #[test]
    fn stops_after_quit() {
        let (tx, rx) = unbounded();
        CommandReceiver::new("quit\nconnect\n".as_bytes())
            .receive_loop_with_channel(tx)
            .unwrap();
        let got: Vec<Result<UiEvent>> = rx.iter().collect();
        assert_eq!(got.len(), 1);
    }

    #[test]
    fn closed_loop_is_an_error() {
        let (tx, rx) = unbounded();
        drop(rx);
        let err = CommandReceiver::new("show\n".as_bytes())
            .receive_loop_with_channel(tx)
            .unwrap_err();
        assert!(matches!(err, SwapError::Command(_)));
    }
}
