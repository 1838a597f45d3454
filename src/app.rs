//! The message loop. Ticks and key presses come from two producer threads
//! but are merged into one channel, so the single consumer sees them in one
//! well-defined order and is the only code that touches the game.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossterm::event::{self, Event};
use log::{debug, error};
use ratatui::{backend::Backend, Terminal};

use crate::game::Game;
use crate::input::{Command, InputHandler};
use crate::render;

/// How often the input reader wakes up to check the stop flag.
const INPUT_POLL: Duration = Duration::from_millis(50);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Message {
    Tick,
    Command(Command),
    /// Something outside the game changed, e.g. the terminal was resized.
    Redraw,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Sole owner of the game state.
pub struct App {
    game: Game,
}

impl App {
    pub fn new(game: Game) -> Self {
        App { game }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn handle(&mut self, message: Message) -> Flow {
        match message {
            Message::Tick => {
                self.game.tick();
            }
            Message::Command(Command::Steer(direction)) => {
                self.game.steer(direction);
            }
            Message::Command(Command::Quit) => return Flow::Quit,
            Message::Command(Command::None) | Message::Redraw => {}
        }
        Flow::Continue
    }
}

/// Draws, then handles messages one at a time and redraws after each, until
/// a quit command arrives or every producer has gone away.
pub fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    messages: &Receiver<Message>,
) -> io::Result<()> {
    terminal.draw(|f| render::draw(f, app.game()))?;

    for message in messages.iter() {
        if app.handle(message) == Flow::Quit {
            debug!("Quit requested");
            break;
        }
        terminal.draw(|f| render::draw(f, app.game()))?;
    }

    Ok(())
}

/// Sends a tick every `rate` until stopped or the receiver is dropped.
pub fn spawn_ticker(tx: Sender<Message>, rate: Duration, stop: Arc<AtomicBool>) -> JoinHandle<()> {
    thread::spawn(move || loop {
        thread::sleep(rate);
        if stop.load(Ordering::Relaxed) || tx.send(Message::Tick).is_err() {
            break;
        }
    })
}

/// Forwards key presses as commands and resizes as redraws. A failing event
/// source is reported as a quit so the consumer does not wait forever.
pub fn spawn_input_reader(
    tx: Sender<Message>,
    handler: InputHandler,
    stop: Arc<AtomicBool>,
) -> JoinHandle<io::Result<()>> {
    thread::spawn(move || {
        let result = read_input(&tx, &handler, &stop);
        if let Err(e) = &result {
            error!("Reading terminal events failed: {}", e);
            let _ = tx.send(Message::Command(Command::Quit));
        }
        result
    })
}

fn read_input(tx: &Sender<Message>, handler: &InputHandler, stop: &AtomicBool) -> io::Result<()> {
    while !stop.load(Ordering::Relaxed) {
        if !event::poll(INPUT_POLL)? {
            continue;
        }
        let message = match event::read()? {
            Event::Key(key) => match handler.handle_key_event(key) {
                Command::None => continue,
                command => Message::Command(command),
            },
            Event::Resize(..) => Message::Redraw,
            _ => continue,
        };
        if tx.send(message).is_err() {
            break;
        }
    }
    Ok(())
}

/// The two producers and the channel they share.
pub struct EventQueue {
    rx: Receiver<Message>,
    stop: Arc<AtomicBool>,
    ticker: JoinHandle<()>,
    input: JoinHandle<io::Result<()>>,
}

impl EventQueue {
    pub fn start(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let stop = Arc::new(AtomicBool::new(false));

        let ticker = spawn_ticker(tx.clone(), tick_rate, Arc::clone(&stop));
        let input = spawn_input_reader(tx, InputHandler::new(), Arc::clone(&stop));

        EventQueue {
            rx,
            stop,
            ticker,
            input,
        }
    }

    pub fn receiver(&self) -> &Receiver<Message> {
        &self.rx
    }

    /// Stops both producers and waits for them.
    pub fn shutdown(self) -> io::Result<()> {
        self.stop.store(true, Ordering::Relaxed);
        drop(self.rx);

        if self.ticker.join().is_err() {
            error!("Ticker thread panicked");
        }
        match self.input.join() {
            Ok(result) => result,
            Err(_) => Err(io::Error::new(
                io::ErrorKind::Other,
                "input thread panicked",
            )),
        }
    }
}
