//! Scripted terminal demo
//!
//! Drives a small terminal through writes, key events and a resize, then
//! dumps the resulting grid as text. Useful for eyeballing line-discipline
//! behavior without a pixel backend.

use cellvt::{Key, Snapshot, Terminal};

use std::cell::RefCell;
use std::rc::Rc;

use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> cellvt::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    info!("starting cellvt demo");

    let mut term = Terminal::new(40, 10)?;

    let entered: Rc<RefCell<Vec<String>>> = Rc::default();
    let sink = Rc::clone(&entered);
    term.on_enter(move |line| {
        sink.borrow_mut().push(line.to_string());
    });

    term.write_line("cellvt demo");
    term.write_line("tabs:\tone\ttwo");
    term.write("typed> ");

    // Type "hi!" and press Enter
    term.handle_key(Key::H, false);
    term.handle_key(Key::I, false);
    term.handle_key(Key::Digit1, true);
    term.handle_key(Key::Enter, false);

    term.resize(32, 8);

    let snapshot = Snapshot::from_terminal(&term);
    print!("{}", snapshot.to_text());

    for line in entered.borrow().iter() {
        info!(line = %line, "enter callback fired");
    }

    Ok(())
}
