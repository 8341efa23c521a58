use std::{io::BufRead, sync::mpsc, thread};

use dashboard::{
    driver::{Command, RealTimeDriver},
    terminal::TerminalView,
};
use log::info;
use sessim::SimulationBuilder;

fn main() -> anyhow::Result<()> {
    // Fresh seed per run, logged so a session can be replayed.
    let seed: u64 = rand::random();
    let (session, view) = SimulationBuilder::default().seed(seed).build_session();
    info!("Dashboard seed: {seed}");

    println!("Enter or space toggles the connection, c clicks, q quits.");

    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if let Some(command) = Command::from_line(&line) {
                if tx.send(command).is_err() || command == Command::Quit {
                    break;
                }
            }
        }
    });

    let mut driver = RealTimeDriver::new(session, TerminalView::new(view), std::io::stdout());
    driver.run(rx)?;
    Ok(())
}
