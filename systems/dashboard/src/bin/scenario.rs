use std::time::Instant;

use sessim::*;

fn main() {
    println!("=== Session scenario ===\n");

    let mut view = MemoryView::new()
        .with_text(Region::Elapsed, "00:58:26")
        .with_text(Region::Download, "50")
        .with_text(Region::Upload, "10");
    let mut session = SessionSimulator::new(42);

    let start = Instant::now();

    assert_eq!(session.toggle(&mut view), SessionState::Connected);
    let fired = session.advance_by(Jiffies::from_secs(3), &mut view);
    println!(
        "  After {} ticks: {} | {}",
        fired,
        session.elapsed().format(),
        session.sample().map(|s| s.to_string()).unwrap_or_default()
    );

    assert_eq!(fired, 3);
    assert_eq!(session.elapsed().seconds(), 3509);
    assert_eq!(view.text(Region::Elapsed), Some("00:58:29"));

    let sample = session.sample().expect("Connected session has a sample");
    assert!(sample.download >= metrics::DOWNLOAD_FLOOR);
    assert!(sample.upload >= metrics::UPLOAD_FLOOR);
    assert!(sample.ping >= metrics::PING_FLOOR);

    assert_eq!(session.toggle(&mut view), SessionState::Disconnected);
    session.advance_by(Jiffies::from_secs(60), &mut view);
    assert_eq!(session.elapsed().seconds(), 3509);

    println!("  Disconnected, elapsed stays {}", session.elapsed().format());

    let mut replay = SimulationBuilder::default()
        .seed(42)
        .toggle_at(Jiffies(0))
        .toggle_at(Jiffies::from_secs(3))
        .time_budget(Jiffies::from_secs(60))
        .build();
    replay.run();

    // Same seed, same ticks: the headless replay lands on the same readout.
    assert_eq!(replay.sample(), Some(sample));
    assert_eq!(replay.elapsed(), session.elapsed());

    println!("\nScenario completed in: {:?}", start.elapsed());
}
