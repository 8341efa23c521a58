use sessim::*;

fn dashboard(download: &str, upload: &str) -> MemoryView {
    MemoryView::new()
        .with_text(Region::Elapsed, "00:58:26")
        .with_text(Region::Download, download)
        .with_text(Region::Upload, upload)
}

#[test]
fn connect_tick_three_times_disconnect() {
    let mut view = dashboard("50", "10");
    let mut sim = SessionSimulator::new(42);
    assert_eq!(sim.state(), SessionState::Disconnected);
    assert_eq!(sim.elapsed().seconds(), 3506);

    assert_eq!(sim.toggle(&mut view), SessionState::Connected);
    assert_eq!(sim.advance_by(Jiffies::from_secs(3), &mut view), 3);
    assert_eq!(sim.elapsed().seconds(), 3509);
    assert_eq!(view.text(Region::Elapsed), Some("00:58:29"));

    let sample = sim.sample().expect("connected session has a sample");
    assert!(sample.download >= 1);
    assert!(sample.upload >= 1);
    assert!(sample.ping >= 6);

    assert_eq!(sim.toggle(&mut view), SessionState::Disconnected);
    assert_eq!(sim.advance_by(Jiffies::from_secs(30), &mut view), 0);
    assert_eq!(sim.elapsed().seconds(), 3509);
    assert_eq!(view.text(Region::Elapsed), Some("00:58:29"));
}

#[test]
fn no_tick_before_first_period() {
    let mut view = dashboard("50", "10");
    let mut sim = SessionSimulator::new(1);
    sim.toggle(&mut view);

    assert_eq!(sim.advance_to(Jiffies(999), &mut view), 0);
    assert_eq!(view.updates(), 0);
    assert_eq!(sim.advance_to(Jiffies(1000), &mut view), 1);
    assert_eq!(view.updates(), 4);
}

#[test]
fn one_tick_per_period_regardless_of_step_size() {
    let mut coarse_view = dashboard("50", "10");
    let mut coarse = SessionSimulator::new(8);
    coarse.toggle(&mut coarse_view);
    assert_eq!(coarse.advance_by(Jiffies::from_secs(120), &mut coarse_view), 120);

    let mut fine_view = dashboard("50", "10");
    let mut fine = SessionSimulator::new(8);
    fine.toggle(&mut fine_view);
    let fired: usize = (0..120_000)
        .map(|_| fine.advance_by(Jiffies(1), &mut fine_view))
        .sum();
    assert_eq!(fired, 120);

    // Same seed and same ticks give the same readouts.
    assert_eq!(coarse.sample(), fine.sample());
    assert_eq!(coarse.elapsed(), fine.elapsed());
}

#[test]
fn stop_between_ticks_cancels_pending_tick() {
    let mut view = dashboard("50", "10");
    let mut sim = SessionSimulator::new(2);
    sim.toggle(&mut view);
    sim.advance_to(Jiffies(1999), &mut view);
    sim.toggle(&mut view);

    assert_eq!(sim.peek_closest(), None);
    assert_eq!(sim.advance_to(Jiffies(2000), &mut view), 0);
    assert_eq!(sim.elapsed().seconds(), 3507);
}

#[test]
fn elapsed_persists_across_sessions() {
    let mut view = dashboard("50", "10");
    let mut sim = SessionSimulator::new(3);
    let mut previous = sim.elapsed().seconds();

    for _ in 0..5 {
        sim.toggle(&mut view);
        sim.advance_by(Jiffies(2500), &mut view);
        sim.toggle(&mut view);
        sim.advance_by(Jiffies(700), &mut view);

        let now = sim.elapsed().seconds();
        assert_eq!(now, previous + 2);
        previous = now;
    }
    assert_eq!(sim.ticks(), 10);
}

#[test]
fn reconnect_seeds_from_last_published_values() {
    let mut view = dashboard("50", "10");
    let mut sim = SessionSimulator::new(4);
    sim.toggle(&mut view);
    sim.advance_by(Jiffies::from_secs(5), &mut view);
    let last = sim.sample().expect("connected session has a sample");
    sim.toggle(&mut view);

    sim.toggle(&mut view);
    assert_eq!(sim.sample(), Some(MetricSample::new(last.download, last.upload, 10)));
}

#[test]
fn hours_render_past_ninety_nine() {
    let mut view = dashboard("50", "10");
    let mut sim = SessionSimulator::with_parts(
        Clock::new(99 * 3600 + 59 * 60 + 59),
        MetricGenerator::new(0),
        Jiffies::from_secs(1),
    );
    sim.toggle(&mut view);
    sim.advance_by(Jiffies::from_secs(1), &mut view);
    assert_eq!(view.text(Region::Elapsed), Some("100:00:00"));
}

#[test]
fn headless_simulation_replays_toggle_script() {
    let mut sim = SimulationBuilder::default()
        .seed(42)
        .display("50 Mbps", "10 Mbps")
        .toggle_at(Jiffies(0))
        .toggle_at(Jiffies(3000))
        .time_budget(Jiffies::from_secs(30))
        .build();
    sim.run();

    // The tick due at 3000 fires before the toggle scheduled there.
    assert_eq!(sim.ticks(), 3);
    assert_eq!(sim.state(), SessionState::Disconnected);
    assert_eq!(sim.elapsed().format(), "00:58:29");
    assert_eq!(sim.view().text(Region::Elapsed), Some("00:58:29"));
    assert!(!sim.view().toggle_visual().pressed);
}

#[test]
fn headless_simulation_ignores_toggles_past_budget() {
    let mut sim = SimulationBuilder::default()
        .toggle_at(Jiffies(500))
        .toggle_at(Jiffies::from_secs(100))
        .time_budget(Jiffies::from_secs(10))
        .build();
    sim.run();

    assert_eq!(sim.state(), SessionState::Connected);
    // Connected at 500, ticks at 1500..=9500.
    assert_eq!(sim.ticks(), 9);
    assert_eq!(sim.elapsed().seconds(), 3506 + 9);
}

#[test]
fn same_seed_same_run() {
    let run = |seed| {
        let mut sim = SimulationBuilder::default()
            .seed(seed)
            .toggle_at(Jiffies(0))
            .time_budget(Jiffies::from_secs(600))
            .build();
        sim.run();
        sim.sample()
    };
    assert_eq!(run(17), run(17));
}
