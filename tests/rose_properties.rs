//! End-to-end behavior of the feed, canvas, and histogram together.

use std::f64::consts::{FRAC_PI_2, PI};
use std::thread;

use phase_rose::histogram::max_circular_std;
use phase_rose::{phase_feed, CircularHistogram, RoseCanvas, VisualizerSettings, MAX_BINS};

fn spread_phases(count: usize) -> Vec<f64> {
    (0..count)
        .map(|i| {
            let i = i as f64;
            (i * 1.3).cos() * 3.0 + i * 0.05
        })
        .collect()
}

#[test]
fn producer_thread_to_snapshot_reader() {
    let phases = spread_phases(500);
    let (sender, receiver) = phase_feed(1024);
    let mut canvas = RoseCanvas::new(receiver);
    canvas.set_event_channel(Some(1)).unwrap();

    let producer = {
        let phases = phases.clone();
        thread::spawn(move || {
            for phase in phases {
                assert!(sender.try_push(phase));
            }
        })
    };
    producer.join().unwrap();

    let report = canvas.refresh();
    assert_eq!(report.inserted, phases.len());

    // The drawing side lives on another thread and only sees the published snapshot
    let snapshot_output = canvas.snapshot_output();
    let reader = thread::spawn(move || {
        let mut output = snapshot_output.lock().unwrap();
        output.read().clone()
    });
    let snapshot = reader.join().unwrap();

    let mut expected = CircularHistogram::default();
    for phase in phases {
        expected.insert(phase).unwrap();
    }
    assert_eq!(snapshot.bin_counts, expected.bin_counts());
    assert_eq!(snapshot.summary, expected.summary());
}

#[test]
fn counts_are_conserved_through_reconfiguration() {
    let phases = spread_phases(300);
    let (sender, receiver) = phase_feed(1024);
    let mut canvas = RoseCanvas::new(receiver);
    canvas.set_event_channel(Some(8)).unwrap();

    for (i, phase) in phases.iter().enumerate() {
        sender.try_push(*phase);
        // Reconfigure while phases keep arriving
        match i % 50 {
            10 => {
                canvas.set_num_bins(1 + i % MAX_BINS);
            }
            20 => {
                canvas.set_reference_degrees(i as f64 * 3.7);
            }
            30 => {
                canvas.refresh();
            }
            _ => (),
        }
    }
    canvas.refresh();

    let histogram = canvas.histogram();
    assert_eq!(histogram.len(), phases.len());
    assert_eq!(histogram.bin_counts().iter().sum::<usize>(), phases.len());
}

#[test]
fn uniform_phases_stay_maximally_dispersed_across_rebinning() {
    let mut histogram = CircularHistogram::default();
    for phase in [0.0, FRAC_PI_2, PI, 3.0 * FRAC_PI_2] {
        histogram.insert(phase).unwrap();
    }

    let mean = histogram.circular_mean(true);
    for num_bins in [1, 2, 3, 4, 13, MAX_BINS] {
        histogram.set_num_bins(num_bins);
        approx::assert_relative_eq!(histogram.circular_std(), max_circular_std());
        assert_eq!(histogram.circular_mean(true), mean);
        assert_eq!(histogram.bin_counts().iter().sum::<usize>(), 4);
    }
}

#[test]
fn restored_session_bins_like_the_saved_one() {
    let phases = spread_phases(200);

    let (sender, receiver) = phase_feed(1024);
    let mut saved_session = RoseCanvas::new(receiver);
    saved_session.set_event_channel(Some(2)).unwrap();
    saved_session.set_num_bins(10);
    saved_session.set_reference_text("135").unwrap();
    for &phase in &phases {
        sender.try_push(phase);
    }
    saved_session.refresh();
    let saved = saved_session.save_settings().to_json().unwrap();

    // A new session gets the same phases before the settings are restored
    let (sender, receiver) = phase_feed(1024);
    let mut restored = RoseCanvas::new(receiver);
    restored.set_event_channel(Some(2)).unwrap();
    for &phase in &phases {
        sender.try_push(phase);
    }
    restored.refresh();
    restored.load_settings(&VisualizerSettings::from_json(&saved).unwrap());

    assert_eq!(
        restored.histogram().bin_counts(),
        saved_session.histogram().bin_counts()
    );
    assert_eq!(restored.summary(), saved_session.summary());
}
