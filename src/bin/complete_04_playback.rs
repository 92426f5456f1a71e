// Complete Playback Devices behind a Pure Interface
// Interface-only trait consumed through free functions over trait objects

// ============================================================================
// Milestone 1: Pure Interface and Owned Trait Objects
// ============================================================================

pub trait Playable {
    fn play(&self) -> String;
}

pub struct Radio;

impl Playable for Radio {
    fn play(&self) -> String {
        "Playing music on the radio".to_string()
    }
}

pub struct Television;

impl Playable for Television {
    fn play(&self) -> String {
        "Playing television audio".to_string()
    }
}

/// Works purely against the interface; never inspects concrete types.
pub fn start_playback(devices: &[Box<dyn Playable>]) -> Vec<String> {
    devices.iter().map(|device| device.play()).collect()
}

// ============================================================================
// Milestone 2: Borrowed Trait Objects
// ============================================================================

// Same behavior without taking ownership of the devices
pub fn start_playback_borrowed(devices: &[&dyn Playable]) -> Vec<String> {
    devices.iter().map(|device| device.play()).collect()
}

fn main() {
    println!("=== Milestone 1: Owned trait objects ===");
    let devices: Vec<Box<dyn Playable>> = vec![Box::new(Radio), Box::new(Television)];
    for line in start_playback(&devices) {
        println!("{line}");
    }

    println!("\n=== Milestone 2: Borrowed trait objects ===");
    let radio = Radio;
    let television = Television;
    let borrowed: Vec<&dyn Playable> = vec![&radio, &television];
    for line in start_playback_borrowed(&borrowed) {
        println!("{line}");
    }
    // The originals are still usable after playback.
    println!("Radio again: {}", radio.play());
}
