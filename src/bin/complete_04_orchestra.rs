// Complete Orchestra with Polymorphic Instruments
// Abstract interface, static vs dynamic dispatch, and a registry manager

use colored::Colorize;

// ============================================================================
// Milestone 1: Instrument Trait and Static Dispatch
// ============================================================================

pub trait Instrument {
    fn name(&self) -> &str;
    fn play(&self) -> String;
}

pub struct Piano;

impl Instrument for Piano {
    fn name(&self) -> &str {
        "Piano"
    }

    fn play(&self) -> String {
        "The piano plays a classical melody".to_string()
    }
}

pub struct Guitar;

impl Instrument for Guitar {
    fn name(&self) -> &str {
        "Guitar"
    }

    fn play(&self) -> String {
        "The guitar plays a rock solo".to_string()
    }
}

// Monomorphized per instrument type
pub fn perform(instrument: &impl Instrument) -> String {
    instrument.play()
}

// ============================================================================
// Milestone 2: Heterogeneous Collection of Trait Objects
// ============================================================================

pub fn perform_all(instruments: &[Box<dyn Instrument>]) -> Vec<String> {
    instruments.iter().map(|instrument| instrument.play()).collect()
}

// ============================================================================
// Milestone 3: Orchestra Manager
// ============================================================================

pub struct Violin;

impl Instrument for Violin {
    fn name(&self) -> &str {
        "Violin"
    }

    fn play(&self) -> String {
        "The violin plays a soaring line".to_string()
    }
}

pub struct Orchestra {
    instruments: Vec<Box<dyn Instrument>>,
}

impl Orchestra {
    pub fn new() -> Self {
        Self {
            instruments: Vec::new(),
        }
    }

    pub fn register(&mut self, instrument: Box<dyn Instrument>) {
        self.instruments.push(instrument);
    }

    /// Plays every instrument in registration order.
    pub fn play_all(&self) -> Vec<String> {
        perform_all(&self.instruments)
    }

    pub fn find(&self, name: &str) -> Option<&dyn Instrument> {
        self.instruments
            .iter()
            .find(|instrument| instrument.name() == name)
            .map(|instrument| instrument.as_ref())
    }

    pub fn len(&self) -> usize {
        self.instruments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }
}

impl Default for Orchestra {
    fn default() -> Self {
        Self::new()
    }
}

fn main() {
    println!("=== Milestone 1: Static dispatch ===");
    println!("{}", perform(&Piano));
    println!("{}", perform(&Guitar));

    println!("\n=== Milestone 2: Dynamic dispatch over a collection ===");
    let ensemble: Vec<Box<dyn Instrument>> = vec![Box::new(Piano), Box::new(Guitar)];
    for line in perform_all(&ensemble) {
        println!("{line}");
    }

    println!("\n=== Milestone 3: Orchestra manager ===");
    let mut orchestra = Orchestra::new();
    orchestra.register(Box::new(Piano));
    orchestra.register(Box::new(Guitar));
    orchestra.register(Box::new(Violin));
    for line in orchestra.play_all() {
        println!("{line}");
    }

    if let Some(instrument) = orchestra.find("Guitar") {
        println!("Found {}: {}", instrument.name(), instrument.play());
    }
    if orchestra.find("Drums").is_none() {
        println!("No drums registered");
    }

    println!(
        "{} {}",
        orchestra.len().to_string().green().bold(),
        "instruments performed".green()
    );
}
