/// JSON snapshot of the downloaded instrument list
pub mod instruments;

pub use instruments::InstrumentStore;
