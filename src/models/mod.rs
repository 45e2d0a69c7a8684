pub mod slot;

pub use slot::{
    present_count, ColorClass, Direction, PresenceVector, ShareVector, Slot, SlotTable, SLOT_COUNT,
};
