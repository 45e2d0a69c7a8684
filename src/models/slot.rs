// src/models/slot.rs
//
// The nine fixed segment slots of the triangle row.
// Slot attributes never change at runtime; presence and shares do.

use std::error::Error;

pub const SLOT_COUNT: usize = 9;

/// One flag per slot, `true` when the slot currently has width.
pub type PresenceVector = [bool; SLOT_COUNT];

/// Fractional width of each slot. Sums to 1.0 once assigned.
pub type ShareVector = [f64; SLOT_COUNT];

// Horizontal edge the triangle's apex touches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorClass {
    Primary,   // always present
    Secondary, // "blue", toggles between phases
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub direction: Direction,
    pub color_class: ColorClass,
}

impl Slot {
    pub fn is_primary(&self) -> bool {
        self.color_class == ColorClass::Primary
    }
}

#[derive(Debug, Clone)]
pub struct SlotTable {
    slots: [Slot; SLOT_COUNT],
    secondary: Vec<usize>,
}

impl SlotTable {
    /// Builds a table from explicit slot definitions.
    ///
    /// At least one slot must be PRIMARY so that some slot is always
    /// present and the active slot can never point at an empty row.
    pub fn new(slots: [Slot; SLOT_COUNT]) -> Result<Self, Box<dyn Error>> {
        if !slots.iter().any(Slot::is_primary) {
            return Err("slot table needs at least one primary slot".into());
        }

        let secondary = slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| !slot.is_primary())
            .map(|(index, _)| index)
            .collect();

        Ok(Self { slots, secondary })
    }

    /// Slots {0,4,5,7} primary, the rest secondary, directions alternating.
    pub fn standard() -> Self {
        const PRIMARY: [usize; 4] = [0, 4, 5, 7];

        let slots = std::array::from_fn(|index| Slot {
            direction: if index % 2 == 0 {
                Direction::Left
            } else {
                Direction::Right
            },
            color_class: if PRIMARY.contains(&index) {
                ColorClass::Primary
            } else {
                ColorClass::Secondary
            },
        });

        Self {
            slots,
            secondary: vec![1, 2, 3, 6, 8],
        }
    }

    pub fn slots(&self) -> &[Slot; SLOT_COUNT] {
        &self.slots
    }

    pub fn get(&self, index: usize) -> Slot {
        self.slots[index]
    }

    pub fn secondary_indices(&self) -> &[usize] {
        &self.secondary
    }

    pub fn initial_presence(&self) -> PresenceVector {
        std::array::from_fn(|index| self.slots[index].is_primary())
    }

    pub fn first_primary(&self) -> usize {
        // new() and standard() both guarantee a primary slot
        self.slots.iter().position(Slot::is_primary).unwrap_or(0)
    }
}

impl Default for SlotTable {
    fn default() -> Self {
        Self::standard()
    }
}

pub fn present_count(presence: &PresenceVector) -> usize {
    presence.iter().filter(|present| **present).count()
}
