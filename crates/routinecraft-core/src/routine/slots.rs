//! Fixed lookup tables keyed by day slot and energy profile.

use super::model::{DaySlot, EnergyProfile, PreferredSlot};

/// Label pair describing what a day slot is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotIntention {
    pub anchor: &'static str,
    pub headline: &'static str,
}

/// Playlist paired with a day slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotSoundtrack {
    pub playlist: &'static str,
    pub vibe: &'static str,
}

impl DaySlot {
    /// The fixed order in which slots partition the day.
    pub const SEQUENCE: [DaySlot; 5] = [
        DaySlot::Morning,
        DaySlot::Midday,
        DaySlot::Afternoon,
        DaySlot::Evening,
        DaySlot::WindDown,
    ];

    /// Position of this slot within [`DaySlot::SEQUENCE`].
    pub fn index(&self) -> usize {
        match self {
            DaySlot::Morning => 0,
            DaySlot::Midday => 1,
            DaySlot::Afternoon => 2,
            DaySlot::Evening => 3,
            DaySlot::WindDown => 4,
        }
    }

    /// Slot that receives overflow from this one.
    ///
    /// The last slot hands its overflow back to the evening.
    pub fn spill_target(&self) -> DaySlot {
        match self {
            DaySlot::Morning => DaySlot::Midday,
            DaySlot::Midday => DaySlot::Afternoon,
            DaySlot::Afternoon => DaySlot::Evening,
            DaySlot::Evening => DaySlot::WindDown,
            DaySlot::WindDown => DaySlot::Evening,
        }
    }

    /// Whether a task preferring `preferred` may be placed in this slot.
    pub fn accepts(&self, preferred: PreferredSlot) -> bool {
        let aliases: &[PreferredSlot] = match self {
            DaySlot::Morning => &[PreferredSlot::Morning],
            DaySlot::Midday => &[PreferredSlot::Afternoon, PreferredSlot::Flex],
            DaySlot::Afternoon => &[PreferredSlot::Afternoon, PreferredSlot::Flex],
            DaySlot::Evening => &[PreferredSlot::Evening, PreferredSlot::Flex],
            DaySlot::WindDown => &[PreferredSlot::Evening, PreferredSlot::Flex],
        };
        aliases.contains(&preferred)
    }

    pub fn intention(&self) -> SlotIntention {
        match self {
            DaySlot::Morning => SlotIntention {
                anchor: "Wake rituals + priming",
                headline: "Launch with clarity",
            },
            DaySlot::Midday => SlotIntention {
                anchor: "Momentum + nourishment",
                headline: "Ride the flow",
            },
            DaySlot::Afternoon => SlotIntention {
                anchor: "Deep focus + output",
                headline: "Protect peak energy",
            },
            DaySlot::Evening => SlotIntention {
                anchor: "Creative + personal space",
                headline: "Reset and create",
            },
            DaySlot::WindDown => SlotIntention {
                anchor: "Transition to rest",
                headline: "Close with intention",
            },
        }
    }

    pub fn soundtrack(&self) -> SlotSoundtrack {
        match self {
            DaySlot::Morning => SlotSoundtrack {
                playlist: "Morning Radiance \u{2014} Lofi Focus",
                vibe: "gradual focus build",
            },
            DaySlot::Midday => SlotSoundtrack {
                playlist: "Upbeat Flowstate",
                vibe: "light electronic momentum",
            },
            DaySlot::Afternoon => SlotSoundtrack {
                playlist: "Deep Work Pulse",
                vibe: "binaural beats for concentration",
            },
            DaySlot::Evening => SlotSoundtrack {
                playlist: "Creative Spark",
                vibe: "jazzy downtempo grooves",
            },
            DaySlot::WindDown => SlotSoundtrack {
                playlist: "Nightfall Unwind",
                vibe: "calming ambient textures",
            },
        }
    }
}

impl EnergyProfile {
    /// Unscaled slot lengths in minutes, in [`DaySlot::SEQUENCE`] order.
    pub fn base_durations(&self) -> [i64; 5] {
        match self {
            EnergyProfile::EarlyBird => [180, 150, 120, 120, 120],
            EnergyProfile::Balanced => [180, 180, 150, 120, 120],
            EnergyProfile::NightOwl => [150, 150, 180, 150, 150],
        }
    }
}
