//! Decoding of instance selector bits.
//!
//! Instances carry their variant as a raw `u32` selector. The encoding is kept
//! for interchange; inside the technology the selector is decoded once into
//! one of the types below. Every type has a `decode` that returns `None` for
//! undeclared codes and an `encode` that yields the selector bits.

use serde::{Deserialize, Serialize};

/// The flip-flop type bits.
pub const FF_TYPE_MASK: u32 = 0o3;
/// The flip-flop clocking bits.
pub const FF_CLOCK_MASK: u32 = 0o14;

/// The logic function of a flip-flop.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum FlipFlopType {
    /// Set-reset.
    #[default]
    Rs,
    /// J-K.
    Jk,
    /// Data.
    D,
    /// Toggle.
    T,
}

impl FlipFlopType {
    /// Every flip-flop type.
    pub const ALL: [FlipFlopType; 4] = [
        FlipFlopType::Rs,
        FlipFlopType::Jk,
        FlipFlopType::D,
        FlipFlopType::T,
    ];

    const fn bits(&self) -> u32 {
        match self {
            FlipFlopType::Rs => 0,
            FlipFlopType::Jk => 1,
            FlipFlopType::D => 2,
            FlipFlopType::T => 3,
        }
    }
}

/// The clocking of a flip-flop.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum FlipFlopClock {
    /// Master-slave.
    #[default]
    MasterSlave,
    /// Positive edge.
    Positive,
    /// Negative edge.
    Negative,
}

impl FlipFlopClock {
    /// Every clocking.
    pub const ALL: [FlipFlopClock; 3] = [
        FlipFlopClock::MasterSlave,
        FlipFlopClock::Positive,
        FlipFlopClock::Negative,
    ];

    const fn bits(&self) -> u32 {
        match self {
            FlipFlopClock::MasterSlave => 0,
            FlipFlopClock::Positive => 0o4,
            FlipFlopClock::Negative => 0o10,
        }
    }
}

/// A decoded flip-flop selector.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct FlipFlopBits {
    /// The logic function.
    pub kind: FlipFlopType,
    /// The clocking.
    pub clock: FlipFlopClock,
}

impl FlipFlopBits {
    /// Creates a new flip-flop selector.
    pub const fn new(kind: FlipFlopType, clock: FlipFlopClock) -> Self {
        Self { kind, clock }
    }

    /// Decodes a selector.
    ///
    /// Returns `None` if bits outside the two fields are set or the clock field
    /// holds its undeclared fourth value.
    pub fn decode(selector: u32) -> Option<Self> {
        if selector & !(FF_TYPE_MASK | FF_CLOCK_MASK) != 0 {
            return None;
        }
        let kind = match selector & FF_TYPE_MASK {
            0 => FlipFlopType::Rs,
            1 => FlipFlopType::Jk,
            2 => FlipFlopType::D,
            _ => FlipFlopType::T,
        };
        let clock = match selector & FF_CLOCK_MASK {
            0 => FlipFlopClock::MasterSlave,
            0o4 => FlipFlopClock::Positive,
            0o10 => FlipFlopClock::Negative,
            _ => return None,
        };
        Some(Self { kind, clock })
    }

    /// The selector bits.
    pub const fn encode(&self) -> u32 {
        self.kind.bits() | self.clock.bits()
    }

    /// The position of this combination among the twelve flip-flop variants.
    pub(crate) fn ordinal(&self) -> usize {
        let k = self.kind.bits() as usize;
        let c = (self.clock.bits() >> 2) as usize;
        k * 3 + c
    }
}

macro_rules! selector_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $code:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every declared variant, in selector order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Decodes a selector, returning `None` for undeclared codes.
            pub fn decode(selector: u32) -> Option<Self> {
                match selector {
                    $( $code => Some($name::$variant), )+
                    _ => None,
                }
            }

            /// The selector bits.
            pub const fn encode(&self) -> u32 {
                match self {
                    $( $name::$variant => $code ),+
                }
            }
        }
    };
}

selector_enum! {
    /// The flavor of a three- or four-terminal transistor.
    TransistorKind {
        /// An n-channel MOSFET.
        Nmos = 0,
        /// A depletion MOSFET.
        Dmos = 1,
        /// A p-channel MOSFET.
        Pmos = 2,
        /// An NPN bipolar transistor.
        Npn = 3,
        /// A PNP bipolar transistor.
        Pnp = 4,
        /// An n-channel JFET.
        Njfet = 5,
        /// A p-channel JFET.
        Pjfet = 6,
        /// A depletion MESFET.
        Dmes = 7,
        /// An enhancement MESFET.
        Emes = 8,
    }
}

selector_enum! {
    /// The flavor of a diode.
    DiodeKind {
        /// A plain diode.
        Normal = 0,
        /// A zener diode.
        Zener = 1,
    }
}

selector_enum! {
    /// The flavor of a capacitor.
    CapacitorKind {
        /// A plain capacitor.
        Normal = 0,
        /// An electrolytic capacitor.
        Electrolytic = 1,
    }
}

selector_enum! {
    /// The flavor of a resistor.
    ResistorKind {
        /// A plain resistor.
        Normal = 0,
        /// A poly resistor.
        Poly = 1,
    }
}

selector_enum! {
    /// The flavor of a two-port element.
    TwoPortKind {
        /// A voltage-controlled current source.
        Vccs = 0,
        /// A current-controlled voltage source.
        Ccvs = 1,
        /// A voltage-controlled voltage source.
        Vcvs = 2,
        /// A current-controlled current source.
        Cccs = 3,
        /// A transmission line.
        TransmissionLine = 4,
    }
}
