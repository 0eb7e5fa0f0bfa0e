//! Ship assembly.
//!
//! A [`Ship`] is built once from a list of part lines: the list is shuffled
//! with the supplied randomness source, then every line is classified by
//! substring match against the fixed category keywords and routed into the
//! matching slots. Ships are read-only after assembly.

use rand::seq::SliceRandom;
use rand::Rng;

/// Maximum number of weapons a ship can carry. Matches the four hardpoints
/// on the hull; weapon parts beyond this are discarded in encounter order.
pub const WEAPON_CAPACITY: usize = 4;

/// Classification bucket a part line is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartCategory {
    Engine,
    Fuselage,
    Cabin,
    Wings,
    Armor,
    Weapon,
}

impl PartCategory {
    /// All categories in classification order.
    pub const ALL: [PartCategory; 6] = [
        PartCategory::Engine,
        PartCategory::Fuselage,
        PartCategory::Cabin,
        PartCategory::Wings,
        PartCategory::Armor,
        PartCategory::Weapon,
    ];

    /// Keyword whose presence in a part line routes it to this category.
    pub fn keyword(self) -> &'static str {
        match self {
            PartCategory::Engine => "engine",
            PartCategory::Fuselage => "fuselage",
            PartCategory::Cabin => "cabin",
            PartCategory::Wings => "wings",
            PartCategory::Armor => "armor",
            PartCategory::Weapon => "weapon",
        }
    }

    /// Whether the part line belongs to this category.
    ///
    /// A line may match several categories; classification tests every
    /// category without short-circuiting, so a line such as
    /// `"armored engine"` is filed under both Armor and Engine.
    pub fn matches(self, part: &str) -> bool {
        part.contains(self.keyword())
    }
}

/// A fully assembled ship.
///
/// Each single-valued category holds at most one part; wings fill the small
/// slot before the large one; weapons keep encounter order up to
/// [`WEAPON_CAPACITY`]. Comparison is member-wise over all slots, which makes
/// ships sortable and deduplicatable in library contexts.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ship {
    engine: Option<String>,
    fuselage: Option<String>,
    cabin: Option<String>,
    armor: Option<String>,
    small_wing: Option<String>,
    large_wing: Option<String>,
    weapons: Vec<String>,
}

impl Ship {
    /// Assemble a ship from a list of part lines, shuffling with the thread
    /// RNG (system entropy).
    ///
    /// When several lines match the same single-valued category the last one
    /// after the shuffle wins, so that case is intentionally
    /// non-deterministic across runs. Use [`Ship::assemble_with`] and a
    /// seeded RNG to pin the order.
    pub fn assemble(parts: Vec<String>) -> Ship {
        Self::assemble_with(parts, &mut rand::rng())
    }

    /// Assemble a ship using the given randomness source for the shuffle.
    pub fn assemble_with<R: Rng + ?Sized>(mut parts: Vec<String>, rng: &mut R) -> Ship {
        parts.shuffle(rng);

        let mut ship = Ship::default();
        let mut weapons = Vec::new();

        for part in parts {
            for category in PartCategory::ALL {
                if !category.matches(&part) {
                    continue;
                }
                match category {
                    PartCategory::Weapon => weapons.push(part.clone()),
                    PartCategory::Wings => {
                        if ship.small_wing.is_none() {
                            ship.small_wing = Some(part.clone());
                        } else if ship.large_wing.is_none() {
                            ship.large_wing = Some(part.clone());
                        }
                        // Further wing matches are dropped.
                    }
                    PartCategory::Engine => ship.engine = Some(part.clone()),
                    PartCategory::Fuselage => ship.fuselage = Some(part.clone()),
                    PartCategory::Cabin => ship.cabin = Some(part.clone()),
                    PartCategory::Armor => ship.armor = Some(part.clone()),
                }
            }
        }

        weapons.truncate(WEAPON_CAPACITY);
        ship.weapons = weapons;
        ship
    }

    /// Part in the engine slot, if any line matched.
    pub fn engine(&self) -> Option<&str> {
        self.engine.as_deref()
    }

    /// Part in the fuselage slot, if any line matched.
    pub fn fuselage(&self) -> Option<&str> {
        self.fuselage.as_deref()
    }

    /// Part in the cabin slot, if any line matched.
    pub fn cabin(&self) -> Option<&str> {
        self.cabin.as_deref()
    }

    /// Part in the armor slot, if any line matched.
    pub fn armor(&self) -> Option<&str> {
        self.armor.as_deref()
    }

    /// Part in the small wing slot; first wing match lands here.
    pub fn small_wing(&self) -> Option<&str> {
        self.small_wing.as_deref()
    }

    /// Part in the large wing slot; second wing match lands here.
    pub fn large_wing(&self) -> Option<&str> {
        self.large_wing.as_deref()
    }

    /// Mounted weapons in encounter order, at most [`WEAPON_CAPACITY`].
    pub fn weapons(&self) -> &[String] {
        &self.weapons
    }

    /// Whether no slot received a part.
    pub fn is_empty(&self) -> bool {
        self.engine.is_none()
            && self.fuselage.is_none()
            && self.cabin.is_none()
            && self.armor.is_none()
            && self.small_wing.is_none()
            && self.large_wing.is_none()
            && self.weapons.is_empty()
    }
}
