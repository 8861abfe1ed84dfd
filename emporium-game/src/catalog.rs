//! Fixed potion catalog: kinds, display names and prices.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

/// A purchasable potion category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PotionKind {
    Healing,
    Mana,
    Speed,
    Invisibility,
}

impl PotionKind {
    /// Number of real kinds on sale.
    pub const COUNT: usize = 4;

    /// Every kind in menu order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Healing,
        Self::Mana,
        Self::Speed,
        Self::Invisibility,
    ];

    /// Position in the catalog and the menu digit the player types.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Self::COUNT {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Healing => "healing",
            Self::Mana => "mana",
            Self::Speed => "speed",
            Self::Invisibility => "invisibility",
        }
    }

    #[must_use]
    pub const fn entry(self) -> CatalogEntry {
        CATALOG[self.index()]
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        self.entry().name
    }

    #[must_use]
    pub const fn price(self) -> u32 {
        self.entry().price
    }
}

impl fmt::Display for PotionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PotionKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "healing" => Ok(Self::Healing),
            "mana" => Ok(Self::Mana),
            "speed" => Ok(Self::Speed),
            "invisibility" => Ok(Self::Invisibility),
            _ => Err(()),
        }
    }
}

/// One row of the price list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub kind: PotionKind,
    pub name: &'static str,
    pub price: u32,
}

const CATALOG: [CatalogEntry; PotionKind::COUNT] = [
    CatalogEntry {
        kind: PotionKind::Healing,
        name: "healing",
        price: 20,
    },
    CatalogEntry {
        kind: PotionKind::Mana,
        name: "mana",
        price: 30,
    },
    CatalogEntry {
        kind: PotionKind::Speed,
        name: "speed",
        price: 12,
    },
    CatalogEntry {
        kind: PotionKind::Invisibility,
        name: "invisibility",
        price: 50,
    },
];

// Entry `i` must describe kind `i`; lookups index the table by discriminant.
const _: () = {
    assert!(CATALOG.len() == PotionKind::ALL.len());
    let mut i = 0;
    while i < CATALOG.len() {
        assert!(CATALOG[i].kind.index() == i);
        assert!(PotionKind::ALL[i].index() == i);
        i += 1;
    }
};

/// The full price list in menu order.
#[must_use]
pub const fn catalog() -> &'static [CatalogEntry] {
    &CATALOG
}

pub const CATALOG_HEADING: &str = "Here's our selection for today:";

/// Write the menu: a heading followed by one line per kind.
///
/// # Errors
///
/// Returns an error if the writer fails.
pub fn render_catalog<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n{CATALOG_HEADING}")?;
    for entry in catalog() {
        writeln!(
            out,
            "{}) A {} potion costs {}",
            entry.kind.index(),
            entry.name,
            entry.price
        )?;
    }
    Ok(())
}
