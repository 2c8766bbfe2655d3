/// Static decade table offered in the dropdown

/// One selectable decade and the year range written to storage for it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decade {
    pub label: i64,
    pub first_year: i64,
    pub last_year: i64,
}

impl Decade {
    const fn new(label: i64, first_year: i64, last_year: i64) -> Decade {
        Decade {
            label,
            first_year,
            last_year,
        }
    }
}

/// Oldest first. The map has no photos before 1826, so the 1820s entry
/// is truncated to 1826-1829.
pub const DECADES: [Decade; 18] = [
    Decade::new(1820, 1826, 1829),
    Decade::new(1830, 1830, 1839),
    Decade::new(1840, 1840, 1849),
    Decade::new(1850, 1850, 1859),
    Decade::new(1860, 1860, 1869),
    Decade::new(1870, 1870, 1879),
    Decade::new(1880, 1880, 1889),
    Decade::new(1890, 1890, 1899),
    Decade::new(1900, 1900, 1909),
    Decade::new(1910, 1910, 1919),
    Decade::new(1920, 1920, 1929),
    Decade::new(1930, 1930, 1939),
    Decade::new(1940, 1940, 1949),
    Decade::new(1950, 1950, 1959),
    Decade::new(1960, 1960, 1969),
    Decade::new(1970, 1970, 1979),
    Decade::new(1980, 1980, 1989),
    Decade::new(1990, 1990, 1999),
];

/// Display order for the dropdown: newest first
pub fn decades_newest_first() -> impl Iterator<Item = &'static Decade> {
    DECADES.iter().rev()
}

/// The truncated first entry; a stored range ending in its last year with
/// no start year selects it.
pub fn earliest() -> &'static Decade {
    &DECADES[0]
}
