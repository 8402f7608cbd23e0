//! Fixed candidate lists for fixture generation.
//!
//! Entries contain no single quotes. Statements still escape them when
//! rendered.

pub const FIRST_NAMES: &[&str] = &[
    "Connor", "Josh", "Ella", "Henry", "Kai", "Ben", "Edward", "April", "May", "June", "Emila",
    "Frank", "Fergus", "Rose", "Jacob", "Jack", "Danielle",
];

pub const LAST_NAMES: &[&str] = &[
    "Jordan", "Mungus", "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Davis",
    "Thomas", "Taylor", "Lee", "Jackson", "Lewis",
];

pub const NICKNAMES: &[&str] = &[
    "Nathan Apple",
    "EDDDD",
    "Get Some Sleep",
    "Protractor",
    "Cat",
    "Dog",
    "Gugu",
    "Believer",
    "Posh Petrol Head",
];

pub const BIOS: &[&str] = &[
    "I enjoy running on the weekends",
    "Beaches are fun",
    "Got to focus on my career",
    "If only I went to a better university",
    "Read documentation yeah right",
    "My cats keep me going",
    "All I need is food",
];

pub const EMAIL_SUFFIXES: &[&str] = &[
    "@gmail.com",
    "@hotmail.com",
    "@yahoo.com",
    "@uclive.ac.nz",
    "@xtra.co.nz",
];

pub const STREET_NAMES: &[&str] = &[
    "Hillary Cresenct",
    "Elizabeth Street",
    "Alice Avenue",
    "Racheal Road",
    "Peveral Street",
    "Moorhouse Avenue",
    "Riccarton Road",
    "Clyde Road",
    "Angelic Avenue",
];

pub const CITIES: &[&str] = &[
    "Dunedin",
    "Nightcaps",
    "Gore",
    "Tapanui",
    "Wellington",
    "Christchurch",
    "Auckland",
    "Melbourne",
    "Brisbance",
    "Sydeny",
    "Perth",
    "Darwin",
    "Alice Springs",
];

pub const REGIONS: &[&str] = &[
    "Otago",
    "Southland",
    "Canterbury",
    "Victoria",
    "Tasman",
    "Upper Hutt",
];

pub const COUNTRIES: &[&str] = &[
    "New Zealand",
    "Zealand",
    "Australia",
    "England",
    "United Kingdom",
    "Japan",
    "Korea",
    "Singapore",
    "France",
    "Germany",
    "Norway",
];

pub const DISTRICTS: &[&str] = &["Alpha", "Beta", "Charlie", "Delta", "Echo", "Foxtrot"];
