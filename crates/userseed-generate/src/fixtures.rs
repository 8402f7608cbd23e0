use rand::Rng;

use userseed_core::{Account, DateOfBirth, Location, PhoneNumber, UserProfile};

use crate::candidates::{
    BIOS, CITIES, COUNTRIES, DISTRICTS, EMAIL_SUFFIXES, FIRST_NAMES, LAST_NAMES, NICKNAMES,
    REGIONS, STREET_NAMES,
};

pub const DOB_YEARS: std::ops::RangeInclusive<u16> = 1900..=2010;
pub const DOB_MONTHS: std::ops::RangeInclusive<u8> = 1..=12;
/// Capped at 28 so every month/year combination is a real date.
pub const DOB_DAYS: std::ops::RangeInclusive<u8> = 1..=28;
pub const PHONE_DIGITS: std::ops::RangeInclusive<u32> = 1_000_000..=9_999_999;
pub const STREET_NUMBERS: std::ops::RangeInclusive<u16> = 0..=999;
pub const POST_CODES: std::ops::RangeInclusive<u32> = 1000..=99_999;

pub fn date_of_birth(rng: &mut impl Rng) -> DateOfBirth {
    let day = rng.random_range(DOB_DAYS);
    let month = rng.random_range(DOB_MONTHS);
    let year = rng.random_range(DOB_YEARS);
    DateOfBirth { year, month, day }
}

pub fn phone_number(rng: &mut impl Rng) -> PhoneNumber {
    PhoneNumber::from_local_digits(rng.random_range(PHONE_DIGITS))
}

/// Four random bytes, hex encoded. Generated accounts carry a placeholder
/// authentication code instead, so scripts never call this.
pub fn password(rng: &mut impl Rng) -> String {
    let bytes: [u8; 4] = rng.random();
    hex::encode(bytes)
}

/// First name, last name and domain suffix with no separator.
pub fn email(rng: &mut impl Rng) -> String {
    let first = pick(FIRST_NAMES, rng);
    let last = pick(LAST_NAMES, rng);
    let suffix = pick(EMAIL_SUFFIXES, rng);
    format!("{first}{last}{suffix}")
}

pub fn location(rng: &mut impl Rng) -> Location {
    Location {
        street_number: rng.random_range(STREET_NUMBERS),
        street_name: pick(STREET_NAMES, rng).to_string(),
        city: pick(CITIES, rng).to_string(),
        region: pick(REGIONS, rng).to_string(),
        country: pick(COUNTRIES, rng).to_string(),
        post_code: rng.random_range(POST_CODES),
        district: pick(DISTRICTS, rng).to_string(),
    }
}

pub fn account(rng: &mut impl Rng) -> Account {
    Account::with_email(email(rng))
}

pub fn user_profile(rng: &mut impl Rng) -> UserProfile {
    let first_name = pick(FIRST_NAMES, rng).to_string();
    let middle_name = pick(FIRST_NAMES, rng).to_string();
    let last_name = pick(LAST_NAMES, rng).to_string();
    let nickname = pick(NICKNAMES, rng).to_string();
    let bio = pick(BIOS, rng).to_string();
    UserProfile {
        first_name,
        middle_name,
        last_name,
        nickname,
        phone_number: phone_number(rng),
        date_of_birth: date_of_birth(rng),
        bio,
    }
}

fn pick<'a>(values: &[&'a str], rng: &mut impl Rng) -> &'a str {
    values[rng.random_range(0..values.len())]
}
