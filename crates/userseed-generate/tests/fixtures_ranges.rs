use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use userseed_generate::candidates::{
    CITIES, COUNTRIES, DISTRICTS, EMAIL_SUFFIXES, FIRST_NAMES, LAST_NAMES, REGIONS, STREET_NAMES,
};
use userseed_generate::fixtures;

const SAMPLES: usize = 2_000;

#[test]
fn date_of_birth_stays_within_ranges() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..SAMPLES {
        let dob = fixtures::date_of_birth(&mut rng);
        assert!((1900..=2010).contains(&dob.year), "year {}", dob.year);
        assert!((1..=12).contains(&dob.month), "month {}", dob.month);
        assert!((1..=28).contains(&dob.day), "day {}", dob.day);
    }
}

#[test]
fn phone_number_has_prefix_and_seven_digits() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    for _ in 0..SAMPLES {
        let phone = fixtures::phone_number(&mut rng);
        let value = phone.as_str();
        let suffix = value.strip_prefix("027").expect("027 prefix");
        assert_eq!(suffix.len(), 7, "suffix of {value}");
        assert!(suffix.chars().all(|ch| ch.is_ascii_digit()));
        let digits: u32 = suffix.parse().expect("numeric suffix");
        assert!((1_000_000..=9_999_999).contains(&digits));
    }
}

#[test]
fn email_concatenates_names_and_suffix() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    for _ in 0..200 {
        let email = fixtures::email(&mut rng);
        let suffix = EMAIL_SUFFIXES
            .iter()
            .find(|suffix| email.ends_with(*suffix))
            .unwrap_or_else(|| panic!("unknown suffix in {email}"));
        let local = &email[..email.len() - suffix.len()];
        let matched = FIRST_NAMES.iter().any(|first| {
            local
                .strip_prefix(first)
                .is_some_and(|rest| LAST_NAMES.contains(&rest))
        });
        assert!(matched, "local part {local} is not first + last name");
    }
}

#[test]
fn location_fields_come_from_candidates() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    for _ in 0..200 {
        let location = fixtures::location(&mut rng);
        assert!(location.street_number <= 999);
        assert!((1000..=99_999).contains(&location.post_code));
        assert!(STREET_NAMES.contains(&location.street_name.as_str()));
        assert!(CITIES.contains(&location.city.as_str()));
        assert!(REGIONS.contains(&location.region.as_str()));
        assert!(COUNTRIES.contains(&location.country.as_str()));
        assert!(DISTRICTS.contains(&location.district.as_str()));
    }
}

#[test]
fn password_is_four_hex_encoded_bytes() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let password = fixtures::password(&mut rng);
    assert_eq!(password.len(), 8);
    assert!(password.chars().all(|ch| ch.is_ascii_hexdigit()));
}

#[test]
fn fixtures_are_deterministic_for_a_seed() {
    let mut rng_a = ChaCha8Rng::seed_from_u64(2024);
    let mut rng_b = ChaCha8Rng::seed_from_u64(2024);
    assert_eq!(
        fixtures::user_profile(&mut rng_a),
        fixtures::user_profile(&mut rng_b)
    );
    assert_eq!(fixtures::account(&mut rng_a), fixtures::account(&mut rng_b));
}
