use userseed_core::{Account, DateOfBirth, Location, PhoneNumber, UserProfile};
use userseed_generate::sql::{insert_account, insert_location, insert_user};

fn location() -> Location {
    Location {
        street_number: 42,
        street_name: "Riccarton Road".to_string(),
        city: "Christchurch".to_string(),
        region: "Canterbury".to_string(),
        country: "New Zealand".to_string(),
        post_code: 8041,
        district: "Delta".to_string(),
    }
}

fn profile() -> UserProfile {
    UserProfile {
        first_name: "Rose".to_string(),
        middle_name: "June".to_string(),
        last_name: "Lewis".to_string(),
        nickname: "Get Some Sleep".to_string(),
        phone_number: PhoneNumber::from_local_digits(4_567_890),
        date_of_birth: DateOfBirth {
            year: 1999,
            month: 12,
            day: 3,
        },
        bio: "Beaches are fun".to_string(),
    }
}

#[test]
fn location_insert_renders_literal_values() {
    let rendered = insert_location(&location()).render().expect("render");
    assert_eq!(
        rendered,
        "INSERT INTO location (street_number, street_name, city, region, country, post_code, district)\n\
         VALUES ('42', 'Riccarton Road', 'Christchurch', 'Canterbury', 'New Zealand', '8041', 'Delta');"
    );
}

#[test]
fn account_insert_uses_role_and_placeholder_code() {
    let account = Account::with_email("RoseLewis@gmail.com");
    let rendered = insert_account(&account).render().expect("render");
    assert_eq!(
        rendered,
        "INSERT INTO account (email, role, authentication_code)\n\
         VALUES ('RoseLewis@gmail.com', 'user', 'authcode');"
    );
}

#[test]
fn user_insert_selects_account_and_location_ids() {
    let account = Account::with_email("RoseLewis@gmail.com");
    let rendered = insert_user(&profile(), &account, &location().key())
        .render()
        .expect("render");
    assert_eq!(
        rendered,
        "INSERT INTO user (first_name, middle_name, last_name, nickname, ph_num, dob, bio, userid, address_id)\n\
         SELECT 'Rose', 'June', 'Lewis', 'Get Some Sleep', '0274567890', '1999-12-3', 'Beaches are fun', account.userid, location.id\n\
         FROM account, location\n\
         WHERE account.email = 'RoseLewis@gmail.com' AND location.street_number = '42' AND location.street_name = 'Riccarton Road';"
    );
}

#[test]
fn quotes_in_values_cannot_break_out_of_literals() {
    let mut profile = profile();
    profile.bio = "It's fine'); DROP TABLE account; --".to_string();
    let account = Account::with_email("x@y.z");
    let rendered = insert_user(&profile, &account, &location().key())
        .render()
        .expect("render");
    assert!(rendered.contains("'It''s fine''); DROP TABLE account; --'"));
}

#[test]
fn street_number_compares_as_a_string_literal() {
    let mut location = location();
    location.street_number = 0;
    location.post_code = 1000;

    let insert = insert_location(&location).render().expect("render");
    assert!(insert.contains("VALUES ('0', 'Riccarton Road',"), "{insert}");
    assert!(insert.contains("'New Zealand', '1000', 'Delta');"), "{insert}");

    let account = Account::with_email("JackLee@yahoo.com");
    let user = insert_user(&profile(), &account, &location.key())
        .render()
        .expect("render");
    assert!(user.contains("location.street_number = '0' AND"), "{user}");
}
