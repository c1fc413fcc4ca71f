use comfy_table::{Cell, Table};

use crate::error::{Result, SpendError};
use crate::models::UserProfile;
use crate::profile::ProfileStore;
use crate::settings::{get_data_dir, load_settings, save_settings};

fn store() -> ProfileStore {
    ProfileStore::open(&get_data_dir())
}

fn render(profile: &UserProfile) {
    let mut table = Table::new();
    table.set_header(vec!["Field", "Value"]);
    table.add_row(vec![Cell::new("Mobile"), Cell::new(&profile.mobile_number)]);
    table.add_row(vec![Cell::new("Name"), Cell::new(&profile.name)]);
    table.add_row(vec![Cell::new("Email"), Cell::new(&profile.email)]);
    table.add_row(vec![
        Cell::new("Picture"),
        Cell::new(if profile.profile_picture_uri.is_empty() {
            "(none)"
        } else {
            &profile.profile_picture_uri
        }),
    ]);
    println!("{table}");
}

pub fn save(mobile: &str, name: &str, email: &str, picture: Option<&str>) -> Result<()> {
    let profile = UserProfile {
        mobile_number: mobile.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        profile_picture_uri: picture.unwrap_or_default().to_string(),
    };
    let store = store();
    if store.exists(mobile) {
        println!("Overwriting existing profile for {mobile}.");
    }
    store.save(&profile)?;

    // The most recently saved profile becomes the active user
    let mut settings = load_settings();
    settings.user_mobile = mobile.to_string();
    save_settings(&settings)?;

    println!("Profile saved for {mobile}.");
    Ok(())
}

pub fn show(mobile: Option<&str>) -> Result<()> {
    let settings = load_settings();
    let mobile = match mobile {
        Some(m) => m.to_string(),
        None if !settings.user_mobile.is_empty() => settings.user_mobile.clone(),
        None => {
            return Err(SpendError::Profile(
                "no --mobile given and no active user in settings".to_string(),
            ))
        }
    };
    match store().load(&mobile)? {
        Some(profile) => render(&profile),
        None => println!("No profile found for {mobile} (new user)."),
    }
    Ok(())
}

pub fn update(
    mobile: &str,
    name: Option<&str>,
    email: Option<&str>,
    picture: Option<&str>,
) -> Result<()> {
    match store().update(mobile, name, email, picture)? {
        Some(profile) => {
            println!("Profile updated.");
            render(&profile);
        }
        None => println!("No profile found for {mobile} (new user). Use `profile save` first."),
    }
    Ok(())
}

pub fn delete(mobile: &str) -> Result<()> {
    if store().delete(mobile)? {
        println!("Profile deleted for {mobile}.");
    } else {
        println!("No profile found for {mobile}.");
    }
    Ok(())
}
