//! Profile settings form (`jyoti profile set` / `jyoti profile show`).
//!
//! The terminal counterpart of the settings dialog: collects name, date and
//! time of birth, address, and gender, geocodes the address, and saves the
//! whole record at once. A validation failure saves nothing.

use anyhow::Result;
use chrono::{NaiveDate, NaiveTime};
use console::style;
use dialoguer::{Input, Select};

use jyotibot_core::profile_provider::ProfileProvider;
use jyotibot_types::error::{GeocodeError, ProfileError};
use jyotibot_types::profile::{Gender, Profile};

use crate::state::AppState;

/// Run the interactive settings form and save the profile wholesale.
pub async fn set_profile(state: &AppState) -> Result<()> {
    println!();
    println!("  {} User details", style("*").cyan().bold());
    println!();

    let name: String = Input::new()
        .with_prompt("Name")
        .validate_with(|value: &String| {
            if value.trim().is_empty() {
                Err(ProfileError::MissingField("name"))
            } else {
                Ok(())
            }
        })
        .interact_text()?;

    let dob: String = Input::new()
        .with_prompt("Date of birth (YYYY-MM-DD)")
        .validate_with(|value: &String| match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
            Ok(_) => Ok(()),
            Err(_) => Err(ProfileError::InvalidField {
                field: "dob",
                value: value.clone(),
            }),
        })
        .interact_text()?;

    let time: String = Input::new()
        .with_prompt("Time of birth (HH:MM:SS, 24-hour)")
        .validate_with(|value: &String| match NaiveTime::parse_from_str(value, "%H:%M:%S") {
            Ok(_) => Ok(()),
            Err(_) => Err(ProfileError::InvalidField {
                field: "time",
                value: value.clone(),
            }),
        })
        .interact_text()?;

    let address: String = Input::new()
        .with_prompt("Birth place")
        .validate_with(|value: &String| {
            if value.trim().is_empty() {
                Err(ProfileError::MissingField("address"))
            } else {
                Ok(())
            }
        })
        .interact_text()?;

    let gender_labels: Vec<String> = Gender::ALL.iter().map(Gender::to_string).collect();
    let selection = Select::new()
        .with_prompt("Gender")
        .items(&gender_labels)
        .default(0)
        .interact()?;
    let gender = Gender::ALL[selection];

    // Geocode the address; a miss is surfaced but does not block the save.
    let location = match state.create_geocoder()?.lookup(&address).await {
        Ok(coords) => {
            println!(
                "  {} Latitude: {}, Longitude: {}",
                style("✓").green(),
                coords.latitude,
                coords.longitude
            );
            Some(coords)
        }
        Err(GeocodeError::NotFound) => {
            println!("  {} Address not found", style("!").yellow().bold());
            None
        }
        Err(e) => {
            println!("  {} Geocoding failed: {e}", style("!").yellow().bold());
            None
        }
    };

    let profile = Profile {
        name,
        dob,
        time,
        gender,
        address,
        location,
    };

    state.profile_store.save(&profile).await?;

    println!();
    println!(
        "  {} Profile saved to {}",
        style("✓").green().bold(),
        style(state.profile_store.path().display()).dim()
    );
    println!();
    Ok(())
}

/// Print the stored profile.
pub async fn show_profile(state: &AppState, json: bool) -> Result<()> {
    let Some(profile) = state.profile_store.load().await? else {
        if json {
            println!("null");
        } else {
            println!();
            println!("  No profile saved yet. Run: jyoti profile set");
            println!();
        }
        return Ok(());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&profile)?);
        return Ok(());
    }

    println!();
    println!("  {} {}", style("*").cyan().bold(), style(&profile.name).bold());
    println!("  Born:   {} {}", profile.dob, profile.time);
    println!("  Place:  {}", profile.address);
    println!("  Gender: {}", profile.gender);
    match &profile.location {
        Some(loc) => println!("  Coords: {}, {}", loc.latitude, loc.longitude),
        None => println!("  Coords: {}", style("unresolved").dim()),
    }
    println!();
    Ok(())
}
