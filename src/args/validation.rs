use serde_json::Value;
use std::{fs, path::PathBuf};

/// # Errors
///
/// Will return `Err` if the file is not readable
pub fn check_readable_file(file: &str) -> Result<String, String> {
    let path = PathBuf::from(file);
    if !path.is_file() || fs::metadata(&path).is_err() {
        return Err(format!("The file '{file}' is not readable."));
    }
    Ok(file.to_string())
}

/// # Errors
///
/// Will return `Err` if the file is not readable or is not valid json
pub fn check_readable_file_and_json(file: &str) -> Result<Value, String> {
    let file = check_readable_file(file)?;
    let contents =
        fs::read_to_string(&file).map_err(|e| format!("The json file '{file}' is not readable: {e}"))?;
    serde_json::from_str(&contents).map_err(|e| format!("The file '{file}' is not valid json: {e}"))
}

fn check_keys(element: &Value, expected_keys: &[&str], what: &str) -> Result<(), String> {
    let Some(object) = element.as_object() else {
        return Err(format!("The {what} json is not in the correct format. Expected an object."));
    };
    for key in object.keys() {
        if !expected_keys.contains(&key.as_str()) {
            return Err(format!(
                "The {what} json is not in the correct format. Expected keys: {expected_keys:?}"
            ));
        }
    }
    Ok(())
}

/// Validate a wolf game file.
/// format we expect is this:
/// { "players": [{ "name": "Name", "handicap": <float>, "scores": [<int> x 18], ... }, ...]
/// , "course": { "pars": [...], "stroke_index": [...] }
/// , "wolf_order": [<int>, ...]
/// , "partnerships": [{ "hole": <int>, "wolf": <int>, "partner": <int|null>, "lone_wolf": <bool>, "quad": <bool> }]
/// , "format": "wolf", "point_value": <float> }
///
/// # Errors
///
/// Will return `Err` if the json is not in the correct format
pub fn validate_game_json(json: &Value) -> Result<(), String> {
    check_keys(
        json,
        &["players", "course", "wolf_order", "partnerships", "format", "point_value"],
        "game",
    )?;
    let Some(players) = json["players"].as_array() else {
        return Err("The json key players is not in the correct format. Expected an array.".to_string());
    };
    for player in players {
        if !player["name"].is_string() {
            return Err(
                "The json key players is not in the correct format. Expected objects with a name."
                    .to_string(),
            );
        }
        if let Some(scores) = player.get("scores") {
            if scores.as_array().is_none_or(|s| s.len() != 18) {
                return Err(format!(
                    "Player {} needs exactly 18 hole scores.",
                    player["name"]
                ));
            }
        }
    }
    if let Some(partnerships) = json.get("partnerships") {
        let Some(partnerships) = partnerships.as_array() else {
            return Err(
                "The json key partnerships is not in the correct format. Expected an array."
                    .to_string(),
            );
        };
        for partnership in partnerships {
            if !partnership["hole"].is_number() || !partnership["wolf"].is_number() {
                return Err(
                    "The json key partnerships is not in the correct format. Expected objects with keys hole and wolf."
                        .to_string(),
                );
            }
        }
    }
    Ok(())
}

/// Validate an event file: one event object or a list of them.
/// { "event_id": <int>, "players": [{ "id": "...", "name": "..." }]
/// , "handicaps": { "<id>": <float> }
/// , "days": { "1": { "config": {...}, "admin_scores": {...}, "player_scores": {...} } } }
///
/// # Errors
///
/// Will return `Err` if the json is not in the correct format
pub fn validate_event_json(json: &Value) -> Result<(), String> {
    let events = match json.as_array() {
        Some(events) => events.iter().collect::<Vec<_>>(),
        None => vec![json],
    };
    for event in events {
        check_keys(event, &["event_id", "players", "handicaps", "days"], "event")?;
        if !event["event_id"].is_number() {
            return Err(
                "The json key event_id is not in the correct format. Expected a number."
                    .to_string(),
            );
        }
        if let Some(days) = event.get("days") {
            let Some(days) = days.as_object() else {
                return Err(
                    "The json key days is not in the correct format. Expected an object keyed by day."
                        .to_string(),
                );
            };
            if let Some(bad) = days.keys().find(|k| k.parse::<u32>().map_or(true, |d| d == 0)) {
                return Err(format!("The day '{bad}' is not a day number starting at 1."));
            }
        }
    }
    Ok(())
}
