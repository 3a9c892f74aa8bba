use cinematrack_models::Genre;
use color_eyre::Result;
use dialoguer::{Confirm, Input, Select};

/// Prompt for a string value with optional default
pub fn prompt_string(prompt: &str, default: Option<&str>) -> Result<String> {
    let mut input_builder = Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true);

    if let Some(default_value) = default.filter(|d| !d.is_empty()) {
        input_builder = input_builder.default(default_value.to_string());
    }

    input_builder
        .interact_text()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to read input: {}", e))
}

/// Pick a genre from the closed list, preselecting `current`
pub fn prompt_genre(current: Genre) -> Result<Genre> {
    let labels: Vec<&str> = Genre::ALL.iter().map(|g| g.as_str()).collect();
    let default_index = Genre::ALL.iter().position(|g| *g == current).unwrap_or(0);

    let index = Select::new()
        .with_prompt("Genre")
        .items(&labels)
        .default(default_index)
        .interact()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to read selection: {}", e))?;

    Ok(Genre::ALL[index])
}

/// Prompt for yes/no with optional default
pub fn prompt_yes_no(prompt: &str, default: Option<bool>) -> Result<bool> {
    let mut confirm_builder = Confirm::new().with_prompt(prompt);

    if let Some(default_value) = default {
        confirm_builder = confirm_builder.default(default_value);
    }

    confirm_builder
        .interact()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to read confirmation: {}", e))
}
