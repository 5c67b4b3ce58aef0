use color_eyre::Result;
use dialoguer::{Input, Select};

/// Prompt for a string value with optional default
pub fn prompt_string(prompt: &str, default: Option<&str>) -> Result<String> {
    let mut input_builder = Input::<String>::new().with_prompt(prompt).allow_empty(true);

    if let Some(default_value) = default {
        input_builder = input_builder.default(default_value.to_string());
    }

    input_builder
        .interact_text()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to read input: {}", e))
}

/// Prompt for a page number; blank input keeps `current`.
pub fn prompt_page(prompt: &str, current: usize) -> Result<usize> {
    loop {
        let input = prompt_string(prompt, Some(&current.to_string()))?;
        match parse_page(&input, current) {
            Some(page) => return Ok(page),
            None => eprintln!("Invalid input. Please enter a page number."),
        }
    }
}

fn parse_page(input: &str, current: usize) -> Option<usize> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Some(current);
    }
    trimmed.parse::<usize>().ok()
}

/// Pick one of `items`; `None` when the user backs out with Esc or q.
pub fn prompt_select<T: ToString>(prompt: &str, items: &[T], default: usize) -> Result<Option<usize>> {
    Select::new()
        .with_prompt(prompt)
        .items(items)
        .default(default.min(items.len().saturating_sub(1)))
        .interact_opt()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to read selection: {}", e))
}
