// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

/// Characters stripped from category labels before they are compared or
/// turned into widget identifiers. Alphanumerics and spaces pass through.
const STRIPPED: &[char] = &[
    '`', '~', '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '_', '|', '+', '-', '=', '?', ';',
    ':', '\'', '"', ',', '.', '<', '>', '{', '}', '[', ']', '\\', '/',
];

/// Normalized labels are the sole comparison key for category filtering;
/// both sides of a comparison must go through here.
pub fn normalize(input: &str) -> String {
    input
        .chars()
        .filter(|character| !STRIPPED.contains(character))
        .collect()
}

/// Stable identifier for a category's filter control.
pub fn button_id(label: &str) -> String {
    format!("{}-button", label.replace(' ', "-"))
}
