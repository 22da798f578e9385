//! Topping to raw-ingredient mapping
//!
//! Toppings are sold under display names but deplete differently named
//! raw stock rows. The mapping is a fixed table; a topping without an
//! entry simply causes no deduction.

/// Display name -> raw ingredient name, one stock unit per drink unit.
const TOPPING_INGREDIENTS: &[(&str, &str)] = &[
    ("Pearls (tapioca balls)", "Tapioca pearls (raw)"),
    ("Mini pearls", "Mini tapioca pearls (raw)"),
    ("Grass jelly", "Grass jelly (raw)"),
    ("Pudding", "Pudding (raw)"),
    ("Red beans", "Red beans (raw)"),
    ("Aloe vera", "Aloe vera (raw)"),
    ("Coconut jelly", "Coconut jelly (raw)"),
    ("Cheese foam", "Cheese foam mix (raw)"),
];

/// Raw ingredient backing a topping display name, if mapped.
pub fn raw_ingredient(topping: &str) -> Option<&'static str> {
    TOPPING_INGREDIENTS
        .iter()
        .find(|(display, _)| *display == topping)
        .map(|(_, raw)| *raw)
}
