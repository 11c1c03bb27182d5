use std::{
    fmt::Display,
    sync::{LazyLock, RwLock},
};

use nu_ansi_term::Color;

pub struct Icons;

impl Icons {
    pub const ACTION: &str = "⚙";
    pub const CERTIFICATE: &str = "🔏";
    pub const CROSS: &str = "✗";
    pub const INSTALLED: &str = "✓";
    pub const NOT_INSTALLED: &str = "○";
    pub const PACKAGE: &str = "📦";
}

pub static COLOR: LazyLock<RwLock<bool>> = LazyLock::new(|| RwLock::new(true));
pub static ICONS: LazyLock<RwLock<bool>> = LazyLock::new(|| RwLock::new(true));

fn read_flag(flag: &RwLock<bool>) -> bool {
    *flag.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub fn set_flag(flag: &RwLock<bool>, value: bool) {
    *flag.write().unwrap_or_else(|poisoned| poisoned.into_inner()) = value;
}

pub fn icon_or<'a>(icon: &'a str, fallback: &'a str) -> &'a str {
    if read_flag(&ICONS) {
        icon
    } else {
        fallback
    }
}

pub fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

pub struct Colored<T: Display>(pub Color, pub T);

impl<T: Display> Display for Colored<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if read_flag(&COLOR) {
            write!(f, "{}", self.0.prefix())?;
            self.1.fmt(f)?;
            write!(f, "{}", self.0.suffix())
        } else {
            self.1.fmt(f)
        }
    }
}
