//! Placeholder art for thumbnail asset names. An unknown name falls back to
//! the generic placeholder instead of failing.

pub const ART_HEIGHT: u16 = 3;

const GENERIC: [&str; 3] = [
    "░░░░░░░░░░░░░░░░░░░░",
    "░░░░░░░  ▶  ░░░░░░░░",
    "░░░░░░░░░░░░░░░░░░░░",
];

const MINECRAFT: [&str; 3] = [
    "▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒",
    "▒▒▒▒▒▒▒  ▶  ▒▒▒▒▒▒▒▒",
    "▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒",
];

const OIL: [&str; 3] = [
    "▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓",
    "▓▓▓▓▓▓▓  ▶  ▓▓▓▓▓▓▓▓",
    "▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓",
];

pub fn art(name: &str) -> &'static [&'static str] {
    match name {
        "minecraft" => &MINECRAFT,
        "oil" => &OIL,
        _ => &GENERIC,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_assets_resolve() {
        assert_ne!(art("minecraft"), art("oil"));
    }

    #[test]
    fn unknown_assets_fall_back_to_generic() {
        assert_eq!(art("does-not-exist"), art("thumbnail"));
        assert_eq!(art("does-not-exist").len(), ART_HEIGHT as usize);
    }
}
