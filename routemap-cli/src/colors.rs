use colored::CustomColor;
use http::Method;

/// Catppuccin Mocha color palette.
pub fn mauve() -> CustomColor {
    CustomColor::new(203, 166, 247)
}

pub fn sky() -> CustomColor {
    CustomColor::new(137, 220, 235)
}

pub fn subtext() -> CustomColor {
    CustomColor::new(166, 173, 200)
}

pub fn green() -> CustomColor {
    CustomColor::new(166, 227, 161)
}

pub fn yellow() -> CustomColor {
    CustomColor::new(249, 226, 175)
}

pub fn red() -> CustomColor {
    CustomColor::new(243, 139, 168)
}

pub fn blue() -> CustomColor {
    CustomColor::new(137, 180, 250)
}

/// Color used for a verb in route listings.
pub fn method(method: &Method) -> CustomColor {
    match method.as_str() {
        "GET" | "HEAD" => green(),
        "POST" => blue(),
        "PUT" | "PATCH" => yellow(),
        "DELETE" => red(),
        _ => mauve(),
    }
}
