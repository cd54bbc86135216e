//! Font descriptor for text rendering.

/// Font configuration for the text tool.
///
/// Describes which font to use, including family name, weight, and style.
/// The size is not part of the descriptor; it follows the brush size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontDescriptor {
    /// Font family name (e.g., "Sans", "Monospace", "DejaVu Serif")
    pub family: String,

    /// Font weight (e.g., "normal", "bold", "light" or numeric 100-900)
    pub weight: String,

    /// Font style (e.g., "normal", "italic", "oblique")
    pub style: String,
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self {
            family: "Sans".to_string(),
            weight: "normal".to_string(),
            style: "normal".to_string(),
        }
    }
}

impl FontDescriptor {
    pub fn new(family: String, weight: String, style: String) -> Self {
        Self {
            family,
            weight,
            style,
        }
    }

    /// Converts this descriptor to a Pango description string without a size.
    ///
    /// Format: "Family Style Weight", e.g. "Sans" or "Monospace Italic Bold".
    /// The pixel size is applied separately with an absolute size.
    pub fn to_pango_string(&self) -> String {
        let mut parts = vec![self.family.clone()];

        if self.style.to_lowercase() != "normal" {
            parts.push(capitalize_first(&self.style));
        }

        if self.weight.to_lowercase() != "normal" {
            parts.push(capitalize_first(&self.weight));
        }

        parts.join(" ")
    }

    /// Builds a Pango font description sized in device pixels.
    pub fn to_pango(&self, pixel_size: f64) -> pango::FontDescription {
        let mut desc = pango::FontDescription::from_string(&self.to_pango_string());
        desc.set_absolute_size(pixel_size * f64::from(pango::SCALE));
        desc
    }
}

/// Capitalizes the first letter of a string.
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}
