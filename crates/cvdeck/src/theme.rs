use eframe::egui::Color32;

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub background: Color32,
    pub foreground: Color32,
    pub muted: Color32,
    pub heading_color: Color32,
    pub accent: Color32,
    pub accent_secondary: Color32,
    pub panel: Color32,
    pub chip_background: Color32,
    pub chip_border: Color32,
    pub h1_size: f32,
    pub h2_size: f32,
    pub h3_size: f32,
    pub body_size: f32,
    pub small_size: f32,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            background: Color32::from_rgb(0x10, 0x14, 0x24),
            foreground: Color32::from_rgb(0xC8, 0xCC, 0xD8),
            muted: Color32::from_rgb(0x8A, 0x90, 0xA4),
            heading_color: Color32::WHITE,
            accent: Color32::from_rgb(0x60, 0xA5, 0xFA),
            accent_secondary: Color32::from_rgb(0xC0, 0x84, 0xFC),
            panel: Color32::from_rgb(0x1B, 0x21, 0x38),
            chip_background: Color32::from_rgb(0x1E, 0x32, 0x54),
            chip_border: Color32::from_rgb(0x3B, 0x5C, 0x94),
            h1_size: 96.0,
            h2_size: 64.0,
            h3_size: 44.0,
            body_size: 30.0,
            small_size: 22.0,
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            background: Color32::from_rgb(0xF8, 0xF9, 0xFC),
            foreground: Color32::from_rgb(0x2A, 0x2F, 0x40),
            muted: Color32::from_rgb(0x6B, 0x72, 0x84),
            heading_color: Color32::from_rgb(0x13, 0x1A, 0x33),
            accent: Color32::from_rgb(0x25, 0x63, 0xC4),
            accent_secondary: Color32::from_rgb(0x7C, 0x3A, 0xD0),
            panel: Color32::from_rgb(0xEC, 0xEE, 0xF5),
            chip_background: Color32::from_rgb(0xDE, 0xE8, 0xFA),
            chip_border: Color32::from_rgb(0xA8, 0xC2, 0xEA),
            h1_size: 96.0,
            h2_size: 64.0,
            h3_size: 44.0,
            body_size: 30.0,
            small_size: 22.0,
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }

    pub fn toggled(&self) -> Self {
        if self.name == "dark" {
            Self::light()
        } else {
            Self::dark()
        }
    }

    /// Apply opacity to a color
    pub fn with_opacity(color: Color32, opacity: f32) -> Color32 {
        Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), (opacity * 255.0) as u8)
    }
}
