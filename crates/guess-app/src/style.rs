use guess_config::{Rgb, Theme};

pub fn color(rgb: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(rgb.0, rgb.1, rgb.2)
}

/// Widget visuals for a theme. Panel backgrounds are painted separately
/// from the palette.
pub fn visuals(theme: Theme) -> egui::Visuals {
    let palette = theme.palette();
    let mut visuals = if theme.is_dark() {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };
    visuals.override_text_color = Some(color(palette.text));
    visuals.panel_fill = color(palette.panel);
    visuals.window_fill = color(palette.panel);
    visuals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_to_color32() {
        assert_eq!(color(Rgb::CYAN), egui::Color32::from_rgb(0, 255, 255));
    }

    #[test]
    fn visuals_follow_palette() {
        for &theme in Theme::ALL {
            let v = visuals(theme);
            let palette = theme.palette();
            assert_eq!(v.override_text_color, Some(color(palette.text)));
            assert_eq!(v.panel_fill, color(palette.panel));
            assert_eq!(v.dark_mode, theme.is_dark());
        }
    }
}
