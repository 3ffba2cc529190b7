/// Default metrics shared by the stock widgets.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Height of a titled window's header bar.
    pub window_header_height: f32,
    pub label_font_size: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            window_header_height: 40.0,
            label_font_size: 16.0,
        }
    }
}
