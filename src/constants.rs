pub mod layout {
    pub const TITLE_TOP: f32 = 12.0;
    pub const MENU_TOP: f32 = 52.0;
    pub const MENU_HEIGHT: f32 = 76.0;
    /// Top-left corner of the grid, in window pixels.
    pub const GRID_LEFT: f32 = 20.0;
    pub const GRID_TOP: f32 = 140.0;
    pub const ICON_SIZE: f32 = 50.0;
    pub const VALIDATE_GAP: f32 = 16.0;
}

pub mod timing {
    pub const BANNER_SECONDS: f32 = 3.0;
}
