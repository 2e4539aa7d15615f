use crate::renderer::CameraMode;

pub struct UiState {
    pub dataset_selected: usize,
    pub grid_size: u32,
    pub double_sided: bool,

    pub camera_mode: CameraMode,
    pub show_grid: bool,
    pub show_stats: bool,

    pub vsync_enabled: bool,
    pub fps_cap_enabled: bool,
    pub fps_cap: u32,

    pub needs_build: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            dataset_selected: 0,
            grid_size: 64,
            double_sided: true,

            camera_mode: CameraMode::Orbital,
            show_grid: true,
            show_stats: true,

            vsync_enabled: true,
            fps_cap_enabled: false,
            fps_cap: 144,

            needs_build: true,
        }
    }
}
