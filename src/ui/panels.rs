use egui::{Color32, Context, RichText, ScrollArea, Ui};
use std::sync::atomic::Ordering;

use crate::chart::DATASETS;
use crate::chart::engine::ChartStats;
use crate::renderer::CameraMode;
use crate::ui::state::UiState;
use crate::ui::theme::*;

#[derive(Default)]
pub struct UiActions {
    pub build_chart: bool,
}

pub fn draw_side_panel(
    ctx: &Context,
    state: &mut UiState,
    stats: &ChartStats,
    last_error: &Option<String>,
) -> UiActions {
    let mut actions = UiActions::default();

    egui::SidePanel::right("control_panel")
        .min_width(300.0)
        .max_width(400.0)
        .default_width(330.0)
        .frame(egui::Frame::default().fill(BG_PANEL).inner_margin(16.0))
        .show(ctx, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                ui.heading(RichText::new("SURFACE CHART").strong());
                ui.add_space(4.0);
                ui.label(
                    RichText::new("Grid Surface Mesh Viewer")
                        .color(TEXT_MUTED)
                        .size(11.0),
                );
                ui.add_space(16.0);

                section_header(ui, "DATASET");
                egui::ComboBox::from_id_salt("datasets")
                    .selected_text(DATASETS[state.dataset_selected].name)
                    .width(ui.available_width())
                    .show_ui(ui, |ui| {
                        for (i, ds) in DATASETS.iter().enumerate() {
                            if ui
                                .selectable_label(state.dataset_selected == i, ds.name)
                                .clicked()
                            {
                                state.dataset_selected = i;
                                state.needs_build = true;
                                actions.build_chart = true;
                            }
                        }
                    });
                ui.add_space(4.0);
                ui.label(
                    RichText::new(DATASETS[state.dataset_selected].description)
                        .color(TEXT_MUTED)
                        .size(11.0)
                        .italics(),
                );
                ui.add_space(16.0);

                section_header(ui, "MESH");
                ui.horizontal(|ui| {
                    ui.label("Grid size:");
                    if ui
                        .add(egui::Slider::new(&mut state.grid_size, 8..=256))
                        .changed()
                    {
                        state.needs_build = true;
                    }
                });
                if ui
                    .checkbox(&mut state.double_sided, "Double-sided faces")
                    .changed()
                {
                    state.needs_build = true;
                }
                ui.add_space(8.0);

                let (btn_text, btn_color, text_color) = if state.needs_build {
                    ("Build", ACCENT_GREEN, BG_PURE_BLACK)
                } else {
                    ("Built", BG_WIDGET, ACCENT_GREEN)
                };
                if ui
                    .add(
                        egui::Button::new(RichText::new(btn_text).color(text_color))
                            .fill(btn_color)
                            .min_size(egui::vec2(ui.available_width(), 32.0)),
                    )
                    .clicked()
                    && state.needs_build
                {
                    actions.build_chart = true;
                    state.needs_build = false;
                }

                if let Some(err) = last_error {
                    ui.add_space(6.0);
                    egui::Frame::default()
                        .fill(Color32::from_rgb(40, 15, 15))
                        .stroke(egui::Stroke::new(1.0, ACCENT_RED))
                        .rounding(4.0)
                        .inner_margin(8.0)
                        .show(ui, |ui| {
                            ui.label(RichText::new(err).color(ACCENT_RED).size(11.0));
                        });
                }
                ui.add_space(16.0);

                ui.separator();
                ui.add_space(12.0);

                section_header(ui, "VIEW");
                ui.horizontal(|ui| {
                    ui.label("Camera:");
                    if ui
                        .selectable_label(state.camera_mode == CameraMode::Orbital, "Orbital")
                        .clicked()
                    {
                        state.camera_mode = CameraMode::Orbital;
                    }
                    if ui
                        .selectable_label(state.camera_mode == CameraMode::Free, "Free")
                        .clicked()
                    {
                        state.camera_mode = CameraMode::Free;
                    }
                });
                ui.checkbox(&mut state.show_grid, "Show reference grid");
                ui.add_space(16.0);

                section_header(ui, "PERFORMANCE");
                ui.horizontal(|ui| {
                    ui.checkbox(&mut state.vsync_enabled, "VSync");
                    ui.checkbox(&mut state.show_stats, "Stats");
                });
                ui.horizontal(|ui| {
                    ui.checkbox(&mut state.fps_cap_enabled, "FPS Cap:");
                    ui.add_enabled(
                        state.fps_cap_enabled,
                        egui::DragValue::new(&mut state.fps_cap)
                            .range(30..=500)
                            .suffix(" fps"),
                    );
                });
                ui.add_space(16.0);

                if state.show_stats {
                    ui.separator();
                    ui.add_space(12.0);
                    stats_panel(ui, stats);
                }
            });
        });

    actions
}

fn section_header(ui: &mut Ui, text: &str) {
    ui.label(RichText::new(text).color(TEXT_MUTED).size(11.0).strong());
    ui.add_space(4.0);
}

fn stats_panel(ui: &mut Ui, stats: &ChartStats) {
    section_header(ui, "STATISTICS");
    egui::Frame::default()
        .fill(BG_WIDGET)
        .stroke(egui::Stroke::new(1.0, BORDER_SUBTLE))
        .rounding(6.0)
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.style_mut().override_font_id =
                Some(egui::FontId::new(11.0, egui::FontFamily::Monospace));

            let fps = *stats.fps.lock();
            let fps_color = if fps >= 60.0 {
                ACCENT_GREEN
            } else if fps >= 30.0 {
                ACCENT_ORANGE
            } else {
                ACCENT_RED
            };

            egui::Grid::new("stats")
                .num_columns(2)
                .spacing([20.0, 4.0])
                .show(ui, |ui| {
                    ui.label(RichText::new("FPS").color(TEXT_MUTED));
                    ui.label(RichText::new(format!("{:.0}", fps)).color(fps_color));
                    ui.end_row();

                    ui.label(RichText::new("Vertices").color(TEXT_MUTED));
                    ui.label(
                        RichText::new(fmt_num(stats.vertex_count.load(Ordering::Relaxed)))
                            .color(ACCENT_BLUE),
                    );
                    ui.end_row();

                    ui.label(RichText::new("Triangles").color(TEXT_MUTED));
                    ui.label(
                        RichText::new(fmt_num(stats.triangle_count.load(Ordering::Relaxed)))
                            .color(TEXT_PRIMARY),
                    );
                    ui.end_row();

                    ui.label(RichText::new("Build ms").color(TEXT_MUTED));
                    ui.label(
                        RichText::new(format!("{:.2}", *stats.build_time_ms.lock()))
                            .color(TEXT_PRIMARY),
                    );
                    ui.end_row();

                    let (z_min, z_max) = *stats.z_range.lock();
                    ui.label(RichText::new("Z range").color(TEXT_MUTED));
                    ui.label(
                        RichText::new(format!("{:.2} .. {:.2}", z_min, z_max))
                            .color(TEXT_PRIMARY),
                    );
                    ui.end_row();
                });
        });
}

pub fn draw_help_overlay(ctx: &Context, pos: [f32; 3], speed: f32) {
    egui::Area::new(egui::Id::new("help_overlay"))
        .anchor(egui::Align2::LEFT_BOTTOM, egui::vec2(12.0, -12.0))
        .show(ctx, |ui| {
            egui::Frame::default()
                .fill(Color32::from_black_alpha(180))
                .rounding(6.0)
                .inner_margin(10.0)
                .show(ui, |ui| {
                    ui.style_mut().override_font_id =
                        Some(egui::FontId::new(11.0, egui::FontFamily::Monospace));
                    ui.label(
                        RichText::new("WASD - Move | RMB+Drag - Look | Scroll - Zoom")
                            .color(TEXT_MUTED),
                    );
                    ui.label(
                        RichText::new(format!(
                            "Pos: ({:.2}, {:.2}, {:.2}) | Speed: {:.2}",
                            pos[0], pos[1], pos[2], speed
                        ))
                        .color(TEXT_MUTED),
                    );
                });
        });
}

fn fmt_num(n: usize) -> String {
    if n >= 1_000_000 {
        format!("{:.2}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    }
}
