#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use clap::Parser;
use eframe::{egui, App, Frame};
use image::GenericImageView;
use std::{fs, path::Path, path::PathBuf};
use tile_area_calculator::{
    app::Session,
    area::entry_area_mm2,
    config,
    dimension::{ContingencyPercent, DimensionField},
    format::{format_area, format_number},
    logging,
    units::{AreaUnit, LengthUnit},
};
use uuid::Uuid;

const ACCENT: egui::Color32 = egui::Color32::from_rgb(34, 211, 238);

#[derive(Debug, Parser)]
#[command(name = "tile_area_calculator", version, about)]
struct GuiArgs {
    /// 설정 파일 경로
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,
}

fn main() -> Result<(), eframe::Error> {
    let args = GuiArgs::parse();
    let loaded = config::load_or_create(&args.config);
    let app_cfg = match &loaded {
        Ok((cfg, _)) => cfg.clone(),
        Err(_) => config::Config::default(),
    };
    if let Err(e) = logging::init(&app_cfg.log_level) {
        eprintln!("로그 초기화 실패: {e}");
    }
    match loaded {
        Ok((_, source)) => tracing::info!(path = %args.config.display(), ?source, "설정 준비"),
        Err(e) => tracing::warn!(path = %args.config.display(), error = %e, "설정 로드 실패, 기본값 사용"),
    }

    let mut viewport = egui::ViewportBuilder::default()
        .with_title("Tile Area Calculator")
        .with_inner_size([980.0, 640.0])
        .with_transparent(true);
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    tracing::info!(config = %args.config.display(), "GUI 시작");
    eframe::run_native(
        "Tile Area Calculator",
        options,
        Box::new(move |_cc| Box::new(GuiApp::new(app_cfg, args.config))),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["tile_area_calculator.png", "icon.png", "assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

fn label_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.label(text).on_hover_text(tip)
}

fn unit_combo(ui: &mut egui::Ui, id_source: impl std::hash::Hash, value: &mut LengthUnit) -> bool {
    let mut changed = false;
    egui::ComboBox::from_id_source(id_source)
        .selected_text(value.symbol())
        .width(64.0)
        .show_ui(ui, |ui| {
            for unit in LengthUnit::ALL {
                changed |= ui.selectable_value(value, unit, unit.symbol()).changed();
            }
        });
    changed
}

fn result_card(ui: &mut egui::Ui, unit: AreaUnit, value: &str) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new(unit.label()).small());
            ui.label(egui::RichText::new(value).size(28.0).strong().color(ACCENT));
            ui.label(unit.symbol());
        });
    });
}

struct GuiApp {
    config: config::Config,
    config_path: PathBuf,
    session: Session,
    show_settings_modal: bool,
    settings_status: Option<String>,
}

impl GuiApp {
    fn new(config: config::Config, config_path: PathBuf) -> Self {
        let session = Session::from_config(&config);
        Self {
            config,
            config_path,
            session,
            show_settings_modal: false,
            settings_status: None,
        }
    }

    fn add_row(&mut self) -> Uuid {
        let id = self.session.entries.add();
        tracing::debug!(%id, rows = self.session.entries.len(), "행 추가");
        id
    }

    fn remove_row(&mut self, id: Uuid) -> bool {
        let removed = self.session.entries.remove(id);
        if removed {
            tracing::debug!(%id, rows = self.session.entries.len(), "행 삭제");
        }
        removed
    }

    /// 한 프레임 동안 모은 행 편집을 목록에 반영한다. 바뀐 것이 있으면 true.
    fn apply_row_edits(&mut self, edits: Vec<(Uuid, DimensionField)>, remove: Option<Uuid>) -> bool {
        let mut changed = false;
        for (id, field) in edits {
            changed |= self.session.entries.update(id, field);
        }
        if let Some(id) = remove {
            changed |= self.remove_row(id);
        }
        changed
    }

    /// 결과 카드에 들어갈 (단위, 표시 문자열) 목록. m², cm², mm² 순서.
    fn result_cards(&mut self) -> Vec<(AreaUnit, String)> {
        let total = self.session.total();
        AreaUnit::DISPLAY_ORDER
            .iter()
            .map(|&unit| (unit, format_number(total.in_unit(unit))))
            .collect()
    }

    fn save_settings(&mut self) {
        self.session.entries.set_default_unit(self.config.default_unit);
        self.settings_status = Some(match config::save_to(&self.config, &self.config_path) {
            Ok(()) => "Saved.".to_string(),
            Err(e) => {
                tracing::warn!(error = %e, "설정 저장 실패");
                format!("Save failed: {e}")
            }
        });
    }

    fn ui_dimensions(&mut self, ui: &mut egui::Ui) {
        ui.heading("Dimensions");
        ui.add_space(8.0);

        let mut edits: Vec<(Uuid, DimensionField)> = Vec::new();
        let mut remove: Option<Uuid> = None;
        egui::ScrollArea::vertical()
            .auto_shrink([false, true])
            .show(ui, |ui| {
                egui::Grid::new("dimension_grid")
                    .num_columns(5)
                    .spacing([8.0, 8.0])
                    .striped(true)
                    .show(ui, |ui| {
                        ui.label("Length");
                        ui.label("Height");
                        ui.label("Unit");
                        ui.label("Area");
                        ui.label("");
                        ui.end_row();

                        for entry in self.session.entries.entries() {
                            let mut length = entry.length.clone();
                            if ui
                                .add(
                                    egui::TextEdit::singleline(&mut length)
                                        .hint_text("e.g., 120")
                                        .desired_width(120.0),
                                )
                                .changed()
                            {
                                edits.push((entry.id, DimensionField::Length(length)));
                            }
                            let mut height = entry.height.clone();
                            if ui
                                .add(
                                    egui::TextEdit::singleline(&mut height)
                                        .hint_text("e.g., 60")
                                        .desired_width(120.0),
                                )
                                .changed()
                            {
                                edits.push((entry.id, DimensionField::Height(height)));
                            }
                            let mut unit = entry.unit;
                            if unit_combo(ui, ("unit", entry.id), &mut unit) {
                                edits.push((entry.id, DimensionField::Unit(unit)));
                            }
                            ui.label(format_area(
                                entry_area_mm2(entry),
                                AreaUnit::SquareMillimeter,
                            ));
                            if ui.button("🗑").on_hover_text("Remove this area").clicked() {
                                remove = Some(entry.id);
                            }
                            ui.end_row();
                        }
                    });
            });
        if self.apply_row_edits(edits, remove) {
            ui.ctx().request_repaint();
        }

        ui.add_space(8.0);
        let add = egui::Button::new("➕ Add Another Area")
            .min_size(egui::vec2(ui.available_width(), 32.0));
        if ui.add(add).clicked() {
            self.add_row();
        }
    }

    fn ui_results(&mut self, ui: &mut egui::Ui) {
        ui.heading("Contingency Stock");
        let mut pct = self.session.contingency.value();
        let resp = ui.add(
            egui::Slider::new(&mut pct, ContingencyPercent::MIN..=ContingencyPercent::MAX)
                .suffix("%"),
        );
        if resp.changed() {
            self.session.set_contingency(pct);
        }
        label_with_tip(
            ui,
            "A buffer for cuts, mistakes, or future repairs. 10-15% is standard.",
            "Added on top of the summed area before unit conversion.",
        );

        ui.add_space(12.0);
        ui.separator();
        ui.heading("Total Required Area");
        ui.add_space(8.0);
        for (unit, value) in self.result_cards() {
            result_card(ui, unit, &value);
            ui.add_space(6.0);
        }
    }

    fn ui_settings(&mut self, ctx: &egui::Context) {
        let mut open = self.show_settings_modal;
        let mut save = false;
        egui::Window::new("Settings")
            .collapsible(false)
            .resizable(false)
            .open(&mut open)
            .show(ctx, |ui| {
                egui::Grid::new("settings_grid")
                    .num_columns(2)
                    .spacing([12.0, 8.0])
                    .show(ui, |ui| {
                        label_with_tip(ui, "Unit for new rows", "Existing rows keep their unit.");
                        unit_combo(ui, "settings_default_unit", &mut self.config.default_unit);
                        ui.end_row();

                        ui.label("Contingency at startup");
                        let mut pct = self.config.default_contingency_percent.value();
                        if ui
                            .add(
                                egui::Slider::new(
                                    &mut pct,
                                    ContingencyPercent::MIN..=ContingencyPercent::MAX,
                                )
                                .suffix("%"),
                            )
                            .changed()
                        {
                            self.config.default_contingency_percent = ContingencyPercent::new(pct);
                        }
                        ui.end_row();

                        ui.label("Window opacity");
                        ui.add(egui::Slider::new(&mut self.config.window_alpha, 0.3..=1.0));
                        ui.end_row();

                        ui.label("Always on top");
                        ui.checkbox(&mut self.config.always_on_top, "");
                        ui.end_row();
                    });
                ui.separator();
                ui.horizontal(|ui| {
                    save = ui.button("Save").clicked();
                    if let Some(status) = &self.settings_status {
                        ui.label(status);
                    }
                });
            });
        if save {
            self.save_settings();
        }
        if !open {
            self.settings_status = None;
        }
        self.show_settings_modal = open;
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        ctx.send_viewport_cmd(egui::ViewportCommand::WindowLevel(if self.config.always_on_top {
            egui::WindowLevel::AlwaysOnTop
        } else {
            egui::WindowLevel::Normal
        }));

        // 투명도 적용
        let alpha = self.config.clamped_window_alpha();
        let mut style = (*ctx.style()).clone();
        style.visuals.window_fill = style.visuals.window_fill.linear_multiply(alpha);
        style.visuals.panel_fill = style.visuals.panel_fill.linear_multiply(alpha);
        ctx.set_style(style);

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Tile Area Calculator");
                ui.separator();
                ui.label("Calculate the total tile area needed, including contingency.");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Settings").clicked() {
                        self.show_settings_modal = true;
                    }
                });
            });
        });

        if self.show_settings_modal {
            self.ui_settings(ctx);
        }

        // 입력 행을 먼저 처리해야 같은 프레임의 결과 카드에 반영된다.
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.columns(2, |cols| {
                self.ui_dimensions(&mut cols[0]);
                self.ui_results(&mut cols[1]);
            });
        });
    }
}
