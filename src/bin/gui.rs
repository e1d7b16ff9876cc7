#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use image::GenericImageView;
use rfd::FileDialog;
use std::{env, fs, path::Path};
use tracing_subscriber::EnvFilter;
use vehicle_tco::{
    app,
    chart::{self, ChartMode, CostComponent},
    config::{self, Theme},
    currency::{format_thb, group_thousands},
    engine::ComparisonOutput,
    i18n::{self, keys},
    input::{ComparisonRequest, VehicleInput},
    preset::PresetCatalog,
    report,
    validation::{self, DEFAULT_HORIZON_YEARS},
    vehicle::VehicleKind,
};

const HORIZON_CHOICES: [u32; 5] = [1, 2, 3, 5, 10];

const THEME_CHOICES: [(Theme, &str); 3] = [
    (Theme::System, keys::GUI_THEME_SYSTEM),
    (Theme::Light, keys::GUI_THEME_LIGHT),
    (Theme::Dark, keys::GUI_THEME_DARK),
];

/// 기본 선택지에 현재 값이 없으면 정렬된 위치에 끼워 넣는다.
fn horizon_options(current: u32) -> Vec<u32> {
    let mut options = HORIZON_CHOICES.to_vec();
    if !options.contains(&current) {
        options.push(current);
        options.sort_unstable();
    }
    options
}
/// 폼에서 추가할 수 있는 전기차 수
const MAX_FORM_EVS: usize = 2;
const CHART_HEIGHT: f32 = 280.0;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/en-us/th-th)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if (a == "--lang" || a == "-L") && i + 1 < args.len() {
            cli_lang = Some(args[i + 1].clone());
            i += 1;
        }
        i += 1;
    }

    let mut viewport = egui::ViewportBuilder::default().with_inner_size(egui::vec2(1180.0, 780.0));
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let mut app_cfg = config::load_or_default().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "config unreadable, using defaults");
        config::Config::default()
    });
    if let Some(lang_cli) = cli_lang {
        app_cfg.language = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
    }
    let presets = PresetCatalog::load_or_built_in(app_cfg.preset_path().as_deref())
        .unwrap_or_else(|e| {
            tracing::warn!(error = %e, "no usable preset catalog");
            PresetCatalog::default()
        });
    eframe::run_native(
        "EV vs ICE Cost of Ownership",
        options,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                tracing::warn!("{e}");
            }
            Box::new(GuiApp::new(app_cfg, presets))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../assets/icon.png"];
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

/// 바이너리 폰트 바이트를 기본 폰트 뒤의 대체 폰트로 등록.
fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push(font_name.clone());
    }
    ctx.set_fonts(fonts);
}

/// 태국어 글리프가 있는 폰트를 찾아 등록한다.
/// 1) assets/fonts/ 2) Windows/Linux/macOS 시스템 폰트
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let mut candidates: Vec<std::path::PathBuf> = [
        "assets/fonts/NotoSansThai-Regular.ttf",
        "assets/fonts/thai.ttf",
        "/usr/share/fonts/truetype/noto/NotoSansThai-Regular.ttf",
        "/usr/share/fonts/noto/NotoSansThai-Regular.ttf",
        "/usr/share/fonts/truetype/tlwg/Garuda.ttf",
        "/System/Library/Fonts/Supplemental/Thonburi.ttc",
    ]
    .iter()
    .map(std::path::PathBuf::from)
    .collect();
    if let Some(windir) = env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        for cand in ["LeelawUI.ttf", "tahoma.ttf", "leelawad.ttf"] {
            candidates.push(fonts.join(cand));
        }
    }
    for p in candidates {
        if p.exists() {
            let bytes = fs::read(&p)
                .map_err(|e| format!("Failed to read font ({}): {e}", p.display()))?;
            apply_font_bytes(ctx, bytes, "thai_font");
            tracing::debug!(font = %p.display(), "fallback font loaded");
            return Ok(());
        }
    }
    Err("No Thai-capable font found; Thai text may not render.".into())
}

fn palette(i: usize) -> egui::Color32 {
    const COLORS: [egui::Color32; 6] = [
        egui::Color32::from_rgb(0x25, 0x63, 0xeb),
        egui::Color32::from_rgb(0x16, 0xa3, 0x4a),
        egui::Color32::from_rgb(0xea, 0x58, 0x0c),
        egui::Color32::from_rgb(0x93, 0x33, 0xea),
        egui::Color32::from_rgb(0xdc, 0x26, 0x26),
        egui::Color32::from_rgb(0x08, 0x91, 0xb2),
    ];
    COLORS[i % COLORS.len()]
}

fn component_color(c: CostComponent) -> egui::Color32 {
    match c {
        CostComponent::Energy => egui::Color32::from_rgb(0xf5, 0x9e, 0x0b),
        CostComponent::Maintenance => egui::Color32::from_rgb(0x10, 0xb9, 0x81),
        CostComponent::Loan => egui::Color32::from_rgb(0x63, 0x66, 0xf1),
        CostComponent::Capital => egui::Color32::from_rgb(0x94, 0xa3, 0xb8),
    }
}

/// 축 눈금용 짧은 금액 (฿1.2M, ฿350k).
fn short_thb(v: f64) -> String {
    let a = v.abs();
    if a >= 1_000_000.0 {
        format!("฿{:.1}M", v / 1_000_000.0)
    } else if a >= 1_000.0 {
        format!("฿{:.0}k", v / 1_000.0)
    } else {
        format!("฿{v:.0}")
    }
}

/// 데이터 좌표 (x: 0..x_max, y: 0..y_max)를 화면 좌표로.
fn to_screen(plot: egui::Rect, x_max: f64, y_max: f64, x: f64, y: f64) -> egui::Pos2 {
    let fx = if x_max > 0.0 { (x / x_max) as f32 } else { 0.0 };
    let fy = if y_max > 0.0 { (y / y_max) as f32 } else { 0.0 };
    egui::pos2(
        plot.left() + fx * plot.width(),
        plot.bottom() - fy * plot.height(),
    )
}

fn draw_y_axis(painter: &egui::Painter, plot: egui::Rect, y_max: f64, color: egui::Color32) {
    let grid = egui::Stroke::new(0.5, color.linear_multiply(0.3));
    for step in 0..=4 {
        let y = y_max * step as f64 / 4.0;
        let p = to_screen(plot, 1.0, y_max, 0.0, y);
        painter.line_segment([p, egui::pos2(plot.right(), p.y)], grid);
        painter.text(
            egui::pos2(plot.left() - 6.0, p.y),
            egui::Align2::RIGHT_CENTER,
            short_thb(y),
            egui::FontId::proportional(11.0),
            color,
        );
    }
    painter.line_segment(
        [plot.left_bottom(), plot.left_top()],
        egui::Stroke::new(1.0, color),
    );
}

fn legend_item(ui: &mut egui::Ui, color: egui::Color32, text: &str) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(10.0, 10.0), egui::Sense::hover());
    ui.painter().rect_filled(rect, 2.0, color);
    ui.label(text);
}

/// 필수 숫자 필드. 값이 없으면 0으로 보여준다.
fn required_field(ui: &mut egui::Ui, label: &str, value: &mut Option<f64>, speed: f64) {
    ui.label(label);
    let mut v = value.unwrap_or(0.0);
    if ui.add(egui::DragValue::new(&mut v).speed(speed)).changed() {
        *value = Some(v);
    }
    ui.end_row();
}

/// 선택 숫자 필드. 체크박스로 켜고 끈다.
fn optional_field(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut Option<f64>,
    default: f64,
    speed: f64,
) {
    ui.label(label);
    ui.horizontal(|ui| {
        let mut on = value.is_some();
        if ui.checkbox(&mut on, "").changed() {
            *value = on.then_some(default);
        }
        if let Some(v) = value.as_mut() {
            ui.add(egui::DragValue::new(v).speed(speed));
        }
    });
    ui.end_row();
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    presets: PresetCatalog,
    vehicles: Vec<VehicleInput>,
    horizon_years: u32,
    annual_km: f64,
    next_seq: usize,
    ice_preset: usize,
    ev_preset: usize,
    output: Option<ComparisonOutput>,
    errors: Vec<String>,
    status: Option<String>,
    pie_index: usize,
    show_about: bool,
    theme_applied: Option<Theme>,
}

impl GuiApp {
    fn new(config: config::Config, presets: PresetCatalog) -> Self {
        let tr = app::translator_for(&config, "auto");
        tracing::info!(lang = tr.language_code(), presets = presets.len(), "GUI started");
        let mut s = Self {
            horizon_years: config.default_horizon_years,
            annual_km: config.default_annual_km,
            config,
            tr,
            presets,
            vehicles: Vec::new(),
            next_seq: 1,
            ice_preset: 0,
            ev_preset: 0,
            output: None,
            errors: Vec::new(),
            status: None,
            pie_index: 0,
            show_about: false,
            theme_applied: None,
        };
        // 처음 화면에 ICE 1대, EV 1대
        if let Some(ice) = s.presets.for_kind(VehicleKind::Ice).first().cloned() {
            s.push_vehicle(ice);
        }
        if let Some(ev) = s.presets.for_kind(VehicleKind::Ev).first().cloned() {
            s.push_vehicle(ev);
        }
        s
    }

    fn push_vehicle(&mut self, vehicle: VehicleInput) {
        let stem = if vehicle.id().is_empty() {
            vehicle.kind().as_str().to_lowercase()
        } else {
            vehicle.id().to_string()
        };
        let id = loop {
            let id = format!("{stem}-{}", self.next_seq);
            self.next_seq += 1;
            if !self.vehicles.iter().any(|v| v.id() == id) {
                break id;
            }
        };
        self.vehicles.push(vehicle.with_id(id));
    }

    fn ev_count(&self) -> usize {
        self.vehicles
            .iter()
            .filter(|v| v.kind() == VehicleKind::Ev)
            .count()
    }

    fn request(&self) -> ComparisonRequest {
        ComparisonRequest {
            vehicles: self.vehicles.clone(),
            horizon_years: Some(self.horizon_years as f64),
            annual_km: Some(self.annual_km),
            discount_rate_pct: None,
        }
    }

    fn run_compare(&mut self) {
        match validation::validate_comparison(&self.request()) {
            Ok(input) => {
                let output = vehicle_tco::engine::compare(&input);
                self.errors.clear();
                self.pie_index = self.pie_index.min(output.results.len().saturating_sub(1));
                self.output = Some(output);
            }
            Err(errors) => {
                self.errors = errors.errors().iter().map(|e| e.to_string()).collect();
                self.output = None;
            }
        }
    }

    fn apply_request(&mut self, request: ComparisonRequest) {
        self.vehicles.clear();
        for v in request.vehicles {
            self.push_vehicle(v);
        }
        self.horizon_years = request
            .horizon_years
            .filter(|h| h.fract() == 0.0 && *h >= 1.0)
            .map(|h| h as u32)
            .unwrap_or(DEFAULT_HORIZON_YEARS);
        if let Some(km) = request.annual_km {
            self.annual_km = km;
        }
        self.output = None;
        self.errors.clear();
    }

    fn open_file(&mut self) {
        let Some(path) = FileDialog::new().add_filter("JSON", &["json"]).pick_file() else {
            return;
        };
        match app::load_request(&path) {
            Ok(request) => {
                self.apply_request(request);
                self.status = Some(path.display().to_string());
            }
            Err(e) => self.status = Some(format!("{}: {e}", self.tr.t(keys::ERROR_PREFIX))),
        }
    }

    fn save_json(&mut self, content: Result<String, serde_json::Error>, file_name: &str) {
        let Some(path) = FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_file_name(file_name)
            .save_file()
        else {
            return;
        };
        let result = content
            .map_err(|e| e.to_string())
            .and_then(|text| fs::write(&path, text).map_err(|e| e.to_string()));
        self.status = Some(match result {
            Ok(()) => path.display().to_string(),
            Err(e) => format!("{}: {e}", self.tr.t(keys::ERROR_PREFIX)),
        });
    }

    fn persist_config(&mut self) {
        if let Err(e) = self.config.save() {
            tracing::warn!(error = %e, "config not saved");
        }
    }

    fn apply_theme(&mut self, ctx: &egui::Context, frame: &Frame) {
        if self.theme_applied == Some(self.config.theme) {
            return;
        }
        let dark = match self.config.theme {
            Theme::Light => false,
            Theme::Dark => true,
            Theme::System => !matches!(frame.info().system_theme, Some(eframe::Theme::Light)),
        };
        ctx.set_visuals(if dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });
        self.theme_applied = Some(self.config.theme);
    }

    fn ui_top_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading(self.tr.t(keys::APP_TITLE));
            ui.separator();
            if ui.button(self.tr.t(keys::GUI_OPEN)).clicked() {
                self.open_file();
            }
            if ui.button(self.tr.t(keys::GUI_SAVE)).clicked() {
                let json = self.request().to_json_pretty();
                self.save_json(json, "comparison.json");
            }
            let can_export = self.output.is_some();
            if ui
                .add_enabled(can_export, egui::Button::new(self.tr.t(keys::GUI_EXPORT)))
                .clicked()
            {
                if let Some(json) = self.output.as_ref().map(ComparisonOutput::to_json_pretty) {
                    self.save_json(json, "results.json");
                }
            }
            ui.separator();
            let next = self.tr.language().toggled();
            if ui.button(next.short_label()).clicked() {
                self.config.language = next.as_code().to_string();
                self.tr = app::translator_for(&self.config, "auto");
                self.persist_config();
            }
            let mut theme = self.config.theme;
            for (choice, key) in THEME_CHOICES {
                ui.selectable_value(&mut theme, choice, self.tr.t(key));
            }
            if theme != self.config.theme {
                self.config.theme = theme;
                self.persist_config();
            }
            ui.separator();
            if ui.button(self.tr.t(keys::GUI_ABOUT)).clicked() {
                self.show_about = true;
            }
        });
        if let Some(msg) = &self.status {
            ui.small(msg);
        }
    }

    fn ui_vehicles(&mut self, ui: &mut egui::Ui) {
        ui.heading(self.tr.t(keys::GUI_VEHICLES));
        self.ui_add_row(ui, VehicleKind::Ice);
        self.ui_add_row(ui, VehicleKind::Ev);
        ui.separator();

        let tr = &self.tr;
        let mut remove: Option<usize> = None;
        for (idx, vehicle) in self.vehicles.iter_mut().enumerate() {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.strong(vehicle.kind().as_str());
                    ui.add(
                        egui::TextEdit::singleline(&mut vehicle.base_mut().name)
                            .desired_width(180.0),
                    );
                    if ui.small_button(tr.t(keys::GUI_REMOVE)).clicked() {
                        remove = Some(idx);
                    }
                });
                egui::Grid::new(("vehicle_grid", idx))
                    .num_columns(2)
                    .spacing([8.0, 4.0])
                    .show(ui, |ui| vehicle_fields(ui, tr, vehicle));
            });
            ui.add_space(4.0);
        }
        if let Some(idx) = remove {
            self.vehicles.remove(idx);
            self.output = None;
        }
    }

    fn ui_add_row(&mut self, ui: &mut egui::Ui, kind: VehicleKind) {
        let list = self.presets.for_kind(kind);
        let selected = match kind {
            VehicleKind::Ice => self.ice_preset,
            VehicleKind::Ev => self.ev_preset,
        };
        let mut choice = selected.min(list.len().saturating_sub(1));
        let ev_full = kind == VehicleKind::Ev && self.ev_count() >= MAX_FORM_EVS;
        let mut add: Option<VehicleInput> = None;
        ui.horizontal(|ui| {
            ui.label(self.tr.t(keys::GUI_PRESET));
            egui::ComboBox::from_id_source(("preset", kind.as_str()))
                .width(200.0)
                .selected_text(list.get(choice).map(|p| p.name()).unwrap_or("-"))
                .show_ui(ui, |ui| {
                    for (i, p) in list.iter().enumerate() {
                        ui.selectable_value(&mut choice, i, p.name());
                    }
                });
            let label = match kind {
                VehicleKind::Ice => keys::GUI_ADD_ICE,
                VehicleKind::Ev => keys::GUI_ADD_EV,
            };
            let resp = ui.add_enabled(!ev_full, egui::Button::new(self.tr.t(label)));
            let resp = if ev_full {
                resp.on_disabled_hover_text(self.tr.t(keys::GUI_EV_LIMIT))
            } else {
                resp
            };
            if resp.clicked() {
                add = Some(list.get(choice).cloned().unwrap_or_else(|| match kind {
                    VehicleKind::Ice => VehicleInput::blank_ice("ice"),
                    VehicleKind::Ev => VehicleInput::blank_ev("ev"),
                }));
            }
        });
        match kind {
            VehicleKind::Ice => self.ice_preset = choice,
            VehicleKind::Ev => self.ev_preset = choice,
        }
        if let Some(v) = add {
            self.push_vehicle(v);
            self.output = None;
        }
    }

    fn ui_assumptions(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(self.tr.t(keys::FIELD_HORIZON));
            for h in horizon_options(self.horizon_years) {
                ui.selectable_value(&mut self.horizon_years, h, h.to_string());
            }
            ui.separator();
            ui.label(self.tr.t(keys::FIELD_GLOBAL_KM));
            ui.add(
                egui::DragValue::new(&mut self.annual_km)
                    .speed(100.0)
                    .clamp_range(0.0..=1_000_000.0),
            );
            if ui.button(self.tr.t(keys::GUI_COMPARE)).clicked() {
                self.run_compare();
            }
        });
    }

    fn ui_results(&mut self, ui: &mut egui::Ui) {
        ui.heading(self.tr.t(keys::GUI_RESULTS));
        if !self.errors.is_empty() {
            ui.colored_label(ui.visuals().error_fg_color, self.tr.t(keys::COMPARE_INVALID));
            for e in &self.errors {
                ui.colored_label(ui.visuals().error_fg_color, format!("• {e}"));
            }
            return;
        }
        let Some(output) = self.output.clone() else {
            ui.label(self.tr.t(keys::GUI_NEED_COMPARE));
            return;
        };
        self.ui_table(ui, &output);
        ui.add_space(8.0);

        let mut mode = self.config.chart_mode;
        ui.horizontal(|ui| {
            ui.selectable_value(&mut mode, ChartMode::Line, self.tr.t(keys::GUI_CHART_LINE));
            ui.selectable_value(&mut mode, ChartMode::Stacked, self.tr.t(keys::GUI_CHART_STACKED));
            ui.selectable_value(&mut mode, ChartMode::Pie, self.tr.t(keys::GUI_CHART_PIE));
        });
        if mode != self.config.chart_mode {
            self.config.chart_mode = mode;
            self.persist_config();
        }
        match mode {
            ChartMode::Line => self.ui_line_chart(ui, &output),
            ChartMode::Stacked => self.ui_stacked_chart(ui, &output),
            ChartMode::Pie => self.ui_pie_chart(ui, &output),
        }
    }

    fn ui_table(&self, ui: &mut egui::Ui, output: &ComparisonOutput) {
        let tr = &self.tr;
        let cheapest = output.cheapest().map(|r| r.vehicle_id.clone());
        egui::Grid::new("results_grid")
            .striped(true)
            .spacing([14.0, 4.0])
            .show(ui, |ui| {
                for key in [
                    keys::TABLE_VEHICLE,
                    keys::TABLE_TOTAL,
                    keys::TABLE_COST_PER_KM,
                    keys::TABLE_ENERGY,
                    keys::TABLE_MAINTENANCE,
                    keys::TABLE_LOAN,
                    keys::TABLE_RESALE,
                ] {
                    ui.strong(tr.t(key));
                }
                ui.end_row();
                for r in &output.results {
                    let name = format!("{} ({})", r.name, r.kind);
                    if cheapest.as_deref() == Some(r.vehicle_id.as_str()) {
                        ui.strong(format!("★ {name}"));
                    } else {
                        ui.label(name);
                    }
                    ui.label(format_thb(r.total_cost));
                    ui.label(
                        r.cost_per_km
                            .map(|v| format!("{}/km", format_thb(v)))
                            .unwrap_or_else(|| vehicle_tco::currency::PLACEHOLDER.to_string()),
                    );
                    ui.label(format_thb(r.total_fuel_or_electricity));
                    ui.label(format_thb(r.total_maintenance));
                    ui.label(format_thb(r.total_loan_payments));
                    ui.label(report::resale_cell(r));
                    ui.end_row();
                }
            });
        ui.small(format!(
            "{} · {} km",
            tr.fill(
                keys::ASSUMPTIONS_CURRENT,
                &[
                    ("years", self.horizon_years.to_string()),
                    ("km", group_thousands(self.annual_km, 0)),
                ],
            ),
            group_thousands(self.annual_km * self.horizon_years as f64, 0)
        ));
    }

    fn ui_line_chart(&self, ui: &mut egui::Ui, output: &ComparisonOutput) {
        let lines = chart::cumulative_lines(&output.results);
        let x_max = lines
            .iter()
            .flat_map(|l| l.points.iter().map(|p| p[0]))
            .fold(1.0, f64::max);
        let y_max = chart::axis_ceiling(lines.iter().flat_map(|l| l.points.iter().map(|p| p[1])));
        let (resp, painter) = ui.allocate_painter(
            egui::vec2(ui.available_width(), CHART_HEIGHT),
            egui::Sense::hover(),
        );
        let plot = chart_area(resp.rect);
        let text = ui.visuals().text_color();
        draw_y_axis(&painter, plot, y_max, text);
        for year in 0..=x_max as u32 {
            let p = to_screen(plot, x_max, y_max, year as f64, 0.0);
            painter.text(
                p + egui::vec2(0.0, 4.0),
                egui::Align2::CENTER_TOP,
                year.to_string(),
                egui::FontId::proportional(11.0),
                text,
            );
        }
        for (i, line) in lines.iter().enumerate() {
            let pts: Vec<egui::Pos2> = std::iter::once([0.0, 0.0])
                .chain(line.points.iter().copied())
                .map(|[x, y]| to_screen(plot, x_max, y_max, x, y))
                .collect();
            painter.add(egui::Shape::line(pts.clone(), egui::Stroke::new(2.0, palette(i))));
            for p in pts.iter().skip(1) {
                painter.circle_filled(*p, 3.0, palette(i));
            }
        }
        ui.horizontal_wrapped(|ui| {
            for (i, line) in lines.iter().enumerate() {
                legend_item(ui, palette(i), &line.label);
            }
        });
    }

    fn ui_stacked_chart(&self, ui: &mut egui::Ui, output: &ComparisonOutput) {
        let bars = chart::stacked_totals(&output.results);
        let y_max = chart::axis_ceiling(bars.iter().map(|b| b.total()));
        let (resp, painter) = ui.allocate_painter(
            egui::vec2(ui.available_width(), CHART_HEIGHT),
            egui::Sense::hover(),
        );
        let plot = chart_area(resp.rect);
        let text = ui.visuals().text_color();
        draw_y_axis(&painter, plot, y_max, text);
        let slot = plot.width() / bars.len().max(1) as f32;
        for (i, bar) in bars.iter().enumerate() {
            let x0 = plot.left() + slot * i as f32 + slot * 0.2;
            let x1 = x0 + slot * 0.6;
            let mut acc = 0.0;
            for (component, value) in &bar.segments {
                if *value <= 0.0 {
                    continue;
                }
                let bottom = to_screen(plot, 1.0, y_max, 0.0, acc).y;
                acc += value;
                let top = to_screen(plot, 1.0, y_max, 0.0, acc).y;
                painter.rect_filled(
                    egui::Rect::from_x_y_ranges(x0..=x1, top..=bottom),
                    0.0,
                    component_color(*component),
                );
            }
            painter.text(
                egui::pos2((x0 + x1) / 2.0, plot.bottom() + 4.0),
                egui::Align2::CENTER_TOP,
                &bar.label,
                egui::FontId::proportional(11.0),
                text,
            );
        }
        self.component_legend(ui);
    }

    fn ui_pie_chart(&mut self, ui: &mut egui::Ui, output: &ComparisonOutput) {
        let mut index = self.pie_index.min(output.results.len().saturating_sub(1));
        egui::ComboBox::from_id_source("pie_vehicle")
            .selected_text(output.results.get(index).map(|r| r.name.as_str()).unwrap_or("-"))
            .show_ui(ui, |ui| {
                for (i, r) in output.results.iter().enumerate() {
                    ui.selectable_value(&mut index, i, r.name.as_str());
                }
            });
        self.pie_index = index;
        let Some(result) = output.results.get(index) else {
            return;
        };
        let slices = chart::cost_shares(result);
        let (resp, painter) = ui.allocate_painter(
            egui::vec2(ui.available_width(), CHART_HEIGHT),
            egui::Sense::hover(),
        );
        let radius = resp.rect.height().min(resp.rect.width()) * 0.45;
        let center = resp.rect.center();
        let mut start = -std::f32::consts::FRAC_PI_2;
        for slice in &slices {
            let sweep = slice.fraction as f32 * std::f32::consts::TAU;
            // 볼록 다각형만 그릴 수 있으므로 작은 부채꼴로 나눈다
            let steps = ((sweep / 0.1).ceil() as usize).max(1);
            for s in 0..steps {
                let a0 = start + sweep * s as f32 / steps as f32;
                let a1 = start + sweep * (s + 1) as f32 / steps as f32;
                painter.add(egui::Shape::convex_polygon(
                    vec![
                        center,
                        center + radius * egui::vec2(a0.cos(), a0.sin()),
                        center + radius * egui::vec2(a1.cos(), a1.sin()),
                    ],
                    component_color(slice.component),
                    egui::Stroke::NONE,
                ));
            }
            start += sweep;
        }
        ui.horizontal_wrapped(|ui| {
            for slice in &slices {
                legend_item(
                    ui,
                    component_color(slice.component),
                    &format!(
                        "{} {:.1}% ({})",
                        self.tr.t(slice.component.label_key()),
                        slice.fraction * 100.0,
                        format_thb(slice.value)
                    ),
                );
            }
        });
    }

    fn component_legend(&self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            for c in CostComponent::ALL {
                legend_item(ui, component_color(c), self.tr.t(c.label_key()));
            }
        });
    }
}

/// 축 라벨 여백을 뺀 그림 영역.
fn chart_area(rect: egui::Rect) -> egui::Rect {
    egui::Rect::from_min_max(
        rect.min + egui::vec2(64.0, 8.0),
        rect.max - egui::vec2(12.0, 22.0),
    )
}

fn vehicle_fields(ui: &mut egui::Ui, tr: &i18n::Translator, vehicle: &mut VehicleInput) {
    {
        let base = vehicle.base_mut();
        required_field(ui, tr.t(keys::FIELD_PURCHASE_PRICE), &mut base.purchase_price, 1000.0);
        optional_field(ui, tr.t(keys::FIELD_DOWN_PAYMENT), &mut base.down_payment, 0.0, 1000.0);
        optional_field(ui, tr.t(keys::FIELD_RESALE), &mut base.resale_value, 0.0, 1000.0);
        optional_field(ui, tr.t(keys::FIELD_ANNUAL_KM), &mut base.annual_km, 12000.0, 100.0);
        optional_field(ui, tr.t(keys::FIELD_MONTHLY_KM), &mut base.monthly_km, 1000.0, 10.0);
        optional_field(ui, tr.t(keys::FIELD_MAINTENANCE), &mut base.annual_maintenance, 0.0, 100.0);
        optional_field(ui, tr.t(keys::FIELD_LOAN_TERM), &mut base.loan_term_years, 5.0, 1.0);
        optional_field(
            ui,
            tr.t(keys::FIELD_INTEREST_RATE),
            &mut base.interest_rate_annual_pct,
            3.0,
            0.05,
        );
        ui.label(tr.t(keys::FIELD_NOTES));
        let mut notes = base.notes.clone().unwrap_or_default();
        if ui.text_edit_singleline(&mut notes).changed() {
            base.notes = Some(notes).filter(|s| !s.trim().is_empty());
        }
        ui.end_row();
    }
    match vehicle {
        VehicleInput::Ice(ice) => {
            required_field(ui, tr.t(keys::FIELD_FUEL_PRICE), &mut ice.fuel_price_per_liter, 0.1);
            required_field(
                ui,
                tr.t(keys::FIELD_FUEL_EFFICIENCY),
                &mut ice.fuel_efficiency_km_per_liter,
                0.1,
            );
        }
        VehicleInput::Ev(ev) => {
            required_field(
                ui,
                tr.t(keys::FIELD_ELECTRICITY_PRICE),
                &mut ev.electricity_price_per_kwh,
                0.1,
            );
            optional_field(
                ui,
                tr.t(keys::FIELD_CONSUMPTION),
                &mut ev.energy_consumption_kwh_per100km,
                15.0,
                0.1,
            );
            optional_field(ui, tr.t(keys::FIELD_RANGE), &mut ev.range_km_per_charge, 400.0, 5.0);
            optional_field(ui, tr.t(keys::FIELD_BATTERY), &mut ev.battery_capacity_kwh, 60.0, 0.5);
        }
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut Frame) {
        self.apply_theme(ctx, frame);

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| self.ui_top_bar(ui));

        if self.show_about {
            let body = self.tr.t(keys::GUI_ABOUT_BODY).to_string();
            egui::Window::new(self.tr.t(keys::GUI_ABOUT))
                .collapsible(false)
                .resizable(true)
                .open(&mut self.show_about)
                .show(ctx, |ui| {
                    ui.label(body);
                    ui.small(format!("v{}", env!("CARGO_PKG_VERSION")));
                });
        }

        egui::SidePanel::left("vehicles")
            .resizable(true)
            .min_width(340.0)
            .default_width(420.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_source("vehicle_scroll")
                    .auto_shrink([false; 2])
                    .show(ui, |ui| self.ui_vehicles(ui));
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui_assumptions(ui);
            ui.separator();
            egui::ScrollArea::vertical()
                .id_source("results_scroll")
                .auto_shrink([false; 2])
                .show(ui, |ui| self.ui_results(ui));
        });
    }
}
