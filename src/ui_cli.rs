use std::io::{self, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::engine::{compare, ComparisonOutput};
use crate::i18n::{keys, Translator};
use crate::input::{BaseInput, ComparisonRequest, EvInput, IceInput, VehicleInput};
use crate::preset::PresetCatalog;
use crate::report;
use crate::validation::{validate_comparison, validate_vehicle, ValidationErrors};
use crate::vehicle::VehicleKind;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddPreset,
    AddIce,
    AddEv,
    List,
    Remove,
    Assumptions,
    Compare,
    Settings,
    Exit,
}

/// 대화형 모드에서 모으는 차량 목록과 공통 가정.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub vehicles: Vec<VehicleInput>,
    pub horizon_years: u32,
    pub annual_km: f64,
    next_seq: usize,
}

impl Session {
    pub fn new(horizon_years: u32, annual_km: f64) -> Self {
        Self {
            vehicles: Vec::new(),
            horizon_years,
            annual_km,
            next_seq: 1,
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.default_horizon_years, cfg.default_annual_km)
    }

    /// 세션 안에서 겹치지 않는 id. 프리셋을 여러 번 넣어도 구분된다.
    fn fresh_id(&mut self, stem: &str) -> String {
        loop {
            let id = format!("{stem}-{}", self.next_seq);
            self.next_seq += 1;
            if !self.vehicles.iter().any(|v| v.id() == id) {
                return id;
            }
        }
    }

    /// 검증을 통과한 차량만 목록에 넣는다.
    pub fn add(&mut self, vehicle: VehicleInput) -> Result<&VehicleInput, ValidationErrors> {
        validate_vehicle(&vehicle)?;
        let id = self.fresh_id(vehicle.id());
        self.vehicles.push(vehicle.with_id(id));
        Ok(&self.vehicles[self.vehicles.len() - 1])
    }

    pub fn remove(&mut self, index: usize) -> Option<VehicleInput> {
        (index < self.vehicles.len()).then(|| self.vehicles.remove(index))
    }

    pub fn request(&self) -> ComparisonRequest {
        ComparisonRequest {
            vehicles: self.vehicles.clone(),
            horizon_years: Some(self.horizon_years as f64),
            annual_km: Some(self.annual_km),
            discount_rate_pct: None,
        }
    }

    pub fn run(&self) -> Result<ComparisonOutput, ValidationErrors> {
        let input = validate_comparison(&self.request())?;
        Ok(compare(&input))
    }
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    for key in [
        keys::MAIN_MENU_TITLE,
        keys::MAIN_MENU_ADD_PRESET,
        keys::MAIN_MENU_ADD_ICE,
        keys::MAIN_MENU_ADD_EV,
        keys::MAIN_MENU_LIST,
        keys::MAIN_MENU_REMOVE,
        keys::MAIN_MENU_ASSUMPTIONS,
        keys::MAIN_MENU_COMPARE,
        keys::MAIN_MENU_SETTINGS,
        keys::MAIN_MENU_EXIT,
    ] {
        println!("{}", tr.t(key));
    }
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::AddPreset),
            "2" => return Ok(MenuChoice::AddIce),
            "3" => return Ok(MenuChoice::AddEv),
            "4" => return Ok(MenuChoice::List),
            "5" => return Ok(MenuChoice::Remove),
            "6" => return Ok(MenuChoice::Assumptions),
            "7" => return Ok(MenuChoice::Compare),
            "8" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 프리셋 목록에서 차량을 골라 추가한다.
pub fn handle_add_preset(
    tr: &Translator,
    session: &mut Session,
    presets: &PresetCatalog,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::PRESET_HEADING));
    println!("{}", tr.t(keys::PRESET_KIND_OPTIONS));
    let kind = match read_line(tr.t(keys::PROMPT_SELECT))?.trim() {
        "1" => VehicleKind::Ice,
        "2" => VehicleKind::Ev,
        _ => {
            println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
            return Ok(());
        }
    };
    let list = presets.for_kind(kind);
    if list.is_empty() {
        println!("{}", tr.t(keys::PRESET_EMPTY));
        return Ok(());
    }
    for (i, p) in list.iter().enumerate() {
        println!("{:>2}) {}", i + 1, p.name());
    }
    let Some(idx) = read_index(tr.t(keys::PRESET_PROMPT_PICK), list.len())? else {
        println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
        return Ok(());
    };
    match session.add(list[idx].clone()) {
        Ok(v) => println!("{}", tr.fill(keys::PRESET_ADDED, &[("name", v.name().to_string())])),
        Err(errors) => print_errors(tr, keys::VEHICLE_REJECTED, &errors),
    }
    Ok(())
}

fn prompt_base(tr: &Translator, default_name: &str) -> Result<BaseInput, AppError> {
    let name = read_line(&label(tr, keys::FIELD_NAME))?;
    let name = match name.trim() {
        "" => default_name.to_string(),
        other => other.to_string(),
    };
    Ok(BaseInput {
        id: String::new(),
        name,
        purchase_price: Some(read_f64(tr, &label(tr, keys::FIELD_PURCHASE_PRICE))?),
        down_payment: read_optional_f64(tr, &optional_label(tr, keys::FIELD_DOWN_PAYMENT))?,
        resale_value: read_optional_f64(tr, &optional_label(tr, keys::FIELD_RESALE))?,
        monthly_km: read_optional_f64(tr, &optional_label(tr, keys::FIELD_MONTHLY_KM))?,
        annual_maintenance: read_optional_f64(tr, &optional_label(tr, keys::FIELD_MAINTENANCE))?,
        loan_term_years: read_optional_f64(tr, &optional_label(tr, keys::FIELD_LOAN_TERM))?,
        interest_rate_annual_pct: read_optional_f64(
            tr,
            &optional_label(tr, keys::FIELD_INTEREST_RATE),
        )?,
        notes: read_optional_text(&optional_label(tr, keys::FIELD_NOTES))?,
        ..BaseInput::default()
    })
}

/// 내연기관 차량을 직접 입력한다.
pub fn handle_add_ice(tr: &Translator, session: &mut Session) -> Result<(), AppError> {
    let mut base = prompt_base(tr, "ICE Vehicle")?;
    base.id = "ice".into();
    let fuel_type = read_optional_text(&optional_label(tr, keys::FIELD_FUEL_TYPE))?;
    let input = VehicleInput::Ice(IceInput {
        base,
        fuel_type,
        fuel_price_per_liter: Some(read_f64(tr, &label(tr, keys::FIELD_FUEL_PRICE))?),
        fuel_efficiency_km_per_liter: Some(read_f64(tr, &label(tr, keys::FIELD_FUEL_EFFICIENCY))?),
    });
    add_and_report(tr, session, input);
    Ok(())
}

/// 전기차를 직접 입력한다. 소비율 또는 주행거리+배터리 용량 중 하나가 필요하다.
pub fn handle_add_ev(tr: &Translator, session: &mut Session) -> Result<(), AppError> {
    let mut base = prompt_base(tr, "EV Vehicle")?;
    base.id = "ev".into();
    let input = VehicleInput::Ev(EvInput {
        base,
        electricity_price_per_kwh: Some(read_f64(tr, &label(tr, keys::FIELD_ELECTRICITY_PRICE))?),
        energy_consumption_kwh_per100km: read_optional_f64(
            tr,
            &optional_label(tr, keys::FIELD_CONSUMPTION),
        )?,
        range_km_per_charge: read_optional_f64(tr, &optional_label(tr, keys::FIELD_RANGE))?,
        battery_capacity_kwh: read_optional_f64(tr, &optional_label(tr, keys::FIELD_BATTERY))?,
        battery_warranty_years: read_optional_f64(tr, &optional_label(tr, keys::FIELD_WARRANTY))?,
    });
    add_and_report(tr, session, input);
    Ok(())
}

fn add_and_report(tr: &Translator, session: &mut Session, input: VehicleInput) {
    match session.add(input) {
        Ok(v) => println!("{}", tr.fill(keys::VEHICLE_ADDED, &[("name", v.name().to_string())])),
        Err(errors) => print_errors(tr, keys::VEHICLE_REJECTED, &errors),
    }
}

pub fn handle_list(tr: &Translator, session: &Session) {
    println!("{}", tr.t(keys::LIST_HEADING));
    if session.vehicles.is_empty() {
        println!("{}", tr.t(keys::LIST_EMPTY));
        return;
    }
    for (i, v) in session.vehicles.iter().enumerate() {
        println!("{}", list_line(i, v));
    }
}

/// 목록 한 줄. 메모가 있으면 뒤에 붙인다.
fn list_line(index: usize, v: &VehicleInput) -> String {
    let price = v.base().purchase_price.unwrap_or(0.0);
    let mut line = format!(
        "{:>2}) [{}] {} ({})",
        index + 1,
        v.kind(),
        v.name(),
        crate::currency::format_thb(price)
    );
    if let Some(notes) = &v.base().notes {
        line.push_str(&format!(" - {notes}"));
    }
    line
}

pub fn handle_remove(tr: &Translator, session: &mut Session) -> Result<(), AppError> {
    handle_list(tr, session);
    if session.vehicles.is_empty() {
        return Ok(());
    }
    if let Some(idx) = read_index(tr.t(keys::REMOVE_PROMPT), session.vehicles.len())? {
        if let Some(v) = session.remove(idx) {
            println!("{}", tr.fill(keys::REMOVED, &[("name", v.name().to_string())]));
        }
    }
    Ok(())
}

/// 분석 기간과 전역 연간 주행거리를 바꾼다. 빈 입력은 현재 값 유지.
pub fn handle_assumptions(tr: &Translator, session: &mut Session) -> Result<(), AppError> {
    println!("{}", tr.t(keys::ASSUMPTIONS_HEADING));
    print_assumptions(tr, session);
    loop {
        match read_optional_f64(tr, &optional_label(tr, keys::FIELD_HORIZON))? {
            None => break,
            Some(h) if h.fract() == 0.0 && (1.0..=30.0).contains(&h) => {
                session.horizon_years = h as u32;
                break;
            }
            Some(_) => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
    loop {
        match read_optional_f64(tr, &optional_label(tr, keys::FIELD_GLOBAL_KM))? {
            None => break,
            Some(km) if km >= 0.0 => {
                session.annual_km = km;
                break;
            }
            Some(_) => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
    print_assumptions(tr, session);
    Ok(())
}

fn print_assumptions(tr: &Translator, session: &Session) {
    println!(
        "{}",
        tr.fill(
            keys::ASSUMPTIONS_CURRENT,
            &[
                ("years", session.horizon_years.to_string()),
                ("km", crate::currency::group_thousands(session.annual_km, 0)),
            ],
        )
    );
}

/// 비교를 실행하고 표를 출력한다.
pub fn handle_compare(tr: &Translator, session: &Session) -> Result<(), AppError> {
    println!("{}", tr.t(keys::COMPARE_HEADING));
    let output = match session.run() {
        Ok(output) => output,
        Err(errors) => {
            print_errors(tr, keys::COMPARE_INVALID, &errors);
            return Ok(());
        }
    };
    print!("{}", report::comparison_table(&output, tr));
    let yearly = read_line(tr.t(keys::COMPARE_SHOW_YEARLY))?;
    if matches!(yearly.trim(), "y" | "Y") {
        for r in &output.results {
            println!();
            print!("{}", report::yearly_table(r, tr));
        }
    }
    Ok(())
}

/// 설정 메뉴를 처리한다. 언어가 바뀌면 true.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<bool, AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_LANGUAGE), cfg.language);
    println!("{}", tr.t(keys::SETTINGS_LANG_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    let language = match sel.trim() {
        "" => return Ok(false),
        "1" => "en-us",
        "2" => "th-th",
        "3" => "auto",
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(false);
        }
    };
    cfg.language = language.to_string();
    println!("{} {}", tr.t(keys::SETTINGS_SAVED), cfg.language);
    Ok(true)
}

fn print_errors(tr: &Translator, heading: &str, errors: &ValidationErrors) {
    println!("{}", tr.t(heading));
    for e in errors.errors() {
        println!("  - {e}");
    }
}

fn label(tr: &Translator, key: &str) -> String {
    format!("{}: ", tr.t(key))
}

fn optional_label(tr: &Translator, key: &str) -> String {
    format!("{} {}: ", tr.t(key), tr.t(keys::HINT_OPTIONAL))
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    let n = io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    if n == 0 {
        return Err(AppError::Io(io::Error::from(io::ErrorKind::UnexpectedEof)));
    }
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match parse_number(&s) {
            Some(v) => return Ok(v),
            None => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

/// 빈 입력은 None.
fn read_optional_text(prompt: &str) -> Result<Option<String>, AppError> {
    let s = read_line(prompt)?;
    Ok(Some(s.trim().to_string()).filter(|s| !s.is_empty()))
}

fn read_optional_f64(tr: &Translator, prompt: &str) -> Result<Option<f64>, AppError> {
    loop {
        let s = read_line(prompt)?;
        if s.trim().is_empty() {
            return Ok(None);
        }
        match parse_number(&s) {
            Some(v) => return Ok(Some(v)),
            None => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

/// 1부터 시작하는 번호 입력을 0 기반 인덱스로. 빈 입력/범위 밖은 None.
fn read_index(prompt: &str, len: usize) -> Result<Option<usize>, AppError> {
    let s = read_line(prompt)?;
    Ok(parse_index(&s, len))
}

fn parse_index(s: &str, len: usize) -> Option<usize> {
    s.trim()
        .parse::<usize>()
        .ok()
        .filter(|n| (1..=len).contains(n))
        .map(|n| n - 1)
}

/// 천 단위 구분자(,)와 통화 기호를 허용한다.
fn parse_number(s: &str) -> Option<f64> {
    let cleaned: String = s
        .trim()
        .chars()
        .filter(|c| !matches!(c, ',' | '฿' | '_'))
        .collect();
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}
