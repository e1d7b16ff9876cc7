use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";
    pub const APP_TITLE: &str = "general.app_title";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_ADD_PRESET: &str = "main_menu.add_preset";
    pub const MAIN_MENU_ADD_ICE: &str = "main_menu.add_ice";
    pub const MAIN_MENU_ADD_EV: &str = "main_menu.add_ev";
    pub const MAIN_MENU_LIST: &str = "main_menu.list";
    pub const MAIN_MENU_REMOVE: &str = "main_menu.remove";
    pub const MAIN_MENU_ASSUMPTIONS: &str = "main_menu.assumptions";
    pub const MAIN_MENU_COMPARE: &str = "main_menu.compare";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
    pub const HINT_OPTIONAL: &str = "prompt.optional_hint";

    pub const PRESET_HEADING: &str = "preset.heading";
    pub const PRESET_KIND_OPTIONS: &str = "preset.kind_options";
    pub const PRESET_PROMPT_PICK: &str = "preset.prompt_pick";
    pub const PRESET_ADDED: &str = "preset.added";
    pub const PRESET_EMPTY: &str = "preset.empty";

    pub const VEHICLE_ADDED: &str = "vehicle.added";
    pub const VEHICLE_REJECTED: &str = "vehicle.rejected";
    pub const LIST_HEADING: &str = "list.heading";
    pub const LIST_EMPTY: &str = "list.empty";
    pub const REMOVE_PROMPT: &str = "list.remove_prompt";
    pub const REMOVED: &str = "list.removed";

    pub const FIELD_NAME: &str = "field.name";
    pub const FIELD_PURCHASE_PRICE: &str = "field.purchase_price";
    pub const FIELD_DOWN_PAYMENT: &str = "field.down_payment";
    pub const FIELD_RESALE: &str = "field.resale_value";
    pub const FIELD_NOTES: &str = "field.notes";
    pub const FIELD_MONTHLY_KM: &str = "field.monthly_km";
    pub const FIELD_ANNUAL_KM: &str = "field.annual_km";
    pub const FIELD_MAINTENANCE: &str = "field.annual_maintenance";
    pub const FIELD_LOAN_TERM: &str = "field.loan_term_years";
    pub const FIELD_INTEREST_RATE: &str = "field.interest_rate";
    pub const FIELD_FUEL_TYPE: &str = "field.fuel_type";
    pub const FIELD_FUEL_PRICE: &str = "field.fuel_price";
    pub const FIELD_FUEL_EFFICIENCY: &str = "field.fuel_efficiency";
    pub const FIELD_ELECTRICITY_PRICE: &str = "field.electricity_price";
    pub const FIELD_CONSUMPTION: &str = "field.consumption";
    pub const FIELD_RANGE: &str = "field.range";
    pub const FIELD_BATTERY: &str = "field.battery_capacity";
    pub const FIELD_WARRANTY: &str = "field.battery_warranty";

    pub const ASSUMPTIONS_HEADING: &str = "assumptions.heading";
    pub const ASSUMPTIONS_CURRENT: &str = "assumptions.current";
    pub const FIELD_HORIZON: &str = "field.horizon_years";
    pub const FIELD_GLOBAL_KM: &str = "field.global_annual_km";

    pub const COMPARE_HEADING: &str = "compare.heading";
    pub const COMPARE_INVALID: &str = "compare.invalid";
    pub const COMPARE_SHOW_YEARLY: &str = "compare.show_yearly";
    pub const RESULT_CHEAPEST: &str = "compare.cheapest";

    pub const TABLE_VEHICLE: &str = "table.vehicle";
    pub const TABLE_TYPE: &str = "table.type";
    pub const TABLE_TOTAL: &str = "table.total_cost";
    pub const TABLE_COST_PER_KM: &str = "table.cost_per_km";
    pub const TABLE_ENERGY: &str = "table.energy";
    pub const TABLE_MAINTENANCE: &str = "table.maintenance";
    pub const TABLE_LOAN: &str = "table.loan";
    pub const TABLE_RESALE: &str = "table.resale";
    pub const TABLE_NO_RESULTS: &str = "table.no_results";
    pub const YEARLY_HEADING: &str = "yearly.heading";
    pub const YEARLY_YEAR: &str = "yearly.year";
    pub const YEARLY_DEPRECIATION: &str = "yearly.depreciation";
    pub const YEARLY_CUMULATIVE: &str = "yearly.cumulative";

    pub const CHART_ENERGY: &str = "chart.component.energy";
    pub const CHART_MAINTENANCE: &str = "chart.component.maintenance";
    pub const CHART_LOAN: &str = "chart.component.loan";
    pub const CHART_CAPITAL: &str = "chart.component.capital";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_LANG_OPTIONS: &str = "settings.lang_options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const GUI_VEHICLES: &str = "gui.vehicles";
    pub const GUI_ADD_ICE: &str = "gui.add_ice";
    pub const GUI_ADD_EV: &str = "gui.add_ev";
    pub const GUI_REMOVE: &str = "gui.remove";
    pub const GUI_PRESET: &str = "gui.preset";
    pub const GUI_COMPARE: &str = "gui.compare";
    pub const GUI_RESULTS: &str = "gui.results";
    pub const GUI_CHART_LINE: &str = "gui.chart.line";
    pub const GUI_CHART_STACKED: &str = "gui.chart.stacked";
    pub const GUI_CHART_PIE: &str = "gui.chart.pie";
    pub const GUI_OPEN: &str = "gui.file.open";
    pub const GUI_SAVE: &str = "gui.file.save";
    pub const GUI_EXPORT: &str = "gui.file.export";
    pub const GUI_THEME_SYSTEM: &str = "gui.theme.system";
    pub const GUI_THEME_LIGHT: &str = "gui.theme.light";
    pub const GUI_THEME_DARK: &str = "gui.theme.dark";
    pub const GUI_ABOUT: &str = "gui.about.title";
    pub const GUI_ABOUT_BODY: &str = "gui.about.body";
    pub const GUI_EV_LIMIT: &str = "gui.ev_limit";
    pub const GUI_NEED_COMPARE: &str = "gui.need_compare";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    En,
    Th,
}

impl Language {
    fn from_code(code: &str) -> Self {
        if code.to_lowercase().starts_with("th") {
            Language::Th
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::En => "en-us",
            Language::Th => "th-th",
        }
    }

    /// 언어 토글 버튼에 쓰는 짧은 표기.
    pub fn short_label(&self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Th => "TH",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Language::En => Language::Th,
            Language::Th => Language::En,
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(en/th)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 언어팩에만 있는 문자열 조회.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.overrides
            .as_ref()
            .and_then(|m| m.get(key))
            .map(String::as_str)
    }

    /// 번역을 가져온다. 언어팩 → 선택 언어 → 영어 순으로 찾는다.
    pub fn t<'a>(&'a self, key: &str) -> &'a str {
        if let Some(v) = self.lookup(key) {
            return v;
        }
        match self.lang {
            Language::Th => th(key).unwrap_or_else(|| en(key)),
            Language::En => en(key),
        }
    }

    /// `{name}` 형태의 자리표시자를 채운 번역문.
    pub fn fill(&self, key: &str, vars: &[(&str, String)]) -> String {
        fill_template(self.t(key), vars)
    }
}

pub fn fill_template(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (k, v) in vars {
        out = out.replace(&format!("{{{k}}}"), v);
    }
    out
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("en") => Some("en-us".into()),
        other if other.starts_with("th") => Some("th-th".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "th" => Some("th-th".into()),
        "en" => Some("en-us".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 또는 [section] 테이블.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(&path).ok()?;
        let map = parse_toml_to_map(&content);
        if map.is_none() {
            tracing::warn!(path = %path.display(), "language pack ignored");
        }
        map
    };

    // 1) full code (e.g., th-th)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., th)
    let (base, _) = lang.split_once(['-', '_'])?;
    try_load(base)
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn en(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        APP_TITLE => "EV vs ICE Cost of Ownership",
        MAIN_MENU_TITLE => "\n=== EV vs ICE Cost of Ownership ===",
        MAIN_MENU_ADD_PRESET => "1) Add vehicle from presets",
        MAIN_MENU_ADD_ICE => "2) Add custom ICE vehicle",
        MAIN_MENU_ADD_EV => "3) Add custom EV",
        MAIN_MENU_LIST => "4) List vehicles",
        MAIN_MENU_REMOVE => "5) Remove vehicle",
        MAIN_MENU_ASSUMPTIONS => "6) Horizon / annual distance",
        MAIN_MENU_COMPARE => "7) Run comparison",
        MAIN_MENU_SETTINGS => "8) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_SELECT => "Select: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        HINT_OPTIONAL => "(enter to skip)",
        PRESET_HEADING => "\n-- Presets --",
        PRESET_KIND_OPTIONS => "1) ICE  2) EV",
        PRESET_PROMPT_PICK => "Preset number: ",
        PRESET_ADDED => "Added preset: {name}",
        PRESET_EMPTY => "No presets available.",
        VEHICLE_ADDED => "Vehicle added: {name}",
        VEHICLE_REJECTED => "Vehicle not added:",
        LIST_HEADING => "\n-- Vehicles --",
        LIST_EMPTY => "No vehicles yet.",
        REMOVE_PROMPT => "Number to remove (enter to cancel): ",
        REMOVED => "Removed: {name}",
        FIELD_NAME => "Name",
        FIELD_PURCHASE_PRICE => "Purchase price [THB]",
        FIELD_DOWN_PAYMENT => "Down payment [THB]",
        FIELD_RESALE => "Resale value [THB]",
        FIELD_NOTES => "Notes",
        FIELD_MONTHLY_KM => "Monthly distance [km]",
        FIELD_ANNUAL_KM => "Annual distance [km]",
        FIELD_MAINTENANCE => "Annual maintenance [THB]",
        FIELD_LOAN_TERM => "Loan term [years]",
        FIELD_INTEREST_RATE => "Interest rate [%/year]",
        FIELD_FUEL_TYPE => "Fuel type",
        FIELD_FUEL_PRICE => "Fuel price [THB/L]",
        FIELD_FUEL_EFFICIENCY => "Fuel efficiency [km/L]",
        FIELD_ELECTRICITY_PRICE => "Electricity price [THB/kWh]",
        FIELD_CONSUMPTION => "Consumption [kWh/100km]",
        FIELD_RANGE => "Range per charge [km]",
        FIELD_BATTERY => "Battery capacity [kWh]",
        FIELD_WARRANTY => "Battery warranty [years]",
        ASSUMPTIONS_HEADING => "\n-- Assumptions --",
        ASSUMPTIONS_CURRENT => "Horizon: {years} years, annual distance: {km} km",
        FIELD_HORIZON => "Horizon [years]",
        FIELD_GLOBAL_KM => "Annual distance [km]",
        COMPARE_HEADING => "\n-- Comparison --",
        COMPARE_INVALID => "Cannot compare, please fix:",
        COMPARE_SHOW_YEARLY => "Show yearly breakdown? (y/N): ",
        RESULT_CHEAPEST => "Lowest total cost: {name} ({total})",
        TABLE_VEHICLE => "Vehicle",
        TABLE_TYPE => "Type",
        TABLE_TOTAL => "Total Cost",
        TABLE_COST_PER_KM => "Cost/km",
        TABLE_ENERGY => "Fuel/Electric",
        TABLE_MAINTENANCE => "Maint.",
        TABLE_LOAN => "Loan",
        TABLE_RESALE => "Resale",
        TABLE_NO_RESULTS => "No results yet.",
        YEARLY_HEADING => "Yearly breakdown: {name}",
        YEARLY_YEAR => "Year",
        YEARLY_DEPRECIATION => "Depreciation",
        YEARLY_CUMULATIVE => "Cumulative",
        CHART_ENERGY => "Fuel/Electric",
        CHART_MAINTENANCE => "Maintenance",
        CHART_LOAN => "Loan",
        CHART_CAPITAL => "Net capital cost",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_LANG_OPTIONS => "1) English  2) ภาษาไทย  3) System",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; language unchanged.",
        SETTINGS_SAVED => "Language changed to:",
        GUI_VEHICLES => "Vehicles",
        GUI_ADD_ICE => "+ ICE",
        GUI_ADD_EV => "+ EV",
        GUI_REMOVE => "Remove",
        GUI_PRESET => "Preset",
        GUI_COMPARE => "Compare",
        GUI_RESULTS => "Results",
        GUI_CHART_LINE => "Line",
        GUI_CHART_STACKED => "Stacked",
        GUI_CHART_PIE => "Pie",
        GUI_OPEN => "Open…",
        GUI_SAVE => "Save…",
        GUI_EXPORT => "Export results…",
        GUI_THEME_SYSTEM => "System",
        GUI_THEME_LIGHT => "Light",
        GUI_THEME_DARK => "Dark",
        GUI_ABOUT => "About",
        GUI_ABOUT_BODY => "Projects and compares total cost of ownership for ICE and EV vehicles. Depreciation is shown per year for charting; totals add purchase price minus resale once.",
        GUI_EV_LIMIT => "At most two EVs can be added from the form.",
        GUI_NEED_COMPARE => "Press Compare to see results.",
        _ => "[missing translation]",
    }
}

fn th(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "ข้อผิดพลาด",
        APP_EXIT => "ปิดโปรแกรม",
        APP_TITLE => "เปรียบเทียบต้นทุนรถ EV กับรถน้ำมัน",
        MAIN_MENU_TITLE => "\n=== เปรียบเทียบต้นทุนรถ EV กับรถน้ำมัน ===",
        MAIN_MENU_ADD_PRESET => "1) เพิ่มรถจากรายการสำเร็จรูป",
        MAIN_MENU_ADD_ICE => "2) เพิ่มรถน้ำมันเอง",
        MAIN_MENU_ADD_EV => "3) เพิ่มรถไฟฟ้าเอง",
        MAIN_MENU_LIST => "4) รายการรถ",
        MAIN_MENU_REMOVE => "5) ลบรถ",
        MAIN_MENU_ASSUMPTIONS => "6) ระยะเวลา / ระยะทางต่อปี",
        MAIN_MENU_COMPARE => "7) คำนวณเปรียบเทียบ",
        MAIN_MENU_SETTINGS => "8) ตั้งค่า",
        MAIN_MENU_EXIT => "0) ออก",
        PROMPT_MENU_SELECT => "เลือกเมนู: ",
        PROMPT_SELECT => "เลือก: ",
        INVALID_SELECTION_RETRY => "ข้อมูลไม่ถูกต้อง กรุณาลองใหม่",
        ERROR_INVALID_NUMBER => "กรุณาป้อนตัวเลข",
        HINT_OPTIONAL => "(กด Enter เพื่อข้าม)",
        PRESET_HEADING => "\n-- รถสำเร็จรูป --",
        PRESET_KIND_OPTIONS => "1) รถน้ำมัน  2) รถไฟฟ้า",
        PRESET_PROMPT_PICK => "หมายเลขรถ: ",
        PRESET_ADDED => "เพิ่มแล้ว: {name}",
        PRESET_EMPTY => "ไม่มีรายการสำเร็จรูป",
        VEHICLE_ADDED => "เพิ่มรถแล้ว: {name}",
        VEHICLE_REJECTED => "ไม่สามารถเพิ่มรถ:",
        LIST_HEADING => "\n-- รายการรถ --",
        LIST_EMPTY => "ยังไม่มีรถ",
        REMOVE_PROMPT => "หมายเลขที่จะลบ (Enter เพื่อยกเลิก): ",
        REMOVED => "ลบแล้ว: {name}",
        FIELD_NAME => "ชื่อ",
        FIELD_PURCHASE_PRICE => "ราคารถ [บาท]",
        FIELD_DOWN_PAYMENT => "เงินดาวน์ [บาท]",
        FIELD_RESALE => "ราคาขายต่อ [บาท]",
        FIELD_NOTES => "หมายเหตุ",
        FIELD_MONTHLY_KM => "ระยะทางต่อเดือน [กม.]",
        FIELD_ANNUAL_KM => "ระยะทางต่อปี [กม.]",
        FIELD_MAINTENANCE => "ค่าบำรุงรักษาต่อปี [บาท]",
        FIELD_LOAN_TERM => "ระยะเวลาผ่อน [ปี]",
        FIELD_INTEREST_RATE => "ดอกเบี้ย [%/ปี]",
        FIELD_FUEL_TYPE => "ชนิดน้ำมัน",
        FIELD_FUEL_PRICE => "ราคาน้ำมัน [บาท/ลิตร]",
        FIELD_FUEL_EFFICIENCY => "อัตราสิ้นเปลือง [กม./ลิตร]",
        FIELD_ELECTRICITY_PRICE => "ค่าไฟ [บาท/kWh]",
        FIELD_CONSUMPTION => "อัตราใช้ไฟ [kWh/100 กม.]",
        FIELD_RANGE => "ระยะทางต่อการชาร์จ [กม.]",
        FIELD_BATTERY => "ความจุแบตเตอรี่ [kWh]",
        FIELD_WARRANTY => "รับประกันแบตเตอรี่ [ปี]",
        ASSUMPTIONS_HEADING => "\n-- สมมติฐาน --",
        ASSUMPTIONS_CURRENT => "ระยะเวลา: {years} ปี, ระยะทางต่อปี: {km} กม.",
        FIELD_HORIZON => "ระยะเวลา [ปี]",
        FIELD_GLOBAL_KM => "ระยะทางต่อปี [กม.]",
        COMPARE_HEADING => "\n-- ผลการเปรียบเทียบ --",
        COMPARE_INVALID => "ไม่สามารถคำนวณได้ กรุณาแก้ไข:",
        COMPARE_SHOW_YEARLY => "แสดงรายละเอียดรายปี? (y/N): ",
        RESULT_CHEAPEST => "ต้นทุนรวมต่ำสุด: {name} ({total})",
        TABLE_VEHICLE => "รถ",
        TABLE_TYPE => "ประเภท",
        TABLE_TOTAL => "ต้นทุนรวม",
        TABLE_COST_PER_KM => "ต่อ กม.",
        TABLE_ENERGY => "น้ำมัน/ไฟฟ้า",
        TABLE_MAINTENANCE => "บำรุงรักษา",
        TABLE_LOAN => "ค่างวด",
        TABLE_RESALE => "ขายต่อ",
        TABLE_NO_RESULTS => "ยังไม่มีผลลัพธ์",
        YEARLY_HEADING => "รายละเอียดรายปี: {name}",
        YEARLY_YEAR => "ปี",
        YEARLY_DEPRECIATION => "ค่าเสื่อม",
        YEARLY_CUMULATIVE => "สะสม",
        CHART_ENERGY => "น้ำมัน/ไฟฟ้า",
        CHART_MAINTENANCE => "บำรุงรักษา",
        CHART_LOAN => "ค่างวด",
        CHART_CAPITAL => "ต้นทุนตัวรถสุทธิ",
        SETTINGS_HEADING => "\n-- ตั้งค่า --",
        SETTINGS_CURRENT_LANGUAGE => "ภาษาปัจจุบัน:",
        SETTINGS_LANG_OPTIONS => "1) English  2) ภาษาไทย  3) ตามระบบ",
        SETTINGS_PROMPT_CHANGE => "หมายเลขที่จะเปลี่ยน (Enter เพื่อยกเลิก): ",
        SETTINGS_INVALID => "ข้อมูลไม่ถูกต้อง ไม่เปลี่ยนภาษา",
        SETTINGS_SAVED => "เปลี่ยนภาษาเป็น:",
        GUI_VEHICLES => "รถ",
        GUI_ADD_ICE => "+ รถน้ำมัน",
        GUI_ADD_EV => "+ รถไฟฟ้า",
        GUI_REMOVE => "ลบ",
        GUI_PRESET => "รุ่นสำเร็จรูป",
        GUI_COMPARE => "เปรียบเทียบ",
        GUI_RESULTS => "ผลลัพธ์",
        GUI_CHART_LINE => "เส้น",
        GUI_CHART_STACKED => "แท่งซ้อน",
        GUI_CHART_PIE => "วงกลม",
        GUI_OPEN => "เปิด…",
        GUI_SAVE => "บันทึก…",
        GUI_EXPORT => "ส่งออกผลลัพธ์…",
        GUI_THEME_SYSTEM => "ตามระบบ",
        GUI_THEME_LIGHT => "สว่าง",
        GUI_THEME_DARK => "มืด",
        GUI_ABOUT => "เกี่ยวกับ",
        GUI_EV_LIMIT => "เพิ่มรถไฟฟ้าจากฟอร์มได้สูงสุดสองคัน",
        GUI_NEED_COMPARE => "กด เปรียบเทียบ เพื่อดูผลลัพธ์",
        _ => return None,
    })
}
