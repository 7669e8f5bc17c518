use chrono::{NaiveDate, Utc};

use crate::utils::constants::FECHA_POR_DEFINIR;

const MESES: [&str; 12] = [
    "enero", "febrero", "marzo", "abril", "mayo", "junio",
    "julio", "agosto", "septiembre", "octubre", "noviembre", "diciembre",
];

/// Fecha actual (UTC) en formato `YYYY-MM-DD`
pub fn today() -> String {
    Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Mes actual (1-12)
pub fn current_month() -> u32 {
    use chrono::Datelike;
    Utc::now().month()
}

/// `YYYY-MM-DD` → `dd/mm/yyyy`. Sin fecha devuelve "Por definir".
pub fn format_date(date: Option<&str>) -> String {
    match date.map(str::trim).filter(|d| !d.is_empty()) {
        None => FECHA_POR_DEFINIR.to_string(),
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(|d| d.format("%d/%m/%Y").to_string())
            .unwrap_or_else(|_| raw.to_string()),
    }
}

/// Nombre del mes en español (1 = enero). Fuera de rango: cadena vacía.
pub fn mes_actual(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|i| MESES.get(i as usize))
        .copied()
        .unwrap_or("")
}
