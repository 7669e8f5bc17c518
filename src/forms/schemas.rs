use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use super::{optional_value, value, Constraint, FieldRule, FormSchema, FormValues};
use crate::error::{AppError, AppResult, FieldError};
use crate::models::{
    CursoInput, EstadoTrabajo, PeriodoInput, Proveedor, ProveedorInput, TipoPA, TipoTrabajo,
    Trabajo, TrabajoInput,
};
use crate::utils::{today, DEFAULT_NOMBRE_CLIENTE, DEFAULT_PRECIO};

lazy_static! {
    static ref EMAIL_RE: Regex =
        Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").expect("email regex");
    static ref CELULAR_RE: Regex = Regex::new(r"^[0-9]{9}$").expect("celular regex");
}

const REQUERIDO: &str = "Este campo es requerido";
const INVALIDO: &str = "Valor inválido";

/// Campos requeridos del formulario de trabajo
pub const TRABAJO_REQUIRED: [&str; 9] = [
    "nombreCliente",
    "proveedor",
    "curso",
    "tipoPA",
    "tipoTrabajo",
    "fechaRegistro",
    "periodo",
    "precio",
    "estado",
];

// ============================================================================
// LOGIN
// ============================================================================

#[derive(Clone, PartialEq, Debug)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

pub fn login_schema() -> FormSchema {
    FormSchema::new(vec![
        FieldRule::new("email")
            .required("El correo es requerido")
            .check(Constraint::Pattern(&EMAIL_RE), "Correo inválido"),
        FieldRule::new("password")
            .required("La contraseña es requerida")
            .check(
                Constraint::MinLength(6),
                "La contraseña debe tener al menos 6 caracteres",
            ),
    ])
}

pub fn parse_login(values: &FormValues) -> AppResult<LoginForm> {
    login_schema().validate(values)?;
    Ok(LoginForm {
        email: value(values, "email").to_string(),
        // la contraseña se envía tal cual, sin recortar
        password: values.get("password").cloned().unwrap_or_default(),
        remember_me: value(values, "rememberMe") == "true",
    })
}

// ============================================================================
// TRABAJO
// ============================================================================

pub fn trabajo_schema() -> FormSchema {
    let mut rules: Vec<FieldRule> = TRABAJO_REQUIRED
        .into_iter()
        .filter(|field| *field != "precio")
        .map(|field| FieldRule::new(field).required(REQUERIDO))
        .collect();

    rules.push(
        FieldRule::new("precio")
            .required(REQUERIDO)
            .check(Constraint::Numeric, "El precio debe ser un número")
            .check(Constraint::MinValue(0.0), "El precio debe ser positivo"),
    );

    FormSchema::new(rules)
}

/// Valida y convierte el formulario de trabajo
pub fn parse_trabajo(values: &FormValues) -> AppResult<TrabajoInput> {
    trabajo_schema().validate(values)?;

    Ok(TrabajoInput {
        nombre_cliente: value(values, "nombreCliente").to_string(),
        proveedor: value(values, "proveedor").to_string(),
        curso: value(values, "curso").to_string(),
        tipo_pa: parse_field::<TipoPA>(values, "tipoPA")?,
        tipo_trabajo: parse_field::<TipoTrabajo>(values, "tipoTrabajo")?,
        fecha_registro: value(values, "fechaRegistro").to_string(),
        fecha_entrega: optional_value(values, "fechaEntrega"),
        periodo: value(values, "periodo").to_string(),
        precio: parse_field::<f64>(values, "precio")?,
        url: optional_value(values, "url"),
        estado: parse_field::<EstadoTrabajo>(values, "estado")?,
    })
}

/// Valores iniciales de un trabajo nuevo
pub fn trabajo_defaults() -> FormValues {
    let mut values = FormValues::new();
    values.insert("nombreCliente".into(), DEFAULT_NOMBRE_CLIENTE.into());
    values.insert("fechaRegistro".into(), today());
    values.insert("precio".into(), DEFAULT_PRECIO.into());
    values.insert("estado".into(), EstadoTrabajo::Pendiente.as_str().into());
    values
}

/// Valores del formulario al editar un trabajo existente
pub fn trabajo_values(t: &Trabajo) -> FormValues {
    let mut values = FormValues::new();
    values.insert("nombreCliente".into(), t.nombre_cliente.clone());
    values.insert("proveedor".into(), t.proveedor.clone());
    values.insert("curso".into(), t.curso.clone());
    values.insert("tipoPA".into(), t.tipo_pa.as_str().into());
    values.insert("tipoTrabajo".into(), t.tipo_trabajo.as_str().into());
    values.insert("fechaRegistro".into(), t.fecha_registro.clone());
    values.insert("fechaEntrega".into(), t.fecha_entrega.clone().unwrap_or_default());
    values.insert("periodo".into(), t.periodo.clone());
    values.insert("precio".into(), t.precio.to_string());
    values.insert("url".into(), t.url.clone().unwrap_or_default());
    values.insert("estado".into(), t.estado.as_str().into());
    values
}

fn parse_field<T: FromStr>(values: &FormValues, field: &'static str) -> AppResult<T> {
    value(values, field).parse::<T>().map_err(|_| {
        AppError::Validation(vec![FieldError {
            field,
            message: INVALIDO,
        }])
    })
}

// ============================================================================
// CATÁLOGOS
// ============================================================================

fn nombre_schema() -> FormSchema {
    FormSchema::new(vec![FieldRule::new("nombre").required("El nombre es requerido")])
}

pub fn proveedor_schema() -> FormSchema {
    FormSchema::new(vec![
        FieldRule::new("nombre").required("El nombre es requerido"),
        FieldRule::new("celular")
            .required("El celular es requerido")
            .check(
                Constraint::Pattern(&CELULAR_RE),
                "Ingrese un número de celular válido (9 dígitos)",
            ),
    ])
}

pub fn parse_curso(values: &FormValues) -> AppResult<CursoInput> {
    nombre_schema().validate(values)?;
    Ok(CursoInput {
        nombre: value(values, "nombre").to_string(),
    })
}

pub fn parse_periodo(values: &FormValues) -> AppResult<PeriodoInput> {
    nombre_schema().validate(values)?;
    Ok(PeriodoInput {
        nombre: value(values, "nombre").to_string(),
    })
}

pub fn parse_proveedor(values: &FormValues) -> AppResult<ProveedorInput> {
    proveedor_schema().validate(values)?;
    Ok(ProveedorInput {
        nombre: value(values, "nombre").to_string(),
        celular: value(values, "celular").to_string(),
    })
}

pub fn proveedor_values(p: &Proveedor) -> FormValues {
    let mut values = FormValues::new();
    values.insert("nombre".into(), p.nombre.clone());
    values.insert("celular".into(), p.celular.clone());
    values
}

pub fn nombre_values(nombre: &str) -> FormValues {
    let mut values = FormValues::new();
    values.insert("nombre".into(), nombre.to_string());
    values
}
