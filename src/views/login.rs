// ============================================================================
// LOGIN VIEW
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, on_submit, read_form_values, text_element, ElementBuilder};
use crate::forms::{value, FormValues};
use crate::state::AppState;
use crate::viewmodels::LoginOutcome;
use crate::views::shared::{button, text_field};

const FIELDS: [&str; 3] = ["email", "password", "rememberMe"];

pub fn render_login(state: &AppState) -> Result<Element, JsValue> {
    log::debug!("🎬 [LOGIN] render_login()");

    let draft = state.draft_or(FormValues::new());

    let screen = ElementBuilder::new("div")?.class("login-screen").build();
    let card = ElementBuilder::new("div")?.class("login-card").build();

    let header = ElementBuilder::new("div")?
        .class("login-header")
        .child(text_element("div", "login-logo", "👤")?)?
        .child(text_element("h1", "login-title", "Iniciar Sesión")?)?
        .child(text_element(
            "p",
            "login-subtitle",
            "Ingresa tus credenciales para acceder al sistema",
        )?)?
        .build();

    let form = ElementBuilder::new("form")?
        .class("login-form")
        .id("login-form")?
        .attr("novalidate", "")?
        .build();

    if let Some(message) = state.login_error.borrow().as_deref() {
        let alert = ElementBuilder::new("div")?
            .class("alert alert-error")
            .attr("role", "alert")?
            .text(message)
            .build();
        append_child(&form, &alert)?;
    }

    append_child(
        &form,
        &text_field(
            "email",
            "Correo electrónico",
            "email",
            value(&draft, "email"),
            "correo@ejemplo.com",
            state.field_error("email"),
        )?,
    )?;
    append_child(
        &form,
        &text_field(
            "password",
            "Contraseña",
            "password",
            "",
            "••••••",
            state.field_error("password"),
        )?,
    )?;

    let remember = ElementBuilder::new("div")?.class("form-check").build();
    let checkbox = ElementBuilder::new("input")?
        .class("form-checkbox")
        .id("field-rememberMe")?
        .attr("type", "checkbox")?
        .attr("name", "rememberMe")?
        .flag("checked", value(&draft, "rememberMe") == "true")?
        .build();
    let remember_label = ElementBuilder::new("label")?
        .attr("for", "field-rememberMe")?
        .text("Mantener sesión iniciada")
        .build();
    append_child(&remember, &checkbox)?;
    append_child(&remember, &remember_label)?;
    append_child(&form, &remember)?;

    let submit = button("Iniciar Sesión", "primary btn-block", "submit")?;
    append_child(&form, &submit)?;

    {
        let state = state.clone();
        let form_ref = form.clone();
        let submit_ref = submit.clone();
        on_submit(&form, move || {
            let values = read_form_values(&form_ref, &FIELDS);
            let state = state.clone();
            let _ = submit_ref.set_attribute("disabled", "");
            submit_ref.set_text_content(Some("Cargando..."));
            spawn_local(async move {
                match state.auth_vm().login(&values).await {
                    LoginOutcome::LoggedIn => {
                        state.set_login_error(None);
                        crate::app::load_data(&state);
                    }
                    LoginOutcome::Invalid(errors) => {
                        *state.login_error.borrow_mut() = None;
                        state.set_form_errors(errors, values);
                    }
                    LoginOutcome::Rejected(message) => {
                        *state.draft.borrow_mut() = Some(values);
                        state.set_login_error(Some(message.to_string()));
                    }
                }
            });
        })?;
    }

    append_child(&card, &header)?;
    append_child(&card, &form)?;
    append_child(&screen, &card)?;
    Ok(screen)
}
