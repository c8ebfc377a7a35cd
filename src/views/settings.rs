// ============================================================================
// SETTINGS VIEW - Edad mínima en meses
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::{Element, Event};
use crate::context::ViewContext;
use crate::dom::{ElementBuilder, event_input_value, get_element_by_id, on_change};
use crate::viewmodels::SettingsViewModel;

const INPUT_ID: &str = "minimum-age-input";
const ERROR_ID: &str = "settings-error";

pub fn render_settings(ctx: &ViewContext) -> Result<Element, JsValue> {
    let vm = SettingsViewModel::from_state(&ctx.state);

    let input = ElementBuilder::new("input")?
        .id(INPUT_ID)?
        .attr("type", "text")?
        .attr("inputmode", "numeric")?
        .attr("value", &vm.minimum_age_in_months.to_string())?
        .build();

    {
        let state = ctx.state.clone();
        on_change(&input, move |e: Event| {
            // Input de texto: lo que no sea un número llega tal cual al parser
            let applied = event_input_value(&e).and_then(|raw| SettingsViewModel::apply(&state, &raw));
            if let Err(err) = applied {
                log::warn!("⚠️ [SETTINGS] {}", err);
                if let Some(error_el) = get_element_by_id(ERROR_ID) {
                    error_el.set_text_content(Some(&err.to_string()));
                }
            }
        })?;
    }

    Ok(ElementBuilder::new("section")?
        .class("settings")
        .child(ElementBuilder::new("h2")?.text("Settings").build())?
        .child(
            ElementBuilder::new("label")?
                .class("field")
                .child(ElementBuilder::new("span")?.text("Minimum age (months)").build())?
                .child(input)?
                .build(),
        )?
        .child(
            ElementBuilder::new("p")?
                .class("settings-hint")
                .text(&format!("= {} hours", vm.minimum_age_hours_label))
                .build(),
        )?
        .child(ElementBuilder::new("p")?.id(ERROR_ID)?.class("form-error").build())?
        .build())
}
