// ============================================================================
// PEOPLE LIST VIEW - Tabla filtrada + formulario para agregar
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::context::ViewContext;
use crate::dom::{ElementBuilder, append_child, get_element_by_id, input_value_by_id, on_submit};
use crate::router::Route;
use crate::utils::format_with_spaces;
use crate::viewmodels::{PeopleListViewModel, PersonRow, next_person_id, parse_person_form};
use crate::views::shared::render_link;

const NAME_INPUT_ID: &str = "new-person-name";
const AGE_INPUT_ID: &str = "new-person-age";
const ERROR_ID: &str = "add-person-error";

/// Renderizar lista de personas
pub fn render_people_list(ctx: &ViewContext) -> Result<Element, JsValue> {
    let vm = PeopleListViewModel::from_state(&ctx.state);

    let section = ElementBuilder::new("section")?
        .class("people-list")
        .child(ElementBuilder::new("h2")?.text("People").build())?
        .build();

    let summary = if vm.minimum_age_in_months == 0 {
        format!("{} people", vm.total)
    } else {
        format!(
            "{} of {} shown, {} hidden (minimum age {} months = {} hours)",
            vm.shown(),
            vm.total,
            vm.hidden(),
            vm.minimum_age_in_months,
            format_with_spaces(vm.minimum_age_in_hours),
        )
    };
    append_child(&section, &ElementBuilder::new("p")?.class("people-summary").text(&summary).build())?;

    if vm.rows.is_empty() {
        append_child(
            &section,
            &ElementBuilder::new("p")?.class("empty").text("Nobody matches the current filter.").build(),
        )?;
    } else {
        append_child(&section, &render_table(ctx, &vm.rows)?)?;
    }

    append_child(&section, &render_add_form(ctx)?)?;
    Ok(section)
}

fn render_table(ctx: &ViewContext, rows: &[PersonRow]) -> Result<Element, JsValue> {
    let head_row = ElementBuilder::new("tr")?.build();
    for title in ["Name", "Age (hours)", "Age (months)", ""] {
        append_child(&head_row, &ElementBuilder::new("th")?.text(title).build())?;
    }
    let table = ElementBuilder::new("table")?
        .class("people-table")
        .child(ElementBuilder::new("thead")?.child(head_row)?.build())?
        .build();

    let body = ElementBuilder::new("tbody")?.build();
    for row in rows {
        let tr = ElementBuilder::new("tr")?
            .attr("data-id", &row.id.to_string())?
            .child(ElementBuilder::new("td")?.class("name").text(&row.name).build())?
            .child(ElementBuilder::new("td")?.class("age num").text(&row.age_hours_label).build())?
            .child(
                ElementBuilder::new("td")?
                    .class("age num")
                    .text(&format_with_spaces(row.age_months))
                    .build(),
            )?
            .child(
                ElementBuilder::new("td")?
                    .child(render_link(ctx, Route::person(row.id), "Edit", "btn-edit")?)?
                    .build(),
            )?
            .build();
        append_child(&body, &tr)?;
    }
    append_child(&table, &body)?;
    Ok(table)
}

fn render_add_form(ctx: &ViewContext) -> Result<Element, JsValue> {
    let form = ElementBuilder::new("form")?
        .class("add-person-form")
        .child(ElementBuilder::new("h3")?.text("Add person").build())?
        .child(
            ElementBuilder::new("input")?
                .id(NAME_INPUT_ID)?
                .attr("type", "text")?
                .attr("placeholder", "Name")?
                .build(),
        )?
        .child(
            ElementBuilder::new("input")?
                .id(AGE_INPUT_ID)?
                .attr("type", "text")?
                .attr("inputmode", "numeric")?
                .attr("placeholder", "Age in hours")?
                .build(),
        )?
        .child(ElementBuilder::new("button")?.attr("type", "submit")?.text("Add").build())?
        .child(ElementBuilder::new("p")?.id(ERROR_ID)?.class("form-error").build())?
        .build();

    let state = ctx.state.clone();
    on_submit(&form, move || {
        let draft = input_value_by_id(NAME_INPUT_ID).and_then(|name| {
            let age = input_value_by_id(AGE_INPUT_ID)?;
            parse_person_form(&name, &age)
        });
        match draft {
            Ok(draft) => {
                // Id calculado al enviar: la lista pudo cambiar desde el render
                let id = next_person_id(&state.people());
                state.add_person(draft.into_person(id));
            }
            Err(e) => {
                log::warn!("⚠️ [PEOPLE] Formulario inválido: {}", e);
                if let Some(error_el) = get_element_by_id(ERROR_ID) {
                    error_el.set_text_content(Some(&e.to_string()));
                }
            }
        }
    })?;

    Ok(form)
}
