// ============================================================================
// PERSON EDIT VIEW - Editar / eliminar una persona (/person/:id)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::{Element, MouseEvent};
use crate::context::ViewContext;
use crate::dom::{ElementBuilder, append_child, get_element_by_id, input_value_by_id, on_submit};
use crate::error::AppError;
use crate::router::Route;
use crate::viewmodels::PersonEditViewModel;
use crate::views::shared::render_link;

const NAME_INPUT_ID: &str = "edit-person-name";
const AGE_INPUT_ID: &str = "edit-person-age";
const ERROR_ID: &str = "edit-person-error";

pub fn render_person_edit(ctx: &ViewContext, raw_id: &str) -> Result<Element, JsValue> {
    let section = ElementBuilder::new("section")?.class("person-edit").build();

    let vm = match PersonEditViewModel::load(&ctx.state, raw_id) {
        Ok(vm) => vm,
        Err(e) => {
            log::warn!("⚠️ [EDIT] {}", e);
            append_child(&section, &ElementBuilder::new("h2")?.text("Person unavailable").build())?;
            append_child(&section, &ElementBuilder::new("p")?.class("form-error").text(&e.to_string()).build())?;
            append_child(&section, &render_link(ctx, Route::People, "Back to people", "btn-back")?)?;
            return Ok(section);
        }
    };

    append_child(
        &section,
        &ElementBuilder::new("h2")?.text(&format!("Edit #{}", vm.person.id)).build(),
    )?;

    let delete_btn = {
        let ctx_clone = ctx.clone();
        let vm_clone = vm.clone();
        ElementBuilder::new("button")?
            .class("btn-delete")
            .attr("type", "button")?
            .text("Delete")
            .on_click(move |_e: MouseEvent| match vm_clone.delete(&ctx_clone.state) {
                Ok(_) => ctx_clone.navigate(Route::People),
                Err(e) => show_error(&e),
            })?
            .build()
    };

    let form = ElementBuilder::new("form")?
        .class("person-form")
        .child(labeled_input("Name", NAME_INPUT_ID, "text", &vm.person.name)?)?
        .child(labeled_input("Age in hours", AGE_INPUT_ID, "text", &vm.person.age_in_hours.to_string())?)?
        .child(
            ElementBuilder::new("div")?
                .class("form-actions")
                .child(ElementBuilder::new("button")?.attr("type", "submit")?.text("Save").build())?
                .child(delete_btn)?
                .child(render_link(ctx, Route::People, "Cancel", "btn-cancel")?)?
                .build(),
        )?
        .child(ElementBuilder::new("p")?.id(ERROR_ID)?.class("form-error").build())?
        .build();

    {
        let ctx_clone = ctx.clone();
        on_submit(&form, move || {
            let saved = input_value_by_id(NAME_INPUT_ID).and_then(|name| {
                let age = input_value_by_id(AGE_INPUT_ID)?;
                vm.save(&ctx_clone.state, &name, &age)
            });
            match saved {
                Ok(_) => ctx_clone.navigate(Route::People),
                Err(e) => show_error(&e),
            }
        })?;
    }

    append_child(&section, &form)?;
    Ok(section)
}

fn labeled_input(label: &str, id: &str, input_type: &str, value: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("label")?
        .class("field")
        .child(ElementBuilder::new("span")?.text(label).build())?
        .child(
            ElementBuilder::new("input")?
                .id(id)?
                .attr("type", input_type)?
                .attr("value", value)?
                .build(),
        )?
        .build())
}

fn show_error(err: &AppError) {
    log::warn!("⚠️ [EDIT] {}", err);
    if let Some(error_el) = get_element_by_id(ERROR_ID) {
        error_el.set_text_content(Some(&err.to_string()));
    }
}
