use wasm_bindgen::JsCast;
use web_sys::{HtmlOptionElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FilterSelectProps {
    /// Control label, e.g. "Region"
    pub label: AttrValue,
    /// All selectable values, as served by the backend
    pub options: Vec<String>,
    /// Currently selected values (empty = no restriction)
    pub selected: Vec<String>,
    /// Fires with the full new selection on every change
    pub on_change: Callback<Vec<String>>,
}

/// One multi-select filter control.
///
/// Deselecting everything is meaningful: an empty selection means "no
/// restriction", so the control never forces a choice.
#[function_component(FilterSelect)]
pub fn filter_select(props: &FilterSelectProps) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let selected_options = select.selected_options();
            let mut values = Vec::new();
            for i in 0..selected_options.length() {
                if let Some(element) = selected_options.item(i) {
                    if let Ok(option) = element.dyn_into::<HtmlOptionElement>() {
                        values.push(option.value());
                    }
                }
            }
            on_change.emit(values);
        })
    };

    html! {
        <div class="filter-control">
            <label class="filter-label">{props.label.clone()}</label>
            <select multiple=true size="4" class="filter-select" {onchange}>
                {for props.options.iter().map(|value| {
                    html! {
                        <option
                            value={value.clone()}
                            selected={props.selected.contains(value)}
                        >
                            {value}
                        </option>
                    }
                })}
            </select>
        </div>
    }
}
