//! Category filter panel.

use ecomap_core::CATEGORIES;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CategoryFilterPanelProps {
    pub selected: Vec<String>,
    pub on_toggle: Callback<String>,
}

/// Checkbox list over the fixed category registry. Unchecking everything
/// filters the map down to nothing; that is intentional.
#[function_component(CategoryFilterPanel)]
pub fn category_filter_panel(props: &CategoryFilterPanelProps) -> Html {
    html! {
        <div class="panel category-filter">
            <h3>{ "Categories" }</h3>
            { for CATEGORIES.iter().map(|category| {
                let checked = props.selected.iter().any(|id| id == category.id);
                let on_change = {
                    let on_toggle = props.on_toggle.clone();
                    let id = category.id.to_owned();
                    Callback::from(move |_: Event| on_toggle.emit(id.clone()))
                };
                html! {
                    <label class="category-option" style={format!("color: {};", category.color)}>
                        <input type="checkbox" checked={checked} onchange={on_change} />
                        { category.label }
                    </label>
                }
            })}
        </div>
    }
}
