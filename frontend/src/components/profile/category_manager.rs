use shared::CategoryId;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::state::profile_view::CategoryRow;

#[derive(Properties, PartialEq)]
pub struct CategoryManagerProps {
    pub categories: Vec<CategoryRow>,
    pub input: String,
    pub pending: bool,
    pub on_input: Callback<String>,
    pub on_add: Callback<()>,
    pub on_delete: Callback<CategoryId>,
}

#[function_component(CategoryManager)]
pub fn category_manager(props: &CategoryManagerProps) -> Html {
    let on_input = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_input.emit(input.value());
        })
    };

    let on_add_click = {
        let on_add = props.on_add.clone();
        Callback::from(move |_: MouseEvent| on_add.emit(()))
    };

    let on_keydown = {
        let on_add = props.on_add.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                on_add.emit(());
            }
        })
    };

    html! {
        <section class="categories-section">
            <h2>{"Categories"}</h2>
            <div class="category-list">
                {for props.categories.iter().map(|category| {
                    let on_delete = {
                        let on_delete = props.on_delete.clone();
                        let id = category.id.clone();
                        Callback::from(move |_: MouseEvent| on_delete.emit(id.clone()))
                    };
                    html! {
                        <div class="category-item" data-id={category.id.to_string()}>
                            <span>{&category.name}</span>
                            <button class="delete-btn" onclick={on_delete} disabled={props.pending} aria-label="Delete category">
                                <i class="fas fa-trash"></i>
                            </button>
                        </div>
                    }
                })}
            </div>
            <div class="add-category">
                <input
                    type="text"
                    placeholder="New category"
                    value={props.input.clone()}
                    oninput={on_input}
                    onkeydown={on_keydown}
                />
                <button class="add-btn" onclick={on_add_click} disabled={props.pending}>{"Add"}</button>
            </div>
        </section>
    }
}
