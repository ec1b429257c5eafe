use shared::ProfileField;
use web_sys::{File, HtmlInputElement};
use yew::prelude::*;

use crate::state::profile_view::FieldEdit;

#[derive(Properties, PartialEq)]
pub struct ProfileCardProps {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub photo_url: String,
    pub editing: Option<FieldEdit>,
    pub on_start_edit: Callback<ProfileField>,
    pub on_draft_change: Callback<String>,
    pub on_save: Callback<FieldEdit>,
    pub on_cancel: Callback<()>,
    pub on_photo_selected: Callback<File>,
}

#[function_component(ProfileCard)]
pub fn profile_card(props: &ProfileCardProps) -> Html {
    let file_input_ref = use_node_ref();

    // The visible button only forwards to the hidden picker
    let on_change_photo_click = {
        let file_input_ref = file_input_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(input) = file_input_ref.cast::<HtmlInputElement>() {
                input.click();
            }
        })
    };

    let on_file_change = {
        let on_photo_selected = props.on_photo_selected.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                on_photo_selected.emit(file);
            }
            // allow picking the same file again
            input.set_value("");
        })
    };

    html! {
        <section class="profile-card">
            <div class="profile-image">
                <img src={props.photo_url.clone()} alt="Profile photo" />
                <button class="change-photo-btn" onclick={on_change_photo_click}>{"Change Photo"}</button>
                <input
                    type="file"
                    accept="image/*"
                    style="display: none"
                    ref={file_input_ref}
                    onchange={on_file_change}
                />
            </div>
            <div class="profile-info">
                {for ProfileField::ALL.iter().map(|field| render_field(props, *field))}
            </div>
        </section>
    }
}

fn render_field(props: &ProfileCardProps, field: ProfileField) -> Html {
    let current = match field {
        ProfileField::FullName => &props.full_name,
        ProfileField::Email => &props.email,
        ProfileField::Phone => &props.phone,
    };

    match props.editing.as_ref().filter(|edit| edit.field == field) {
        Some(edit) => {
            let on_input = {
                let on_draft_change = props.on_draft_change.clone();
                Callback::from(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    on_draft_change.emit(input.value());
                })
            };
            let on_save = {
                let on_save = props.on_save.clone();
                let edit = edit.clone();
                Callback::from(move |_: MouseEvent| on_save.emit(edit.clone()))
            };
            let on_cancel = {
                let on_cancel = props.on_cancel.clone();
                Callback::from(move |_: MouseEvent| on_cancel.emit(()))
            };

            html! {
                <div class="info-group editing">
                    <label>{field.label()}</label>
                    <input type={field.input_type()} value={edit.draft.clone()} oninput={on_input} />
                    <button class="save-btn" onclick={on_save}>{"Save"}</button>
                    <button class="cancel-btn" onclick={on_cancel}>{"Cancel"}</button>
                </div>
            }
        }
        None => {
            let on_edit = {
                let on_start_edit = props.on_start_edit.clone();
                Callback::from(move |_: MouseEvent| on_start_edit.emit(field))
            };

            html! {
                <div class="info-group">
                    <label>{field.label()}</label>
                    <input type={field.input_type()} value={current.clone()} disabled=true />
                    <button class="edit-btn" onclick={on_edit} aria-label={format!("Edit {}", field.label())}>
                        <i class="fas fa-pen"></i>
                    </button>
                </div>
            }
        }
    }
}
