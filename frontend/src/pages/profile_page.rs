use shared::{CategoryId, ProfileField};
use web_sys::File;
use yew::prelude::*;

use crate::components::profile::{CategoryManager, ProfileCard, StatsGrid, TransactionsList};
use crate::components::Header;
use crate::controllers::profile::ProfileCommand;
use crate::hooks::use_profile_page::use_profile_page;
use crate::services::api::ApiClient;
use crate::state::profile_view::FieldEdit;
use crate::state::{MutationStatus, ProfileAction};

#[derive(Properties, PartialEq)]
pub struct ProfilePageProps {
    pub api_client: ApiClient,
    pub landing_page: String,
}

#[function_component(ProfilePage)]
pub fn profile_page(props: &ProfilePageProps) -> Html {
    let page = use_profile_page(&props.api_client, &props.landing_page);
    let view = page.state;
    let actions = page.actions;
    let pending = view.category_status == MutationStatus::Pending;

    let on_toggle_dropdown = {
        let dispatch = actions.dispatch.clone();
        Callback::from(move |_: ()| dispatch.emit(ProfileAction::ToggleDropdown))
    };
    // Memoized: the header keys its document click listener on this callback
    let on_close_dropdown = use_callback(actions.dispatch.clone(), |_: (), dispatch| {
        dispatch.emit(ProfileAction::CloseDropdown)
    });
    let on_logout = {
        let run = actions.run.clone();
        Callback::from(move |_: ()| run.emit(ProfileCommand::Logout))
    };

    let on_start_edit = {
        let dispatch = actions.dispatch.clone();
        Callback::from(move |field: ProfileField| dispatch.emit(ProfileAction::StartEdit(field)))
    };
    let on_draft_change = {
        let dispatch = actions.dispatch.clone();
        Callback::from(move |draft: String| dispatch.emit(ProfileAction::EditDraftChanged(draft)))
    };
    let on_save = {
        let run = actions.run.clone();
        Callback::from(move |edit: FieldEdit| {
            run.emit(ProfileCommand::SaveField {
                field: edit.field,
                value: edit.draft,
            })
        })
    };
    let on_cancel = {
        let dispatch = actions.dispatch.clone();
        Callback::from(move |_: ()| dispatch.emit(ProfileAction::CancelEdit))
    };
    let on_photo_selected = {
        let run = actions.run.clone();
        Callback::from(move |file: File| run.emit(ProfileCommand::UploadPhoto(file)))
    };

    let on_category_input = {
        let dispatch = actions.dispatch.clone();
        Callback::from(move |value: String| dispatch.emit(ProfileAction::CategoryInputChanged(value)))
    };
    let on_add_category = {
        let run = actions.run.clone();
        let input = view.category_input.clone();
        Callback::from(move |_: ()| {
            if !pending {
                run.emit(ProfileCommand::AddCategory(input.clone()));
            }
        })
    };
    let on_delete_category = {
        let run = actions.run.clone();
        Callback::from(move |id: CategoryId| run.emit(ProfileCommand::DeleteCategory(id)))
    };

    html! {
        <>
            <Header
                welcome_text={view.welcome_text.clone()}
                avatar_url={view.header_avatar_url.clone()}
                dropdown_open={view.dropdown_open}
                {on_toggle_dropdown}
                {on_close_dropdown}
                {on_logout}
            />
            <main class="profile-page">
                <ProfileCard
                    full_name={view.full_name.clone()}
                    email={view.email.clone()}
                    phone={view.phone.clone()}
                    photo_url={view.photo_url.clone()}
                    editing={view.editing.clone()}
                    {on_start_edit}
                    {on_draft_change}
                    {on_save}
                    {on_cancel}
                    {on_photo_selected}
                />
                <StatsGrid stats={view.stats.clone()} />
                <TransactionsList transactions={view.transactions.clone()} />
                <CategoryManager
                    categories={view.categories.clone()}
                    input={view.category_input.clone()}
                    {pending}
                    on_input={on_category_input}
                    on_add={on_add_category}
                    on_delete={on_delete_category}
                />
            </main>
        </>
    }
}
