use yew::prelude::*;

use crate::hooks::use_outside_click::use_outside_click;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub welcome_text: String,
    pub avatar_url: String,
    pub dropdown_open: bool,
    pub on_toggle_dropdown: Callback<()>,
    pub on_close_dropdown: Callback<()>,
    pub on_logout: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let toggle_ref = use_node_ref();
    let menu_ref = use_node_ref();

    use_outside_click(
        vec![toggle_ref.clone(), menu_ref.clone()],
        props.dropdown_open,
        props.on_close_dropdown.clone(),
    );

    let on_toggle = {
        let on_toggle_dropdown = props.on_toggle_dropdown.clone();
        Callback::from(move |_: MouseEvent| on_toggle_dropdown.emit(()))
    };

    let on_logout = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_: MouseEvent| on_logout.emit(()))
    };

    let menu_class = classes!("user-dropdown-menu", props.dropdown_open.then_some("active"));

    html! {
        <header class="header">
            <div class="user-info">
                <span>{&props.welcome_text}</span>
                <button
                    id="profileDropdownToggle"
                    class="profile-dropdown-toggle"
                    ref={toggle_ref}
                    onclick={on_toggle}
                    aria-label="Account menu"
                >
                    <img src={props.avatar_url.clone()} alt="User avatar" />
                </button>
                <div id="userDropdownMenu" class={menu_class} ref={menu_ref}>
                    <a href="dashboard.html" class="dropdown-item">{"Dashboard"}</a>
                    <a href="profile.html" class="dropdown-item">{"Profile"}</a>
                    <button id="logoutButton" class="dropdown-item logout" onclick={on_logout}>
                        {"Logout"}
                    </button>
                </div>
            </div>
        </header>
    }
}
