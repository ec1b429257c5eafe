pub mod use_dashboard_page;
pub mod use_outside_click;
pub mod use_profile_page;

use yew::{Reducible, UseReducerDispatcher};

use crate::controllers::Effect;
use crate::services::browser;

/// Carry out a controller's effects on the live page
pub fn run_effects<R>(dispatcher: &UseReducerDispatcher<R>, effects: Vec<Effect<R::Action>>)
where
    R: Reducible + 'static,
{
    for effect in effects {
        match effect {
            Effect::Apply(action) => dispatcher.dispatch(action),
            Effect::Navigate(url) => browser::navigate_to(&url),
            Effect::Alert(message) => browser::alert(&message),
        }
    }
}
